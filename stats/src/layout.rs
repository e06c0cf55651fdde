/// One compared implementation: the key used in the CSV and the label shown
/// in the chart legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub key: String,
    pub label: String,
}

impl Series {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Fixed display order of the report.
///
/// Categories run along the x axis, series are drawn side by side inside each
/// category. Neither is derived from the input data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub categories: Vec<String>,
    pub series: [Series; 2],
}

impl Layout {
    pub fn new(categories: &[&str], series: [Series; 2]) -> Self {
        Self {
            categories: categories.iter().map(|c| c.to_string()).collect(),
            series,
        }
    }

    /// Order processing patterns against non-virtual and virtual dispatch.
    pub fn dispatch() -> Self {
        Self::new(
            &["homogeneous", "mixed", "bursty"],
            [
                Series::new("nonvirtual", "non-virtual"),
                Series::new("virtual", "virtual"),
            ],
        )
    }

    /// Every (category, series key) pair in display order, category major.
    pub fn keys(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories.iter().flat_map(move |c| {
            self.series
                .iter()
                .map(move |s| (c.as_str(), s.key.as_str()))
        })
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::dispatch()
    }
}
