use stats::{Layout, MedianTable};

fn text(f: f64) -> &'static str {
    if f > 1. {
        "is faster than"
    } else if f < 1. {
        "is slower than"
    } else {
        "is equal to"
    }
}

/// One comparison line per category, first series against second.
///
/// Categories where either series has no data read `n/a`.
pub fn summary(table: &MedianTable, layout: &Layout) -> Vec<String> {
    let [first, second] = &layout.series;
    let lhs = table.series(layout, first);
    let rhs = table.series(layout, second);

    layout
        .categories
        .iter()
        .zip(lhs.iter().zip(&rhs))
        .map(|(category, (&a, &b))| {
            if a == 0.0 || b == 0.0 {
                return format!("{category}: {} vs {}: n/a", first.label, second.label);
            }
            let ratio = a / b;
            format!(
                "{category}: {} {} {}: {:.02}x",
                first.label,
                text(ratio),
                second.label,
                ratio,
            )
        })
        .collect()
}

#[cfg(test)]
mod test {
    use stats::{ingest, reduce, Layout};

    use super::summary;

    #[test]
    fn compares_per_category() {
        let data = "\
pattern,impl,ops_per_sec
homogeneous,nonvirtual,300
homogeneous,virtual,200
mixed,nonvirtual,100
mixed,virtual,400
bursty,nonvirtual,50
bursty,virtual,50
";
        let layout = Layout::dispatch();
        let table = reduce(&ingest(data.as_bytes()).unwrap(), &layout);
        assert_eq!(
            summary(&table, &layout),
            vec![
                "homogeneous: non-virtual is faster than virtual: 1.50x",
                "mixed: non-virtual is slower than virtual: 0.25x",
                "bursty: non-virtual is equal to virtual: 1.00x",
            ]
        );
    }

    #[test]
    fn zero_baseline() {
        let layout = Layout::dispatch();
        let table = reduce(&ingest("".as_bytes()).unwrap(), &layout);
        let lines = summary(&table, &layout);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "bursty: non-virtual vs virtual: n/a");
    }

    #[test]
    fn missing_first_series() {
        let data = "pattern,impl,ops_per_sec\nmixed,virtual,400\nbursty,nonvirtual,10\n";
        let layout = Layout::dispatch();
        let table = reduce(&ingest(data.as_bytes()).unwrap(), &layout);
        let lines = summary(&table, &layout);
        assert_eq!(lines[1], "mixed: non-virtual vs virtual: n/a");
        assert_eq!(lines[2], "bursty: non-virtual vs virtual: n/a");
    }
}
