use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed row at line {}", line_or_unknown(.line))]
    Parse {
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },
}

impl StatsError {
    pub(crate) fn parse(source: csv::Error) -> Self {
        let line = source.position().map(|p| p.line());
        StatsError::Parse { line, source }
    }
}

fn line_or_unknown(line: &Option<u64>) -> String {
    line.map_or_else(|| "?".to_string(), |l| l.to_string())
}
