pub mod error;
pub mod layout;
pub mod median;
pub mod record;
pub mod table;

pub use error::StatsError;
pub use layout::{Layout, Series};
pub use median::median_of;
pub use record::{ingest, ingest_path, GroupKey, MeasurementRow, SampleGroups};
pub use table::{reduce, MedianTable};
