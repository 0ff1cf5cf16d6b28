pub mod classifier;
pub mod combiner;
pub mod driver;

pub use crate::domain::model::{Call, ReportLine, RunSummary};
pub use crate::domain::ports::{ConfigProvider, ReportSink};
pub use crate::utils::error::Result;
pub use classifier::bar;
pub use combiner::foo;
