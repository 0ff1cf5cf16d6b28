use crate::domain::model::ReportLine;
use crate::utils::error::Result;

/// Destination for driver output.
pub trait ReportSink {
    fn emit(&mut self, line: &ReportLine) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

pub trait ConfigProvider {
    fn verbose(&self) -> bool;
    /// Process argument count, program name included.
    fn argc(&self) -> usize;
}
