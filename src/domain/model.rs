use serde::{Deserialize, Serialize};
use std::fmt;

pub const SEPARATOR_TEXT: &str = "--- New Test Cases ---";

/// One step of the driver script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Combine { a: i32, b: i32 },
    Classify { a: i32 },
    Separator,
}

impl Call {
    /// The call as it reads in source, e.g. `foo(1, 2)`. `None` for the separator.
    pub fn label(&self) -> Option<String> {
        match self {
            Call::Combine { a, b } => Some(format!("foo({}, {})", a, b)),
            Call::Classify { a } => Some(format!("bar({})", a)),
            Call::Separator => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportLine {
    Result { label: String, value: i32 },
    Separator,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLine::Result { label, value } => write!(f, "{} = {}", label, value),
            ReportLine::Separator => f.write_str(SEPARATOR_TEXT),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub combiner_calls: usize,
    pub classifier_calls: usize,
    pub lines_emitted: usize,
}
