use crate::core::{bar, foo, Call, ReportLine, ReportSink, RunSummary};
use crate::utils::error::Result;

/// Argument counts above this make `main` bail out with status -1 before
/// running. Nothing passes that many in practice, so the branch stays
/// uncovered.
pub const MAX_ARGC: usize = 100;

/// Calls chosen so that every branch of `foo` and `bar` runs at least once.
pub const SCRIPT: [Call; 10] = [
    Call::Combine { a: 1, b: 2 },
    Call::Classify { a: 1 },
    Call::Separator,
    Call::Combine { a: -1, b: -2 },
    Call::Combine { a: 0, b: 0 },
    Call::Combine { a: 1, b: -1 },
    Call::Combine { a: -1, b: 1 },
    Call::Classify { a: 0 },
    Call::Classify { a: 2 },
    Call::Classify { a: 3 },
];

/// Evaluates a single call.
pub fn evaluate(call: &Call) -> ReportLine {
    match (*call, call.label()) {
        (Call::Combine { a, b }, Some(label)) => ReportLine::Result {
            label,
            value: foo(a, b),
        },
        (Call::Classify { a }, Some(label)) => ReportLine::Result {
            label,
            value: bar(a),
        },
        _ => ReportLine::Separator,
    }
}

pub struct CoverageDriver<'a> {
    script: &'a [Call],
}

impl Default for CoverageDriver<'static> {
    fn default() -> Self {
        Self::new(&SCRIPT)
    }
}

impl<'a> CoverageDriver<'a> {
    pub fn new(script: &'a [Call]) -> Self {
        Self { script }
    }

    pub fn run<S: ReportSink>(&self, sink: &mut S) -> Result<RunSummary> {
        tracing::debug!("Running {} scripted calls", self.script.len());

        let mut summary = RunSummary::default();
        for call in self.script {
            let line = evaluate(call);
            tracing::debug!(?call, %line, "evaluated");

            match call {
                Call::Combine { .. } => summary.combiner_calls += 1,
                Call::Classify { .. } => summary.classifier_calls += 1,
                Call::Separator => {}
            }

            sink.emit(&line)?;
            summary.lines_emitted += 1;
        }
        sink.finish()?;

        tracing::info!(
            "Finished: {} combiner calls, {} classifier calls",
            summary.combiner_calls,
            summary.classifier_calls
        );
        Ok(summary)
    }
}
