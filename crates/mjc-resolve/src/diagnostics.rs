//! Collection of diagnostics produced while resolving members.

use crate::error::{ErrorCode, ResolveError};

/// Append-only list of diagnostics for one run of the pass, in detection order.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticSink {
    errors: Vec<ResolveError>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, error: ResolveError) {
        log::debug!("{} {}", error.error_code(), error);
        self.errors.push(error);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolveError> {
        self.errors.iter()
    }

    pub fn count(&self, code: ErrorCode) -> usize {
        self.iter().filter(|error| error.error_code() == code).count()
    }

    pub fn into_vec(self) -> Vec<ResolveError> {
        self.errors
    }
}

/// Renders one line per diagnostic, e.g. `E0004 FieldDuplicates(Foo, bar)`.
pub fn render_diagnostics<'a>(errors: impl IntoIterator<Item = &'a ResolveError>) -> String {
    let mut out = String::new();
    for error in errors {
        let code = error.error_code();
        out.push_str(&format!("{} {}({})\n", code, code.name(), error.args().join(", ")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::SourceSpan;

    #[test]
    fn keeps_detection_order() {
        let mut sink = DiagnosticSink::new();
        sink.report(ResolveError::TypeNameMissing {
            name: "Missing".into(),
            span: SourceSpan::from((10, 7)),
        });
        sink.report(ResolveError::FieldDuplicates {
            class: "Foo".into(),
            field: "bar".into(),
            span: SourceSpan::from((30, 3)),
        });

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.count(ErrorCode::FieldDuplicates), 1);
        assert_eq!(sink.count(ErrorCode::CyclicBaseType), 0);
        assert_eq!(
            render_diagnostics(sink.iter()),
            "E0001 TypeNameMissing(Missing)\nE0004 FieldDuplicates(Foo, bar)\n"
        );
    }

    #[test]
    fn empty_sink_renders_nothing() {
        let sink = DiagnosticSink::new();
        assert!(sink.is_empty());
        assert_eq!(render_diagnostics(sink.iter()), "");
    }
}
