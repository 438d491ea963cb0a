// Driver running the member-resolution steps in order.

use mjc_syntax::ast::{ClassDecl, Program};
use mjc_types::TypeTable;

use crate::bases::link_base_class;
use crate::config::ResolveConfig;
use crate::cycles::detect_cycles;
use crate::diagnostics::{render_diagnostics, DiagnosticSink};
use crate::entry::synthesize_entry_method;
use crate::error::{ErrorCode, ResolveError};
use crate::members::{build_field, build_method};

/// Resolves the member declarations of a program against a seeded type table.
///
/// The resolver holds the table exclusively for the whole run. It annotates the
/// syntax tree in place and fills in the class entities of the table.
pub struct Resolver<'a> {
    table: &'a mut TypeTable,
    config: ResolveConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(table: &'a mut TypeTable, config: ResolveConfig) -> Self {
        Self { table, config }
    }

    /// Runs the pass over `program`:
    /// 1. synthesizes the entry method of the main class,
    /// 2. for each class in source order, links its base class, then builds
    ///    its fields, then its methods,
    /// 3. once every base link is set, checks each class for inheritance cycles.
    ///
    /// Every problem found is collected; the pass never stops early.
    pub fn resolve(self, program: &mut Program) -> ResolveOutput {
        let mut errors = DiagnosticSink::new();
        log::debug!(
            "resolving members of `{}` and {} classes",
            program.main.name.name,
            program.classes.len()
        );

        synthesize_entry_method(self.table, &mut program.main, &self.config, &mut errors);

        for decl in &mut program.classes {
            resolve_class(self.table, decl, &mut errors);
        }

        detect_cycles(self.table, &program.classes, &self.config, &mut errors);

        log::debug!("member resolution finished with {} diagnostics", errors.len());
        ResolveOutput { diagnostics: errors.into_vec() }
    }
}

fn resolve_class(table: &mut TypeTable, decl: &mut ClassDecl, errors: &mut DiagnosticSink) {
    let Some(class_id) = table.lookup_class(&decl.name.name) else {
        errors.report(ResolveError::TypeNameMissing {
            name: decl.name.name.clone(),
            span: decl.name.span,
        });
        return;
    };
    log::debug!("resolving class `{}`", decl.name.name);

    link_base_class(table, class_id, decl, errors);
    for field in &mut decl.fields {
        build_field(table, class_id, field, errors);
    }
    for method in &mut decl.methods {
        build_method(table, class_id, method, errors);
    }
}

/// What a run of the pass leaves besides the annotated tree and table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOutput {
    diagnostics: Vec<ResolveError>,
}

impl ResolveOutput {
    /// Diagnostics in the order they were found.
    pub fn diagnostics(&self) -> &[ResolveError] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn count(&self, code: ErrorCode) -> usize {
        self.diagnostics
            .iter()
            .filter(|error| error.error_code() == code)
            .count()
    }

    pub fn render(&self) -> String {
        render_diagnostics(&self.diagnostics)
    }

    pub fn into_diagnostics(self) -> Vec<ResolveError> {
        self.diagnostics
    }
}
