// Detection of cyclic inheritance, run once every base link is in place.

use mjc_syntax::ast::ClassDecl;
use mjc_types::TypeTable;

use crate::config::ResolveConfig;
use crate::diagnostics::DiagnosticSink;
use crate::error::ResolveError;

/// Reports every class whose base chain loops.
///
/// A class on a cycle is always reported. A class whose chain only runs into a
/// cycle further up is reported when `report_ancestor_cycles` is set. The walk
/// never visits an entity twice, so it ends on any chain.
pub(crate) fn detect_cycles(
    table: &TypeTable,
    classes: &[ClassDecl],
    config: &ResolveConfig,
    errors: &mut DiagnosticSink,
) {
    for decl in classes {
        let Some(base_name) = &decl.base else {
            continue;
        };
        let Some(class_id) = table.lookup_class(&decl.name.name) else {
            continue;
        };

        let mut ancestors = table.ancestors(class_id);
        let on_cycle = ancestors.by_ref().any(|ancestor| ancestor == class_id);
        let above_cycle = !on_cycle && ancestors.revisited().is_some();

        if on_cycle || (above_cycle && config.report_ancestor_cycles) {
            errors.report(ResolveError::CyclicBaseType {
                base: base_name.name.clone(),
                class: decl.name.name.clone(),
                span: base_name.span,
            });
        }
    }
}
