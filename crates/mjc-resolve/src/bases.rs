// Linking classes to the base class named in their `extends` clause.

use mjc_syntax::ast::ClassDecl;
use mjc_types::{TypeId, TypeTable};

use crate::diagnostics::DiagnosticSink;
use crate::error::ResolveError;

/// Resolves the `extends` name of `decl` and attaches it to both the
/// declaration and the class entity `class_id`.
///
/// An unknown name (or one naming a non-class type) leaves the class without a
/// base. A static base is reported but still linked.
pub(crate) fn link_base_class(
    table: &mut TypeTable,
    class_id: TypeId,
    decl: &mut ClassDecl,
    errors: &mut DiagnosticSink,
) {
    let Some(base_name) = &decl.base else {
        return;
    };

    let Some(base_id) = table.lookup_class(&base_name.name) else {
        errors.report(ResolveError::TypeNameMissing {
            name: base_name.name.clone(),
            span: base_name.span,
        });
        return;
    };

    if table.class(base_id).is_some_and(|base| base.is_static) {
        errors.report(ResolveError::StaticBaseType {
            name: base_name.name.clone(),
            span: base_name.span,
        });
    }

    log::trace!("`{}` extends `{}`", decl.name.name, base_name.name);
    decl.resolved_base = Some(base_id);
    if let Some(class) = table.class_mut(class_id) {
        class.base = Some(base_id);
    }
}
