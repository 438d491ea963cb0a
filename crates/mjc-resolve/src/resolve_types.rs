// Resolution of type expressions written in member declarations.

use mjc_syntax::ast::{TypeExpr, TypeExprKind};
use mjc_types::{TypeId, TypeTable};

use crate::diagnostics::DiagnosticSink;
use crate::error::ResolveError;

/// Resolves `ty` against the table and records the result on the node.
///
/// A named type that is not in the table is reported once and resolves to
/// [`TypeId::UNKNOWN`]; the other forms always resolve.
pub(crate) fn resolve_type_expr(
    table: &TypeTable,
    ty: &mut TypeExpr,
    errors: &mut DiagnosticSink,
) -> TypeId {
    let resolved = match &ty.kind {
        TypeExprKind::Named(ident) => match table.lookup(&ident.name) {
            Some(id) => id,
            None => {
                errors.report(ResolveError::TypeNameMissing {
                    name: ident.name.clone(),
                    span: ident.span,
                });
                TypeId::UNKNOWN
            }
        },
        TypeExprKind::IntArray => TypeId::INT_ARRAY,
        TypeExprKind::Int => TypeId::INT,
        TypeExprKind::Boolean => TypeId::BOOLEAN,
    };
    ty.resolved = Some(resolved);
    resolved
}
