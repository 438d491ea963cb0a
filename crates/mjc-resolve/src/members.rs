// Building the field and method tables of a class.

use fxhash::FxHashSet;
use mjc_syntax::ast::{FieldDecl, MethodDecl};
use mjc_types::{FieldDescriptor, MethodDescriptor, ParameterDescriptor, TypeId, TypeTable};

use crate::diagnostics::DiagnosticSink;
use crate::error::ResolveError;
use crate::resolve_types::resolve_type_expr;

/// Resolves one field and stores it in the class's field table.
///
/// A repeated name is reported, but the later declaration still replaces the
/// earlier one in the table.
pub(crate) fn build_field(
    table: &mut TypeTable,
    class_id: TypeId,
    field: &mut FieldDecl,
    errors: &mut DiagnosticSink,
) {
    let Some(class) = table.class(class_id) else {
        return;
    };
    if class.has_field(&field.name.name) {
        errors.report(ResolveError::FieldDuplicates {
            class: class.name.clone(),
            field: field.name.name.clone(),
            span: field.name.span,
        });
    }

    let ty = resolve_type_expr(table, &mut field.ty, errors);
    log::trace!("field `{}`: {}", field.name.name, table.type_name(ty));

    if let Some(class) = table.class_mut(class_id) {
        class.insert_field(FieldDescriptor {
            name: field.name.name.clone(),
            ty,
            owner: class_id,
        });
    }
}

/// Resolves a method signature and registers it in the class's instance or
/// static method table.
///
/// Every type in the signature is resolved even after a failure so that each
/// problem is reported. A method whose return type or parameters failed is not
/// registered. One that clashes with an already registered overload is
/// reported and registered anyway.
pub(crate) fn build_method(
    table: &mut TypeTable,
    class_id: TypeId,
    method: &mut MethodDecl,
    errors: &mut DiagnosticSink,
) {
    let mut descriptor = MethodDescriptor::new(method.name.name.clone(), class_id, method.is_static);
    descriptor.return_type = resolve_type_expr(table, &mut method.return_type, errors);
    let mut failed = descriptor.return_type.is_unknown();

    let mut seen = FxHashSet::default();
    for (position, param) in method.params.iter_mut().enumerate() {
        let ty = resolve_type_expr(table, &mut param.ty, errors);
        if ty.is_unknown() {
            failed = true;
        }

        if !seen.insert(param.name.name.clone()) {
            errors.report(ResolveError::ParameterDuplicates {
                method: method.name.name.clone(),
                parameter: param.name.name.clone(),
                span: param.name.span,
            });
            failed = true;
            continue;
        }

        descriptor.params.push(ParameterDescriptor {
            name: param.name.name.clone(),
            ty,
            index: position as u32 + 1,
        });
    }

    if failed {
        log::debug!("`{}` not registered: its signature did not resolve", method.name.name);
        return;
    }

    let Some(class) = table.class(class_id) else {
        return;
    };
    let clashes = class
        .methods_named(&descriptor.name, descriptor.is_static)
        .any(|existing| existing.same_signature(&descriptor));
    if clashes {
        errors.report(ResolveError::MethodDuplicates {
            class: class.name.clone(),
            method: method.name.name.clone(),
            span: method.name.span,
        });
    }

    let key = descriptor.key();
    log::trace!("method {}", table.signature(&key));
    if let Some(class) = table.class_mut(class_id) {
        class.insert_method(descriptor);
        method.resolved = Some(key);
    }
}
