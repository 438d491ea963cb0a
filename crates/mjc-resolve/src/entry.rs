// The implicit entry method of the main class.

use mjc_syntax::ast::MainClass;
use mjc_types::{MethodDescriptor, TypeId, TypeTable};

use crate::config::ResolveConfig;
use crate::diagnostics::DiagnosticSink;
use crate::error::ResolveError;

/// Registers `static void <entry_method>()` on the main class.
///
/// There is exactly one main class, so the method goes straight into the
/// static table without overload checks.
pub(crate) fn synthesize_entry_method(
    table: &mut TypeTable,
    main: &mut MainClass,
    config: &ResolveConfig,
    errors: &mut DiagnosticSink,
) {
    let Some(class_id) = table.lookup_class(&main.name.name) else {
        errors.report(ResolveError::TypeNameMissing {
            name: main.name.name.clone(),
            span: main.name.span,
        });
        return;
    };

    let mut entry = MethodDescriptor::new(config.entry_method.clone(), class_id, true);
    entry.return_type = TypeId::VOID;
    main.entry = Some(entry.key());
    if let Some(class) = table.class_mut(class_id) {
        class.insert_method(entry);
    }
    log::debug!("entry point `{}.{}`", main.name.name, config.entry_method);
}
