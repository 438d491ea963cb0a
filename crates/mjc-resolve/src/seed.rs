// Seeding the global type table with one placeholder per declared class.

use mjc_syntax::ast::Program;
use mjc_types::TypeTable;

/// Builds the table member resolution expects: the builtin types plus an empty
/// class entity for the main class and for every user class.
///
/// A class name declared twice keeps its first entity; the repeat is logged and
/// left to the duplicate-class check of the declaration pass.
pub fn seed_type_table(program: &Program) -> TypeTable {
    let mut table = TypeTable::new();
    let classes = std::iter::once((&program.main.name, false))
        .chain(program.classes.iter().map(|decl| (&decl.name, decl.is_static)));

    for (name, is_static) in classes {
        if let Err(err) = table.declare_class(&name.name, is_static) {
            log::warn!("{}; keeping the first declaration", err);
        }
    }
    table
}
