//! Member-declaration resolution for mjc programs.
//!
//! Given a parsed [`Program`] and a [`TypeTable`] seeded with one placeholder
//! per class, this pass
//! - links every class to its base class,
//! - resolves the types of fields, method return values and parameters,
//! - fills in each class's field and method tables,
//! - reports duplicate fields, methods and parameters,
//! - reports inheritance cycles.
//!
//! Problems are collected as [`ResolveError`]s rather than aborting, and the
//! tree and table are populated as far as resolution got.

pub mod config;
pub mod core;
pub mod diagnostics;
pub mod error;
pub mod seed;

mod bases;
mod cycles;
mod entry;
mod members;
mod resolve_types;

pub use crate::config::{ConfigError, ResolveConfig};
pub use crate::core::{ResolveOutput, Resolver};
pub use crate::diagnostics::{render_diagnostics, DiagnosticSink};
pub use crate::error::{ErrorCode, ResolveError};
pub use crate::seed::seed_type_table;

use mjc_syntax::ast::Program;
use mjc_types::TypeTable;

/// Runs member resolution with the default configuration.
pub fn resolve_members(program: &mut Program, table: &mut TypeTable) -> ResolveOutput {
    Resolver::new(table, ResolveConfig::default()).resolve(program)
}
