//! Type entities and the global type table for the mjc compiler.
//!
//! Every type a program can mention (the primitives, `int[]` and one entity per
//! declared class) lives in a single [`TypeTable`] and is referred to everywhere
//! else by its [`TypeId`]. Class entities own their member tables:
//! [`FieldDescriptor`]s keyed by name and [`MethodDescriptor`]s keyed by
//! [`MethodKey`] (name plus parameter types), so overloads by parameter type
//! can coexist.

pub mod descriptor;
pub mod entity;
pub mod error;
pub mod ids;
pub mod table;

pub use descriptor::{FieldDescriptor, MethodDescriptor, MethodKey, ParameterDescriptor};
pub use entity::{ClassType, PrimitiveType, TypeEntity};
pub use error::TableError;
pub use ids::TypeId;
pub use table::{Ancestors, TypeTable};
