pub mod common;
pub mod items;
pub mod types;

pub use common::Ident;
pub use items::{ClassDecl, FieldDecl, MainClass, MethodDecl, Param, Program};
pub use types::{TypeExpr, TypeExprKind};
