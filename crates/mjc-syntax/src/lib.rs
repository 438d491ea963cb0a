//! Syntax trees for mjc programs.
//!
//! The trees are produced by the parser and then annotated in place by the
//! semantic passes: type expressions record the [`TypeId`](mjc_types::TypeId)
//! they resolve to, class declarations their resolved base, and method
//! declarations the key under which they were registered.

pub mod ast;

pub use ast::{
    ClassDecl, FieldDecl, Ident, MainClass, MethodDecl, Param, Program, TypeExpr, TypeExprKind,
};
