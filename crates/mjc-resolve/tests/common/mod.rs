// Helpers for building syntax trees without a parser.
#![allow(dead_code)]

use std::cell::Cell;

use miette::SourceSpan;
use mjc_resolve::{resolve_members, seed_type_table, ResolveOutput};
use mjc_syntax::ast::{ClassDecl, FieldDecl, Ident, MainClass, MethodDecl, Param, Program, TypeExpr};
use mjc_types::TypeTable;

thread_local! {
    static OFFSET: Cell<usize> = const { Cell::new(0) };
}

/// A fresh span for `text`, placed after every span handed out before it on
/// this thread so that spans in one tree never coincide.
pub fn span_of(text: &str) -> SourceSpan {
    OFFSET.with(|offset| {
        let start = offset.get();
        offset.set(start + text.len() + 1);
        SourceSpan::from((start, text.len()))
    })
}

pub fn ident(name: &str) -> Ident {
    Ident::new(name, span_of(name))
}

pub fn int() -> TypeExpr {
    TypeExpr::int(span_of("int"))
}

pub fn boolean() -> TypeExpr {
    TypeExpr::boolean(span_of("boolean"))
}

pub fn int_array() -> TypeExpr {
    TypeExpr::int_array(span_of("int[]"))
}

pub fn named(name: &str) -> TypeExpr {
    TypeExpr::named(ident(name))
}

pub fn param(ty: TypeExpr, name: &str) -> Param {
    let name = ident(name);
    let span = name.span;
    Param::new(ty, name, span)
}

pub fn method(return_type: TypeExpr, name: &str, params: Vec<Param>) -> MethodDecl {
    let name = ident(name);
    let span = name.span;
    MethodDecl::new(return_type, name, params, span)
}

pub fn static_method(return_type: TypeExpr, name: &str, params: Vec<Param>) -> MethodDecl {
    let mut method = method(return_type, name, params);
    method.is_static = true;
    method
}

/// `class <name> { ... }`, extended through the builder methods below.
pub struct ClassBuilder(ClassDecl);

pub fn class(name: &str) -> ClassBuilder {
    let name = ident(name);
    let span = name.span;
    ClassBuilder(ClassDecl::new(name, span))
}

impl ClassBuilder {
    pub fn extends(mut self, base: &str) -> Self {
        self.0.base = Some(ident(base));
        self
    }

    pub fn static_class(mut self) -> Self {
        self.0.is_static = true;
        self
    }

    pub fn field(mut self, ty: TypeExpr, name: &str) -> Self {
        let name = ident(name);
        let span = name.span;
        self.0.fields.push(FieldDecl::new(ty, name, span));
        self
    }

    pub fn method(mut self, method: MethodDecl) -> Self {
        self.0.methods.push(method);
        self
    }

    pub fn build(self) -> ClassDecl {
        self.0
    }
}

pub fn program(classes: Vec<ClassBuilder>) -> Program {
    let main = ident("Main");
    let span = main.span;
    Program::new(
        MainClass::new(main, span),
        classes.into_iter().map(ClassBuilder::build).collect(),
    )
}

/// Seeds a table for `program` and runs the pass with default options.
pub fn resolve(program: &mut Program) -> (TypeTable, ResolveOutput) {
    let mut table = seed_type_table(program);
    let output = resolve_members(program, &mut table);
    (table, output)
}
