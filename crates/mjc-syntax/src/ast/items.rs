use super::common::Ident;
use super::types::TypeExpr;
use miette::SourceSpan;
use mjc_types::{MethodKey, TypeId};

/// A whole compilation unit: the entry class followed by the user classes in
/// source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub main: MainClass,
    pub classes: Vec<ClassDecl>,
}

impl Program {
    pub fn new(main: MainClass, classes: Vec<ClassDecl>) -> Self {
        Self { main, classes }
    }

    /// Every type expression in member declarations, in source order.
    pub fn type_exprs(&self) -> impl Iterator<Item = &TypeExpr> {
        self.classes.iter().flat_map(|class| class.type_exprs())
    }
}

/// The class holding the program entry point. Its body is not modelled here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainClass {
    pub name: Ident,
    pub span: SourceSpan,
    /// Key of the synthesized entry method once it has been registered.
    pub entry: Option<MethodKey>,
}

impl MainClass {
    pub fn new(name: Ident, span: SourceSpan) -> Self {
        Self { name, span, entry: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: Ident,
    pub is_static: bool,
    /// The name after `extends`, if any.
    pub base: Option<Ident>,
    pub fields: Vec<FieldDecl>,
    pub methods: Vec<MethodDecl>,
    pub span: SourceSpan,
    /// The base class entity, set when the `extends` name resolves.
    pub resolved_base: Option<TypeId>,
}

impl ClassDecl {
    pub fn new(name: Ident, span: SourceSpan) -> Self {
        Self {
            name,
            is_static: false,
            base: None,
            fields: Vec::new(),
            methods: Vec::new(),
            span,
            resolved_base: None,
        }
    }

    pub fn type_exprs(&self) -> impl Iterator<Item = &TypeExpr> {
        let fields = self.fields.iter().map(|field| &field.ty);
        let methods = self.methods.iter().flat_map(|method| {
            std::iter::once(&method.return_type).chain(method.params.iter().map(|param| &param.ty))
        });
        fields.chain(methods)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub ty: TypeExpr,
    pub name: Ident,
    pub span: SourceSpan,
}

impl FieldDecl {
    pub fn new(ty: TypeExpr, name: Ident, span: SourceSpan) -> Self {
        Self { ty, name, span }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    pub name: Ident,
    pub is_static: bool,
    pub return_type: TypeExpr,
    pub params: Vec<Param>,
    pub span: SourceSpan,
    /// Key under which the method was registered in its class. Stays `None`
    /// when the signature failed to resolve.
    pub resolved: Option<MethodKey>,
}

impl MethodDecl {
    pub fn new(return_type: TypeExpr, name: Ident, params: Vec<Param>, span: SourceSpan) -> Self {
        Self {
            name,
            is_static: false,
            return_type,
            params,
            span,
            resolved: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub ty: TypeExpr,
    pub name: Ident,
    pub span: SourceSpan,
}

impl Param {
    pub fn new(ty: TypeExpr, name: Ident, span: SourceSpan) -> Self {
        Self { ty, name, span }
    }
}
