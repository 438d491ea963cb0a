use super::common::Ident;
use miette::SourceSpan;
use mjc_types::TypeId;

/// A type as written in a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeExpr {
    pub kind: TypeExprKind,
    pub span: SourceSpan,
    /// Filled in by member resolution; `Some(TypeId::UNKNOWN)` when the named
    /// type does not exist.
    pub resolved: Option<TypeId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeExprKind {
    /// A reference to a class by name.
    Named(Ident),
    IntArray,
    Int,
    Boolean,
}

impl TypeExpr {
    pub fn new(kind: TypeExprKind, span: SourceSpan) -> Self {
        Self { kind, span, resolved: None }
    }

    pub fn named(name: Ident) -> Self {
        let span = name.span;
        Self::new(TypeExprKind::Named(name), span)
    }

    pub fn int(span: SourceSpan) -> Self {
        Self::new(TypeExprKind::Int, span)
    }

    pub fn boolean(span: SourceSpan) -> Self {
        Self::new(TypeExprKind::Boolean, span)
    }

    pub fn int_array(span: SourceSpan) -> Self {
        Self::new(TypeExprKind::IntArray, span)
    }

    pub fn is_named(&self) -> bool {
        matches!(self.kind, TypeExprKind::Named(_))
    }
}
