use std::fmt;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Stable numeric identity of each diagnostic, independent of its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum ErrorCode {
    TypeNameMissing = 1,
    StaticBaseType = 2,
    CyclicBaseType = 3,
    FieldDuplicates = 4,
    MethodDuplicates = 5,
    ParameterDuplicates = 6,
}

impl ErrorCode {
    pub fn number(self) -> u16 {
        self as u16
    }

    pub fn name(self) -> &'static str {
        match self {
            ErrorCode::TypeNameMissing => "TypeNameMissing",
            ErrorCode::StaticBaseType => "StaticBaseType",
            ErrorCode::CyclicBaseType => "CyclicBaseType",
            ErrorCode::FieldDuplicates => "FieldDuplicates",
            ErrorCode::MethodDuplicates => "MethodDuplicates",
            ErrorCode::ParameterDuplicates => "ParameterDuplicates",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.number())
    }
}

/// Semantic errors found while resolving class members.
///
/// None of these stop the pass; each is recorded once where it is detected and
/// resolution carries on with whatever could be resolved.
#[derive(Debug, Error, Diagnostic, Clone, Hash, PartialEq, Eq)]
pub enum ResolveError {
    /// A type name that is not in the global type table.
    #[error("Type name missing: `{name}` is not a declared type")]
    #[diagnostic(code(mjc_resolve::type_name_missing))]
    TypeNameMissing {
        name: String,
        #[label("referenced here")]
        span: SourceSpan,
    },

    /// A class names a static class as its base.
    #[error("Static base type: cannot inherit from static class `{name}`")]
    #[diagnostic(code(mjc_resolve::static_base_type))]
    StaticBaseType {
        name: String,
        #[label("static class used as a base")]
        span: SourceSpan,
    },

    /// Following base links from `class` never reaches a root class.
    #[error("Cyclic base type: `{class}` inherits from itself through `{base}`")]
    #[diagnostic(code(mjc_resolve::cyclic_base_type))]
    CyclicBaseType {
        /// The base named in `class`'s own declaration.
        base: String,
        class: String,
        #[label("inheritance cycle continues here")]
        span: SourceSpan,
    },

    #[error("Duplicate field: `{field}` is declared more than once in `{class}`")]
    #[diagnostic(code(mjc_resolve::field_duplicates))]
    FieldDuplicates {
        class: String,
        field: String,
        #[label("redeclared here")]
        span: SourceSpan,
    },

    /// Same name and same parameter types as a method already in the class.
    #[error("Duplicate method: `{method}` is already declared in `{class}` with the same parameter types")]
    #[diagnostic(code(mjc_resolve::method_duplicates))]
    MethodDuplicates {
        class: String,
        method: String,
        #[label("redeclared here")]
        span: SourceSpan,
    },

    #[error("Duplicate parameter: `{parameter}` appears more than once in `{method}`")]
    #[diagnostic(code(mjc_resolve::parameter_duplicates))]
    ParameterDuplicates {
        method: String,
        parameter: String,
        #[label("repeated here")]
        span: SourceSpan,
    },
}

impl ResolveError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            ResolveError::TypeNameMissing { .. } => ErrorCode::TypeNameMissing,
            ResolveError::StaticBaseType { .. } => ErrorCode::StaticBaseType,
            ResolveError::CyclicBaseType { .. } => ErrorCode::CyclicBaseType,
            ResolveError::FieldDuplicates { .. } => ErrorCode::FieldDuplicates,
            ResolveError::MethodDuplicates { .. } => ErrorCode::MethodDuplicates,
            ResolveError::ParameterDuplicates { .. } => ErrorCode::ParameterDuplicates,
        }
    }

    pub fn span(&self) -> SourceSpan {
        match self {
            ResolveError::TypeNameMissing { span, .. }
            | ResolveError::StaticBaseType { span, .. }
            | ResolveError::CyclicBaseType { span, .. }
            | ResolveError::FieldDuplicates { span, .. }
            | ResolveError::MethodDuplicates { span, .. }
            | ResolveError::ParameterDuplicates { span, .. } => *span,
        }
    }

    /// Positional message arguments, in the order message templates expect.
    pub fn args(&self) -> Vec<&str> {
        match self {
            ResolveError::TypeNameMissing { name, .. } | ResolveError::StaticBaseType { name, .. } => {
                vec![name.as_str()]
            }
            ResolveError::CyclicBaseType { base, class, .. } => vec![base.as_str(), class.as_str()],
            ResolveError::FieldDuplicates { class, field, .. } => vec![class.as_str(), field.as_str()],
            ResolveError::MethodDuplicates { class, method, .. } => {
                vec![class.as_str(), method.as_str()]
            }
            ResolveError::ParameterDuplicates { method, parameter, .. } => {
                vec![method.as_str(), parameter.as_str()]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span() -> SourceSpan {
        SourceSpan::from((4, 3))
    }

    #[test]
    fn codes_are_fixed() {
        assert_eq!(ErrorCode::TypeNameMissing.number(), 1);
        assert_eq!(ErrorCode::ParameterDuplicates.number(), 6);
        assert_eq!(ErrorCode::CyclicBaseType.to_string(), "E0003");
    }

    #[test]
    fn args_follow_message_order() {
        let error = ResolveError::CyclicBaseType {
            base: "B".into(),
            class: "A".into(),
            span: span(),
        };
        assert_eq!(error.error_code(), ErrorCode::CyclicBaseType);
        assert_eq!(error.args(), ["B", "A"]);
        assert_eq!(error.span(), span());

        let error = ResolveError::ParameterDuplicates {
            method: "add".into(),
            parameter: "x".into(),
            span: span(),
        };
        assert_eq!(error.args(), ["add", "x"]);
    }

    #[test]
    fn messages_name_the_offenders() {
        let error = ResolveError::FieldDuplicates {
            class: "Foo".into(),
            field: "bar".into(),
            span: span(),
        };
        assert_eq!(
            error.to_string(),
            "Duplicate field: `bar` is declared more than once in `Foo`"
        );
        let code = Diagnostic::code(&error).map(|code| code.to_string());
        assert_eq!(code.as_deref(), Some("mjc_resolve::field_duplicates"));
    }
}
