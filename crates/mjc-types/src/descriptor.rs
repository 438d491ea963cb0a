//! Resolved member records attached to class entities.

use crate::ids::TypeId;

/// A field declared in a class body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    pub name: String,
    pub ty: TypeId,
    /// The class whose field table holds this descriptor.
    pub owner: TypeId,
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterDescriptor {
    pub name: String,
    pub ty: TypeId,
    /// 1-based position in the declared parameter list. Position 0 belongs to
    /// the implicit receiver, which never gets a descriptor.
    pub index: u32,
}

/// Identity of a method inside one method table: its name together with the
/// ordered parameter types. Return type and parameter names do not take part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodKey {
    pub name: String,
    pub params: Vec<TypeId>,
}

impl MethodKey {
    pub fn new(name: impl Into<String>, params: Vec<TypeId>) -> Self {
        Self { name: name.into(), params }
    }
}

/// A method signature resolved against the type table.
///
/// Built up parameter by parameter while its declaration is resolved, then
/// moved into a class's method table, after which it is no longer modified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodDescriptor {
    pub name: String,
    pub return_type: TypeId,
    pub params: Vec<ParameterDescriptor>,
    pub is_static: bool,
    pub owner: TypeId,
}

impl MethodDescriptor {
    /// An empty descriptor: no parameters and an unresolved return type.
    pub fn new(name: impl Into<String>, owner: TypeId, is_static: bool) -> Self {
        Self {
            name: name.into(),
            return_type: TypeId::UNKNOWN,
            params: Vec::new(),
            is_static,
            owner,
        }
    }

    pub fn param_types(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.params.iter().map(|param| param.ty)
    }

    pub fn key(&self) -> MethodKey {
        MethodKey::new(self.name.clone(), self.param_types().collect())
    }

    /// Two methods conflict when they share a name, an arity and every
    /// parameter type position by position.
    pub fn same_signature(&self, other: &MethodDescriptor) -> bool {
        self.name == other.name
            && self.params.len() == other.params.len()
            && self.param_types().zip(other.param_types()).all(|(a, b)| a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(name: &str, params: &[(&str, TypeId)], ret: TypeId) -> MethodDescriptor {
        let mut descriptor = MethodDescriptor::new(name, TypeId::UNKNOWN, false);
        descriptor.return_type = ret;
        descriptor.params = params
            .iter()
            .enumerate()
            .map(|(i, (name, ty))| ParameterDescriptor {
                name: name.to_string(),
                ty: *ty,
                index: i as u32 + 1,
            })
            .collect();
        descriptor
    }

    #[test]
    fn signature_ignores_return_type_and_parameter_names() {
        let a = method("add", &[("x", TypeId::INT), ("y", TypeId::INT)], TypeId::INT);
        let b = method("add", &[("p", TypeId::INT), ("q", TypeId::INT)], TypeId::BOOLEAN);
        assert!(a.same_signature(&b));
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn signature_differs_by_arity_and_types() {
        let a = method("add", &[("x", TypeId::INT)], TypeId::INT);
        let b = method("add", &[("x", TypeId::INT), ("y", TypeId::INT)], TypeId::INT);
        let c = method("add", &[("x", TypeId::BOOLEAN)], TypeId::INT);
        assert!(!a.same_signature(&b));
        assert!(!a.same_signature(&c));
        assert_ne!(a.key(), c.key());
    }

    #[test]
    fn new_descriptor_is_empty() {
        let descriptor = MethodDescriptor::new("run", TypeId::INT_ARRAY, true);
        assert!(descriptor.params.is_empty());
        assert!(descriptor.return_type.is_unknown());
        assert!(descriptor.is_static);
        assert_eq!(descriptor.key(), MethodKey::new("run", vec![]));
    }
}
