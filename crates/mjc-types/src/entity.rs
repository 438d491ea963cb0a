use indexmap::IndexMap;

use crate::descriptor::{FieldDescriptor, MethodDescriptor, MethodKey};
use crate::ids::TypeId;

/// Primitive types of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Int,
    Boolean,
    /// Only ever a return type.
    Void,
}

impl PrimitiveType {
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveType::Int => "int",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Void => "void",
        }
    }
}

/// A canonical type. Every syntactic mention of a type resolves to the id of
/// one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeEntity {
    /// Error placeholder; whatever produced it has already been reported.
    Unknown,
    Primitive(PrimitiveType),
    IntArray,
    Class(ClassType),
}

impl TypeEntity {
    pub fn as_class(&self) -> Option<&ClassType> {
        match self {
            TypeEntity::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_class_mut(&mut self) -> Option<&mut ClassType> {
        match self {
            TypeEntity::Class(class) => Some(class),
            _ => None,
        }
    }
}

/// A user-declared class together with its member tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassType {
    pub name: String,
    /// Static classes only hold static members and cannot be inherited from.
    pub is_static: bool,
    /// The superclass, if one was named and resolved.
    pub base: Option<TypeId>,
    fields: IndexMap<String, FieldDescriptor>,
    methods: IndexMap<MethodKey, MethodDescriptor>,
    static_methods: IndexMap<MethodKey, MethodDescriptor>,
}

impl ClassType {
    pub fn new(name: impl Into<String>, is_static: bool) -> Self {
        Self {
            name: name.into(),
            is_static,
            base: None,
            fields: IndexMap::new(),
            methods: IndexMap::new(),
            static_methods: IndexMap::new(),
        }
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Inserts `field`, replacing any field of the same name. The replaced
    /// descriptor is returned; a replaced field keeps its original position.
    pub fn insert_field(&mut self, field: FieldDescriptor) -> Option<FieldDescriptor> {
        self.fields.insert(field.name.clone(), field)
    }

    pub fn methods(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.methods.values()
    }

    pub fn static_methods(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.static_methods.values()
    }

    pub fn method(&self, key: &MethodKey) -> Option<&MethodDescriptor> {
        self.methods.get(key)
    }

    pub fn static_method(&self, key: &MethodKey) -> Option<&MethodDescriptor> {
        self.static_methods.get(key)
    }

    /// Every overload called `name` in the instance or the static table.
    pub fn methods_named<'a>(
        &'a self,
        name: &'a str,
        is_static: bool,
    ) -> impl Iterator<Item = &'a MethodDescriptor> + 'a {
        self.method_table(is_static)
            .values()
            .filter(move |method| method.name == name)
    }

    /// Registers `method` in the table matching its static flag. A method with
    /// the same key is replaced and returned.
    pub fn insert_method(&mut self, method: MethodDescriptor) -> Option<MethodDescriptor> {
        let table = if method.is_static {
            &mut self.static_methods
        } else {
            &mut self.methods
        };
        table.insert(method.key(), method)
    }

    fn method_table(&self, is_static: bool) -> &IndexMap<MethodKey, MethodDescriptor> {
        if is_static {
            &self.static_methods
        } else {
            &self.methods
        }
    }
}
