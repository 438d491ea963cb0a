//! The global type table.

use fxhash::{FxHashMap, FxHashSet};

use crate::descriptor::MethodKey;
use crate::entity::{ClassType, PrimitiveType, TypeEntity};
use crate::error::TableError;
use crate::ids::TypeId;

/// Arena of every type entity in a program, addressable by [`TypeId`] and,
/// for named types, by name.
///
/// A fresh table already holds the builtin entities; the front end then
/// declares one class placeholder per class before member resolution fills in
/// base links and member tables.
#[derive(Debug, Clone)]
pub struct TypeTable {
    entities: Vec<TypeEntity>,
    names: FxHashMap<String, TypeId>,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    pub fn new() -> Self {
        let mut table = Self {
            entities: Vec::new(),
            names: FxHashMap::default(),
        };
        // Registration order must match the TypeId constants.
        table.push(None, TypeEntity::Unknown);
        table.push(Some("int"), TypeEntity::Primitive(PrimitiveType::Int));
        table.push(Some("boolean"), TypeEntity::Primitive(PrimitiveType::Boolean));
        table.push(Some("void"), TypeEntity::Primitive(PrimitiveType::Void));
        table.push(Some("int[]"), TypeEntity::IntArray);
        table
    }

    fn push(&mut self, name: Option<&str>, entity: TypeEntity) -> TypeId {
        let id = TypeId::from_index(self.entities.len());
        self.entities.push(entity);
        if let Some(name) = name {
            self.names.insert(name.to_string(), id);
        }
        id
    }

    /// Registers an empty class placeholder.
    pub fn declare_class(&mut self, name: &str, is_static: bool) -> Result<TypeId, TableError> {
        if self.names.contains_key(name) {
            return Err(TableError::DuplicateType { name: name.to_string() });
        }
        let id = self.push(Some(name), TypeEntity::Class(ClassType::new(name, is_static)));
        log::trace!("declared class `{}` as {:?}", name, id);
        Ok(id)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.names.get(name).copied()
    }

    /// Like [`lookup`](Self::lookup), but only for class entities.
    pub fn lookup_class(&self, name: &str) -> Option<TypeId> {
        self.lookup(name).filter(|id| self.class(*id).is_some())
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeEntity> {
        self.entities.get(id.index())
    }

    pub fn class(&self, id: TypeId) -> Option<&ClassType> {
        self.get(id).and_then(TypeEntity::as_class)
    }

    pub fn class_mut(&mut self, id: TypeId) -> Option<&mut ClassType> {
        self.entities.get_mut(id.index()).and_then(TypeEntity::as_class_mut)
    }

    /// Ids of all class entities, in declaration order.
    pub fn class_ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.entities
            .iter()
            .enumerate()
            .filter(|(_, entity)| entity.as_class().is_some())
            .map(|(index, _)| TypeId::from_index(index))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Source-level spelling of a type, used in diagnostics.
    pub fn type_name(&self, id: TypeId) -> String {
        match self.get(id) {
            Some(TypeEntity::Primitive(primitive)) => primitive.name().to_string(),
            Some(TypeEntity::IntArray) => "int[]".to_string(),
            Some(TypeEntity::Class(class)) => class.name.clone(),
            Some(TypeEntity::Unknown) | None => "<unknown>".to_string(),
        }
    }

    /// Renders a method key as `name(int, Foo)`.
    pub fn signature(&self, key: &MethodKey) -> String {
        let params: Vec<String> = key.params.iter().map(|ty| self.type_name(*ty)).collect();
        format!("{}({})", key.name, params.join(", "))
    }

    /// Walks the base chain of `id`, starting at its direct base.
    pub fn ancestors(&self, id: TypeId) -> Ancestors<'_> {
        Ancestors {
            table: self,
            next: self.class(id).and_then(|class| class.base),
            visited: FxHashSet::default(),
            revisited: None,
        }
    }
}

/// Iterator over a class's ancestors, nearest first.
///
/// Each entity is yielded at most once. If the chain loops, iteration stops at
/// the first entity that would be yielded twice and [`Ancestors::revisited`]
/// reports it.
pub struct Ancestors<'a> {
    table: &'a TypeTable,
    next: Option<TypeId>,
    visited: FxHashSet<TypeId>,
    revisited: Option<TypeId>,
}

impl Ancestors<'_> {
    pub fn revisited(&self) -> Option<TypeId> {
        self.revisited
    }
}

impl Iterator for Ancestors<'_> {
    type Item = TypeId;

    fn next(&mut self) -> Option<TypeId> {
        let current = self.next.take()?;
        if !self.visited.insert(current) {
            self.revisited = Some(current);
            return None;
        }
        self.next = self.table.class(current).and_then(|class| class.base);
        Some(current)
    }
}
