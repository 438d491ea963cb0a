/// Stable handle to a type entity stored in a [`TypeTable`](crate::TypeTable).
///
/// Ids are only minted by the table. The builtin entities are always registered
/// first and in a fixed order, which is what makes the associated constants
/// below valid for every table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    /// The error placeholder a failed resolution produces.
    pub const UNKNOWN: TypeId = TypeId(0);
    pub const INT: TypeId = TypeId(1);
    pub const BOOLEAN: TypeId = TypeId(2);
    pub const VOID: TypeId = TypeId(3);
    pub const INT_ARRAY: TypeId = TypeId(4);

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }
}
