
use crate::{
    error::{AccessError, RegistryError},
    registry::FieldTable,
    traits::EntityFields,
    value::Value,
};

///
/// ArrayView
///
/// Map-like access to one entity instance over exactly its mapped
/// fields, dispatching through the entity's own accessor pair per field.
/// Stateless beyond the two references: bind one per logical operation
/// and drop it when done.
///
/// Key naming is the field identifier verbatim; presence (`has`/`get`)
/// is decided by the current value, while `set`/`clear` are gated on key
/// membership only, so an absent mapped field can be populated.
///

pub struct ArrayView<'a, E: EntityFields> {
    entity: &'a mut E,
    table: &'static FieldTable<E>,
}

impl<'a, E: EntityFields> ArrayView<'a, E> {
    /// Bind `entity` to its type's field table. Fails only when the
    /// type's declaration is defective (see [`RegistryError`]).
    pub fn new(entity: &'a mut E) -> Result<Self, RegistryError> {
        Ok(Self {
            table: FieldTable::of()?,
            entity,
        })
    }

    /// The shared field table backing this view.
    #[must_use]
    pub const fn table(&self) -> &'static FieldTable<E> {
        self.table
    }

    /// Mapped key set of the bound entity's type, in table order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.keys()
    }

    /// True iff `field` is mapped and currently holds a value.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.table.has(self.entity, field)
    }

    /// The current value of `field`, or `Value::Null` when absent or
    /// unknown. Never fails.
    #[must_use]
    pub fn get(&self, field: &str) -> Value {
        self.table.get(self.entity, field)
    }

    /// Write `value` through the field's setter.
    pub fn set(&mut self, field: &str, value: Value) -> Result<(), AccessError> {
        self.table.set(self.entity, field, value)
    }

    /// Clear `field`; a no-op when already absent.
    pub fn clear(&mut self, field: &str) -> Result<(), AccessError> {
        self.table.clear(self.entity, field)
    }
}

impl<E: EntityFields> std::fmt::Debug for ArrayView<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArrayView")
            .field("entity", &self.table.entity_name())
            .field("fields", &self.table.len())
            .finish()
    }
}
