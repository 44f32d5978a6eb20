use crate::value::Value;
use thiserror::Error as ThisError;

///
/// FieldDescriptor
///
/// Declared-field metadata for one entity type. `mapped` marks a
/// persisted column eligible for array-style access; internal fields
/// stay out of the field table.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub mapped: bool,
}

impl FieldDescriptor {
    /// A persisted column, eligible for array-style access.
    #[must_use]
    pub const fn column(name: &'static str) -> Self {
        Self { name, mapped: true }
    }

    /// An internal field, invisible through the array view.
    #[must_use]
    pub const fn internal(name: &'static str) -> Self {
        Self {
            name,
            mapped: false,
        }
    }
}

///
/// ShapeMismatch
///
/// Raised by setter glue when an incoming cell cannot convert to the
/// field's type. The table layer wraps it with entity and field context.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("value shape {variant} not accepted")]
pub struct ShapeMismatch {
    pub variant: &'static str,
}

impl ShapeMismatch {
    #[must_use]
    pub const fn new(variant: &'static str) -> Self {
        Self { variant }
    }
}

///
/// FieldAccessor
///
/// One mapped field's dispatch entry: the field name plus a getter and a
/// setter function pointer, both thin glue over the entity's own accessor
/// pair. The getter yields `Value::Null` for an absent value; the setter
/// accepts `Value::Null` to clear.
///

pub struct FieldAccessor<E> {
    pub name: &'static str,
    pub get: fn(&E) -> Value,
    pub set: fn(&mut E, Value) -> Result<(), ShapeMismatch>,
}

impl<E> FieldAccessor<E> {
    #[must_use]
    pub const fn new(
        name: &'static str,
        get: fn(&E) -> Value,
        set: fn(&mut E, Value) -> Result<(), ShapeMismatch>,
    ) -> Self {
        Self { name, get, set }
    }
}

impl<E> Clone for FieldAccessor<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for FieldAccessor<E> {}

impl<E> std::fmt::Debug for FieldAccessor<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

///
/// FieldGroup
///
/// A capability's contribution to an entity's mapped-field set: a stable
/// source label (used in diagnostics) plus the contributed accessors.
///

pub struct FieldGroup<E> {
    pub source: &'static str,
    pub accessors: Vec<FieldAccessor<E>>,
}

impl<E> FieldGroup<E> {
    #[must_use]
    pub const fn new(source: &'static str, accessors: Vec<FieldAccessor<E>>) -> Self {
        Self { source, accessors }
    }
}

impl<E> std::fmt::Debug for FieldGroup<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldGroup")
            .field("source", &self.source)
            .field("fields", &self.accessors.len())
            .finish()
    }
}

// field_accessor
// Glue for one accessor entry over a `get`/`set_` pair.
macro_rules! field_accessor {
    ($name:literal, $get:ident, $set:ident) => {
        $crate::model::FieldAccessor::new(
            $name,
            |e| $crate::traits::FieldValue::to_value(&e.$get()),
            |e, v| match $crate::traits::FieldValue::from_value(&v) {
                Some(converted) => {
                    e.$set(converted);
                    Ok(())
                }
                None => Err($crate::model::ShapeMismatch::new(v.variant_name())),
            },
        )
    };
}

pub(crate) use field_accessor;
