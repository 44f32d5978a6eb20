mod field;

pub use field::{FieldAccessor, FieldDescriptor, FieldGroup, ShapeMismatch};

pub(crate) use field::field_accessor;
