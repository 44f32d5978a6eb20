//! Core runtime for Tutti: the value model, per-type field tables, the
//! array view over entity accessors, capability contracts, and the
//! ergonomics exported via the `prelude`.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod capability;
pub mod error;
pub mod model;
pub mod registry;
pub mod traits;
pub mod types;
pub mod value;
pub mod view;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or registry internals are re-exported here.
///

pub mod prelude {
    pub use crate::{
        model::{FieldAccessor, FieldDescriptor, FieldGroup},
        registry::FieldTable,
        traits::{EntityFields, FieldValue},
        types::{Date, Timestamp},
        value::Value,
        view::ArrayView,
    };
}
