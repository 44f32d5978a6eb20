//! ## Crate layout
//! - `capability`: shared behaviors (timestamps, blame, translation) an
//!   entity type can compose into its mapped-field set.
//! - `error`: registry-construction and view-access error types.
//! - `model`: field descriptors, accessor entries, capability groups.
//! - `registry`: per-type field tables and their process-wide cache.
//! - `traits`: the `EntityFields` registration contract and the
//!   `FieldValue` conversion boundary.
//! - `types`: scalar column newtypes (`Date`, `Timestamp`).
//! - `value`: the dynamically-typed `Value` cell with its `Null` sentinel.
//! - `view`: the `ArrayView` adapter over one entity instance.
//!
//! The `prelude` module mirrors the surface entity-definition code uses;
//! `#[derive(EntityFields)]` is re-exported at the root.

pub use tutti_core::{capability, error, model, registry, traits, types, value, view};
pub use tutti_derive::EntityFields;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::{
        EntityFields,
        capability::{Blamed, Timestamped, Translated},
        error::{AccessError, RegistryError},
        registry::FieldTable,
        traits::{EntityFields as _, FieldValue as _},
        types::{Date, Timestamp},
        value::Value,
        view::ArrayView,
    };
    pub use serde::{Deserialize, Serialize};
}
