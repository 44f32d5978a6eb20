//! Shared behaviors an entity type can compose. Each capability is a
//! small accessor trait plus a contribution function; the contribution
//! joins the type's field table when the entity declares the capability.

use crate::{
    model::{FieldGroup, field_accessor},
    traits::EntityFields,
    types::Timestamp,
};

///
/// Timestamped
///
/// Creation/modification audit stamps.
///

pub trait Timestamped {
    fn created_at(&self) -> Option<Timestamp>;
    fn set_created_at(&mut self, at: Option<Timestamp>);

    fn updated_at(&self) -> Option<Timestamp>;
    fn set_updated_at(&mut self, at: Option<Timestamp>);
}

/// Mapped fields contributed by [`Timestamped`]: `created_at`, `updated_at`.
#[must_use]
pub fn timestamps<E: EntityFields + Timestamped>() -> FieldGroup<E> {
    FieldGroup::new(
        "timestamps",
        vec![
            field_accessor!("created_at", created_at, set_created_at),
            field_accessor!("updated_at", updated_at, set_updated_at),
        ],
    )
}

///
/// Blamed
///
/// Records which principal created and last touched a row.
///

pub trait Blamed {
    fn created_by(&self) -> Option<&str>;
    fn set_created_by(&mut self, by: Option<String>);

    fn updated_by(&self) -> Option<&str>;
    fn set_updated_by(&mut self, by: Option<String>);
}

/// Mapped fields contributed by [`Blamed`]: `created_by`, `updated_by`.
#[must_use]
pub fn blame<E: EntityFields + Blamed>() -> FieldGroup<E> {
    FieldGroup::new(
        "blame",
        vec![
            field_accessor!("created_by", created_by, set_created_by),
            field_accessor!("updated_by", updated_by, set_updated_by),
        ],
    )
}

///
/// Translated
///
/// Locale overlay for reference data: the locale tag (`target`) and the
/// translated display string (`translation`).
///

pub trait Translated {
    fn target(&self) -> Option<&str>;
    fn set_target(&mut self, target: Option<String>);

    fn translation(&self) -> Option<&str>;
    fn set_translation(&mut self, translation: Option<String>);
}

/// Mapped fields contributed by [`Translated`]: `target`, `translation`.
#[must_use]
pub fn translation<E: EntityFields + Translated>() -> FieldGroup<E> {
    FieldGroup::new(
        "translation",
        vec![
            field_accessor!("target", target, set_target),
            field_accessor!("translation", translation, set_translation),
        ],
    )
}
