//! Hand-written entity fixtures for core tests. Production entities use
//! the derive; these spell the registration impls out so the contract is
//! exercised directly.

use crate::{
    capability::{Timestamped, timestamps},
    model::{FieldAccessor, FieldDescriptor, FieldGroup, field_accessor},
    traits::EntityFields,
    types::Timestamp,
};

///
/// Score
///
/// Plain fixture: three mapped columns, one internal field.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct Score {
    title: Option<String>,
    pages: Option<u64>,
    public_domain: Option<bool>,
    pub(crate) revision: u32,
}

impl Score {
    pub(crate) fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub(crate) fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    pub(crate) const fn pages(&self) -> Option<u64> {
        self.pages
    }

    pub(crate) fn set_pages(&mut self, pages: Option<u64>) {
        self.pages = pages;
    }

    pub(crate) const fn public_domain(&self) -> Option<bool> {
        self.public_domain
    }

    pub(crate) fn set_public_domain(&mut self, public_domain: Option<bool>) {
        self.public_domain = public_domain;
    }
}

impl EntityFields for Score {
    const ENTITY_NAME: &'static str = "Score";

    fn field_descriptors() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::column("title"),
            FieldDescriptor::column("pages"),
            FieldDescriptor::column("public_domain"),
            FieldDescriptor::internal("revision"),
        ]
    }

    fn mapped_fields() -> Vec<FieldAccessor<Self>> {
        vec![
            field_accessor!("title", title, set_title),
            field_accessor!("pages", pages, set_pages),
            field_accessor!("public_domain", public_domain, set_public_domain),
        ]
    }
}

///
/// Loan
///
/// Capability fixture: one own column plus timestamp stamps whose
/// backing fields are declared internal and mapped by the contribution.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct Loan {
    item: Option<String>,
    created_at: Option<Timestamp>,
    updated_at: Option<Timestamp>,
}

impl Loan {
    pub(crate) fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }

    pub(crate) fn set_item(&mut self, item: Option<String>) {
        self.item = item;
    }
}

impl Timestamped for Loan {
    fn created_at(&self) -> Option<Timestamp> {
        self.created_at
    }

    fn set_created_at(&mut self, at: Option<Timestamp>) {
        self.created_at = at;
    }

    fn updated_at(&self) -> Option<Timestamp> {
        self.updated_at
    }

    fn set_updated_at(&mut self, at: Option<Timestamp>) {
        self.updated_at = at;
    }
}

impl EntityFields for Loan {
    const ENTITY_NAME: &'static str = "Loan";

    fn field_descriptors() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::column("item"),
            FieldDescriptor::internal("created_at"),
            FieldDescriptor::internal("updated_at"),
        ]
    }

    fn mapped_fields() -> Vec<FieldAccessor<Self>> {
        vec![field_accessor!("item", item, set_item)]
    }

    fn capability_fields() -> Vec<FieldGroup<Self>> {
        vec![timestamps::<Self>()]
    }
}
