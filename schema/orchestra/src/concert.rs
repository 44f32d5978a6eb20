use tutti::{capability::timestamps, prelude::*};

///
/// Concert
///
/// One scheduled performance, programme included.
///

#[derive(Clone, Debug, Default, Deserialize, EntityFields, PartialEq, Serialize)]
#[entity(capabilities(timestamps))]
pub struct Concert {
    id: Option<u64>,
    title: Option<String>,
    venue: Option<String>,
    starts_at: Option<Timestamp>,
    ticket_price_cents: Option<u64>,
    programme: Option<Vec<String>>,

    #[field(unmapped)]
    created_at: Option<Timestamp>,
    #[field(unmapped)]
    updated_at: Option<Timestamp>,
}

impl Concert {
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn set_id(&mut self, id: Option<u64>) {
        self.id = id;
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title;
    }

    #[must_use]
    pub fn venue(&self) -> Option<&str> {
        self.venue.as_deref()
    }

    pub fn set_venue(&mut self, venue: Option<String>) {
        self.venue = venue;
    }

    #[must_use]
    pub const fn starts_at(&self) -> Option<Timestamp> {
        self.starts_at
    }

    pub fn set_starts_at(&mut self, starts_at: Option<Timestamp>) {
        self.starts_at = starts_at;
    }

    #[must_use]
    pub const fn ticket_price_cents(&self) -> Option<u64> {
        self.ticket_price_cents
    }

    pub fn set_ticket_price_cents(&mut self, ticket_price_cents: Option<u64>) {
        self.ticket_price_cents = ticket_price_cents;
    }

    #[must_use]
    pub const fn programme(&self) -> Option<&Vec<String>> {
        self.programme.as_ref()
    }

    pub fn set_programme(&mut self, programme: Option<Vec<String>>) {
        self.programme = programme;
    }
}

impl Timestamped for Concert {
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
