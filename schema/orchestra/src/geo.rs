use tutti::{capability::translation, prelude::*};

///
/// Continent
///
/// Reference-data row keyed by its ISO code.
///

#[derive(Clone, Debug, Default, Deserialize, EntityFields, PartialEq, Serialize)]
pub struct Continent {
    id: Option<u64>,
    code: Option<String>,
    name: Option<String>,
}

impl Continent {
    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn set_id(&mut self, id: Option<u64>) {
        self.id = id;
    }

    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Stored uppercased; continent codes are two-letter ISO tags.
    pub fn set_code(&mut self, code: Option<String>) {
        self.code = code.map(|c| c.trim().to_ascii_uppercase());
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }
}

///
/// ContinentTranslation
///
/// Locale overlay for [`Continent`]: the continent code plus the
/// translation capability's `target`/`translation` pair.
///

#[derive(Clone, Debug, Default, Deserialize, EntityFields, PartialEq, Serialize)]
#[entity(name = "ContinentI18n", capabilities(translation))]
pub struct ContinentTranslation {
    code: Option<String>,

    #[field(unmapped)]
    target: Option<String>,
    #[field(unmapped)]
    translation: Option<String>,
}

impl ContinentTranslation {
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Stored uppercased, mirroring [`Continent::set_code`].
    pub fn set_code(&mut self, code: Option<String>) {
        self.code = code.map(|c| c.trim().to_ascii_uppercase());
    }
}

impl Translated for ContinentTranslation {
    fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    fn set_target(&mut self, target: Option<String>) {
        self.target = target;
    }

    fn translation(&self) -> Option<&str> {
        self.translation.as_deref()
    }

    fn set_translation(&mut self, translation: Option<String>) {
        self.translation = translation;
    }
}

///
/// TESTS
///
