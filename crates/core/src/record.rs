//! Record schemas for the zoo catalogs.
//!
//! Records are plain serde structs validated at load time. Optional
//! fields are modeled as `Option` rather than trusted ad hoc at each
//! access site.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A record that can be indexed by a [`Catalog`](crate::Catalog).
///
/// `name` feeds the primary index, `categories` feed the secondary
/// index, and `haystack` is the free text scanned by substring search.
pub trait Record {
    /// Unique identifying name (case-insensitive within a catalog).
    fn name(&self) -> &str;

    /// Category labels this record is indexed under.
    ///
    /// A record may carry several labels (e.g. an English and a Korean
    /// species name) and is indexed under every non-empty one.
    fn categories(&self) -> Vec<&str>;

    /// Free-text fields scanned by substring search.
    fn haystack(&self) -> Vec<&str>;
}

/// One animal living at the zoo.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Animal {
    /// The animal's given name, unique within the zoo.
    pub name: String,

    /// English species label.
    pub species: String,

    /// Korean species label.
    #[serde(default)]
    pub species_kr: String,

    /// Age in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    /// Enclosure or area where the animal can be found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Free-form notes about the animal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record for Animal {
    fn name(&self) -> &str {
        &self.name
    }

    fn categories(&self) -> Vec<&str> {
        [self.species.as_str(), self.species_kr.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect()
    }

    fn haystack(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.species.as_str()];
        if let Some(desc) = &self.description {
            fields.push(desc);
        }
        fields
    }
}

/// One scheduled animal show.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Show {
    /// Show title, unique within the schedule.
    pub name: String,

    /// What happens at the show.
    pub description: String,

    /// The featured animal, when the show centers on one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animal: Option<String>,

    /// Daily start time, e.g. "14:00".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,

    /// Venue within the zoo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Record for Show {
    fn name(&self) -> &str {
        &self.name
    }

    fn categories(&self) -> Vec<&str> {
        self.animal
            .as_deref()
            .filter(|s| !s.is_empty())
            .into_iter()
            .collect()
    }

    fn haystack(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.description.as_str()];
        if let Some(animal) = self.animal.as_deref() {
            fields.push(animal);
        }
        fields
    }
}
