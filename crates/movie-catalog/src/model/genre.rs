use serde::{Deserialize, Serialize};

/// Metadata of a registered genre. A genre grain without a record, or with an empty
/// `name`, counts as unregistered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(default)]
    pub name: String,
}

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn is_registered(&self) -> bool {
        !self.name.is_empty()
    }
}
