use derive_more::{Display, From, Into};
use serde::{Deserialize, Serialize};

/// A knowledge-graph entity reference, already written the way the query
/// language expects it (e.g. `wd:Q362`). Never validated here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, From, Into, Display)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// `wd:Q{q}`, the prefixed form for a numeric Wikidata item id.
    pub fn wikidata(q: u64) -> Self {
        Self(format!("wd:Q{q}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
