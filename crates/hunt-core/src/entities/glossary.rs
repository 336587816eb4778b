use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A networking contact from the glossary's Contacts table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub company: String,
    pub role: String,
    /// "—" when the source row has no fourth cell.
    pub last_contact: String,
    pub notes: String,
}

/// A term/meaning pair from the glossary's Terms table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Term {
    pub term: String,
    pub meaning: String,
}
