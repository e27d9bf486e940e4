use std::fmt;

use serde::{Deserialize, Serialize};

/**
    Identifier of a backend record - some endpoints
    send numeric ids, others send strings.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl Default for RecordId {
    fn default() -> Self {
        Self::Number(0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => n.fmt(f),
            Self::Text(s) => s.fmt(f),
        }
    }
}
