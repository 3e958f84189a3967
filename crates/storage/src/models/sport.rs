use serde::{Deserialize, Serialize};

use super::string_or_empty;
use crate::error::Result;
use crate::store::Document;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sport {
    #[serde(skip)]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
}

impl Sport {
    pub fn from_document(doc: &Document) -> Result<Self> {
        let mut sport: Sport = doc.decode()?;
        sport.id = doc.id.clone();
        Ok(sport)
    }
}
