use serde::{Deserialize, Serialize};

use super::string_or_empty;
use crate::error::Result;
use crate::store::Document;

/// An area inside a city. `city_id` is not checked against `cities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    #[serde(skip)]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub city_id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
}

impl Area {
    pub fn from_document(doc: &Document) -> Result<Self> {
        let mut area: Area = doc.decode()?;
        area.id = doc.id.clone();
        Ok(area)
    }
}
