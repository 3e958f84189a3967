use serde::{Deserialize, Serialize};

use super::string_or_empty;
use crate::error::Result;
use crate::store::Document;

/// A sporting event as stored in the `events` collection.
///
/// Fields are free text; city and area carry no reference to the admin
/// managed city/area lists. Missing or null fields read back as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(skip)]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub sport: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub city: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub area: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub created_by: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub created_at: String,
}

impl Event {
    pub fn from_document(doc: &Document) -> Result<Self> {
        let mut event: Event = doc.decode()?;
        event.id = doc.id.clone();
        Ok(event)
    }

    /// True when every field needed to show the event as a suggestion is set.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.sport.is_empty()
            && !self.city.is_empty()
            && !self.area.is_empty()
            && !self.date.is_empty()
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.created_by == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_reads_missing_and_null_fields_as_empty() {
        let data = json!({"name": "Sunday 5k", "city": null, "createdBy": "u1"});
        let doc = Document::new("e1", data.as_object().unwrap().clone());

        let event = Event::from_document(&doc).unwrap();
        assert_eq!(event.id, "e1");
        assert_eq!(event.name, "Sunday 5k");
        assert_eq!(event.city, "");
        assert_eq!(event.date, "");
        assert_eq!(event.created_by, "u1");
        assert!(!event.is_complete());
    }

    #[test]
    fn test_serialize_uses_stored_field_names() {
        let event = Event {
            id: "ignored".into(),
            name: "Match".into(),
            sport: "Football".into(),
            city: "Pune".into(),
            area: "Kothrud".into(),
            date: "2025-03-01".into(),
            desc: None,
            created_by: "u1".into(),
            created_at: "2025-02-01T10:00:00.000Z".into(),
        };

        let value = serde_json::to_value(&event).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("desc").is_none());
        assert_eq!(value["createdBy"], "u1");
        assert!(event.is_complete());
    }
}
