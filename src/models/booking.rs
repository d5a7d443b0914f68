use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Body of `POST /bookings`. Everything besides `email` and `status` is stored untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl NewBooking {
    /// The stored document. A caller-supplied `_id` is dropped; the store assigns keys.
    pub fn into_document(self) -> Map<String, Value> {
        let mut doc = self.fields;
        doc.remove("_id");
        if let Some(email) = self.email {
            doc.insert("email".into(), Value::String(email));
        }
        if let Some(status) = self.status {
            doc.insert("status".into(), Value::String(status));
        }
        doc
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingStatusUpdate {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingQuery {
    pub email: Option<String>,
}
