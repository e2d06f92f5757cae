use serde::{Deserialize, Serialize};

/// A travel destination record. `id` is supplied by the caller and acts as the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub id: i64,
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub description: Option<String>,
    pub image_url: String,
}
