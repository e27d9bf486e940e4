use serde::Deserialize;

use vitrine_imagery::HasImage;

use super::RecordId;
use super::lenient::{self, first_present};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Product {
    #[allow(clippy::missing_errors_doc)]
    pub fn try_from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

impl HasImage for Product {
    fn raw_image_url(&self) -> Option<String> {
        first_present([&self.image_url, &self.image])
    }
}
