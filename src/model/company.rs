use serde::{Deserialize, Serialize};

use super::Identified;
use super::loose;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Company {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default)]
    pub company_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(rename = "coverImage", default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    #[serde(default, deserialize_with = "loose::flag")]
    pub verified: bool,
}

impl Identified for Company {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}
