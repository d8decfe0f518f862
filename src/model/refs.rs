use serde::{Deserialize, Serialize};

/// Records that carry a server identifier.
pub trait Identified {
    fn id(&self) -> Option<&str>;
}

/// A cross-entity reference the server returns either populated or as a bare id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Id(String),
    Embedded(T),
}

impl<T: Identified> Ref<T> {
    pub fn id(&self) -> Option<&str> {
        match self {
            Ref::Id(id) => Some(id.as_str()),
            Ref::Embedded(v) => v.id(),
        }
    }

    pub fn embedded(&self) -> Option<&T> {
        match self {
            Ref::Id(_) => None,
            Ref::Embedded(v) => Some(v),
        }
    }
}

/// Normalized list result. Bare-array endpoints come back as a single page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn single(items: Vec<T>) -> Self {
        Self {
            items,
            total_pages: 1,
        }
    }
}

/// Partial related record used by the `recommended*` arrays.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Related {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "fullName", default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl Identified for Related {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Related entries arrive as populated records or as bare ids.
pub type RelatedRef = Ref<Related>;
