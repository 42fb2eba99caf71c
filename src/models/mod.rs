use serde::{Deserialize, Serialize};

/// One gallery card as listed by the backend.
///
/// Cards are immutable from the client's side. `locked` has only ever been
/// observed as `true`, but a missing flag is read the same way.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct GalleryCard {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default = "locked_by_default", alias = "is_locked")]
    pub locked: bool,
    #[serde(default)]
    pub cover: Option<String>,
}

fn locked_by_default() -> bool {
    true
}

/// Unlocked gallery content. Kept in memory only.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, strum::Display)]
#[serde(tag = "type", rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentItem {
    Image { url: String },
    Video { url: String },
}

impl ContentItem {
    pub fn url(&self) -> &str {
        match self {
            Self::Image { url } | Self::Video { url } => url,
        }
    }
}

/// A message submitted through the public contact form.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: String,
    #[serde(default)]
    pub read: bool,
}
