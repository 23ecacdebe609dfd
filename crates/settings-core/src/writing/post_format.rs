use std::fmt;

use serde::{Deserialize, Serialize};

/// Default post format choices, in the order the form offers them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostFormat {
    #[serde(rename = "0", alias = "standard")]
    Standard,
    Aside,
    Chat,
    Gallery,
    Link,
    Image,
    Quote,
    Status,
    Video,
    Audio,
}

impl PostFormat {
    pub const ALL: [Self; 10] = [
        Self::Standard,
        Self::Aside,
        Self::Chat,
        Self::Gallery,
        Self::Link,
        Self::Image,
        Self::Quote,
        Self::Status,
        Self::Video,
        Self::Audio,
    ];

    /// Wire value stored in site settings
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "0",
            Self::Aside => "aside",
            Self::Chat => "chat",
            Self::Gallery => "gallery",
            Self::Link => "link",
            Self::Image => "image",
            Self::Quote => "quote",
            Self::Status => "status",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }

    /// Parse a wire value; `standard` is accepted for `0`.
    pub fn parse(value: &str) -> Option<Self> {
        if value == "standard" {
            return Some(Self::Standard);
        }
        Self::ALL.into_iter().find(|format| format.as_str() == value)
    }
}

impl fmt::Display for PostFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
