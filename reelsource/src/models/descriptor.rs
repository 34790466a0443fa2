use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaKind {
    #[serde(rename = "file")]
    File,
    #[serde(rename = "vimeo")]
    Vimeo,
    #[serde(rename = "youtube")]
    YouTube,
    #[serde(rename = "embed")]
    GenericEmbed,
    #[serde(rename = "unrecognized")]
    Unrecognized,
}

impl From<&MediaKind> for &str {
    fn from(value: &MediaKind) -> Self {
        match value {
            MediaKind::File => "file",
            MediaKind::Vimeo => "vimeo",
            MediaKind::YouTube => "youtube",
            MediaKind::GenericEmbed => "embed",
            MediaKind::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.into())
    }
}

impl FromStr for MediaKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(MediaKind::File),
            "vimeo" => Ok(MediaKind::Vimeo),
            "youtube" => Ok(MediaKind::YouTube),
            "embed" => Ok(MediaKind::GenericEmbed),
            "unrecognized" => Ok(MediaKind::Unrecognized),
            _ => Err(Error::Other(format!("unknown media kind: {s}"))),
        }
    }
}

/// Normalized, provider-tagged form of a media source string.
///
/// Each variant carries only the fields its kind allows: `File` and
/// `GenericEmbed` hold a url, `Vimeo` and `YouTube` hold a provider id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MediaDescriptor {
    #[serde(rename = "file")]
    File { url: String },
    #[serde(rename = "vimeo")]
    Vimeo {
        id: String,
        #[serde(
            rename = "accessHash",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        access_hash: Option<String>,
    },
    #[serde(rename = "youtube")]
    YouTube { id: String },
    #[serde(rename = "embed")]
    GenericEmbed { url: String },
    #[serde(rename = "unrecognized")]
    Unrecognized,
}

impl MediaDescriptor {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaDescriptor::File { .. } => MediaKind::File,
            MediaDescriptor::Vimeo { .. } => MediaKind::Vimeo,
            MediaDescriptor::YouTube { .. } => MediaKind::YouTube,
            MediaDescriptor::GenericEmbed { .. } => MediaKind::GenericEmbed,
            MediaDescriptor::Unrecognized => MediaKind::Unrecognized,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            MediaDescriptor::File { url } | MediaDescriptor::GenericEmbed { url } => Some(url),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            MediaDescriptor::Vimeo { id, .. } | MediaDescriptor::YouTube { id } => Some(id),
            _ => None,
        }
    }

    pub fn access_hash(&self) -> Option<&str> {
        match self {
            MediaDescriptor::Vimeo { access_hash, .. } => access_hash.as_deref(),
            _ => None,
        }
    }

    /// `false` only for `Unrecognized`, which callers treat as "no media".
    pub fn is_playable(&self) -> bool {
        !matches!(self, MediaDescriptor::Unrecognized)
    }

    /// Files play in a native video element rather than an iframe.
    pub fn is_file(&self) -> bool {
        matches!(self, MediaDescriptor::File { .. })
    }

    pub fn embed_url(&self, autoplay: bool) -> Option<String> {
        crate::embed::build_embed_url(self, autoplay)
    }
}
