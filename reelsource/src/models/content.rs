use serde::{Deserialize, Serialize};

/// Picks the media source of a record: `video` unless it is absent or empty,
/// then `videoFile`.
pub fn pick_video_source<'a>(
    video: Option<&'a str>,
    video_file: Option<&'a str>,
) -> Option<&'a str> {
    video
        .filter(|s| !s.is_empty())
        .or_else(|| video_file.filter(|s| !s.is_empty()))
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicVideo {
    #[serde(default)]
    pub title: String,
    pub artist: Option<String>,
    pub thumbnail: Option<String>,
    pub video: Option<String>,
    pub video_file: Option<String>,
    pub play_button_text: Option<String>,
    #[serde(default)]
    pub credits: Vec<String>,
    #[serde(default)]
    pub order: i64,
}

impl MusicVideo {
    pub fn video_source(&self) -> Option<&str> {
        pick_video_source(self.video.as_deref(), self.video_file.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct ContentPage {
    pub title: Option<String>,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    #[serde(rename = "heroVideo", rename_all = "camelCase")]
    HeroVideo {
        video: Option<String>,
        video_file: Option<String>,
        thumbnail: Option<String>,
        play_button_text: Option<String>,
        max_height: Option<String>,
    },
    #[serde(rename = "video", rename_all = "camelCase")]
    Video {
        video: Option<String>,
        video_file: Option<String>,
        thumbnail: Option<String>,
        caption: Option<String>,
        play_button_text: Option<String>,
    },
    /// Image, text, gallery and footer blocks carry no media source.
    #[serde(other)]
    Other,
}

impl ContentBlock {
    pub fn video_source(&self) -> Option<&str> {
        match self {
            ContentBlock::HeroVideo {
                video, video_file, ..
            }
            | ContentBlock::Video {
                video, video_file, ..
            } => pick_video_source(video.as_deref(), video_file.as_deref()),
            ContentBlock::Other => None,
        }
    }

    pub fn thumbnail(&self) -> Option<&str> {
        match self {
            ContentBlock::HeroVideo { thumbnail, .. } | ContentBlock::Video { thumbnail, .. } => {
                thumbnail.as_deref()
            }
            ContentBlock::Other => None,
        }
    }

    pub fn play_button_text(&self) -> Option<&str> {
        match self {
            ContentBlock::HeroVideo {
                play_button_text, ..
            }
            | ContentBlock::Video {
                play_button_text, ..
            } => play_button_text.as_deref(),
            ContentBlock::Other => None,
        }
    }

    /// Player title: a video block's caption, otherwise `None` so the
    /// configured default applies.
    pub fn title(&self) -> Option<&str> {
        match self {
            ContentBlock::Video { caption, .. } => caption.as_deref().filter(|c| !c.is_empty()),
            _ => None,
        }
    }

    pub fn has_media_slot(&self) -> bool {
        !matches!(self, ContentBlock::Other)
    }
}
