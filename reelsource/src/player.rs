use log::debug;
use serde::Serialize;

use crate::classifier::classify_field;
use crate::config::Config;
use crate::models::{ContentBlock, MediaDescriptor, MusicVideo};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlaybackState {
    ThumbnailShown,
    Playing,
}

/// Inputs for a player. Unset options fall back to the [`Config`] defaults.
#[derive(Debug, Clone, Default)]
pub struct PlayerProps {
    pub video: Option<String>,
    pub thumbnail: Option<String>,
    pub title: Option<String>,
    pub play_button_text: Option<String>,
    pub autoplay: Option<bool>,
    pub show_play_button: Option<bool>,
}

impl From<&MusicVideo> for PlayerProps {
    fn from(record: &MusicVideo) -> Self {
        Self {
            video: record.video_source().map(str::to_string),
            thumbnail: record.thumbnail.clone(),
            // records always carry a title, even an empty one
            title: Some(record.title.clone()),
            play_button_text: record.play_button_text.clone(),
            ..Default::default()
        }
    }
}

impl From<&ContentBlock> for PlayerProps {
    fn from(block: &ContentBlock) -> Self {
        Self {
            video: block.video_source().map(str::to_string),
            thumbnail: block.thumbnail().map(str::to_string),
            title: block.title().map(str::to_string),
            play_button_text: block.play_button_text().map(str::to_string),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThumbnailView {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayButtonView {
    pub label: Option<String>,
    pub aria_label: String,
}

/// What a player renders in its current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub title: String,
    pub placeholder: Option<String>,
    pub thumbnail: Option<ThumbnailView>,
    pub native_src: Option<String>,
    pub iframe_src: Option<String>,
    pub play_button: Option<PlayButtonView>,
}

#[derive(Debug, Clone)]
pub struct MediaPlayer {
    descriptor: MediaDescriptor,
    thumbnail: Option<String>,
    title: String,
    play_button_text: Option<String>,
    show_play_button: bool,
    no_media_text: String,
    state: PlaybackState,
}

impl MediaPlayer {
    pub fn new(props: PlayerProps, config: &Config) -> Self {
        let descriptor = classify_field(props.video.as_deref());
        let state = if props.autoplay.unwrap_or(config.autoplay) {
            PlaybackState::Playing
        } else {
            PlaybackState::ThumbnailShown
        };
        Self {
            descriptor,
            thumbnail: props.thumbnail.filter(|t| !t.is_empty()),
            title: props
                .title
                .unwrap_or_else(|| config.default_title.clone()),
            play_button_text: props.play_button_text.filter(|t| !t.is_empty()),
            show_play_button: props.show_play_button.unwrap_or(config.show_play_button),
            no_media_text: config.no_media_text.clone(),
            state,
        }
    }

    pub fn descriptor(&self) -> &MediaDescriptor {
        &self.descriptor
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Starts playback. Returns whether the state changed: `false` when
    /// already playing or when there is nothing to play.
    pub fn play(&mut self) -> bool {
        if self.state == PlaybackState::Playing || !self.descriptor.is_playable() {
            return false;
        }
        debug!("player {:?} started", self.title);
        self.state = PlaybackState::Playing;
        true
    }

    /// The URL handed to the native or embedded element. Playback always
    /// starts from user intent, so the embed is built with autoplay on.
    pub fn source_url(&self) -> Option<String> {
        self.descriptor.embed_url(true)
    }

    pub fn view(&self) -> PlayerView {
        let has_media = self.descriptor.is_playable();
        let playing = self.state == PlaybackState::Playing;

        if !has_media && self.thumbnail.is_none() {
            return PlayerView {
                title: self.title.clone(),
                placeholder: Some(self.no_media_text.clone()),
                thumbnail: None,
                native_src: None,
                iframe_src: None,
                play_button: None,
            };
        }

        let thumbnail = self
            .thumbnail
            .as_ref()
            .filter(|_| !playing)
            .map(|src| ThumbnailView {
                src: src.clone(),
                alt: if has_media {
                    format!("{} thumbnail", self.title)
                } else {
                    self.title.clone()
                },
            });

        let source = playing.then(|| self.source_url()).flatten();
        let (native_src, iframe_src) = if self.descriptor.is_file() {
            (source, None)
        } else {
            (None, source)
        };

        let play_button = (!playing && self.show_play_button && has_media).then(|| PlayButtonView {
            label: self.play_button_text.clone(),
            aria_label: format!("Play {}", self.title),
        });

        PlayerView {
            title: self.title.clone(),
            placeholder: None,
            thumbnail,
            native_src,
            iframe_src,
            play_button,
        }
    }
}

#[cfg(test)]
mod local_tests {
    use super::*;

    fn props(video: Option<&str>, thumbnail: Option<&str>) -> PlayerProps {
        PlayerProps {
            video: video.map(Into::into),
            thumbnail: thumbnail.map(Into::into),
            title: Some("Night Drive".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_state_follows_autoplay() {
        let config = Config::default();
        let player = MediaPlayer::new(props(Some("https://vimeo.com/1"), None), &config);
        assert_eq!(player.state(), PlaybackState::ThumbnailShown);

        let autoplay = Config {
            autoplay: true,
            ..Default::default()
        };
        let player = MediaPlayer::new(props(Some("https://vimeo.com/1"), None), &autoplay);
        assert_eq!(player.state(), PlaybackState::Playing);

        let overridden = MediaPlayer::new(
            PlayerProps {
                autoplay: Some(false),
                ..props(Some("https://vimeo.com/1"), None)
            },
            &autoplay,
        );
        assert_eq!(overridden.state(), PlaybackState::ThumbnailShown);
    }

    #[test]
    fn test_play_transitions_once() {
        let mut player = MediaPlayer::new(
            props(Some("https://youtu.be/dQw4w9WgXcQ"), None),
            &Config::default(),
        );
        assert!(player.play());
        assert_eq!(player.state(), PlaybackState::Playing);
        assert!(!player.play());
        assert_eq!(player.state(), PlaybackState::Playing);
    }

    #[test]
    fn test_play_without_media_is_noop() {
        let mut player = MediaPlayer::new(props(Some("hello world"), None), &Config::default());
        assert!(!player.play());
        assert_eq!(player.state(), PlaybackState::ThumbnailShown);
    }

    #[test]
    fn test_thumbnail_view_before_play() {
        let player = MediaPlayer::new(
            PlayerProps {
                play_button_text: Some("Watch".into()),
                ..props(Some("https://youtu.be/dQw4w9WgXcQ"), Some("/img/a.jpg"))
            },
            &Config::default(),
        );
        let view = player.view();
        assert_eq!(view.placeholder, None);
        assert_eq!(
            view.thumbnail,
            Some(ThumbnailView {
                src: "/img/a.jpg".into(),
                alt: "Night Drive thumbnail".into()
            })
        );
        assert_eq!(view.iframe_src, None);
        assert_eq!(
            view.play_button,
            Some(PlayButtonView {
                label: Some("Watch".into()),
                aria_label: "Play Night Drive".into()
            })
        );
    }

    #[test]
    fn test_playing_embed_uses_iframe_with_autoplay() {
        let mut player = MediaPlayer::new(
            props(Some("https://youtu.be/dQw4w9WgXcQ"), Some("/img/a.jpg")),
            &Config::default(),
        );
        player.play();
        let view = player.view();
        assert_eq!(view.thumbnail, None);
        assert_eq!(view.play_button, None);
        assert_eq!(view.native_src, None);
        assert_eq!(
            view.iframe_src.as_deref(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&rel=0")
        );
    }

    #[test]
    fn test_playing_file_uses_native_element() {
        let mut player = MediaPlayer::new(props(Some("/videos/a.mp4"), None), &Config::default());
        player.play();
        let view = player.view();
        assert_eq!(view.native_src.as_deref(), Some("/videos/a.mp4"));
        assert_eq!(view.iframe_src, None);
    }

    #[test]
    fn test_no_media_no_thumbnail_is_placeholder() {
        let player = MediaPlayer::new(props(None, None), &Config::default());
        let view = player.view();
        assert_eq!(view.placeholder.as_deref(), Some("No media"));
        assert_eq!(view.play_button, None);
    }

    #[test]
    fn test_no_media_with_thumbnail_shows_image_only() {
        let player = MediaPlayer::new(props(Some(""), Some("/img/a.jpg")), &Config::default());
        let view = player.view();
        assert_eq!(view.placeholder, None);
        assert_eq!(view.thumbnail.unwrap().alt, "Night Drive");
        assert_eq!(view.play_button, None);
    }

    #[test]
    fn test_empty_play_button_text_has_no_label() {
        let player = MediaPlayer::new(
            PlayerProps {
                play_button_text: Some(String::new()),
                ..props(Some("https://vimeo.com/1"), None)
            },
            &Config::default(),
        );
        assert_eq!(player.view().play_button.unwrap().label, None);
    }

    #[test]
    fn test_hidden_play_button() {
        let config = Config {
            show_play_button: false,
            ..Default::default()
        };
        let player = MediaPlayer::new(props(Some("https://vimeo.com/1"), None), &config);
        assert_eq!(player.view().play_button, None);
    }

    #[test]
    fn test_props_from_block_default_title() {
        let block = ContentBlock::HeroVideo {
            video: None,
            video_file: Some("/videos/hero.mp4".into()),
            thumbnail: None,
            play_button_text: None,
            max_height: None,
        };
        let player = MediaPlayer::new(PlayerProps::from(&block), &Config::default());
        assert_eq!(player.view().title, "Video");
        assert!(player.descriptor().is_file());
    }

    #[test]
    fn test_props_from_record_keep_empty_title() {
        let record = MusicVideo {
            thumbnail: Some("/img/uploads/a.jpg".into()),
            video: Some("https://youtu.be/dQw4w9WgXcQ".into()),
            ..Default::default()
        };
        let player = MediaPlayer::new(PlayerProps::from(&record), &Config::default());
        let view = player.view();
        assert_eq!(view.title, "");
        assert_eq!(view.thumbnail.unwrap().alt, " thumbnail");
        assert_eq!(view.play_button.unwrap().aria_label, "Play ");
    }
}
