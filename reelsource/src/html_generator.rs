use lazy_static::lazy_static;
use log::{debug, info};
use serde::Serialize;
use tera::{Context, Tera};

use crate::config::Config;
use crate::error::Result;
use crate::models::{ContentPage, MusicVideo};
use crate::player::{MediaPlayer, PlayerProps};

lazy_static! {
    pub static ref TEMPLATES: Tera = {
        let mut tera = Tera::default();
        tera.add_raw_template("player.html", include_str!("../templates/player.html"))
            .unwrap();
        tera.add_raw_template("page.html", include_str!("../templates/page.html"))
            .unwrap();
        // templates escape text fields themselves; rendered players are
        // embedded into the page verbatim
        tera.autoescape_on(Vec::new());
        tera
    };
}

#[derive(Debug, Serialize)]
struct SectionView {
    player_html: String,
    heading: Option<String>,
    subheading: Option<String>,
    lines: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct HtmlGenerator {
    config: Config,
}

impl HtmlGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn player(&self, props: PlayerProps) -> MediaPlayer {
        MediaPlayer::new(props, &self.config)
    }

    pub fn render_player(&self, player: &MediaPlayer) -> Result<String> {
        let mut context = Context::new();
        context.insert("view", &player.view());
        let html = TEMPLATES.render("player.html", &context)?;
        debug!(
            "Rendered {} player in state {:?}",
            player.descriptor().kind(),
            player.state()
        );
        Ok(html)
    }

    /// Renders a music-video listing: one player per record, in the given order.
    pub fn render_music_video_page(&self, title: &str, records: &[MusicVideo]) -> Result<String> {
        info!("Generating page for {} music videos", records.len());
        let sections = records
            .iter()
            .map(|record| {
                let player = self.player(PlayerProps::from(record));
                Ok(SectionView {
                    player_html: self.render_player(&player)?,
                    heading: Some(record.title.clone()).filter(|t| !t.is_empty()),
                    subheading: record.artist.clone().filter(|a| !a.is_empty()),
                    lines: record.credits.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        self.render_page(title, &sections)
    }

    /// Renders the media blocks of a content page; other blocks are skipped.
    pub fn render_content_page(&self, page: &ContentPage) -> Result<String> {
        let title = page.title.as_deref().unwrap_or(&self.config.default_title);
        info!("Generating page {title:?} from {} blocks", page.blocks.len());
        let sections = page
            .blocks
            .iter()
            .filter(|block| block.has_media_slot())
            .map(|block| {
                let player = self.player(PlayerProps::from(block));
                // a video block's caption doubles as its player title
                let caption = block.title().map(str::to_string);
                Ok(SectionView {
                    player_html: self.render_player(&player)?,
                    heading: None,
                    subheading: None,
                    lines: caption.into_iter().collect(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        self.render_page(title, &sections)
    }

    fn render_page(&self, title: &str, sections: &[SectionView]) -> Result<String> {
        let mut context = Context::new();
        context.insert("title", title);
        context.insert("sections", sections);
        let html = TEMPLATES.render("page.html", &context)?;
        info!("Successfully generated page");
        Ok(html)
    }
}

#[cfg(test)]
mod local_tests {
    use std::path::Path;

    use super::*;
    use crate::content::{load_content_page, load_music_videos};

    fn generator() -> HtmlGenerator {
        HtmlGenerator::new(Config::default())
    }

    fn props(video: &str) -> PlayerProps {
        PlayerProps {
            video: Some(video.into()),
            thumbnail: Some("/img/uploads/a.jpg".into()),
            title: Some("Night <Drive>".into()),
            play_button_text: Some("Watch".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_thumbnail_state() {
        let g = generator();
        let html = g
            .render_player(&g.player(props("https://youtu.be/dQw4w9WgXcQ")))
            .unwrap();
        assert!(html.contains(r#"src="/img/uploads/a.jpg""#));
        assert!(html.contains("Night &lt;Drive&gt; thumbnail"));
        assert!(html.contains(r#"class="player-play""#));
        assert!(html.contains(">Watch</span>"));
        assert!(!html.contains("<iframe"));
        assert!(!html.contains("<video"));
    }

    #[test]
    fn test_render_playing_embed() {
        let g = generator();
        let mut player = g.player(props("https://player.vimeo.com/video/123456789?h=abc123"));
        player.play();
        let html = g.render_player(&player).unwrap();
        assert!(html.contains(
            r#"<iframe class="player-embed" src="https://player.vimeo.com/video/123456789?h=abc123&autoplay=1&title=0&byline=0&portrait=0""#
        ));
        assert!(!html.contains("player-thumbnail"));
        assert!(!html.contains("player-play"));
    }

    #[test]
    fn test_render_playing_file() {
        let g = generator();
        let mut player = g.player(props("/videos/uploads/skate.mp4"));
        player.play();
        let html = g.render_player(&player).unwrap();
        assert!(html.contains(r#"<video class="player-video" src="/videos/uploads/skate.mp4""#));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn test_render_placeholder() {
        let g = generator();
        let html = g.render_player(&g.player(PlayerProps::default())).unwrap();
        assert!(html.contains(r#"<div class="player-placeholder">No media</div>"#));
    }

    #[test]
    fn test_render_music_video_page() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/music_video");
        let records = load_music_videos(&dir).unwrap();
        let html = generator()
            .render_music_video_page("Music Video", &records)
            .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert_eq!(html.matches(r#"<section class="project">"#).count(), 4);
        assert!(html.contains("<h2>Night Drive</h2>"));
        assert!(html.contains("<h3>The Ferns</h3>"));
        assert!(html.contains("<p>Director: Ada Lee</p>"));
        // records in ascending `order`
        let first = html.find("Night Drive").unwrap();
        let last = html.find("Untitled Demo").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_render_content_page() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/pages/film.json");
        let page = load_content_page(&path).unwrap();
        let html = generator().render_content_page(&page).unwrap();
        assert!(html.contains("<title>Harbour Lights</title>"));
        assert_eq!(html.matches(r#"<section class="project">"#).count(), 2);
        assert!(html.contains("<p>Behind the scenes</p>"));
        assert!(html.contains(r#"aria-label="Play Behind the scenes""#));
        assert!(html.contains(r#"aria-label="Play Video""#));
    }
}
