use log::{debug, error};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::MediaDescriptor;

pub static FILE_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(mp4|webm|ogg|mov)(\?.*)?$")
        .map_err(|e| error!("Regex init failed: {e}"))
        .unwrap()
});
pub static VIMEO_PLAYER_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"player\.vimeo\.com/video/([0-9]+)(?:.*h=([a-zA-Z0-9]+))?")
        .map_err(|e| error!("Regex init failed: {e}"))
        .unwrap()
});
pub static YOUTUBE_EMBED_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"youtube\.com/embed/([a-zA-Z0-9_-]{11})(?:[^a-zA-Z0-9_-]|$)")
        .map_err(|e| error!("Regex init failed: {e}"))
        .unwrap()
});
pub static VIMEO_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"vimeo\.com/([0-9]+)(?:/([a-zA-Z0-9]+))?")
        .map_err(|e| error!("Regex init failed: {e}"))
        .unwrap()
});
pub static YOUTUBE_WATCH_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"youtube\.com/watch\?v=([a-zA-Z0-9_-]{11})(?:[^a-zA-Z0-9_-]|$)")
        .map_err(|e| error!("Regex init failed: {e}"))
        .unwrap()
});
pub static YOUTUBE_SHORT_EXPR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"youtu\.be/([a-zA-Z0-9_-]{11})(?:[^a-zA-Z0-9_-]|$)")
        .map_err(|e| error!("Regex init failed: {e}"))
        .unwrap()
});

const VIMEO_PLAYER_MARKER: &str = "player.vimeo.com/video/";
const YOUTUBE_EMBED_MARKER: &str = "youtube.com/embed/";

/// Classifies a nullable content field. `None` means "no media".
pub fn classify_field(source: Option<&str>) -> MediaDescriptor {
    source.map(classify).unwrap_or(MediaDescriptor::Unrecognized)
}

/// Maps an arbitrary file path or URL to a [`MediaDescriptor`].
///
/// Rules are tried in order and the first match wins, because the patterns
/// overlap (a Vimeo player URL also contains `vimeo.com/`). Never fails: the
/// worst case is `GenericEmbed` for an unparsable provider URL, or
/// `Unrecognized` for anything that is neither a path nor a web URL.
pub fn classify(source: &str) -> MediaDescriptor {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return MediaDescriptor::Unrecognized;
    }

    let descriptor = classify_file(trimmed)
        .or_else(|| classify_vimeo_player(trimmed))
        .or_else(|| classify_youtube_embed(trimmed))
        .or_else(|| classify_vimeo_watch(trimmed))
        .or_else(|| youtube_id(&YOUTUBE_WATCH_EXPR, trimmed))
        .or_else(|| youtube_id(&YOUTUBE_SHORT_EXPR, trimmed))
        .or_else(|| classify_generic(trimmed))
        .unwrap_or(MediaDescriptor::Unrecognized);

    debug!("classified {trimmed:?} as {}", descriptor.kind());
    descriptor
}

fn classify_file(trimmed: &str) -> Option<MediaDescriptor> {
    (trimmed.starts_with('/') || FILE_EXPR.is_match(trimmed)).then(|| MediaDescriptor::File {
        url: trimmed.to_string(),
    })
}

fn classify_vimeo_player(trimmed: &str) -> Option<MediaDescriptor> {
    if !trimmed.contains(VIMEO_PLAYER_MARKER) {
        return None;
    }
    Some(vimeo_id(&VIMEO_PLAYER_EXPR, trimmed).unwrap_or_else(|| generic(trimmed)))
}

fn classify_youtube_embed(trimmed: &str) -> Option<MediaDescriptor> {
    if !trimmed.contains(YOUTUBE_EMBED_MARKER) {
        return None;
    }
    Some(youtube_id(&YOUTUBE_EMBED_EXPR, trimmed).unwrap_or_else(|| generic(trimmed)))
}

fn classify_vimeo_watch(trimmed: &str) -> Option<MediaDescriptor> {
    vimeo_id(&VIMEO_EXPR, trimmed)
}

fn classify_generic(trimmed: &str) -> Option<MediaDescriptor> {
    trimmed.starts_with("http").then(|| generic(trimmed))
}

fn vimeo_id(expr: &Regex, trimmed: &str) -> Option<MediaDescriptor> {
    let caps = expr.captures(trimmed)?;
    Some(MediaDescriptor::Vimeo {
        id: caps.get(1)?.as_str().to_string(),
        access_hash: caps.get(2).map(|m| m.as_str().to_string()),
    })
}

fn youtube_id(expr: &Regex, trimmed: &str) -> Option<MediaDescriptor> {
    let caps = expr.captures(trimmed)?;
    Some(MediaDescriptor::YouTube {
        id: caps.get(1)?.as_str().to_string(),
    })
}

fn generic(trimmed: &str) -> MediaDescriptor {
    MediaDescriptor::GenericEmbed {
        url: trimmed.to_string(),
    }
}
