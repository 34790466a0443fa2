use std::fs;
use std::path::Path;

use itertools::Itertools;
use log::{debug, info, warn};
use serde::Serialize;
use walkdir::WalkDir;

use crate::classifier::classify_field;
use crate::error::{Context, Result};
use crate::models::{ContentPage, MediaDescriptor, MusicVideo};

/// A content record's media reference, resolved for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEntry {
    pub label: String,
    pub source: Option<String>,
    pub descriptor: MediaDescriptor,
    pub embed_url: Option<String>,
}

impl MediaEntry {
    pub fn resolve(label: impl Into<String>, source: Option<&str>) -> Self {
        let descriptor = classify_field(source);
        let embed_url = descriptor.embed_url(true);
        Self {
            label: label.into(),
            source: source.map(str::to_string),
            descriptor,
            embed_url,
        }
    }
}

/// Reads every `*.json` music-video record under `dir`, ordered by `order`.
///
/// Files that fail to parse are skipped with a warning so one bad record does
/// not hide the rest of the collection.
pub fn load_music_videos(dir: &Path) -> Result<Vec<MusicVideo>> {
    info!("Loading music video records from {}", dir.display());
    let mut records = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "json") {
            continue;
        }
        let content = fs::read_to_string(path).context("reading music video record")?;
        match serde_json::from_str::<MusicVideo>(&content) {
            Ok(record) => {
                debug!("Loaded {:?} from {}", record.title, path.display());
                records.push(record);
            }
            Err(e) => warn!("Skipping {}: {e}", path.display()),
        }
    }
    info!("Loaded {} music video records", records.len());
    Ok(records.into_iter().sorted_by_key(|r| r.order).collect())
}

pub fn load_content_page(path: &Path) -> Result<ContentPage> {
    let content = fs::read_to_string(path).context("reading content page")?;
    let page: ContentPage = serde_json::from_str(&content).context("parsing content page")?;
    debug!(
        "Loaded page {:?} with {} blocks",
        page.title,
        page.blocks.len()
    );
    Ok(page)
}

pub fn resolve_music_videos(records: &[MusicVideo]) -> Vec<MediaEntry> {
    records
        .iter()
        .map(|r| MediaEntry::resolve(r.title.as_str(), r.video_source()))
        .collect()
}

/// Resolves the media blocks of a page; blocks without a media slot are skipped.
pub fn resolve_page(page: &ContentPage) -> Vec<MediaEntry> {
    page.blocks
        .iter()
        .enumerate()
        .filter(|(_, block)| block.has_media_slot())
        .map(|(i, block)| {
            let label = block
                .title()
                .map(str::to_string)
                .unwrap_or_else(|| format!("block {i}"));
            MediaEntry::resolve(label, block.video_source())
        })
        .collect()
}
