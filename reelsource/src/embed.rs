use crate::models::MediaDescriptor;

pub const VIMEO_PLAYER_BASE: &str = "https://player.vimeo.com/video";
pub const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed";

/// Builds the final playable URL for a descriptor.
///
/// Returns `None` only for `Unrecognized`. `File` urls come back unchanged and
/// are meant for a native video element; everything else is an iframe source.
pub fn build_embed_url(descriptor: &MediaDescriptor, autoplay: bool) -> Option<String> {
    let autoplay_param = u8::from(autoplay);

    match descriptor {
        MediaDescriptor::File { url } => Some(url.clone()),
        MediaDescriptor::Vimeo { id, access_hash } => {
            let hash_param = access_hash
                .as_deref()
                .map(|hash| format!("h={hash}&"))
                .unwrap_or_default();
            Some(format!(
                "{VIMEO_PLAYER_BASE}/{id}?{hash_param}autoplay={autoplay_param}&title=0&byline=0&portrait=0"
            ))
        }
        MediaDescriptor::YouTube { id } => Some(format!(
            "{YOUTUBE_EMBED_BASE}/{id}?autoplay={autoplay_param}&rel=0"
        )),
        MediaDescriptor::GenericEmbed { url } => {
            // any existing autoplay token, whatever its value, is left alone
            if autoplay && !url.contains("autoplay") {
                let separator = if url.contains('?') { '&' } else { '?' };
                Some(format!("{url}{separator}autoplay=1"))
            } else {
                Some(url.clone())
            }
        }
        MediaDescriptor::Unrecognized => None,
    }
}
