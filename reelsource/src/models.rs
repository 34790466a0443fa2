pub mod content;
pub mod descriptor;

pub use content::{ContentBlock, ContentPage, MusicVideo, pick_video_source};
pub use descriptor::{MediaDescriptor, MediaKind};
