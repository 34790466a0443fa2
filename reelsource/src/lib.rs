pub mod classifier;
pub mod config;
pub mod content;
pub mod embed;
pub mod error;
pub mod html_generator;
pub mod markdown;
pub mod models;
pub mod player;

pub use classifier::{classify, classify_field};
pub use embed::build_embed_url;
pub use models::{MediaDescriptor, MediaKind};
