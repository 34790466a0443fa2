use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// location of config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// log at debug level regardless of RUST_LOG
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the media descriptor of a source as JSON
    Classify { source: String },

    /// Print the playable URL of a source
    Embed {
        source: String,
        #[arg(long)]
        no_autoplay: bool,
    },

    /// Print the player markup for a source
    Render {
        source: String,
        #[arg(long)]
        thumbnail: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        play_button_text: Option<String>,
        /// render in the playing state
        #[arg(long)]
        autoplay: bool,
        #[arg(long)]
        no_play_button: bool,
    },

    /// Resolve the media of every music video record in a directory
    Scan {
        directory: PathBuf,
        /// print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render a page from a music video directory or a content page file
    Page {
        path: PathBuf,
        /// page heading for music video listings
        #[arg(long, default_value = "Music Video")]
        title: String,
    },

    /// Convert a markdown file to preview HTML
    Preview { file: PathBuf },
}
