mod args;

use std::fs;
use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

use args::{Args, Command};
use reelsource::config::Config;
use reelsource::content::{load_content_page, load_music_videos, resolve_music_videos};
use reelsource::html_generator::HtmlGenerator;
use reelsource::markdown::markdown_to_html;
use reelsource::player::PlayerProps;
use reelsource::{build_embed_url, classify};

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = init_logger(args.verbose) {
        eprintln!("failed to initialise logging: {e}");
    }
    match start(args) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Outcome of a subcommand that ran without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Done,
    NoMedia,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Done => ExitCode::SUCCESS,
            Status::NoMedia => ExitCode::FAILURE,
        }
    }
}

fn start(args: Args) -> Result<ExitCode> {
    let config = Config::load(args.config.as_deref())?;
    let mut out = std::io::stdout().lock();
    Ok(run(args.command, config, &mut out)?.into())
}

fn run(command: Command, config: Config, out: &mut impl Write) -> Result<Status> {
    match command {
        Command::Classify { source } => {
            let descriptor = classify(&source);
            writeln!(out, "{}", serde_json::to_string_pretty(&descriptor)?)?;
        }
        Command::Embed {
            source,
            no_autoplay,
        } => {
            let descriptor = classify(&source);
            match build_embed_url(&descriptor, !no_autoplay) {
                Some(url) => writeln!(out, "{url}")?,
                None => {
                    warn!("no playable media in {source:?}");
                    return Ok(Status::NoMedia);
                }
            }
        }
        Command::Render {
            source,
            thumbnail,
            title,
            play_button_text,
            autoplay,
            no_play_button,
        } => {
            let generator = HtmlGenerator::new(config);
            let player = generator.player(PlayerProps {
                video: Some(source),
                thumbnail,
                title,
                play_button_text,
                autoplay: autoplay.then_some(true),
                show_play_button: no_play_button.then_some(false),
            });
            writeln!(out, "{}", generator.render_player(&player)?)?;
        }
        Command::Scan { directory, json } => {
            let records = load_music_videos(&directory)?;
            let entries = resolve_music_videos(&records);
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
            } else {
                for entry in &entries {
                    writeln!(
                        out,
                        "{}\t{}\t{}",
                        entry.label,
                        entry.descriptor.kind(),
                        entry.embed_url.as_deref().unwrap_or("-")
                    )?;
                }
            }
            let unplayable = entries
                .iter()
                .filter(|e| !e.descriptor.is_playable())
                .count();
            info!(
                "Scanned {} records, {unplayable} without playable media",
                entries.len()
            );
        }
        Command::Page { path, title } => {
            let generator = HtmlGenerator::new(config);
            let html = if path.is_dir() {
                let records = load_music_videos(&path)?;
                generator.render_music_video_page(&title, &records)?
            } else {
                let page = load_content_page(&path)?;
                generator.render_content_page(&page)?
            };
            writeln!(out, "{html}")?;
        }
        Command::Preview { file } => {
            let md = fs::read_to_string(&file)?;
            writeln!(out, "{}", markdown_to_html(&md))?;
        }
    }

    Ok(Status::Done)
}

fn init_logger(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    // the library logs through `log`; forward those records to the subscriber
    LogTracer::init()?;
    Ok(())
}
