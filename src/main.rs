use anyhow::Result;
use clap::Parser;
use cue_scanner::library::{LoftyTagReader, NoTagReader, TagReader};
use cue_scanner::model::{Library, ScannedItem};
use cue_scanner::{ScanConfig, ScanPipeline};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cue-scanner")]
#[command(about = "List the tracks described by CUE sheets", long_about = None)]
struct Args {
    /// A .cue file, an audio file with an embedded cue sheet, or a directory
    path: String,

    /// Separator between values of multi-valued fields
    #[arg(short = 's', long, default_value = cue_scanner::DEFAULT_ITEM_SEPARATOR)]
    separator: String,

    /// Don't read audio tags (sheet metadata only)
    #[arg(long)]
    no_tags: bool,

    /// Skip cue sheets embedded in audio tags
    #[arg(long)]
    no_embedded: bool,

    /// Only scan the top-level directory
    #[arg(long)]
    no_recursive: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let root = PathBuf::from(shellexpand::tilde(&args.path).as_ref());

    let mut config = ScanConfig::new(root)
        .with_separator(args.separator.clone())
        .with_recursive(!args.no_recursive);

    // Embedded sheets live in tags, so they need a real reader
    if args.no_tags {
        if !args.no_embedded {
            log::info!("Tag reading disabled - embedded cue sheets will be skipped");
        }
        config = config.with_embedded_sheets(false);
        run(ScanPipeline::new(config, NoTagReader))
    } else {
        config = config.with_embedded_sheets(!args.no_embedded);
        let reader = LoftyTagReader::new().with_separator(args.separator);
        run(ScanPipeline::new(config, reader))
    }
}

fn run<R: TagReader + Sync>(pipeline: ScanPipeline<R>) -> Result<()> {
    let library = pipeline.scan()?;
    print_library(&library);
    Ok(())
}

fn print_library(library: &Library) {
    for item in library.items() {
        println!("{}", format_item(item));
    }

    println!(
        "{} track(s) from {} sheet(s)",
        library.item_count(),
        library.sheet_count()
    );
    for failed in library.failed_sheets() {
        println!("failed: {}", failed.display());
    }
}

fn format_item(item: &ScannedItem) -> String {
    let track = item.track();
    let end = if track.is_open_ended() {
        "end".to_string()
    } else {
        format_offset(track.end_offset_ms)
    };

    format!(
        "[{:?}] {}.{:02} {} - {} ({} -> {}, {}s) {}",
        item.source(),
        track.disc_number(),
        track.track_in_disc(),
        item.artist(),
        item.title(),
        format_offset(track.start_offset_ms),
        end,
        track.duration_secs,
        item.file_path().display()
    )
}

/// `mm:ss.mmm`
fn format_offset(ms: u64) -> String {
    format!("{:02}:{:02}.{:03}", ms / 60_000, (ms / 1000) % 60, ms % 1000)
}
