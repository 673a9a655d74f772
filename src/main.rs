use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use unbackground::{
    default_ids, BatchConfig, BatchRunner, BorderKeyRemover, ResourceId, DEFAULT_BACKUP_DIR,
    DEFAULT_FILE_STEM,
};

/// Back up and batch-remove the background of a fixed set of PNG assets.
#[derive(Parser)]
#[command(name = "unbackground", version)]
struct Cli {
    /// Directory holding the live asset files
    assets_dir: PathBuf,

    /// Resource numbers to process (defaults to 1 through 7)
    #[arg(long, value_delimiter = ',')]
    ids: Option<Vec<u32>>,

    /// Filename stem; files are named {stem}-{id}.png
    #[arg(long, default_value = DEFAULT_FILE_STEM)]
    stem: String,

    /// Name of the backup subdirectory under the assets directory
    #[arg(long, default_value = DEFAULT_BACKUP_DIR)]
    backup_dir: String,

    /// Background color distance threshold (0..=441)
    #[arg(long, default_value_t = 60.0)]
    threshold: f32,

    /// Mask feathering radius in pixels; 0 disables feathering
    #[arg(long, default_value_t = 1)]
    feather: u32,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(verbose >= 2)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    anyhow::ensure!(
        cli.assets_dir.is_dir(),
        "assets directory {} does not exist",
        cli.assets_dir.display()
    );

    let mut config = BatchConfig::new(&cli.assets_dir);
    config.file_stem = cli.stem;
    config.backup_dir_name = cli.backup_dir;

    let remover = BorderKeyRemover {
        threshold: cli.threshold,
        feather_radius: cli.feather,
    };

    let runner = BatchRunner::new(config, remover);
    match cli.ids {
        Some(ids) => runner.run(ids.into_iter().map(ResourceId)),
        None => runner.run(default_ids()),
    }

    // Per-file failures are reported as they happen and never change the
    // exit code; only a bad invocation fails the process.
    Ok(())
}
