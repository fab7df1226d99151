use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use pipe_editor::{app, validate_dimensions, INITIAL_GRID_HEIGHT, INITIAL_GRID_WIDTH};

/// Terminal pipe-puzzle board editor.
#[derive(Parser)]
#[command(name = "pipe-editor", version)]
struct Cli {
    /// Number of columns (3-10).
    #[arg(long, default_value_t = INITIAL_GRID_WIDTH.to_string())]
    width: String,
    /// Number of rows (3-10).
    #[arg(long, default_value_t = INITIAL_GRID_HEIGHT.to_string())]
    height: String,
    /// Append logs to this file; falls back to $PIPE_EDITOR_LOG.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let (width, height) = validate_dimensions(&cli.width, &cli.height)
        .map_err(|err| format!("invalid {}: {}", err.field(), err))?;
    app::init_logging(cli.log_file)?;
    app::run(width, height)
}
