use std::env;
use std::error::Error;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::LOG_ENV;

/// Sends tracing output to a file. The terminal belongs to the editor, so
/// nothing is installed when neither `path` nor `PIPE_EDITOR_LOG` is set.
pub fn init_logging(path: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    install(path.or_else(|| env::var_os(LOG_ENV).map(PathBuf::from)))
}

fn install(path: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| -> Box<dyn Error> { err })?;
    Ok(())
}
