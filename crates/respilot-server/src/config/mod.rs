//! Server config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use respilot_core::error::{PilotError, Result};

pub use schema::{PilotConfig, ServerSection};

pub fn load_from_file(path: &str) -> Result<PilotConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| PilotError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<PilotConfig> {
    let cfg: PilotConfig = serde_yaml::from_str(s)
        .map_err(|e| PilotError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load the config file if present, falling back to built-in defaults when
/// it is absent. A file that exists but fails to parse or validate is still
/// an error.
pub fn load_or_default(path: &str) -> Result<PilotConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(PilotConfig::default()),
        Err(e) => Err(PilotError::Internal(format!("read config failed: {e}"))),
    }
}
