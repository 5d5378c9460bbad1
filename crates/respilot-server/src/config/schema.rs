use std::net::SocketAddr;

use serde::Deserialize;

use respilot_core::error::{PilotError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PilotConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl PilotConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(PilotError::BadRequest("version must be 1".into()));
        }
        self.server.validate()
    }
}

impl Default for PilotConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen.parse::<SocketAddr>().map_err(|e| {
            PilotError::BadRequest(format!("server.listen must be a valid socket address: {e}"))
        })?;
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
