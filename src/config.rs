use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

use crate::html::map::MAX_MAP_ZOOM;

#[derive(Debug, Clone)]
pub struct Config {
    pub campus_file: Option<PathBuf>,
    pub map_zoom: u8,
    pub voice_enabled: bool,
    pub voice_rate: u32,
    pub voice_command: Option<String>,
    pub service_port: u16,
    pub service_host: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            campus_file: None,
            map_zoom: 18,
            voice_enabled: true,
            voice_rate: 160,
            voice_command: None,
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let campus_file = lookup("CAMPUS_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let map_zoom = lookup("MAP_ZOOM")
            .unwrap_or_else(|| "18".to_string())
            .parse::<u8>()
            .ok()
            .filter(|zoom| *zoom <= MAX_MAP_ZOOM)
            .with_context(|| format!("MAP_ZOOM must be a zoom level (0-{})", MAX_MAP_ZOOM))?;

        let voice_enabled = match lookup("VOICE_ENABLED") {
            None => true,
            Some(value) => parse_flag(&value)
                .with_context(|| format!("VOICE_ENABLED must be true or false, got '{}'", value))?,
        };

        let voice_rate = lookup("VOICE_RATE")
            .unwrap_or_else(|| "160".to_string())
            .parse::<u32>()
            .context("VOICE_RATE must be a positive number of words per minute")?;

        let voice_command = lookup("VOICE_COMMAND")
            .map(|command| command.trim().to_string())
            .filter(|command| !command.is_empty());

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        Ok(Config {
            campus_file,
            map_zoom,
            voice_enabled,
            voice_rate,
            voice_command,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Campus: {}",
            self.campus_file
                .as_deref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "built-in".to_string()));
        tracing::info!("  Map zoom: {}", self.map_zoom);
        tracing::info!("  Voice: {} (rate {}, command: {})",
            if self.voice_enabled { "enabled" } else { "disabled" },
            self.voice_rate,
            self.voice_command.as_deref().unwrap_or("none, logging only"));
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
