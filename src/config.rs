//! Command-line and environment configuration

use crate::source::SerialSettings;
use crate::table::RenderOptions;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("block width must be at least 1")]
    ZeroBlockWidth,

    #[error("poll interval must be at least 1 ms")]
    ZeroPollInterval,

    #[error("baud rate must be greater than zero")]
    ZeroBaudRate,

    #[error("serial port path cannot be empty")]
    EmptyPort,
}

/// Live view of the latest data per CAN frame identifier
#[derive(Debug, Clone, Parser)]
#[command(name = "canspy", version, about)]
pub struct Config {
    /// Serial device of the CAN bridge
    #[arg(short, long, env = "CANSPY_PORT", default_value = "/dev/ttyUSB0")]
    pub port: String,

    /// Serial baud rate
    #[arg(short, long, env = "CANSPY_BAUD", default_value_t = 115_200)]
    pub baud: u32,

    /// Replay a captured bridge log instead of opening the serial port
    #[arg(short, long, value_name = "FILE")]
    pub replay: Option<PathBuf>,

    /// Bytes per row reserved in the hex column
    #[arg(long, default_value_t = 8)]
    pub block_width: usize,

    /// Highest code point drawn as-is in the text column (decimal or 0x-prefixed hex)
    #[arg(long, default_value = "0xFFFF", value_parser = parse_code_point)]
    pub max_code_point: u32,

    /// Delay between polls, in milliseconds
    #[arg(long, default_value_t = 10)]
    pub poll_interval_ms: u64,

    /// Time allowed for a started line to arrive completely, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub read_timeout_ms: u64,

    /// Log file (the terminal is taken by the table view)
    #[arg(long, env = "CANSPY_LOG_FILE", default_value = "canspy.log")]
    pub log_file: PathBuf,

    /// Log level, overridden by RUST_LOG
    #[arg(long, env = "CANSPY_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_width == 0 {
            return Err(ConfigError::ZeroBlockWidth);
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        if self.replay.is_none() {
            if self.baud == 0 {
                return Err(ConfigError::ZeroBaudRate);
            }
            if self.port.trim().is_empty() {
                return Err(ConfigError::EmptyPort);
            }
        }
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            block_width: self.block_width,
            max_code_point: self.max_code_point,
        }
    }

    pub fn serial_settings(&self) -> SerialSettings {
        SerialSettings {
            path: self.port.clone(),
            baud_rate: self.baud,
            read_timeout: Duration::from_millis(self.read_timeout_ms),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

fn parse_code_point(s: &str) -> Result<u32, String> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex_digits) => u32::from_str_radix(hex_digits, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid code point '{}': {}", s, e))
}
