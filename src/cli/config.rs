//! Runtime configuration.
//!
//! Capacities are compile-time constants (see the parent module); everything
//! that only changes how the interpreter talks to the terminal lives in
//! [`Config`]. A configuration can be stored as JSON, e.g. in a flash
//! parameter block, and loaded with [`Config::from_json`]:
//!
//! ```rust
//! use libcli::cli::{Config, OverflowPolicy};
//!
//! let config = Config::from_json(br#"{"prompt":"$ ","echo":false,"overflow":"keep"}"#).unwrap();
//! assert_eq!(config.prompt, "$ ");
//! assert!(!config.echo);
//! assert_eq!(config.overflow, OverflowPolicy::Keep);
//! // Fields missing from the document keep their defaults.
//! assert!(config.color);
//! ```

use heapless::String;
use serde::{Deserialize, Serialize};

use super::error::Error;

/// Maximum length of the prompt string.
pub const MAX_PROMPT_LEN: usize = 16;

/// Maximum length of the start-up banner.
pub const MAX_BANNER_LEN: usize = 96;

const DEFAULT_PROMPT: &str = "> ";
const DEFAULT_BANNER: &str = "CLI was started - enter your commands (or enter 'help')";

/// What to do with input that arrives while the line buffer is full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Drop the whole line and re-prompt.
    Reset,
    /// Keep the line and reject only the byte.
    Keep,
}

/// Terminal behaviour of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Written after every processed line.
    pub prompt: String<MAX_PROMPT_LEN>,
    /// Written once by `init`, before the first prompt.
    pub banner: Option<String<MAX_BANNER_LEN>>,
    /// Echo received bytes back to the terminal.
    pub echo: bool,
    /// Use ANSI colours for status tags.
    pub color: bool,
    /// Write an `[OK]`/`[FAIL]` tag after every command.
    pub report_status: bool,
    /// Clear the screen on `init`.
    pub clear_on_init: bool,
    /// Full line buffer handling.
    pub overflow: OverflowPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: String::try_from(DEFAULT_PROMPT).unwrap_or_default(),
            banner: String::try_from(DEFAULT_BANNER).ok(),
            echo: true,
            color: true,
            report_status: false,
            clear_on_init: true,
            overflow: OverflowPolicy::Reset,
        }
    }
}

impl Config {
    /// Replace the prompt.
    ///
    /// # Errors
    ///
    /// * [`Error::ValueTooLong`] - longer than [`MAX_PROMPT_LEN`]
    pub fn set_prompt(&mut self, prompt: &str) -> Result<(), Error> {
        self.prompt = String::try_from(prompt).map_err(|_| Error::ValueTooLong)?;
        Ok(())
    }

    /// Replace the banner, or remove it with `None`.
    ///
    /// # Errors
    ///
    /// * [`Error::ValueTooLong`] - longer than [`MAX_BANNER_LEN`]
    pub fn set_banner(&mut self, banner: Option<&str>) -> Result<(), Error> {
        self.banner = match banner {
            Some(text) => Some(String::try_from(text).map_err(|_| Error::ValueTooLong)?),
            None => None,
        };
        Ok(())
    }

    /// Parse a JSON document.
    ///
    /// # Errors
    ///
    /// * [`Error::ConfigParse`] - malformed JSON, unknown enum value, or a
    ///   string that does not fit its field
    pub fn from_json(json: &[u8]) -> Result<Self, Error> {
        let (config, _) = serde_json_core::from_slice::<Config>(json).map_err(|_| {
            warn!("config parse failed");
            Error::ConfigParse
        })?;
        Ok(config)
    }

    /// Serialize to JSON.
    ///
    /// # Errors
    ///
    /// * [`Error::ConfigSerialize`] - the document does not fit in `N` bytes
    pub fn to_json<const N: usize>(&self) -> Result<String<N>, Error> {
        serde_json_core::to_string::<_, N>(self).map_err(|_| Error::ConfigSerialize)
    }
}
