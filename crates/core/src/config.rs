//! Runtime configuration.
//!
//! Values come from the environment (a `.env` file is honoured) and can be
//! overridden programmatically through [`ConfigBuilder`], which is how the
//! command line flags are applied on top.

use crate::canvas::clamp_zoom;
use crate::error::{AppError, Result};
use crate::region_capture::DEFAULT_CAPTURE_DELAY;
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

const ENV_CAPTURE_DELAY: &str = "EZ_PASTER_CAPTURE_DELAY_MS";
const ENV_ZOOM: &str = "EZ_PASTER_ZOOM";
const ENV_GLOBAL_HOTKEY: &str = "EZ_PASTER_GLOBAL_HOTKEY";

/// Upper bound for the post-hide delay; anything longer is a typo.
const MAX_CAPTURE_DELAY: Duration = Duration::from_secs(5);

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Time between hiding the main window and sampling the screen.
    pub capture_delay: Duration,
    /// Zoom applied to the first draft and to new drafts.
    pub initial_zoom: f32,
    /// Listen for the capture hotkey outside the application window.
    pub global_hotkey: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capture_delay: DEFAULT_CAPTURE_DELAY,
            initial_zoom: 1.0,
            global_hotkey: false,
        }
    }
}

impl Config {
    /// Starts a builder from default values.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Step-wise construction of a [`Config`] with validation in [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    capture_delay: Option<Duration>,
    initial_zoom: Option<f32>,
    global_hotkey: Option<bool>,
}

impl ConfigBuilder {
    /// Reads the `EZ_PASTER_*` variables, loading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists, ignore if it doesn't
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds from an arbitrary key lookup. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut builder = Self::default();

        if let Some(raw) = lookup(ENV_CAPTURE_DELAY) {
            let ms: u64 = raw.trim().parse().map_err(|_| {
                AppError::config(format!("{ENV_CAPTURE_DELAY} must be milliseconds, got {raw:?}"))
            })?;
            builder = builder.capture_delay(Duration::from_millis(ms));
        }

        if let Some(raw) = lookup(ENV_ZOOM) {
            let zoom: f32 = raw
                .trim()
                .parse()
                .map_err(|_| AppError::config(format!("{ENV_ZOOM} must be a number, got {raw:?}")))?;
            builder = builder.initial_zoom(zoom);
        }

        if let Some(raw) = lookup(ENV_GLOBAL_HOTKEY) {
            builder = builder.global_hotkey(parse_flag(ENV_GLOBAL_HOTKEY, &raw)?);
        }

        Ok(builder)
    }

    pub fn capture_delay(mut self, delay: Duration) -> Self {
        self.capture_delay = Some(delay);
        self
    }

    pub fn initial_zoom(mut self, zoom: f32) -> Self {
        self.initial_zoom = Some(zoom);
        self
    }

    pub fn global_hotkey(mut self, enabled: bool) -> Self {
        self.global_hotkey = Some(enabled);
        self
    }

    /// Validates and produces the final configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] if the delay exceeds five seconds or the
    /// zoom is not a positive finite number. A valid zoom outside the canvas
    /// range is clamped rather than rejected.
    pub fn build(self) -> Result<Config> {
        let defaults = Config::default();

        let capture_delay = self.capture_delay.unwrap_or(defaults.capture_delay);
        if capture_delay > MAX_CAPTURE_DELAY {
            return Err(AppError::config(format!(
                "capture delay of {}ms exceeds the {}ms limit",
                capture_delay.as_millis(),
                MAX_CAPTURE_DELAY.as_millis()
            )));
        }

        let initial_zoom = self.initial_zoom.unwrap_or(defaults.initial_zoom);
        if !initial_zoom.is_finite() || initial_zoom <= 0.0 {
            return Err(AppError::config(format!(
                "zoom must be a positive number, got {initial_zoom}"
            )));
        }

        Ok(Config {
            capture_delay,
            initial_zoom: clamp_zoom(initial_zoom),
            global_hotkey: self.global_hotkey.unwrap_or(defaults.global_hotkey),
        })
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(AppError::config(format!("{key} must be a boolean, got {other:?}"))),
    }
}
