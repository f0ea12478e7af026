//! Runtime configuration.
//!
//! Values are layered: built-in defaults, then an optional JSON config file,
//! then environment variables and command-line flags (see [`ConfigOverrides`]).
//! Lexicon and clip map files are read once at startup and never reloaded.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use signbridge_clips::ClipMap;
use signbridge_foundation::{Error, ErrorContext, Result};
use signbridge_gloss::stdlib::CLIP_EXTENSION;
use signbridge_gloss::{Lexicon, LexiconSpec};
use signbridge_transport::{DEFAULT_ENDPOINT, Endpoint};
use tracing::debug;

/// Default log filter when nothing else is configured.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration for a translation session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Consumer endpoint: `ws://host:port[/path]`, `tcp://host:port`, or a
    /// bare `host:port` for TCP.
    pub endpoint: String,

    /// Bound on one connection attempt, in milliseconds.
    pub connect_timeout_ms: u64,

    /// Whether translated clip sequences are sent to the consumer.
    pub send: bool,

    /// Extension used when clip names are generated from the lexicon.
    pub clip_extension: String,

    /// Lexicon JSON file; the standard lexicon when absent.
    pub lexicon: Option<PathBuf>,

    /// Clip map JSON file; generated from the lexicon when absent.
    pub clip_map: Option<PathBuf>,

    /// `tracing` filter directive, e.g. `"signbridge=debug"`.
    pub log: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_ms: 2000,
            send: true,
            clip_extension: CLIP_EXTENSION.to_string(),
            lexicon: None,
            clip_map: None,
            log: None,
        }
    }
}

/// Values supplied from the environment or command line.
///
/// `None` leaves the configured value untouched.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    /// Consumer address.
    pub endpoint: Option<String>,
    /// Lexicon file.
    pub lexicon: Option<PathBuf>,
    /// Clip map file.
    pub clip_map: Option<PathBuf>,
    /// Disable sending.
    pub no_send: bool,
    /// Log filter directive.
    pub log: Option<String>,
}

impl RuntimeConfig {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns a serialization error for malformed JSON or unknown fields.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| {
            Error::serialization(e.to_string())
                .with_context(ErrorContext::new().with_line(e.line()))
        })
    }

    /// Loads a configuration file.
    ///
    /// Relative `lexicon` and `clip_map` paths are resolved against the
    /// directory containing the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = read_file(path)?;
        let mut config = Self::from_json_str(&text).map_err(|e| {
            let line = e.context.as_ref().and_then(|c| c.line);
            let mut context = ErrorContext::new().with_source(path.display().to_string());
            if let Some(line) = line {
                context = context.with_line(line);
            }
            e.with_context(context)
        })?;

        if let Some(base) = path.parent() {
            config.lexicon = config.lexicon.map(|p| resolve_relative(base, p));
            config.clip_map = config.clip_map.map(|p| resolve_relative(base, p));
        }

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Applies environment and command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(endpoint) = overrides.endpoint {
            self.endpoint = endpoint;
        }
        if let Some(lexicon) = overrides.lexicon {
            self.lexicon = Some(lexicon);
        }
        if let Some(clip_map) = overrides.clip_map {
            self.clip_map = Some(clip_map);
        }
        if overrides.no_send {
            self.send = false;
        }
        if let Some(log) = overrides.log {
            self.log = Some(log);
        }
        self
    }

    /// Checks that values are usable.
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        Endpoint::parse(&self.endpoint)?;
        if self.connect_timeout_ms == 0 {
            return Err(Error::config("connect_timeout_ms must be positive"));
        }
        if self.clip_extension.is_empty() || self.clip_extension.contains('.') {
            return Err(Error::config(format!(
                "clip_extension '{}' must be a bare extension like \"bvh\"",
                self.clip_extension
            )));
        }
        Ok(())
    }

    /// Connection attempt bound as a [`Duration`].
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Log filter directive, falling back to [`DEFAULT_LOG_FILTER`].
    #[must_use]
    pub fn log_filter(&self) -> &str {
        self.log.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Builds the configured lexicon.
    ///
    /// # Errors
    ///
    /// Returns an error if the lexicon file cannot be read or parsed.
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        match &self.lexicon {
            Some(path) => load_lexicon_file(path),
            None => Ok(Lexicon::standard()),
        }
    }

    /// Builds the configured clip map.
    ///
    /// Without a clip map file, one clip per emitted gloss of `lexicon` is
    /// generated using the configured extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the clip map file cannot be read or parsed.
    pub fn load_clip_map(&self, lexicon: &Lexicon) -> Result<ClipMap> {
        match &self.clip_map {
            Some(path) => load_clip_map_file(path),
            None => Ok(ClipMap::for_lexicon(lexicon, &self.clip_extension)),
        }
    }
}

/// Loads a lexicon from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid lexicon.
pub fn load_lexicon_file<P: AsRef<Path>>(path: P) -> Result<Lexicon> {
    let path = path.as_ref();
    let text = read_file(path)?;
    let spec: LexiconSpec = serde_json::from_str(&text).map_err(|e| {
        Error::serialization(format!("invalid lexicon: {e}")).with_context(
            ErrorContext::new()
                .with_source(path.display().to_string())
                .with_line(e.line()),
        )
    })?;
    debug!(path = %path.display(), "loaded lexicon");
    Ok(Lexicon::from(spec))
}

/// Loads a clip map from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a flat object of
/// gloss → clip name.
pub fn load_clip_map_file<P: AsRef<Path>>(path: P) -> Result<ClipMap> {
    let path = path.as_ref();
    let text = read_file(path)?;
    let map: ClipMap = serde_json::from_str(&text).map_err(|e| {
        Error::serialization(format!("invalid clip map: {e}")).with_context(
            ErrorContext::new()
                .with_source(path.display().to_string())
                .with_line(e.line()),
        )
    })?;
    debug!(path = %path.display(), clips = map.len(), "loaded clip map");
    Ok(map)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))
}

fn resolve_relative(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path
    }
}
