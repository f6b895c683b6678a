//! Configuration for kagi
//!
//! Values come from three layers. A command-line flag wins over the
//! environment, which wins over `~/.config/kagi/config.toml`, which wins over
//! the built-in defaults. [`Settings::resolve`] validates the merged result
//! once; everything downstream receives immutable, already-checked values.

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "KAGI_API_KEY";

/// Default HTTP timeout in seconds
pub const DEFAULT_TIMEOUT: u64 = 30;

/// Largest accepted HTTP timeout in seconds (one day)
pub const MAX_TIMEOUT: u64 = 86_400;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no API key provided\nProvide via --api-key flag or KAGI_API_KEY environment variable")]
    MissingApiKey,

    #[error("invalid value \"{0}\" for --format\nValid formats: text, txt, md, markdown, json")]
    InvalidFormat(String),

    #[error("invalid value \"{0}\" for --color\nValid values: auto, always, never")]
    InvalidColor(String),

    #[error("invalid timeout value \"{0}\"\nTimeout must be a positive integer (seconds), at most 86400")]
    InvalidTimeout(i64),

    #[error("failed to read config from {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Output format for the rendered answer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
}

impl OutputFormat {
    /// Parse a user-facing format name, accepting aliases
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }

    /// Map any format name to a format, falling back to text.
    ///
    /// Validation belongs to [`OutputFormat::parse`]; this is for callers that
    /// already hold a name and want the renderer it selects.
    pub fn from_name_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or(OutputFormat::Text)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Markdown => "markdown",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// When to emit ANSI styling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            _ => Err(ConfigError::InvalidColor(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Auto => "auto",
            ColorMode::Always => "always",
            ColorMode::Never => "never",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Presentation settings consumed by the renderers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// The query as the user typed it (shown in headings)
    pub query: String,
    pub format: OutputFormat,
    /// Print only the answer text
    pub quiet: bool,
    /// Prepend the query as a heading in text output
    pub heading: bool,
    pub color: ColorMode,
}

/// Optional settings file (`~/.config/kagi/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub format: Option<String>,
    pub color: Option<String>,
    pub timeout: Option<i64>,
    pub heading: Option<bool>,
}

impl FileConfig {
    /// Load from the default location, or defaults if it does not exist
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kagi").join("config.toml"))
    }
}

/// Raw values as collected from the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub format: Option<String>,
    pub color: Option<String>,
    pub timeout: Option<i64>,
    pub heading: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub debug: bool,
}

/// Fully validated settings for one invocation
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    /// HTTP timeout in seconds
    pub timeout: u64,
    pub verbose: bool,
    pub debug: bool,
    pub format: OutputFormat,
    pub quiet: bool,
    pub heading: bool,
    pub color: ColorMode,
}

// The API key never appears in logs or panics
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key", &"***")
            .field("timeout", &self.timeout)
            .field("verbose", &self.verbose)
            .field("debug", &self.debug)
            .field("format", &self.format)
            .field("quiet", &self.quiet)
            .field("heading", &self.heading)
            .field("color", &self.color)
            .finish()
    }
}

impl Settings {
    /// Merge flags, environment and file values and validate them
    pub fn resolve(
        flags: &Overrides,
        env_api_key: Option<String>,
        file: &FileConfig,
    ) -> Result<Self, ConfigError> {
        let api_key = [flags.api_key.clone(), env_api_key, file.api_key.clone()]
            .into_iter()
            .flatten()
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let format = match flags.format.as_deref().or(file.format.as_deref()) {
            Some(name) => OutputFormat::parse(name)?,
            None => OutputFormat::default(),
        };

        let timeout = match flags.timeout.or(file.timeout) {
            Some(secs) if secs > 0 && secs as u64 <= MAX_TIMEOUT => secs as u64,
            Some(secs) => return Err(ConfigError::InvalidTimeout(secs)),
            None => DEFAULT_TIMEOUT,
        };

        let color = match flags.color.as_deref().or(file.color.as_deref()) {
            Some(name) => ColorMode::parse(name)?,
            None => ColorMode::default(),
        };

        let heading = flags.heading || file.heading.unwrap_or(false);

        Ok(Settings {
            api_key,
            timeout,
            // Debug implies verbose
            verbose: flags.verbose || flags.debug,
            debug: flags.debug,
            format,
            quiet: flags.quiet,
            heading,
            color,
        })
    }

    /// Presentation settings for rendering the answer to `query`
    pub fn render_config(&self, query: String) -> Config {
        Config {
            query,
            format: self.format,
            quiet: self.quiet,
            heading: self.heading,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn flags_with_key() -> Overrides {
        Overrides {
            api_key: Some("flag-key".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_format_aliases() {
        assert_eq!(OutputFormat::parse("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("txt").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::parse("md").unwrap(), OutputFormat::Markdown);
        assert_eq!(OutputFormat::parse("markdown").unwrap(), OutputFormat::Markdown);
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("  JSON ").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("TXT").unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_format_invalid() {
        let err = OutputFormat::parse("xml").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFormat(ref v) if v == "xml"));
        assert!(err.to_string().starts_with("invalid value \"xml\" for --format"));
        assert!(OutputFormat::parse("").is_err());
    }

    #[test]
    fn test_format_lenient_falls_back_to_text() {
        assert_eq!(OutputFormat::from_name_lenient("yaml"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_name_lenient(""), OutputFormat::Text);
        assert_eq!(OutputFormat::from_name_lenient("md"), OutputFormat::Markdown);
    }

    #[test]
    fn test_color_mode_parse() {
        assert_eq!(ColorMode::parse("auto").unwrap(), ColorMode::Auto);
        assert_eq!(ColorMode::parse("ALWAYS").unwrap(), ColorMode::Always);
        assert_eq!(ColorMode::parse(" never ").unwrap(), ColorMode::Never);
        assert!(matches!(
            ColorMode::parse("sometimes"),
            Err(ConfigError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_resolve_defaults() {
        let settings =
            Settings::resolve(&flags_with_key(), None, &FileConfig::default()).unwrap();
        assert_eq!(settings.api_key, "flag-key");
        assert_eq!(settings.timeout, DEFAULT_TIMEOUT);
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.color, ColorMode::Auto);
        assert_eq!(settings.render_config("q".into()).query, "q");
        assert!(!settings.quiet);
        assert!(!settings.heading);
        assert!(!settings.verbose);
    }

    #[test]
    fn test_resolve_api_key_precedence() {
        let file = FileConfig {
            api_key: Some("file-key".to_string()),
            ..Default::default()
        };

        let settings =
            Settings::resolve(&flags_with_key(), Some("env-key".into()), &file).unwrap();
        assert_eq!(settings.api_key, "flag-key");

        let settings =
            Settings::resolve(&Overrides::default(), Some("env-key".into()), &file)
                .unwrap();
        assert_eq!(settings.api_key, "env-key");

        let settings =
            Settings::resolve(&Overrides::default(), Some(String::new()), &file)
                .unwrap();
        assert_eq!(settings.api_key, "file-key");
    }

    #[test]
    fn test_resolve_missing_api_key() {
        let err = Settings::resolve(&Overrides::default(), None, &FileConfig::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey));
        assert!(err.to_string().contains("KAGI_API_KEY"));
    }

    #[test]
    fn test_resolve_invalid_timeout() {
        for secs in [0, -5, MAX_TIMEOUT as i64 + 1, i64::MAX] {
            let flags = Overrides {
                timeout: Some(secs),
                ..flags_with_key()
            };
            let err = Settings::resolve(&flags, None, &FileConfig::default()).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTimeout(v) if v == secs));
        }
    }

    #[test]
    fn test_resolve_flags_override_file() {
        let file = FileConfig {
            format: Some("json".to_string()),
            color: Some("never".to_string()),
            timeout: Some(90),
            heading: Some(true),
            ..Default::default()
        };
        let flags = Overrides {
            format: Some("md".to_string()),
            timeout: Some(10),
            ..flags_with_key()
        };

        let settings = Settings::resolve(&flags, None, &file).unwrap();
        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.color, ColorMode::Never);
        assert_eq!(settings.timeout, 10);
        assert!(settings.heading);
    }

    #[test]
    fn test_resolve_accepts_max_timeout() {
        let flags = Overrides {
            timeout: Some(MAX_TIMEOUT as i64),
            ..flags_with_key()
        };
        let settings = Settings::resolve(&flags, None, &FileConfig::default()).unwrap();
        assert_eq!(settings.timeout, MAX_TIMEOUT);
    }

    #[test]
    fn test_render_config_carries_presentation_flags() {
        let flags = Overrides {
            format: Some("json".to_string()),
            color: Some("always".to_string()),
            quiet: true,
            heading: true,
            ..flags_with_key()
        };
        let settings = Settings::resolve(&flags, None, &FileConfig::default()).unwrap();
        assert_eq!(
            settings.render_config("golang".into()),
            Config {
                query: "golang".to_string(),
                format: OutputFormat::Json,
                quiet: true,
                heading: true,
                color: ColorMode::Always,
            }
        );
    }

    #[test]
    fn test_resolve_debug_implies_verbose() {
        let flags = Overrides {
            debug: true,
            ..flags_with_key()
        };
        let settings = Settings::resolve(&flags, None, &FileConfig::default()).unwrap();
        assert!(settings.debug);
        assert!(settings.verbose);
    }

    #[test]
    fn test_settings_debug_masks_key() {
        let settings =
            Settings::resolve(&flags_with_key(), None, &FileConfig::default()).unwrap();
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("flag-key"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_file_config_missing_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn test_file_config_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "api_key = \"abc\"\nformat = \"md\"\ntimeout = 60\nheading = true").unwrap();

        let config = FileConfig::load_from(&path).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.format.as_deref(), Some("md"));
        assert_eq!(config.timeout, Some(60));
        assert_eq!(config.heading, Some(true));
        assert_eq!(config.color, None);
    }

    #[test]
    fn test_file_config_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout = \"soon\"").unwrap();

        let err = FileConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFile { .. }));
    }
}
