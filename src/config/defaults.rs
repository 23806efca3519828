//! Default configuration values

/// Default User-Agent sent to the geocoding provider
///
/// Nominatim's usage policy requires an identifying agent.
pub const DEFAULT_USER_AGENT: &str = "curbside-core/0.1.0";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "curbside";
