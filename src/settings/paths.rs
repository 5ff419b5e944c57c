use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

/// Utility struct for locating gantry's settings files
///
/// Follows the XDG Base Directory specification
pub struct SettingsPaths;

impl SettingsPaths {
    /// Returns the settings directory path
    ///
    /// - First checks `XDG_CONFIG_HOME`
    /// - Falls back to `$HOME/.config`
    /// - Appends "gantry" to the base config directory
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` environment variables are set
    pub fn config_dir() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home).join("gantry"))
    }

    /// Returns the path to the main settings file
    ///
    /// # Errors
    /// Returns an error if the settings directory cannot be determined
    pub fn main_config() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("config.toml"))
    }
}
