//! Where configuration files are looked up.
//!
//! - `./betsmoke.toml` - per-project configuration
//! - `<config dir>/betsmoke/config.toml` - per-user configuration

use std::path::PathBuf;

/// File name looked up in the working directory.
pub const LOCAL_CONFIG: &str = "betsmoke.toml";

/// Returns the per-user betsmoke directory, if the platform has one.
pub fn home_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("betsmoke"))
}

/// Returns the per-user config file path.
pub fn user_config() -> Option<PathBuf> {
    home_dir().map(|dir| dir.join("config.toml"))
}

/// Candidate config files in lookup order.
pub fn candidates() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
    paths.extend(user_config());
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_file_is_checked_first() {
        let paths = candidates();
        assert_eq!(paths[0], PathBuf::from(LOCAL_CONFIG));
        if let Some(user) = user_config() {
            assert!(user.to_string_lossy().contains("betsmoke"));
            assert_eq!(paths.last(), Some(&user));
        }
    }
}
