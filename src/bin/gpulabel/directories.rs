use std::env;
use std::path::PathBuf;

use gpulabel::constants::config::{APP_DIR, CONFIG_DIR_ENV};
use once_cell::sync::Lazy;

/// Wrapper for 'dirs' that treats MacOS more like Linux, by following the XDG specification.
/// `GPULABEL_CONFIG_DIR` is checked before the `XDG_CONFIG_HOME` environment variable.
/// The fallback directory is `~/.config/gpulabel`.
pub struct ProjectDirs {
    config_dir: PathBuf,
}

impl ProjectDirs {
    fn new() -> Option<ProjectDirs> {
        // Checks whether or not $GPULABEL_CONFIG_DIR exists. If it doesn't, set config dir
        // to our system's default configuration home.
        let config_dir = if let Some(config_dir_op) = env::var_os(CONFIG_DIR_ENV).map(PathBuf::from)
        {
            config_dir_op
        } else {
            #[cfg(target_os = "macos")]
            let config_dir_op = env::var_os("XDG_CONFIG_HOME")
                .map(PathBuf::from)
                .filter(|p| p.is_absolute())
                .or_else(|| dirs_next::home_dir().map(|d| d.join(".config")));

            #[cfg(not(target_os = "macos"))]
            let config_dir_op = dirs_next::config_dir();

            config_dir_op.map(|d| d.join(APP_DIR))?
        };

        Some(ProjectDirs { config_dir })
    }

    pub fn config_dir(&self) -> &PathBuf {
        &self.config_dir
    }
}

pub static PROJECT_DIRS: Lazy<Option<ProjectDirs>> = Lazy::new(ProjectDirs::new);
