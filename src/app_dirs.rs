use directories::ProjectDirs;
use std::path::PathBuf;

pub const DATA_FILE_NAME: &str = "running_data.json";
pub const LOG_FILE_NAME: &str = "runlog.log";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// `$HOME/.local/state/runlog`, or the platform data dir when HOME is unset.
    pub fn state_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            Some(
                PathBuf::from(home)
                    .join(".local")
                    .join("state")
                    .join("runlog"),
            )
        } else {
            ProjectDirs::from("", "", "runlog").map(|proj_dirs| proj_dirs.data_local_dir().to_path_buf())
        }
    }

    pub fn data_path() -> PathBuf {
        Self::state_dir()
            .map(|dir| dir.join(DATA_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(DATA_FILE_NAME))
    }

    pub fn log_path() -> PathBuf {
        Self::state_dir()
            .map(|dir| dir.join(LOG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
    }

    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "runlog")
            .map(|pd| pd.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("runlog_config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert!(AppDirs::data_path().ends_with(DATA_FILE_NAME));
        assert!(AppDirs::log_path().ends_with(LOG_FILE_NAME));
        assert!(AppDirs::config_path().ends_with("config.json"));
    }
}
