use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn telemetry_log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("blitz");
            Some(state_dir.join("events.csv"))
        } else {
            ProjectDirs::from("", "", "blitz")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("events.csv"))
        }
    }
}
