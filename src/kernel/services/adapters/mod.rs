//! Service adapters: OS/runtime specific implementations (IO/async).

pub mod file;
pub mod keybinding;
pub mod search;
pub mod settings;

use std::path::PathBuf;

pub use file::{FileService, LocalFileProvider};
pub use keybinding::{KeybindingContext, KeybindingService};
pub use search::{find_matches, SearchConfig, SearchService, SearchTask};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from, parse_keybinding,
};

pub fn get_log_dir() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join("zpad").join("logs"))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}
