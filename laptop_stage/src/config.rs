//! Env parsing and defaults.

use std::path::PathBuf;

use url::Url;

use crate::catalog::{Catalog, CatalogError};

pub const DEFAULT_SCREEN_URL: &str = "https://tomoya-fawn.vercel.app/";

const SCREEN_URL_VAR: &str = "SCREEN_URL";
const CATALOG_PATH_VAR: &str = "CATALOG_PATH";
const SCREENSHOT_VAR: &str = "SHOWCASE_SCREENSHOT";

/// Page shown on every laptop screen. Falls back to the default on a bad value.
pub fn screen_url() -> Url {
    if let Ok(raw) = std::env::var(SCREEN_URL_VAR) {
        match raw.parse::<Url>() {
            Ok(url) => return url,
            Err(err) => eprintln!("showcase: invalid URL in {SCREEN_URL_VAR}: {raw:?} ({err})"),
        }
    }
    default_screen_url()
}

pub fn default_screen_url() -> Url {
    Url::parse(DEFAULT_SCREEN_URL).expect("default screen URL is valid")
}

/// Catalog from `CATALOG_PATH` if set, the built-in four laptops otherwise.
pub fn catalog() -> Result<Catalog, CatalogError> {
    match std::env::var_os(CATALOG_PATH_VAR) {
        Some(path) => Catalog::load(&PathBuf::from(path)),
        None => Ok(Catalog::default()),
    }
}

/// Output path for auto-screenshot mode, if requested.
pub fn screenshot_path() -> Option<PathBuf> {
    std::env::var_os(SCREENSHOT_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, MutexGuard};

    const ENV_KEYS: [&str; 3] = [SCREEN_URL_VAR, CATALOG_PATH_VAR, SCREENSHOT_VAR];

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Showcase variables cleared for one test, restored on drop while the
    /// lock is still held.
    struct CleanEnv {
        saved: Vec<(&'static str, Option<OsString>)>,
        _lock: MutexGuard<'static, ()>,
    }

    impl Drop for CleanEnv {
        fn drop(&mut self) {
            for (key, value) in &self.saved {
                match value {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

    fn clean_env() -> CleanEnv {
        let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let saved = ENV_KEYS
            .iter()
            .map(|&key| (key, std::env::var_os(key)))
            .collect();
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
        CleanEnv { saved, _lock: lock }
    }

    #[test]
    fn screen_url_defaults_when_unset() {
        let _env = clean_env();
        assert_eq!(screen_url().as_str(), DEFAULT_SCREEN_URL);
    }

    #[test]
    fn screen_url_env_overrides_default() {
        let _env = clean_env();
        std::env::set_var(SCREEN_URL_VAR, "https://example.com/portfolio");
        assert_eq!(screen_url().as_str(), "https://example.com/portfolio");
    }

    #[test]
    fn invalid_screen_url_falls_back_to_default() {
        let _env = clean_env();
        std::env::set_var(SCREEN_URL_VAR, "not a url");
        assert_eq!(screen_url().as_str(), DEFAULT_SCREEN_URL);
    }

    #[test]
    fn catalog_is_builtin_without_path() {
        let _env = clean_env();
        assert_eq!(catalog().unwrap().len(), 4);
    }

    #[test]
    fn missing_catalog_file_is_an_io_error() {
        let _env = clean_env();
        std::env::set_var(CATALOG_PATH_VAR, "/nonexistent/showcase-catalog.json");
        assert!(matches!(catalog(), Err(CatalogError::Io { .. })));
    }

    #[test]
    fn catalog_file_is_loaded_from_path() {
        let _env = clean_env();
        let path = std::env::temp_dir()
            .join(format!("showcase-catalog-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"{ "objects": [ { "id": "solo", "position": [0, 0, 0],
                 "focus_camera": [0, 1.5, 3], "look_at": [0, 0.5, 0] } ] }"#,
        )
        .unwrap();
        std::env::set_var(CATALOG_PATH_VAR, &path);

        let loaded = catalog();
        std::fs::remove_file(&path).ok();

        let loaded = loaded.unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains("solo"));
    }

    #[test]
    fn empty_screenshot_var_is_ignored() {
        let _env = clean_env();
        std::env::set_var(SCREENSHOT_VAR, "");
        assert_eq!(screenshot_path(), None);

        std::env::set_var(SCREENSHOT_VAR, "out/shot.png");
        assert_eq!(screenshot_path(), Some(PathBuf::from("out/shot.png")));
    }
}
