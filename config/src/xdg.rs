//! Locate `$XDG_CONFIG_HOME/roster/catalog.toml`.

use std::path::PathBuf;

use crate::LoadError;

const APP_NAME: &str = "roster";
const FILE_NAME: &str = "catalog.toml";

/// Path of the default override file, or `None` if it does not exist.
pub(crate) fn default_config_path() -> Result<Option<PathBuf>, LoadError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| LoadError::Path("no config directory for this platform".to_string()))?;
    let path = config_dir.join(APP_NAME).join(FILE_NAME);
    if path.exists() {
        Ok(Some(path))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn missing_file_resolves_to_none() {
        let _guard = crate::env_lock();
        let dir = tempfile::tempdir().unwrap();
        let prev = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", dir.path());
        let result = default_config_path();
        match prev {
            Some(v) => env::set_var("XDG_CONFIG_HOME", v),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn existing_file_resolves_to_its_path() {
        let _guard = crate::env_lock();
        let dir = tempfile::tempdir().unwrap();
        let app_dir = dir.path().join(APP_NAME);
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join(FILE_NAME), "").unwrap();

        let prev = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", dir.path());
        let result = default_config_path();
        match prev {
            Some(v) => env::set_var("XDG_CONFIG_HOME", v),
            None => env::remove_var("XDG_CONFIG_HOME"),
        }

        let path = result.unwrap().expect("path should exist");
        assert!(path.ends_with("roster/catalog.toml"));
    }
}
