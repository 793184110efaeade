//! User settings, read from a JSON file.

use crate::project::ProjectError;
use scanfold::template::Mode;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// `~/.scanfold`, or `None` if the home directory is unknown.
pub fn base_path() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .map(|home| PathBuf::from(home).join(".scanfold"))
}

/// Login name from the environment, the way `getpass` looks it up.
fn login_name() -> Option<String> {
    ["LOGNAME", "USER", "LNAME", "USERNAME"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .find(|name| !name.is_empty())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub user: Option<String>,
    pub ext: Option<String>,
    pub mode: Mode,
    pub templates_dir: Option<PathBuf>,
    pub input_file: Option<String>,
    pub output_file: Option<String>,
}

impl Settings {
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    /// Reads settings from `path`, or from the default location.
    /// A missing default file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ProjectError> {
        let (path, required) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => match base_path() {
                Some(base) => (base.join("settings.json"), false),
                None => {
                    debug!("home directory unknown; using default settings");
                    return Ok(Settings::default());
                }
            },
        };

        if !required && !path.is_file() {
            debug!("no settings at {}", path.display());
            return Ok(Settings::default());
        }

        debug!("load settings from {}", path.display());
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(source) => return Err(ProjectError::SettingsUnreadable { path, source }),
        };
        Settings::from_json(&data).map_err(|source| ProjectError::Settings { path, source })
    }

    pub fn user(&self) -> String {
        self.user
            .clone()
            .or_else(login_name)
            .unwrap_or_else(|| "anonymous".to_owned())
    }

    pub fn ext(&self) -> String {
        self.ext.clone().unwrap_or_else(|| "rs".to_owned())
    }

    pub fn templates_dir(&self) -> Option<PathBuf> {
        self.templates_dir
            .clone()
            .or_else(|| base_path().map(|base| base.join("templates")))
    }

    pub fn input_file(&self) -> String {
        self.input_file
            .clone()
            .unwrap_or_else(|| "$PROB.in".to_owned())
    }

    pub fn output_file(&self) -> String {
        self.output_file
            .clone()
            .unwrap_or_else(|| "$PROB.out".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(Mode::Stdio, settings.mode);
        assert_eq!("rs", settings.ext());
        assert_eq!("$PROB.in", settings.input_file());
        assert_eq!("$PROB.out", settings.output_file());
        assert!(!settings.user().is_empty());
    }

    #[test]
    fn test_from_json() {
        let settings = Settings::from_json(
            r#"{ "user": "vain0x", "mode": "file", "ext": "rs", "output_file": "out.txt" }"#,
        )
        .unwrap();
        assert_eq!("vain0x", settings.user());
        assert_eq!(Mode::File, settings.mode);
        assert_eq!("out.txt", settings.output_file());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!(Settings::from_json(r#"{ "usr": "typo" }"#).is_err());
        assert!(Settings::from_json(r#"{ "mode": "usaco" }"#).is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "templates_dir": "/tmp/t" }"#).unwrap();

        let settings = Settings::load(Some(path.as_path())).unwrap();
        assert_eq!(Some(PathBuf::from("/tmp/t")), settings.templates_dir());
    }

    #[test]
    fn test_load_missing_explicit_path_names_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.json");

        match Settings::load(Some(path.as_path())) {
            Err(ProjectError::SettingsUnreadable { path: p, source }) => {
                assert_eq!(path, p);
                assert_eq!(std::io::ErrorKind::NotFound, source.kind());
            }
            other => panic!("unexpected {:?}", other),
        }

        let err = Settings::load(Some(path.as_path())).err().unwrap();
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn test_load_invalid_json_names_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{").unwrap();

        match Settings::load(Some(path.as_path())) {
            Err(ProjectError::Settings { path: p, .. }) => assert_eq!(path, p),
            other => panic!("unexpected {:?}", other),
        }
    }
}
