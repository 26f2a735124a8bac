//! Configuration handling for lptools
//!
//! Credentials and defaults live in `~/.lptools`, a TOML file with a single
//! `[lptools]` table:
//!
//! ```toml
//! [lptools]
//! username = "me@example.com"
//! password = "secret"
//! workspace = "12345"
//! ignore_users = "bot@example.com former.colleague"
//! ```
//!
//! `workspace` may also be a bare integer and `ignore_users` an array.
//! `api_url` optionally replaces the hosted API root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::Deserialize;
use thiserror::Error;

use crate::api::DEFAULT_API_URL;

/// File name looked up in the home directory
pub const CONFIG_FILE_NAME: &str = ".lptools";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not determine the home directory; pass --config")]
    NoHomeDir,

    #[error("Configuration file not found: {}\n\n{}", .path.display(), setup_hint(.path))]
    NotFound { path: PathBuf },

    #[error("Failed to read configuration {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse configuration {}: {message}\nValues must be quoted TOML strings, e.g. username = \"me@example.com\"\n\n{}", .path.display(), setup_hint(.path))]
    Parse { path: PathBuf, message: String },

    #[error("Missing '{key}' in {}\n\n{}", .path.display(), setup_hint(.path))]
    MissingKey { path: PathBuf, key: &'static str },
}

/// Remediation text shown for any unusable configuration
pub fn setup_hint(path: &Path) -> String {
    format!(
        "Please create {} with the following info:\n\n\
         [lptools]\n\
         username = \"<your LP username>\"\n\
         password = \"<your LP password>\"\n\
         workspace = \"<your workspace>\"",
        path.display()
    )
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WorkspaceValue {
    Number(u64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IgnoreUsers {
    List(Vec<String>),
    Words(String),
}

impl IgnoreUsers {
    fn into_vec(self) -> Vec<String> {
        match self {
            IgnoreUsers::List(users) => users,
            IgnoreUsers::Words(words) => words.split_whitespace().map(str::to_string).collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Section {
    username: Option<String>,
    password: Option<String>,
    workspace: Option<WorkspaceValue>,
    ignore_users: Option<IgnoreUsers>,
    api_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    lptools: Option<Section>,
}

/// Settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub username: String,
    pub password: String,

    /// Default workspace, overridable from the command line
    pub workspace: String,

    /// User names or emails left out of member reports
    pub ignore_users: Vec<String>,

    /// API root template; `None` means the hosted service
    pub api_url: Option<String>,
}

impl Config {
    /// Returns `~/.lptools`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Loads configuration from `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        Self::parse(&content, path)
    }

    /// Parses configuration text; `path` is only used in error messages
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let section = file.lptools.unwrap_or_default();
        let missing = |key| ConfigError::MissingKey {
            path: path.to_path_buf(),
            key,
        };

        let workspace = match section.workspace.ok_or_else(|| missing("workspace"))? {
            WorkspaceValue::Number(id) => id.to_string(),
            WorkspaceValue::Text(id) => id,
        };

        Ok(Self {
            username: section.username.ok_or_else(|| missing("username"))?,
            password: section.password.ok_or_else(|| missing("password"))?,
            workspace,
            ignore_users: section
                .ignore_users
                .map(IgnoreUsers::into_vec)
                .unwrap_or_default(),
            api_url: section.api_url,
        })
    }

    /// API root template to connect to
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(toml: &str) -> Result<Config, ConfigError> {
        Config::parse(toml, Path::new("/home/me/.lptools"))
    }

    #[test]
    fn parse_full_config() {
        let config = parse(
            r#"
[lptools]
username = "me@example.com"
password = "secret"
workspace = "1234"
ignore_users = "bot@example.com  old.timer\tguest"
"#,
        )
        .unwrap();

        assert_eq!(config.username, "me@example.com");
        assert_eq!(config.password, "secret");
        assert_eq!(config.workspace, "1234");
        assert_eq!(
            config.ignore_users,
            vec!["bot@example.com", "old.timer", "guest"]
        );
        assert_eq!(config.api_url(), DEFAULT_API_URL);
    }

    #[test]
    fn workspace_may_be_integer() {
        let config = parse(
            r#"
[lptools]
username = "u"
password = "p"
workspace = 98765
"#,
        )
        .unwrap();

        assert_eq!(config.workspace, "98765");
        assert!(config.ignore_users.is_empty());
    }

    #[test]
    fn ignore_users_may_be_array() {
        let config = parse(
            r#"
[lptools]
username = "u"
password = "p"
workspace = "1"
ignore_users = ["a b", "c"]
api_url = "http://localhost:9000/{workspace}/"
"#,
        )
        .unwrap();

        assert_eq!(config.ignore_users, vec!["a b", "c"]);
        assert_eq!(config.api_url(), "http://localhost:9000/{workspace}/");
    }

    #[test]
    fn missing_key_names_key_and_template() {
        let err = parse(
            r#"
[lptools]
username = "u"
workspace = "1"
"#,
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::MissingKey { key: "password", .. }));
        let message = err.to_string();
        assert!(message.contains("Missing 'password'"));
        assert!(message.contains("[lptools]"));
        assert!(message.contains("username = \"<your LP username>\""));
    }

    #[test]
    fn missing_section_reports_first_key() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey { key: "workspace", .. }));
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = parse("[lptools]\nusername = me\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn unquoted_ini_values_explain_quoting() {
        let err = parse("[lptools]\nusername = me@x.com\npassword = secret\nworkspace = 1\n")
            .unwrap_err();

        let message = err.to_string();
        assert!(message.contains("Values must be quoted TOML strings"));
        assert!(message.contains("[lptools]"));
    }

    #[test]
    fn load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".lptools");

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
        assert!(err.to_string().contains("Please create"));
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".lptools");
        fs::write(
            &path,
            "[lptools]\nusername = \"u\"\npassword = \"p\"\nworkspace = \"55\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.workspace, "55");
    }
}
