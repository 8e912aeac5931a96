use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use addrbook_core::{AddressBook, AddressBookPaginator, PageCursor, PageSize};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

const APP_DIR: &str = "addrbook";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub page_size: PageSize,
    /// Overrides the default location of the contacts file.
    pub book_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn page_cursor(&self) -> PageCursor {
        PageCursor::new(self.page_size)
    }

    pub fn paginate<'a>(&self, book: &'a AddressBook) -> AddressBookPaginator<'a> {
        book.paginate(self.page_size)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid page_size value: {0}")]
    InvalidPageSize(usize),
    #[error("invalid book_path value: {0}")]
    InvalidBookPath(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    page_size: Option<usize>,
    book_path: Option<PathBuf>,
}

impl RawConfig {
    /// Relative `book_path` values are taken from `config_dir`.
    fn into_config(self, config_dir: Option<&Path>) -> Result<AppConfig> {
        let mut config = AppConfig::default();

        if let Some(size) = self.page_size {
            config.page_size =
                PageSize::new(size).map_err(|_| ConfigError::InvalidPageSize(size))?;
        }

        config.book_path = match self.book_path {
            None => None,
            Some(path) if path.as_os_str().is_empty() => {
                return Err(ConfigError::InvalidBookPath(path));
            }
            Some(path) => match config_dir {
                Some(dir) if path.is_relative() => Some(dir.join(path)),
                _ => Some(path),
            },
        };

        Ok(config)
    }
}

/// Reads an explicitly named config file, or the per-user one if present.
///
/// An explicit file must exist. A missing or unresolvable per-user file
/// yields the defaults.
pub fn load(explicit: Option<PathBuf>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfigPath(path));
        }
        return read_config(&path)?.ok_or(ConfigError::MissingConfigFile(path));
    }

    let path = match default_config_path() {
        Ok(path) => path,
        Err(err) => {
            warn!("using default config: {err}");
            return Ok(AppConfig::default());
        }
    };
    let config = read_config(&path)?.unwrap_or_else(|| {
        debug!(path = %path.display(), "no config file, using defaults");
        AppConfig::default()
    });
    Ok(config)
}

/// `$XDG_CONFIG_HOME/addrbook/config.toml`, else `~/.config/addrbook/config.toml`.
pub fn default_config_path() -> Result<PathBuf> {
    let base = match env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        Some(dir) if dir.as_os_str().is_empty() => {
            return Err(ConfigError::InvalidConfigPath(dir));
        }
        Some(dir) => dir,
        None => dirs::home_dir()
            .ok_or(ConfigError::MissingHomeDir)?
            .join(".config"),
    };
    Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
}

fn read_config(path: &Path) -> Result<Option<AppConfig>> {
    let read_err = |source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    };
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(read_err(err)),
    };
    check_owner_only(path, &metadata)?;

    let contents = fs::read_to_string(path).map_err(read_err)?;
    let raw: RawConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loaded config file");
    raw.into_config(path.parent()).map(Some)
}

#[cfg(unix)]
fn check_owner_only(path: &Path, metadata: &fs::Metadata) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    if metadata.permissions().mode() & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn check_owner_only(_path: &Path, _metadata: &fs::Metadata) -> Result<()> {
    Ok(())
}
