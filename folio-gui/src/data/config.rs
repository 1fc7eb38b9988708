use std::{
    env,
    ffi::OsString,
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use folio_core::{Catalog, Error};
use platform_dirs::AppDirs;
use serde::Deserialize;

const APP_NAME: &str = "Folio";
const CONFIG_FILENAME: &str = "config.json";
const CATALOG_ENV_VAR: &str = "FOLIO_CATALOG";

/// Startup settings. Read once, never written back.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: Option<PathBuf>,
    pub window_size: (f64, f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            window_size: (960.0, 720.0),
        }
    }
}

impl Config {
    fn app_dirs() -> Option<AppDirs> {
        const USE_XDG_ON_MACOS: bool = false;

        AppDirs::new(Some(APP_NAME), USE_XDG_ON_MACOS)
    }

    pub fn config_dir() -> Option<PathBuf> {
        Self::app_dirs().map(|dirs| dirs.config_dir)
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILENAME))
    }

    pub fn load() -> Option<Config> {
        let path = Self::config_path()?;
        let file = File::open(&path).ok()?;
        log::info!("loading config: {:?}", &path);
        match Self::from_reader(BufReader::new(file)) {
            Ok(config) => Some(config),
            Err(err) => {
                log::error!("failed to read config, using defaults: {err}");
                None
            }
        }
    }

    pub fn from_reader(reader: impl Read) -> Result<Config, Error> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// External dataset to browse, if any. The environment wins over the
    /// config file.
    pub fn catalog_path(&self) -> Option<PathBuf> {
        resolve_catalog(env::var_os(CATALOG_ENV_VAR), self.catalog.as_deref())
    }

    pub fn load_catalog(&self) -> Result<Catalog, Error> {
        match self.catalog_path() {
            Some(path) => Catalog::load(&path),
            None => Catalog::bundled(),
        }
    }

    /// Directory relative image references are resolved against. The bundled
    /// dataset has none.
    pub fn image_root(&self) -> Option<PathBuf> {
        self.catalog_path().as_deref().and_then(dataset_dir)
    }
}

fn resolve_catalog(env_value: Option<OsString>, configured: Option<&Path>) -> Option<PathBuf> {
    match env_value {
        Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => configured.map(Path::to_path_buf),
    }
}

fn dataset_dir(catalog: &Path) -> Option<PathBuf> {
    catalog.parent().map(Path::to_path_buf)
}
