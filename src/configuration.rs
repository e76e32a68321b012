extern crate serde;

use serde::Deserialize;
use std::env::var_os;
use std::fs::read;
use std::io::{Error, ErrorKind};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{
  API_BASE, DEFAULT_STORAGE_PATH, LOGIN_REDIRECT_MS, MESSAGE_HIDE_MS, REGISTER_REDIRECT_MS,
  STORAGE_PATH_ENV,
};

#[derive(Clone, Debug, Deserialize)]
pub struct Configuration {
  #[serde(default = "default_api_base")]
  pub api_base: String,

  #[serde(default)]
  pub storage: StorageConfiguration,

  #[serde(default)]
  pub timings: TimingConfiguration,
}

fn default_api_base() -> String {
  API_BASE.to_string()
}

impl Default for Configuration {
  fn default() -> Self {
    Configuration {
      api_base: default_api_base(),
      storage: StorageConfiguration::default(),
      timings: TimingConfiguration::default(),
    }
  }
}

impl FromStr for Configuration {
  type Err = Error;

  fn from_str(source: &str) -> Result<Self, Self::Err> {
    let result = serde_json::from_str::<Configuration>(
      String::from_utf8(read(source)?)
        .or(Err(Error::from(ErrorKind::InvalidData)))?
        .as_str(),
    );

    if let Err(e) = &result {
      log::warn!("unable to parse '{}': {:?}", source, e);
    }

    result.or(Err(Error::from(ErrorKind::InvalidData)))
  }
}

#[derive(Clone, Debug, Deserialize)]
pub struct StorageConfiguration {
  #[serde(default = "default_storage_path")]
  pub path: PathBuf,
}

fn default_storage_path() -> PathBuf {
  var_os(STORAGE_PATH_ENV)
    .map(PathBuf::from)
    .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH))
}

impl Default for StorageConfiguration {
  fn default() -> Self {
    StorageConfiguration {
      path: default_storage_path(),
    }
  }
}

#[derive(Clone, Debug, Deserialize)]
pub struct TimingConfiguration {
  #[serde(default = "default_register_redirect")]
  pub register_redirect_ms: u64,

  #[serde(default = "default_login_redirect")]
  pub login_redirect_ms: u64,

  #[serde(default = "default_message_hide")]
  pub message_ms: u64,
}

fn default_register_redirect() -> u64 {
  REGISTER_REDIRECT_MS
}

fn default_login_redirect() -> u64 {
  LOGIN_REDIRECT_MS
}

fn default_message_hide() -> u64 {
  MESSAGE_HIDE_MS
}

impl Default for TimingConfiguration {
  fn default() -> Self {
    TimingConfiguration {
      register_redirect_ms: REGISTER_REDIRECT_MS,
      login_redirect_ms: LOGIN_REDIRECT_MS,
      message_ms: MESSAGE_HIDE_MS,
    }
  }
}

impl TimingConfiguration {
  pub fn immediate() -> Self {
    TimingConfiguration {
      register_redirect_ms: 0,
      login_redirect_ms: 0,
      message_ms: 0,
    }
  }

  pub fn register_redirect(&self) -> Duration {
    Duration::from_millis(self.register_redirect_ms)
  }

  pub fn login_redirect(&self) -> Duration {
    Duration::from_millis(self.login_redirect_ms)
  }

  pub fn message(&self) -> Duration {
    Duration::from_millis(self.message_ms)
  }
}
