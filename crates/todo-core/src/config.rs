use anyhow::{
  Context,
  bail
};
use serde::Deserialize;
use tracing::debug;

use crate::i18n::Locale;

pub const DEFAULT_STORAGE_KEY: &str =
  "todos";

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct AppConfig {
  /// Local storage key holding the
  /// serialized task list.
  pub storage_key: String,
  pub locale:      Locale
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      storage_key: DEFAULT_STORAGE_KEY
        .to_string(),
      locale:      Locale::default()
    }
  }
}

impl AppConfig {
  #[tracing::instrument(skip(raw))]
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let cfg: Self = toml::from_str(raw)
      .context(
        "failed to parse app config"
      )?;

    if cfg.storage_key.trim().is_empty()
    {
      bail!(
        "storage_key must not be blank"
      );
    }

    debug!(
      storage_key = %cfg.storage_key,
      locale = ?cfg.locale,
      "parsed app config"
    );
    Ok(cfg)
  }
}
