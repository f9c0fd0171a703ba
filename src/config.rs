use crate::error::{CompanyRankError, Result};
use company_rank_common::{PreferenceStore, LANGUAGE_KEY, THEME_KEY};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 永続化する設定（言語・テーマ）
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub preferred_language: Option<String>,
    pub theme: Option<String>,

    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 指定パスから読み込み（存在しなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str::<Config>(&content)?
        } else {
            Self::default()
        };
        config.path = Some(path.to_path_buf());
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = match &self.path {
            Some(path) => path.clone(),
            None => Self::config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        debug!("設定を保存: {}", config_path.display());
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CompanyRankError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("company-rank").join("config.json"))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl PreferenceStore for Config {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            LANGUAGE_KEY => self.preferred_language.clone(),
            THEME_KEY => self.theme.clone(),
            _ => None,
        }
    }

    /// 値を更新して即座に保存（保存失敗はログのみ）
    fn set(&mut self, key: &str, value: &str) {
        match key {
            LANGUAGE_KEY => self.preferred_language = Some(value.to_string()),
            THEME_KEY => self.theme = Some(value.to_string()),
            _ => {
                warn!("未知の設定キー: {}", key);
                return;
            }
        }

        if let Err(e) = self.save() {
            warn!("設定の保存に失敗: {}", e);
        }
    }
}
