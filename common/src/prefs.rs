//! 設定の永続化
//!
//! 言語とテーマの2つの値だけを保存する。保存先はフロントエンドごとに実装する
//! （Web: localStorage、CLI: 設定ファイル）。

use crate::types::{Language, Theme};
use log::warn;
use std::collections::HashMap;

/// 言語設定のキー
pub const LANGUAGE_KEY: &str = "preferredLanguage";
/// テーマ設定のキー
pub const THEME_KEY: &str = "theme";

/// キー・値の永続ストア
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);

    /// 保存済みの言語（未保存・不正値は jp）
    fn language(&self) -> Language {
        match self.get(LANGUAGE_KEY) {
            Some(code) => code.parse().unwrap_or_else(|_| {
                warn!("保存された言語設定が不正です: {:?}", code);
                Language::default()
            }),
            None => Language::default(),
        }
    }

    fn set_language(&mut self, language: Language) {
        self.set(LANGUAGE_KEY, language.code());
    }

    /// 保存済みのテーマ（未保存なら None）
    fn theme(&self) -> Option<Theme> {
        self.get(THEME_KEY).and_then(|value| value.parse().ok())
    }

    fn set_theme(&mut self, theme: Theme) {
        self.set(THEME_KEY, theme.css_class());
    }
}

/// メモリ上のストア（テスト・一時利用）
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
