//! localStorage による設定の永続化
//!
//! 言語・テーマを生の文字列のまま保存する（`preferredLanguage` = "jp" など）。
//! ストレージが使えない環境では読み込みは未設定、書き込みは無視となる。

use company_rank_common::PreferenceStore;
use gloo::storage::{LocalStorage, Storage};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStoragePreferences;

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::raw().set_item(key, value) {
            gloo::console::warn!(format!("設定の保存に失敗: {} ({:?})", key, e));
        }
    }
}
