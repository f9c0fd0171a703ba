//! ランキングの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - CompanyRecord: CSV1行から作られる企業レコード
//! - Tier: 同一スコアの企業グループ
//! - ViewState: 表示状態（言語・ソート・検索語・テーマ）

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 表示言語
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Jp,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Jp, Language::En];

    /// 言語コード（`data-lang` 属性・保存値・`<html lang>` に使う）
    pub fn code(&self) -> &'static str {
        match self {
            Language::Jp => "jp",
            Language::En => "en",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "jp" => Ok(Language::Jp),
            "en" => Ok(Language::En),
            _ => Err(Error::Parse(format!("Unknown language: {}. Use jp or en", s))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 並び順
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// スコア別ティア表示
    #[default]
    Score,
    /// 企業名順のフラット表示
    Name,
}

impl SortMode {
    pub const ALL: [SortMode; 2] = [SortMode::Score, SortMode::Name];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Score => "score",
            SortMode::Name => "name",
        }
    }
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "score" => Ok(SortMode::Score),
            "name" => Ok(SortMode::Name),
            _ => Err(Error::Parse(format!("Unknown sort mode: {}. Use score or name", s))),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 表示テーマ（未設定時はどちらのクラスも付けない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[serde(rename = "light-mode")]
    Light,
    #[serde(rename = "dark-mode")]
    Dark,
}

impl Theme {
    /// `<body>` に付与するCSSクラス
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Light => "light-mode",
            Theme::Dark => "dark-mode",
        }
    }

    /// チェックボックスの状態から決定（チェック = ライト）
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Theme::Light
        } else {
            Theme::Dark
        }
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light-mode" | "light" => Ok(Theme::Light),
            "dark-mode" | "dark" => Ok(Theme::Dark),
            _ => Err(Error::Parse(format!("Unknown theme: {}. Use light or dark", s))),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// 企業レコード（読み込み後は不変）
///
/// スコア列が欠けている・数値でない行は `score: None` となり、
/// 見出しが空のティアとして描画される。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub company_jp: String,
    pub company_en: String,
    pub score: Option<i64>,
}

impl CompanyRecord {
    /// `company_<language>` フィールド
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::Jp => &self.company_jp,
            Language::En => &self.company_en,
        }
    }

    pub fn to_name(&self) -> CompanyName {
        CompanyName {
            jp: self.company_jp.clone(),
            en: self.company_en.clone(),
        }
    }
}

/// ティア内の企業名（両言語を保持）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyName {
    pub jp: String,
    pub en: String,
}

impl CompanyName {
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Jp => &self.jp,
            Language::En => &self.en,
        }
    }
}

/// 同一スコアの企業グループ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub score: Option<i64>,
    pub companies: Vec<CompanyName>,
}

impl Tier {
    /// 見出しに表示するスコア（スコアなしは空文字）
    pub fn score_label(&self) -> String {
        self.score.map(|s| s.to_string()).unwrap_or_default()
    }
}

/// スコア閾値による色分け
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualTier {
    /// 80以上
    A,
    /// 70以上80未満
    B,
    /// 60以上70未満
    C,
    /// 60未満
    D,
}

impl VisualTier {
    pub fn for_score(score: i64) -> Self {
        if score >= 80 {
            VisualTier::A
        } else if score >= 70 {
            VisualTier::B
        } else if score >= 60 {
            VisualTier::C
        } else {
            VisualTier::D
        }
    }

    /// スコアなしは D
    pub fn for_tier_score(score: Option<i64>) -> Self {
        score.map_or(VisualTier::D, Self::for_score)
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            VisualTier::A => "tier-80",
            VisualTier::B => "tier-70",
            VisualTier::C => "tier-60",
            VisualTier::D => "tier-50",
        }
    }
}

/// 表示状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub language: Language,
    pub sort_mode: SortMode,
    pub filter_text: String,
    pub theme: Option<Theme>,
}
