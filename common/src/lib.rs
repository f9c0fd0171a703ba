//! Company Rank Common Library
//!
//! CLIとWeb(WASM)で共有されるランキング処理
//! （CSVパース → ストア → グルーピング → 要素ツリー描画）

pub mod types;
pub mod error;
pub mod parser;
pub mod store;
pub mod grouper;
pub mod render;
pub mod i18n;
pub mod prefs;
pub mod controller;

pub use types::{CompanyName, CompanyRecord, Language, SortMode, Theme, Tier, ViewState, VisualTier};
pub use error::{Error, Result};
pub use parser::{parse_csv, parse_score, Row};
pub use store::RankingStore;
pub use grouper::{compare_names, group, group_by_score, sort_by_name, RankingView};
pub use render::{escape_html, render, to_html, to_text, Element, ANCHOR_ID};
pub use i18n::translate;
pub use prefs::{MemoryPreferences, PreferenceStore, LANGUAGE_KEY, THEME_KEY};
pub use controller::ViewController;
