//! Company Rank CLI
//!
//! ランキングCSVを読み込み、スコア別ティアを端末表示またはHTMLページとして出力する。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod view;
