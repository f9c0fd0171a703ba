//! 固定UI文言の翻訳テーブル
//!
//! 企業名はCSVから取得するため、ここには含めない。

use crate::types::Language;

/// 翻訳エントリ
#[derive(Debug, Clone, Copy)]
pub struct Phrase {
    pub key: &'static str,
    pub jp: &'static str,
    pub en: &'static str,
}

pub const PHRASES: &[Phrase] = &[
    Phrase { key: "siteTitle", jp: "企業ランク研究所", en: "Company Rank Institute" },
    Phrase { key: "navOverview", jp: "組織概要", en: "Overview" },
    Phrase { key: "navResults", jp: "選考結果", en: "Results" },
    Phrase { key: "navCriteria", jp: "選考基準", en: "Criteria" },
    Phrase { key: "navMenuSearch", jp: "メニュー検索", en: "Menu Search" },
    Phrase {
        key: "heroTitle",
        jp: "【2025年】日本主要企業・就職ランキング",
        en: "[2025] Major Japanese Companies Job-Hunting Ranking",
    },
    Phrase { key: "imageOverlay", jp: "企業ランク研究所", en: "Company Rank Institute" },
    Phrase { key: "searchPlaceholder", jp: "企業名で検索...", en: "Search by company name..." },
    Phrase { key: "sortByScore", jp: "スコア順", en: "By score" },
    Phrase { key: "sortByName", jp: "企業名順", en: "By name" },
];

/// キーと言語から文言を取得（未登録キーはキー自体を返す）
pub fn translate(key: &str, language: Language) -> &str {
    PHRASES
        .iter()
        .find(|p| p.key == key)
        .map(|p| match language {
            Language::Jp => p.jp,
            Language::En => p.en,
        })
        .unwrap_or(key)
}
