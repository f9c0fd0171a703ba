//! ランキングストア
//!
//! 読み込んだ全企業レコードをメモリ上に保持し、企業名での絞り込みを提供する。

use crate::parser::{parse_csv, parse_score, Row};
use crate::types::{CompanyRecord, Language};
use log::{debug, warn};

pub const COLUMN_COMPANY_JP: &str = "company_jp";
pub const COLUMN_COMPANY_EN: &str = "company_en";
pub const COLUMN_SCORE: &str = "score";

/// 全企業レコード（読み込み順を保持）
#[derive(Debug, Clone, Default)]
pub struct RankingStore {
    records: Vec<CompanyRecord>,
}

impl RankingStore {
    /// CSV文字列から構築
    pub fn from_csv(text: &str) -> Self {
        Self::from_rows(&parse_csv(text))
    }

    /// CSVファイルから読み込み
    pub fn from_csv_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_csv(&content))
    }

    /// パース済みの行から構築
    ///
    /// 企業名の列が欠けている行は空文字として扱う。
    /// スコアを整数として読めない行もスコアなしのレコードとして残す。
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut records = Vec::with_capacity(rows.len());

        for (index, row) in rows.iter().enumerate() {
            let raw_score = row.get(COLUMN_SCORE).unwrap_or_default();
            let score = parse_score(raw_score);
            if score.is_none() {
                warn!("行{}: スコアを解釈できません ({:?})", index + 2, raw_score);
            }

            records.push(CompanyRecord {
                company_jp: row.get(COLUMN_COMPANY_JP).unwrap_or_default().to_string(),
                company_en: row.get(COLUMN_COMPANY_EN).unwrap_or_default().to_string(),
                score,
            });
        }

        debug!("ランキング読み込み: {}行 → {}件", rows.len(), records.len());
        Self { records }
    }

    /// 企業名で絞り込み
    ///
    /// `company_<language>` に対する大文字小文字を区別しない部分一致。
    /// 空文字は全件にマッチする。結果は読み込み順。
    pub fn filter(&self, language: Language, text: &str) -> Vec<&CompanyRecord> {
        let needle = text.to_uppercase();
        self.records
            .iter()
            .filter(|record| needle.is_empty() || record.name(language).to_uppercase().contains(&needle))
            .collect()
    }

    pub fn records(&self) -> &[CompanyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_CSV: &str = "company_jp,company_en,score
A会社,CompanyA,90
B会社,CompanyB,90
C会社,CompanyC,70
";

    fn names<'a>(records: &[&'a CompanyRecord], language: Language) -> Vec<&'a str> {
        records.iter().map(|r| r.name(language)).collect()
    }

    #[test]
    fn test_from_csv() {
        let store = RankingStore::from_csv(TEST_CSV);
        assert_eq!(store.len(), 3);
        assert_eq!(store.records()[2].score, Some(70));
    }

    #[test]
    fn test_filter_empty_matches_all_in_order() {
        let store = RankingStore::from_csv(TEST_CSV);
        let filtered = store.filter(Language::Jp, "");
        assert_eq!(names(&filtered, Language::Jp), vec!["A会社", "B会社", "C会社"]);
    }

    #[test]
    fn test_filter_jp_substring() {
        let store = RankingStore::from_csv(TEST_CSV);
        let filtered = store.filter(Language::Jp, "B");
        assert_eq!(names(&filtered, Language::Jp), vec!["B会社"]);
    }

    #[test]
    fn test_filter_case_insensitive() {
        let store = RankingStore::from_csv(TEST_CSV);
        let filtered = store.filter(Language::En, "companyc");
        assert_eq!(names(&filtered, Language::En), vec!["CompanyC"]);
    }

    #[test]
    fn test_filter_uses_language_field() {
        let store = RankingStore::from_csv(TEST_CSV);
        assert!(store.filter(Language::Jp, "Company").is_empty());
        assert_eq!(store.filter(Language::En, "Company").len(), 3);
    }

    #[test]
    fn test_filter_idempotent() {
        let store = RankingStore::from_csv(TEST_CSV);
        let once: Vec<CompanyRecord> = store.filter(Language::En, "a").into_iter().cloned().collect();
        let twice_store = RankingStore { records: once.clone() };
        let twice: Vec<CompanyRecord> = twice_store
            .filter(Language::En, "a")
            .into_iter()
            .cloned()
            .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_name_column_is_empty() {
        let store = RankingStore::from_csv("company_jp,score,company_en\nD会社,65");
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].company_en, "");
        assert_eq!(store.records()[0].score, Some(65));
    }

    #[test]
    fn test_unparsable_score_kept_without_score() {
        let store = RankingStore::from_csv("company_jp,company_en,score\nX会社,CompanyX,\nY会社,CompanyY,75\nZ会社,CompanyZ,n/a");
        assert_eq!(store.len(), 3);
        assert_eq!(store.records()[0].company_en, "CompanyX");
        assert_eq!(store.records()[0].score, None);
        assert_eq!(store.records()[1].score, Some(75));
        assert_eq!(store.records()[2].score, None);
    }

    #[test]
    fn test_missing_score_column_kept() {
        let store = RankingStore::from_csv("company_jp,company_en,score\nA会社,CompanyA,90\nB会社,CompanyB");
        let jp: Vec<&str> = store.records().iter().map(|r| r.company_jp.as_str()).collect();
        assert_eq!(jp, vec!["A会社", "B会社"]);
        assert_eq!(store.records()[1].score, None);
    }

    #[test]
    fn test_overflowing_score_kept() {
        let store = RankingStore::from_csv("company_jp,company_en,score\nA会社,CompanyA,99999999999999999999");
        assert_eq!(store.records()[0].score, Some(i64::MAX));
    }

    #[test]
    fn test_empty_store() {
        let store = RankingStore::from_csv("");
        assert!(store.is_empty());
        assert!(store.filter(Language::Jp, "").is_empty());
    }
}
