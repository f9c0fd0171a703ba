//! グルーピング/ソート
//!
//! - スコア順: 同一スコアでティアにまとめ、スコア降順に並べる
//! - 企業名順: 表示言語の企業名で昇順ソートしたフラットな一覧

use crate::types::{CompanyRecord, Language, SortMode, Tier};
use std::cmp::Ordering;
use std::collections::HashMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// 並び替え済みの表示データ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingView {
    /// スコア別ティア（スコア降順）
    Tiers(Vec<Tier>),
    /// 企業名順（1件ずつ個別のティアとして描画する）
    Flat(Vec<CompanyRecord>),
}

impl RankingView {
    pub fn len(&self) -> usize {
        match self {
            RankingView::Tiers(tiers) => tiers.len(),
            RankingView::Flat(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 描画単位のティア列に変換（企業名順は1件1ティア）
    pub fn into_tiers(self) -> Vec<Tier> {
        match self {
            RankingView::Tiers(tiers) => tiers,
            RankingView::Flat(records) => records
                .into_iter()
                .map(|record| Tier {
                    score: record.score,
                    companies: vec![record.to_name()],
                })
                .collect(),
        }
    }
}

/// ソートモードに応じてグルーピング
pub fn group(records: &[&CompanyRecord], language: Language, sort_mode: SortMode) -> RankingView {
    match sort_mode {
        SortMode::Score => RankingView::Tiers(group_by_score(records)),
        SortMode::Name => RankingView::Flat(sort_by_name(records, language)),
    }
}

/// スコアでグルーピング（ティア内は入力順、ティアはスコア降順）
///
/// スコアなしのレコードは末尾の1ティアにまとめる。
pub fn group_by_score(records: &[&CompanyRecord]) -> Vec<Tier> {
    let mut index_by_score: HashMap<Option<i64>, usize> = HashMap::new();
    let mut tiers: Vec<Tier> = Vec::new();

    for record in records {
        let index = *index_by_score.entry(record.score).or_insert_with(|| {
            tiers.push(Tier {
                score: record.score,
                companies: Vec::new(),
            });
            tiers.len() - 1
        });
        tiers[index].companies.push(record.to_name());
    }

    tiers.sort_by(|a, b| b.score.cmp(&a.score));
    tiers
}

/// 表示言語の企業名で昇順ソート（安定ソート）
pub fn sort_by_name(records: &[&CompanyRecord], language: Language) -> Vec<CompanyRecord> {
    let mut sorted: Vec<CompanyRecord> = records.iter().map(|r| (*r).clone()).collect();
    sorted.sort_by(|a, b| compare_names(a.name(language), b.name(language)));
    sorted
}

/// ロケールを考慮した企業名比較
///
/// NFKD分解からアクセント記号を除き、小文字化したキーで比較する。
/// 同値なら元の文字列で比較する。全角と半角の英数字、アクセント付きと
/// なしのラテン文字は同じ位置に並ぶ。
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
