//! ランキング描画モジュール
//!
//! 表示データから宣言的な要素ツリーを生成する純粋関数群。
//! DOMへの反映（Web）や端末出力（CLI）は各フロントエンドが行う。

use crate::grouper::RankingView;
use crate::types::{Language, Tier, VisualTier};
use std::fmt::Write as _;

/// スコア80のティアに付けるアンカーID
pub const ANCHOR_ID: &str = "rank-list-start";
/// アンカーを付けるスコア
pub const ANCHOR_SCORE: i64 = 80;

/// 宣言的な要素ノード
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<String>,
    pub classes: Vec<&'static str>,
    pub attrs: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Default::default()
        }
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// 深さ優先で指定クラスを持つ要素を収集
    pub fn find_by_class<'a>(&'a self, class: &str, out: &mut Vec<&'a Element>) {
        if self.has_class(class) {
            out.push(self);
        }
        for child in &self.children {
            child.find_by_class(class, out);
        }
    }
}

/// ランキングを要素ツリーに変換
///
/// 各ティアは `div.rank-tier` として描画され、ヘッダーにスコアと色分けクラス、
/// 企業ごとに表示言語の名前と両言語の `data-*` 属性を持つ。
/// スコアがちょうど80の最初のティアだけに [`ANCHOR_ID`] を付ける。
pub fn render(language: Language, view: RankingView) -> Vec<Element> {
    let mut anchored = false;

    view.into_tiers()
        .into_iter()
        .map(|tier| {
            let anchor = !anchored && tier.score == Some(ANCHOR_SCORE);
            anchored |= anchor;
            render_tier(language, &tier, anchor)
        })
        .collect()
}

fn render_tier(language: Language, tier: &Tier, anchor: bool) -> Element {
    let mut tier_div = Element::new("div").class("rank-tier");
    if anchor {
        tier_div = tier_div.id(ANCHOR_ID);
    }

    let title = Element::new("span")
        .class("tier-title")
        .class(VisualTier::for_tier_score(tier.score).css_class())
        .text(tier.score_label());
    let header = Element::new("div").class("tier-header").child(title);

    let companies = tier.companies.iter().fold(
        Element::new("div").class("company-container"),
        |container, company| {
            container.child(
                Element::new("span")
                    .class("company-name")
                    .attr("data-jp", company.jp.clone())
                    .attr("data-en", company.en.clone())
                    .text(company.get(language)),
            )
        },
    );

    tier_div.child(header).child(companies)
}

/// 要素ツリーをHTML文字列に変換（テキスト・属性値はエスケープ）
pub fn to_html(elements: &[Element]) -> String {
    let mut out = String::new();
    for element in elements {
        write_html(element, &mut out);
    }
    out
}

fn write_html(element: &Element, out: &mut String) {
    let _ = write!(out, "<{}", element.tag);
    if let Some(id) = &element.id {
        let _ = write!(out, " id=\"{}\"", escape_html(id));
    }
    if !element.classes.is_empty() {
        let _ = write!(out, " class=\"{}\"", element.classes.join(" "));
    }
    for (name, value) in &element.attrs {
        let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
    }
    out.push('>');

    if let Some(text) = &element.text {
        out.push_str(&escape_html(text));
    }
    for child in &element.children {
        write_html(child, out);
    }

    let _ = write!(out, "</{}>", element.tag);
}

/// HTMLエスケープ
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 端末表示用のテキストに変換
///
/// ```text
/// [90] A会社 / B会社
/// [70] C会社
/// ```
pub fn to_text(elements: &[Element]) -> String {
    let mut out = String::new();

    for tier in elements {
        let mut titles = Vec::new();
        tier.find_by_class("tier-title", &mut titles);
        let mut names = Vec::new();
        tier.find_by_class("company-name", &mut names);

        let score = titles
            .first()
            .and_then(|t| t.text.as_deref())
            .unwrap_or_default();
        let names: Vec<&str> = names
            .iter()
            .map(|n| n.text.as_deref().unwrap_or_default())
            .collect();

        let _ = writeln!(out, "[{}] {}", score, names.join(" / "));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouper::group;
    use crate::types::{CompanyRecord, SortMode};

    fn record(jp: &str, en: &str, score: i64) -> CompanyRecord {
        CompanyRecord {
            company_jp: jp.to_string(),
            company_en: en.to_string(),
            score: Some(score),
        }
    }

    fn render_records(records: &[CompanyRecord], language: Language, mode: SortMode) -> Vec<Element> {
        let refs: Vec<&CompanyRecord> = records.iter().collect();
        render(language, group(&refs, language, mode))
    }

    fn labels(elements: &[Element]) -> Vec<String> {
        let mut names = Vec::new();
        for element in elements {
            element.find_by_class("company-name", &mut names);
        }
        names.iter().filter_map(|n| n.text.clone()).collect()
    }

    #[test]
    fn test_render_structure() {
        let records = vec![record("A会社", "CompanyA", 90), record("B会社", "CompanyB", 90)];
        let tree = render_records(&records, Language::Jp, SortMode::Score);

        assert_eq!(tree.len(), 1);
        let tier = &tree[0];
        assert!(tier.has_class("rank-tier"));
        assert_eq!(tier.children[0].classes, vec!["tier-header"]);

        let title = &tier.children[0].children[0];
        assert_eq!(title.classes, vec!["tier-title", "tier-80"]);
        assert_eq!(title.text.as_deref(), Some("90"));

        let company = &tier.children[1].children[1];
        assert_eq!(company.get_attr("data-jp"), Some("B会社"));
        assert_eq!(company.get_attr("data-en"), Some("CompanyB"));
        assert_eq!(company.text.as_deref(), Some("B会社"));
    }

    #[test]
    fn test_render_tier_classes() {
        let records = vec![
            record("a", "a", 75),
            record("b", "b", 65),
            record("c", "c", 40),
        ];
        let tree = render_records(&records, Language::En, SortMode::Score);
        let classes: Vec<&str> = tree.iter().map(|t| t.children[0].children[0].classes[1]).collect();
        assert_eq!(classes, vec!["tier-70", "tier-60", "tier-50"]);
    }

    #[test]
    fn test_anchor_only_on_first_score_80() {
        let records = vec![
            record("a", "a", 95),
            record("b", "b", 80),
            record("c", "c", 80),
            record("d", "d", 70),
        ];

        let tree = render_records(&records, Language::En, SortMode::Score);
        let ids: Vec<Option<&str>> = tree.iter().map(|t| t.id.as_deref()).collect();
        assert_eq!(ids, vec![None, Some(ANCHOR_ID), None]);

        // 企業名順でも最初のスコア80の項目だけ
        let tree = render_records(&records, Language::En, SortMode::Name);
        let ids: Vec<Option<&str>> = tree.iter().map(|t| t.id.as_deref()).collect();
        assert_eq!(ids, vec![None, Some(ANCHOR_ID), None, None]);
    }

    #[test]
    fn test_no_anchor_without_exact_80() {
        let records = vec![record("a", "a", 95), record("b", "b", 81)];
        let tree = render_records(&records, Language::Jp, SortMode::Score);
        assert!(tree.iter().all(|t| t.id.is_none()));
    }

    #[test]
    fn test_unscored_tier_renders_empty_header() {
        let records = vec![
            record("A会社", "CompanyA", 80),
            CompanyRecord {
                company_jp: "B会社".to_string(),
                company_en: "CompanyB".to_string(),
                score: None,
            },
        ];
        let tree = render_records(&records, Language::Jp, SortMode::Score);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[1].id, None);

        let title = &tree[1].children[0].children[0];
        assert_eq!(title.classes, vec!["tier-title", "tier-50"]);
        assert_eq!(title.text.as_deref(), Some(""));
        assert_eq!(labels(&tree[1..]), vec!["B会社"]);
        assert_eq!(to_text(&tree), "[80] A会社\n[] B会社\n");
    }

    #[test]
    fn test_language_roundtrip_restores_labels() {
        let records = vec![record("A会社", "CompanyA", 90), record("C会社", "CompanyC", 70)];
        let jp = labels(&render_records(&records, Language::Jp, SortMode::Score));
        let en = labels(&render_records(&records, Language::En, SortMode::Score));
        let back = labels(&render_records(&records, Language::Jp, SortMode::Score));

        assert_eq!(jp, vec!["A会社", "C会社"]);
        assert_eq!(en, vec!["CompanyA", "CompanyC"]);
        assert_eq!(jp, back);
    }

    #[test]
    fn test_render_empty() {
        let tree = render_records(&[], Language::Jp, SortMode::Score);
        assert!(tree.is_empty());
        assert_eq!(to_html(&tree), "");
        assert_eq!(to_text(&tree), "");
    }

    #[test]
    fn test_to_html_escapes() {
        let records = vec![record("<株>&\"会社\"", "A&B", 80)];
        let html = to_html(&render_records(&records, Language::Jp, SortMode::Score));
        assert!(html.starts_with("<div id=\"rank-list-start\" class=\"rank-tier\">"));
        assert!(html.contains("data-jp=\"&lt;株&gt;&amp;&quot;会社&quot;\""));
        assert!(html.contains("data-en=\"A&amp;B\""));
        assert!(html.contains("<span class=\"tier-title tier-80\">80</span>"));
        assert!(!html.contains("<株>"));
    }

    #[test]
    fn test_to_text() {
        let records = vec![
            record("A会社", "CompanyA", 90),
            record("B会社", "CompanyB", 90),
            record("C会社", "CompanyC", 70),
        ];
        let text = to_text(&render_records(&records, Language::Jp, SortMode::Score));
        assert_eq!(text, "[90] A会社 / B会社\n[70] C会社\n");
    }
}
