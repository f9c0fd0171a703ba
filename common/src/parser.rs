//! CSVパーサー
//!
//! ヘッダー行 + データ行のカンマ区切りテキストを行マップに変換する。
//! フィールド内のカンマのエスケープ（ダブルクォート）は扱わない。

/// CSVの1行（ヘッダー名 → 値、ヘッダー順を保持）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    /// ヘッダー名で値を取得（列が不足していた場合は None）
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// CSVテキストをパース
///
/// # Arguments
/// * `text` - 1行目がヘッダーのカンマ区切りテキスト
///
/// # Returns
/// データ行ごとの [`Row`]。値は前後の空白を除去済み。
/// ヘッダーより列が少ない行は、不足分のキーを持たない。
///
/// # Examples
/// ```
/// use company_rank_common::parse_csv;
///
/// let rows = parse_csv("company_jp,company_en,score\nA会社,CompanyA,90");
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].get("score"), Some("90"));
/// ```
pub fn parse_csv(text: &str) -> Vec<Row> {
    let mut lines = text.trim().split('\n');

    let headers: Vec<&str> = match lines.next() {
        Some(header) if !header.trim().is_empty() => header.split(',').map(str::trim).collect(),
        _ => return Vec::new(),
    };

    lines
        .map(|line| {
            let fields = headers
                .iter()
                .zip(line.split(',').map(str::trim))
                .map(|(header, value)| (header.to_string(), value.to_string()))
                .collect();
            Row { fields }
        })
        .collect()
}

/// スコア文字列を整数に変換（先頭の符号+数字のみを読む）
///
/// `"85"` → 85、`" 72点"` → 72、`"abc"` → None。
/// i64に収まらない桁数は飽和させる。
pub fn parse_score(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };

    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());

    if end == 0 {
        return None;
    }

    match digits[..end].parse::<i64>() {
        Ok(n) => Some(sign * n),
        Err(_) if sign < 0 => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
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

    #[test]
    fn test_parse_row_count() {
        let rows = parse_csv(TEST_CSV);
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_parse_all_header_fields_present() {
        let rows = parse_csv(TEST_CSV);
        for row in &rows {
            assert_eq!(row.len(), 3);
            assert!(row.contains_key("company_jp"));
            assert!(row.contains_key("company_en"));
            assert!(row.contains_key("score"));
        }
        assert_eq!(rows[1].get("company_jp"), Some("B会社"));
    }

    #[test]
    fn test_parse_trims_whitespace_and_crlf() {
        let rows = parse_csv(" company_jp , company_en , score \r\n  任天堂 ,  Nintendo , 80 \r\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("company_jp"), Some("任天堂"));
        assert_eq!(rows[0].get("company_en"), Some("Nintendo"));
        assert_eq!(rows[0].get("score"), Some("80"));
    }

    #[test]
    fn test_parse_short_row_misses_trailing_keys() {
        let rows = parse_csv("company_jp,company_en,score\nD会社,CompanyD");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("company_en"), Some("CompanyD"));
        assert_eq!(rows[0].get("score"), None);
    }

    #[test]
    fn test_parse_extra_fields_ignored() {
        let rows = parse_csv("company_jp,company_en,score\nE会社,CompanyE,60,extra");
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[0].get("score"), Some("60"));
    }

    #[test]
    fn test_parse_quoted_comma_shifts_columns() {
        // クォート内のカンマは区切りとして扱われる
        let rows = parse_csv("company_jp,company_en,score\nF会社,\"Foo, Inc.\",75");
        assert_eq!(rows[0].get("company_en"), Some("\"Foo"));
        assert_eq!(rows[0].get("score"), Some("Inc.\""));
    }

    #[test]
    fn test_parse_empty_and_header_only() {
        assert!(parse_csv("").is_empty());
        assert!(parse_csv("   \n").is_empty());
        assert!(parse_csv("company_jp,company_en,score\n").is_empty());
    }

    #[test]
    fn test_row_keys_keep_header_order() {
        let rows = parse_csv(TEST_CSV);
        let keys: Vec<&str> = rows[0].keys().collect();
        assert_eq!(keys, vec!["company_jp", "company_en", "score"]);
    }

    #[test]
    fn test_parse_score() {
        assert_eq!(parse_score("85"), Some(85));
        assert_eq!(parse_score("  72点"), Some(72));
        assert_eq!(parse_score("-5"), Some(-5));
        assert_eq!(parse_score("+60"), Some(60));
        assert_eq!(parse_score("abc"), None);
        assert_eq!(parse_score(""), None);
        assert_eq!(parse_score("-"), None);
        assert_eq!(parse_score("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_score("-99999999999999999999"), Some(i64::MIN));
    }
}
