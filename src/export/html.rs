//! HTMLページ出力
//!
//! Web版と同じマークアップ（言語トグル・テーマ・検索・ソート・ランキング）を
//! 現在の表示状態で静的に書き出す。

use company_rank_common::{escape_html, to_html, Language, PreferenceStore, SortMode, ViewController};
use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;

/// 固定文言を翻訳キー付きの要素として出力
fn i18n_element<P: PreferenceStore>(
    controller: &ViewController<P>,
    tag: &str,
    key: &str,
) -> String {
    format!(
        "<{tag} data-i18n-key=\"{key}\">{}</{tag}>",
        escape_html(controller.translate(key)),
    )
}

fn sort_label(mode: SortMode) -> &'static str {
    match mode {
        SortMode::Score => "sortByScore",
        SortMode::Name => "sortByName",
    }
}

fn language_label(language: Language) -> &'static str {
    match language {
        Language::Jp => "JP",
        Language::En => "EN",
    }
}

/// ページ全体のHTMLを生成
pub fn page_html<P: PreferenceStore>(controller: &ViewController<P>, generated_at: &str) -> String {
    let state = controller.state();
    let mut html = String::new();

    let _ = writeln!(html, "<!DOCTYPE html>");
    let _ = writeln!(html, "<html lang=\"{}\">", controller.language().code());
    let _ = writeln!(html, "<head>");
    let _ = writeln!(html, "<meta charset=\"utf-8\">");
    let _ = writeln!(html, "<title>{}</title>", escape_html(controller.translate("siteTitle")));
    let _ = writeln!(html, "</head>");

    match state.theme {
        Some(theme) => {
            let _ = writeln!(html, "<body class=\"{}\">", theme.css_class());
        }
        None => {
            let _ = writeln!(html, "<body>");
        }
    }

    // ヘッダー
    let _ = writeln!(html, "<header class=\"header\">");
    let _ = writeln!(html, "{}", i18n_element(controller, "div", "siteTitle"));
    let _ = writeln!(html, "<nav>");
    for key in ["navOverview", "navResults", "navCriteria", "navMenuSearch"] {
        let _ = writeln!(html, "{}", i18n_element(controller, "a", key));
    }
    let _ = writeln!(html, "</nav>");

    let _ = write!(html, "<div class=\"lang-switch\">");
    for (language, active) in controller.language_markers() {
        let _ = write!(
            html,
            "<span data-lang=\"{}\" class=\"{}\">{}</span>",
            language.code(),
            if active { "active" } else { "inactive" },
            language_label(language),
        );
    }
    let _ = writeln!(html, "</div>");

    let checked = if state.theme == Some(company_rank_common::Theme::Light) { " checked" } else { "" };
    let _ = writeln!(
        html,
        "<label class=\"theme-switch\"><input type=\"checkbox\" id=\"theme-switch-checkbox\"{}></label>",
        checked
    );
    let _ = writeln!(html, "</header>");

    // ヒーロー
    let _ = writeln!(html, "<section class=\"hero\">");
    let _ = writeln!(html, "{}", i18n_element(controller, "h1", "heroTitle"));
    let _ = writeln!(html, "{}", i18n_element(controller, "div", "imageOverlay"));
    let _ = writeln!(html, "</section>");

    // 検索・ソート
    let _ = writeln!(
        html,
        "<input type=\"text\" id=\"searchInput\" placeholder=\"{}\" value=\"{}\">",
        escape_html(controller.translate("searchPlaceholder")),
        escape_html(&state.filter_text),
    );
    let _ = write!(html, "<div class=\"sort-controls\">");
    for (mode, active) in controller.sort_markers() {
        let _ = write!(
            html,
            "<button class=\"sort-btn{}\" data-sort=\"{}\">{}</button>",
            if active { " active" } else { "" },
            mode.as_str(),
            escape_html(controller.translate(sort_label(mode))),
        );
    }
    let _ = writeln!(html, "</div>");

    // ランキング
    let _ = writeln!(
        html,
        "<div id=\"rankings-container\">{}</div>",
        to_html(&controller.render())
    );

    let _ = writeln!(html, "<footer class=\"text-muted\">{}</footer>", escape_html(generated_at));
    let _ = writeln!(html, "</body>");
    let _ = writeln!(html, "</html>");

    html
}

pub fn generate_html<P: PreferenceStore>(
    controller: &ViewController<P>,
    output_path: &Path,
    generated_at: &str,
) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, page_html(controller, generated_at))?;
    Ok(())
}
