//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::fetch::{fetch_text, RANKINGS_URL};
use crate::components::{
    header::Header,
    hero::Hero,
    search_box::SearchBox,
    sort_controls::SortControls,
    rankings::Rankings,
};
use crate::storage::LocalStoragePreferences;
use company_rank_common::{Language, SortMode, Theme, ViewController};

/// アプリ全体で共有する表示コントローラ
pub type Controller = RwSignal<ViewController<LocalStoragePreferences>>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 保存済みの言語・テーマで初期化（ランキングは未読み込み）
    let controller: Controller = RwSignal::new(ViewController::new(LocalStoragePreferences));

    let language = Memo::new(move |_| controller.with(|c| c.language()));
    let sort_mode = Memo::new(move |_| controller.with(|c| c.sort_mode()));
    let theme = Memo::new(move |_| controller.with(|c| c.theme()));

    // CSVを1回だけ取得（失敗時は空のまま）
    spawn_local(async move {
        match fetch_text(RANKINGS_URL).await {
            Ok(text) => controller.update(|c| {
                c.load(&text);
            }),
            Err(e) => gloo::console::error!(format!("ランキングの読み込みに失敗: {:?}", e)),
        }
    });

    // <html lang>
    Effect::new(move |_| {
        let code = language.get().code();
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("lang", code);
        }
    });

    // <body> のテーマクラス
    Effect::new(move |_| {
        let current = theme.get();
        if let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        {
            let classes = body.class_list();
            let _ = classes.remove_2(Theme::Light.css_class(), Theme::Dark.css_class());
            if let Some(current) = current {
                let _ = classes.add_1(current.css_class());
            }
        }
    });

    // 言語切替ハンドラ
    let on_language = move |lang: Language| {
        controller.update(|c| c.set_language(lang));
    };

    // テーマ切替ハンドラ
    let on_theme = move |checked: bool| {
        controller.update(|c| {
            c.toggle_theme(checked);
        });
    };

    // ソート切替ハンドラ
    let on_sort = move |mode: SortMode| {
        controller.update(|c| c.set_sort_mode(mode));
    };

    // 検索ハンドラ
    let on_search = move |text: String| {
        controller.update(|c| c.search(&text));
    };

    view! {
        <div class="container">
            <Header
                language=language
                theme=theme
                on_language=on_language
                on_theme=on_theme
            />

            <Hero language=language />

            <SearchBox language=language on_search=on_search />

            <SortControls
                language=language
                sort_mode=sort_mode
                on_sort=on_sort
            />

            <Rankings controller=controller />
        </div>
    }
}
