//! ヘッダーコンポーネント（サイト名・ナビ・言語切替・テーマ切替）

use leptos::prelude::*;
use company_rank_common::{translate, Language, Theme};

const NAV_KEYS: [&str; 4] = ["navOverview", "navResults", "navCriteria", "navMenuSearch"];

#[component]
pub fn Header<FL, FT>(
    language: Memo<Language>,
    theme: Memo<Option<Theme>>,
    on_language: FL,
    on_theme: FT,
) -> impl IntoView
where
    FL: Fn(Language) + 'static + Clone,
    FT: Fn(bool) + 'static + Clone,
{
    view! {
        <header class="header">
            <div class="site-title" data-i18n-key="siteTitle">
                {move || translate("siteTitle", language.get())}
            </div>

            <nav class="nav">
                {NAV_KEYS
                    .into_iter()
                    .map(|key| view! {
                        <a data-i18n-key=key>{move || translate(key, language.get())}</a>
                    })
                    .collect_view()}
            </nav>

            <div class="lang-switch">
                {Language::ALL
                    .into_iter()
                    .map(|lang| {
                        let on_language = on_language.clone();
                        view! {
                            <span
                                data-lang=lang.code()
                                class:active=move || language.get() == lang
                                class:inactive=move || language.get() != lang
                                on:click=move |_| on_language(lang)
                            >
                                {lang.code().to_uppercase()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>

            <label class="theme-switch">
                <input
                    type="checkbox"
                    id="theme-switch-checkbox"
                    prop:checked=move || theme.get() == Some(Theme::Light)
                    on:change={
                        let on_theme = on_theme.clone();
                        move |ev| on_theme(event_target_checked(&ev))
                    }
                />
                <span class="slider"></span>
            </label>
        </header>
    }
}
