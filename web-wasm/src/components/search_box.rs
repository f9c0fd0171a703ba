//! 企業名検索ボックス

use leptos::prelude::*;
use company_rank_common::{translate, Language};

#[component]
pub fn SearchBox<F>(
    language: Memo<Language>,
    on_search: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone,
{
    view! {
        <div class="search-container">
            <input
                type="text"
                id="searchInput"
                placeholder=move || translate("searchPlaceholder", language.get())
                on:keyup=move |ev| on_search(event_target_value(&ev))
            />
        </div>
    }
}
