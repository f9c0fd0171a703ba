//! ソート切替ボタン（スコア順 / 企業名順）

use leptos::prelude::*;
use company_rank_common::{translate, Language, SortMode};

fn label_key(mode: SortMode) -> &'static str {
    match mode {
        SortMode::Score => "sortByScore",
        SortMode::Name => "sortByName",
    }
}

#[component]
pub fn SortControls<F>(
    language: Memo<Language>,
    sort_mode: Memo<SortMode>,
    on_sort: F,
) -> impl IntoView
where
    F: Fn(SortMode) + 'static + Clone,
{
    view! {
        <div class="sort-controls">
            {SortMode::ALL
                .into_iter()
                .map(|mode| {
                    let on_sort = on_sort.clone();
                    view! {
                        <button
                            class="sort-btn"
                            class:active=move || sort_mode.get() == mode
                            data-sort=mode.as_str()
                            on:click=move |_| on_sort(mode)
                        >
                            {move || translate(label_key(mode), language.get())}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
