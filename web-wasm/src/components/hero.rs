//! ヒーローセクション

use leptos::prelude::*;
use company_rank_common::{translate, Language};

#[component]
pub fn Hero(language: Memo<Language>) -> impl IntoView {
    view! {
        <section class="hero">
            <h1 data-i18n-key="heroTitle">{move || translate("heroTitle", language.get())}</h1>
            <div class="image-overlay" data-i18n-key="imageOverlay">
                {move || translate("imageOverlay", language.get())}
            </div>
        </section>
    }
}
