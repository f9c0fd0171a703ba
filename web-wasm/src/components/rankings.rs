//! ランキング表示コンポーネント
//!
//! コントローラが生成した要素ツリーをHTML化し、コンテナの中身を毎回丸ごと置き換える。
//! 読み込み完了前は空のまま。

use leptos::prelude::*;
use company_rank_common::to_html;
use crate::app::Controller;

#[component]
pub fn Rankings(controller: Controller) -> impl IntoView {
    let html = move || controller.with(|c| to_html(&c.render()));

    view! {
        <div id="rankings-container" inner_html=html></div>
    }
}
