//! 表示コントローラ
//!
//! 表示状態（言語・ソート・検索語・テーマ）とランキングストアを単一の所有者として保持し、
//! ユーザー操作ごとに 絞り込み → グルーピング → 描画 をやり直す。
//! 現在の言語は常にこのコントローラの状態を正とし、保存先は起動時にのみ読む。

use crate::grouper::{group, RankingView};
use crate::i18n;
use crate::prefs::PreferenceStore;
use crate::render::{render, Element};
use crate::store::RankingStore;
use crate::types::{Language, SortMode, Theme, ViewState};
use log::{debug, warn};

pub struct ViewController<P: PreferenceStore> {
    state: ViewState,
    store: Option<RankingStore>,
    prefs: P,
}

impl<P: PreferenceStore> ViewController<P> {
    /// 保存済みの言語・テーマを読み込んで初期化（ランキングは未読み込み）
    pub fn new(prefs: P) -> Self {
        let state = ViewState {
            language: prefs.language(),
            theme: prefs.theme(),
            ..Default::default()
        };
        debug!("初期状態: lang={} theme={:?}", state.language, state.theme);
        Self {
            state,
            store: None,
            prefs,
        }
    }

    /// CSVを読み込んでストアを作る（1回のみ、2回目以降は無視して false）
    pub fn load(&mut self, csv_text: &str) -> bool {
        self.load_store(RankingStore::from_csv(csv_text))
    }

    /// 構築済みのストアを設定（1回のみ）
    pub fn load_store(&mut self, store: RankingStore) -> bool {
        if self.store.is_some() {
            warn!("ランキングは読み込み済みのため再読み込みを無視します");
            return false;
        }
        debug!("ランキング {}件を読み込み", store.len());
        self.store = Some(store);
        true
    }

    pub fn is_loaded(&self) -> bool {
        self.store.is_some()
    }

    /// 言語切替（状態更新 + 保存）
    pub fn set_language(&mut self, language: Language) {
        self.state.language = language;
        self.prefs.set_language(language);
    }

    /// ソート切替
    pub fn set_sort_mode(&mut self, sort_mode: SortMode) {
        self.state.sort_mode = sort_mode;
    }

    /// 検索語の更新
    pub fn search(&mut self, text: &str) {
        self.state.filter_text = text.to_string();
    }

    /// テーマ切替（チェック = ライト）
    pub fn toggle_theme(&mut self, checked: bool) -> Theme {
        let theme = Theme::from_checked(checked);
        self.state.theme = Some(theme);
        self.prefs.set_theme(theme);
        theme
    }

    /// 現在の状態で 絞り込み → グルーピング した表示データ（未読み込みなら None）
    pub fn view(&self) -> Option<RankingView> {
        let store = self.store.as_ref()?;
        let filtered = store.filter(self.state.language, &self.state.filter_text);
        Some(group(&filtered, self.state.language, self.state.sort_mode))
    }

    /// 現在の状態の要素ツリー（未読み込みなら空）
    pub fn render(&self) -> Vec<Element> {
        match self.view() {
            Some(view) => render(self.state.language, view),
            None => Vec::new(),
        }
    }

    /// 言語トグルの active 状態（現在の言語のみ true）
    pub fn language_markers(&self) -> Vec<(Language, bool)> {
        Language::ALL
            .iter()
            .map(|&language| (language, language == self.state.language))
            .collect()
    }

    /// ソートボタンの active 状態（排他）
    pub fn sort_markers(&self) -> Vec<(SortMode, bool)> {
        SortMode::ALL
            .iter()
            .map(|&mode| (mode, mode == self.state.sort_mode))
            .collect()
    }

    /// 固定UI文言（現在の言語）
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        i18n::translate(key, self.state.language)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    pub fn sort_mode(&self) -> SortMode {
        self.state.sort_mode
    }

    pub fn theme(&self) -> Option<Theme> {
        self.state.theme
    }

    pub fn prefs(&self) -> &P {
        &self.prefs
    }

    pub fn into_prefs(self) -> P {
        self.prefs
    }
}
