use clap::{Parser, Subcommand};
use company_rank_common::{Language, SortMode, Theme};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "company-rank")]
#[command(about = "企業ランキング表示ツール（スコア別ティア・日英切替）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ランキングを端末に表示
    List {
        /// ランキングCSVファイル
        #[arg(required = true)]
        csv: PathBuf,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// ランキングをHTMLページとして出力
    Html {
        /// ランキングCSVファイル
        #[arg(required = true)]
        csv: PathBuf,

        /// 出力HTMLファイル
        #[arg(short, long, default_value = "rankings.html")]
        output: PathBuf,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// 設定を表示/編集
    Config {
        /// 表示言語を設定 (jp/en)
        #[arg(long)]
        lang: Option<Language>,

        /// テーマを設定 (light/dark)
        #[arg(long)]
        theme: Option<Theme>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 表示条件（言語・並び順・検索語）
#[derive(clap::Args, Clone, Debug, Default)]
pub struct ViewArgs {
    /// 表示言語 (jp/en、省略時は保存済みの設定)
    #[arg(short, long)]
    pub lang: Option<Language>,

    /// 並び順 (score/name)
    #[arg(short, long, default_value = "score")]
    pub sort: SortMode,

    /// 企業名で絞り込み
    #[arg(short, long)]
    pub filter: Option<String>,
}
