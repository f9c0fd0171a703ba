use clap::Parser;
use company_rank::{cli, config, error, export, view};
use company_rank_common::{to_text, PreferenceStore};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = Config::load()?;

    match cli.command {
        Commands::List { csv, view: args } => {
            let controller = view::prepare(&csv, &args, config)?;
            let tree = controller.render();

            if tree.is_empty() {
                println!("該当する企業がありません");
            } else {
                print!("{}", to_text(&tree));
            }
        }

        Commands::Html { csv, output, view: args } => {
            println!("🏢 company-rank - HTML出力\n");

            let controller = view::prepare(&csv, &args, config)?;
            export::export_html(&controller, &output)?;

            println!("\n✅ 出力完了");
        }

        Commands::Config { lang, theme, show } => {
            let mut config = config;

            if let Some(language) = lang {
                config.set_language(language);
                println!("✔ 表示言語を設定しました: {}", language);
            }

            if let Some(theme) = theme {
                config.set_theme(theme);
                println!("✔ テーマを設定しました: {}", theme);
            }

            if show {
                println!("設定:");
                println!("  表示言語: {}", config.language());
                println!(
                    "  テーマ: {}",
                    config.theme().map(|t| t.css_class()).unwrap_or("未設定")
                );
                if let Some(path) = config.path() {
                    println!("  設定ファイル: {}", path.display());
                }
            }
        }
    }

    Ok(())
}
