pub mod html;

use crate::config::Config;
use crate::error::Result;
use company_rank_common::ViewController;
use std::path::Path;

pub fn export_html(controller: &ViewController<Config>, output: &Path) -> Result<()> {
    let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();

    println!("- HTMLを生成中... (言語: {}, 並び順: {})", controller.language(), controller.sort_mode());
    html::generate_html(controller, output, &generated_at)?;
    println!("✔ HTML出力: {}", output.display());

    Ok(())
}
