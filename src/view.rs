use crate::cli::ViewArgs;
use crate::config::Config;
use crate::error::{CompanyRankError, Result};
use company_rank_common::{RankingStore, ViewController};
use log::debug;
use std::path::Path;

/// CSVを読み込み、表示条件を適用したコントローラを作る
///
/// 言語が指定された場合は言語切替と同様に設定へ保存する。
pub fn prepare(csv: &Path, args: &ViewArgs, config: Config) -> Result<ViewController<Config>> {
    if !csv.exists() {
        return Err(CompanyRankError::FileNotFound(csv.display().to_string()));
    }

    let mut controller = ViewController::new(config);
    controller.load_store(RankingStore::from_csv_file(csv)?);

    if let Some(language) = args.lang {
        controller.set_language(language);
    }
    controller.set_sort_mode(args.sort);
    if let Some(filter) = &args.filter {
        controller.search(filter);
    }

    debug!("表示条件: {:?}", controller.state());
    Ok(controller)
}
