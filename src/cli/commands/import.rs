use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::import::import_csv;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `import` command: full-replace bulk load from a CSV export.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let count = import_csv(&mut pool, Path::new(file))?;
        success(format!("Imported {} work orders (full replace).", count));
    }
    Ok(())
}
