use crate::core::normalize::normalize;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL WORK ORDERS
    //
    let count = queries::record_count(pool)?;
    println!(
        "{}• Total work orders:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) NOTIFICATION DATE RANGE
    //
    // Raw cells carry mixed date formats, so the range is taken from the
    // normalized dataset rather than from a textual MIN/MAX.
    let dataset = normalize(queries::load_all(pool)?);
    let first = dataset
        .iter()
        .filter_map(|r| r.notification_date)
        .min()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let last = dataset
        .max_notification_date()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Notification dates:{}", CYAN, RESET);
    println!("    from: {}", first);
    println!("    to:   {}", last);

    println!();
    Ok(())
}
