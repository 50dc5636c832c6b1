#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wod() -> Command {
    cargo_bin_cmd!("wodash")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_wodash.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a small three-record CSV export useful for many tests.
pub fn write_sample_csv(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_wodash.csv", name));
    let p = path.to_string_lossy().to_string();

    let data = "\
ID,Notification date,Work Order Status,Notification type,StationList,MachineList,Equipment Part,Problem type,Activity by 1,MTTR,Activity Duration,Breakdown Hour,ActivityCount,Message
1,01/15/2024 08:30,Completed,Breakdown,ST-01,M-100,Pump,Mechanical,Alice,2.0,1.5,0.5,1,Seal replaced
2,01/20/2024 10:00,Open,Preventive,ST-02,M-200,Belt,Electrical,Bob,4.0,2.5,1.0,1,Inspection due
3,02/01/2024 09:15,Completed,Breakdown,ST-01,M-100,Pump,Mechanical,Alice,6.0,3.0,2.0,2,Motor swap
";
    fs::write(&p, data).expect("write sample csv");
    p
}

/// Initialize DB and import the sample CSV.
pub fn init_db_with_data(db_path: &str) -> String {
    wod()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    let csv = write_sample_csv(db_path.trim_end_matches(".sqlite"));
    wod()
        .args(["--db", db_path, "import", "--file", &csv])
        .assert()
        .success();
    csv
}
