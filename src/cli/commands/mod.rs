pub mod calendar;
pub mod config;
pub mod db;
pub mod import;
pub mod init;
pub mod log;
pub mod overview;
pub mod records;
