pub mod activity;
pub mod config;
pub mod employee;
pub mod entry;
pub mod init;
pub mod location;
pub mod log;
pub mod report;
