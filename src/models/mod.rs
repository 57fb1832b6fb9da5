pub mod activity_log;
pub mod chart;
pub mod employee;
pub mod entry_status;
pub mod location;
pub mod report;
pub mod time_entry;
