pub mod chart;
pub mod records;
pub mod report;
