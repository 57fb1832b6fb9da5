pub mod aggregator;
pub mod logic;
pub mod range;

pub use aggregator::generate_report;
pub use logic::{ReportLogic, ReportView};
pub use range::ReportRange;
