mod report_store_fs;
mod system_clock;

pub use report_store_fs::LocalReportStore;
pub use system_clock::SystemClock;
