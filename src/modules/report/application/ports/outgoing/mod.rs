mod clock;
mod report_store;

pub use clock::Clock;
pub use report_store::{
    FolderWriteMode, NewReport, PersistedReport, ReportStore, ReportStoreError,
};
