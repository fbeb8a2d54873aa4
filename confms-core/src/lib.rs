pub mod config;
pub mod error;
pub mod page_strip;
pub mod pagination;
pub mod records;

#[cfg(test)]
mod scenario_tests;

pub use config::PortalConfig;
pub use error::PortalError;
pub use page_strip::{
    ControlModel, InfoLine, NavButton, PaginationControl, StripEntry, build_strip, page_numbers,
    render_text, strip_text,
};
pub use pagination::{DEFAULT_ITEMS_PER_PAGE, PageSlice, PaginatedView};
pub use records::{
    ActivityGroup, ActivityRecord, AuditLogRow, BackupFile, RecordKind, RecordSummary,
    filter_by_group, load_records, parse_records,
};
