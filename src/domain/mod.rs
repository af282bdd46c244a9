//! Domain layer - Business logic and domain models

pub mod analytics;
pub mod date_range;
pub mod entry;
pub mod pagination;
pub mod session;
pub mod user;

pub use analytics::{monthly_series, weekly_series, yearly_pivot, YearMonth, YearlyPivot};
pub use date_range::{parse_date, DateRange};
pub use entry::{EntryId, JournalEntry};
pub use pagination::{page_slice, total_pages, PageCursor, DEFAULT_PAGE_SIZE};
pub use session::Session;
pub use user::User;
