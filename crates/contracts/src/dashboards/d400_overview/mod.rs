pub mod dto;

pub use dto::{count_active_owners, OverviewStats, ACTIVE_WINDOW_DAYS};
