/// Status display name marking an expense as paid.
///
/// The backend has no boolean for this; paid-ness is carried entirely by the
/// status entity's display name. Renaming that status on the server breaks
/// classification, so the comparison must stay an exact match.
pub const PAID_STATUS_NAME: &str = "Paid";

/// Minutes a fetched collection stays fresh before the next fetch refetches
pub const DEFAULT_CACHE_TTL_MINUTES: u64 = 10;

/// Days ahead covered by the upcoming-expenses view
pub const UPCOMING_WINDOW_DAYS: u64 = 30;

/// Chart color used when an expense's category is missing
pub const DEFAULT_CATEGORY_COLOR: &str = "#90caf9";

/// Category label used when an expense's category is missing
pub const UNKNOWN_CATEGORY_NAME: &str = "Unknown";
