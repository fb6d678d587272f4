//! Canonical column names for the winger injury table

pub const PLAYER_NAME: &str = "Player_Name";
pub const POSITION: &str = "Position";

pub const MATCHES_BEFORE: &str = "matches_before_22";
pub const MATCHES_AFTER: &str = "matches_after_22";
pub const INJURIES_BEFORE: &str = "injuries_before_22";
pub const INJURIES_AFTER: &str = "injuries_after_22";
pub const MISSED_DAYS_BEFORE: &str = "missed_days_before_22";
pub const MISSED_DAYS_AFTER: &str = "missed_days_after_22";

pub const TOTAL_MATCHES: &str = "total_matches";
pub const TOTAL_INJURIES: &str = "total_injuries";
pub const TOTAL_MISSED_DAYS: &str = "total_missed_days";
pub const PCT_MATCHES_BEFORE: &str = "pct_matches_before";
pub const INJURY_GROWTH_FACTOR: &str = "injury_growth_factor";
pub const MISSED_DAYS_GROWTH_FACTOR: &str = "missed_days_growth_factor";

/// Identity columns that must be present and non-null
pub const TEXT_COLUMNS: [&str; 2] = [PLAYER_NAME, POSITION];

/// Count columns that must be non-negative integers
pub const COUNT_COLUMNS: [&str; 6] = [
    MATCHES_BEFORE,
    MATCHES_AFTER,
    INJURIES_BEFORE,
    INJURIES_AFTER,
    MISSED_DAYS_BEFORE,
    MISSED_DAYS_AFTER,
];

/// Every column the analysis reads from the input file
pub fn required_columns() -> impl Iterator<Item = &'static str> {
    TEXT_COLUMNS.into_iter().chain(COUNT_COLUMNS)
}
