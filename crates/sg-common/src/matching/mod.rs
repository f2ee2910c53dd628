pub mod bands;
pub mod categories;
pub mod scorer;

pub use bands::{BandThresholds, MatchBand, DASHBOARD_BANDS, JOB_VIEW_BANDS};
pub use categories::{aggregate_by_category, CategoryBreakdown, CATEGORY_ORDER};
pub use scorer::{uniform_match, weighted_match};
