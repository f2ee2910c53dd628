use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// Dashboard banding (role/level view).
pub const DASHBOARD_BANDS: BandThresholds = BandThresholds {
    medium: 40,
    high: 75,
};

/// Job-analysis banding. Tuned separately from the dashboard — the two
/// tables are independent settings, not meant to converge.
pub const JOB_VIEW_BANDS: BandThresholds = BandThresholds {
    medium: 50,
    high: 70,
};

/// Qualitative reading of a match percent, used for feedback copy only.
/// Scoring always exposes the numeric percent; bands are layered on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchBand {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy)]
pub struct BandThresholds {
    /// First percent that counts as Medium.
    pub medium: u8,
    /// First percent that counts as High.
    pub high: u8,
}

impl BandThresholds {
    pub fn classify(&self, percent: u8) -> MatchBand {
        if percent >= self.high {
            MatchBand::High
        } else if percent >= self.medium {
            MatchBand::Medium
        } else {
            MatchBand::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_boundaries() {
        assert_eq!(DASHBOARD_BANDS.classify(0), MatchBand::Low);
        assert_eq!(DASHBOARD_BANDS.classify(39), MatchBand::Low);
        assert_eq!(DASHBOARD_BANDS.classify(40), MatchBand::Medium);
        assert_eq!(DASHBOARD_BANDS.classify(74), MatchBand::Medium);
        assert_eq!(DASHBOARD_BANDS.classify(75), MatchBand::High);
        assert_eq!(DASHBOARD_BANDS.classify(100), MatchBand::High);
    }

    #[test]
    fn job_view_boundaries() {
        assert_eq!(JOB_VIEW_BANDS.classify(49), MatchBand::Low);
        assert_eq!(JOB_VIEW_BANDS.classify(50), MatchBand::Medium);
        assert_eq!(JOB_VIEW_BANDS.classify(69), MatchBand::Medium);
        assert_eq!(JOB_VIEW_BANDS.classify(70), MatchBand::High);
    }
}
