use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Probabilities above this are surfaced as elevated risk.
pub const ELEVATED_THRESHOLD_PERCENT: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Standard,
    Elevated,
}

impl RiskCategory {
    pub fn from_percent(percent: f64) -> Self {
        if percent > ELEVATED_THRESHOLD_PERCENT {
            RiskCategory::Elevated
        } else {
            RiskCategory::Standard
        }
    }
}

/// A scored submission as returned by the service, stamped on receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutcome {
    pub risk_percent: f64,
    pub received_at: DateTime<Utc>,
}

impl PredictionOutcome {
    pub fn new(risk_percent: f64) -> Self {
        Self {
            risk_percent,
            received_at: Utc::now(),
        }
    }

    pub fn category(&self) -> RiskCategory {
        RiskCategory::from_percent(self.risk_percent)
    }

    /// One decimal place, as shown on the report.
    pub fn display_percent(&self) -> String {
        format!("{:.1}%", self.risk_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_percent_is_still_standard() {
        assert_eq!(RiskCategory::from_percent(50.0), RiskCategory::Standard);
        assert_eq!(RiskCategory::from_percent(50.1), RiskCategory::Elevated);
        assert_eq!(RiskCategory::from_percent(0.0), RiskCategory::Standard);
        assert_eq!(RiskCategory::from_percent(100.0), RiskCategory::Elevated);
    }

    #[test]
    fn outcome_reports_its_category() {
        assert_eq!(
            PredictionOutcome::new(72.345).category(),
            RiskCategory::Elevated
        );
        assert_eq!(
            PredictionOutcome::new(12.0).category(),
            RiskCategory::Standard
        );
    }

    #[test]
    fn display_rounds_to_one_decimal() {
        assert_eq!(PredictionOutcome::new(72.345).display_percent(), "72.3%");
        assert_eq!(PredictionOutcome::new(5.0).display_percent(), "5.0%");
    }
}
