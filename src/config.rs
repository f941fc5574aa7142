use crate::error::MiningError;

/// Thresholds and limits for one mining run.
#[derive(Clone, PartialEq, Debug)]
pub struct MiningConfig {
    /// Minimum fraction of transactions an itemset must appear in, in [0,1].
    pub min_support: f64,
    /// Minimum rule confidence, in [0,1].
    pub min_confidence: f64,
    /// Rules with lift below this are dropped.
    pub min_lift: Option<f64>,
    /// Largest itemset size to search for.
    pub max_level: Option<usize>,
    /// Abort the run if a level has more surviving candidates than this.
    pub max_candidates: Option<usize>,
}

impl MiningConfig {
    pub fn new(min_support: f64, min_confidence: f64) -> MiningConfig {
        MiningConfig {
            min_support,
            min_confidence,
            min_lift: None,
            max_level: None,
            max_candidates: None,
        }
    }

    pub fn validate(&self) -> Result<(), MiningError> {
        check_unit_interval("min_support", self.min_support)?;
        check_unit_interval("min_confidence", self.min_confidence)?;
        if let Some(min_lift) = self.min_lift {
            if !(min_lift >= 0.0 && min_lift.is_finite()) {
                return Err(MiningError::InvalidThreshold {
                    name: "min_lift",
                    range: "[0,∞)",
                    value: min_lift,
                });
            }
        }
        if self.max_level == Some(0) {
            return Err(MiningError::InvalidLimit { name: "max_level" });
        }
        if self.max_candidates == Some(0) {
            return Err(MiningError::InvalidLimit {
                name: "max_candidates",
            });
        }
        Ok(())
    }
}

fn check_unit_interval(name: &'static str, value: f64) -> Result<(), MiningError> {
    // Written so that NaN is rejected too.
    if value >= 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(MiningError::InvalidThreshold {
            name,
            range: "[0,1]",
            value,
        })
    }
}
