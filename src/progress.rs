use crate::day::DayRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetStatus {
    /// `excess_km` is zero when the target was met exactly.
    Achieved { excess_km: f64 },
    Pending { remaining_km: f64 },
}

/// How far a day is towards its distance target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyProgress {
    pub target_km: f64,
    pub distance_km: f64,
    /// Negative once the target is exceeded.
    pub remaining_km: f64,
    pub percent: f64,
    pub status: TargetStatus,
}

impl DailyProgress {
    /// `None` when the day has no target.
    pub fn for_day(day: &DayRecord) -> Option<Self> {
        let target_km = day.target_km().filter(|t| *t > 0.0)?;
        Some(Self::new(target_km, day.cumulative_distance_km()))
    }

    pub fn new(target_km: f64, distance_km: f64) -> Self {
        let remaining_km = target_km - distance_km;
        let status = if remaining_km <= 0.0 {
            TargetStatus::Achieved {
                excess_km: distance_km - target_km,
            }
        } else {
            TargetStatus::Pending { remaining_km }
        };
        Self {
            target_km,
            distance_km,
            remaining_km,
            percent: distance_km / target_km * 100.0,
            status,
        }
    }

    pub fn is_achieved(&self) -> bool {
        matches!(self.status, TargetStatus::Achieved { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_half_way() {
        let p = DailyProgress::new(10.0, 5.0);
        assert_eq!(p.remaining_km, 5.0);
        assert!((p.percent - 50.0).abs() < 1e-9);
        assert_matches!(p.status, TargetStatus::Pending { remaining_km } if remaining_km == 5.0);
    }

    #[test]
    fn test_exceeded() {
        let p = DailyProgress::new(10.0, 11.0);
        assert!((p.percent - 110.0).abs() < 1e-9);
        assert!(p.is_achieved());
        assert_matches!(p.status, TargetStatus::Achieved { excess_km } if (excess_km - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_exactly_met() {
        let p = DailyProgress::new(8.0, 8.0);
        assert_matches!(p.status, TargetStatus::Achieved { excess_km } if excess_km == 0.0);
    }

    #[test]
    fn test_no_target_has_no_progress() {
        assert_eq!(DailyProgress::for_day(&DayRecord::new()), None);
    }
}
