use serde::{Deserialize, Serialize};

/// Per-day calorie budget. Zero means unconstrained.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(from = "u32", into = "u32")]
pub struct CalorieCeiling(Option<u32>);

impl CalorieCeiling {
    pub const UNCONSTRAINED: Self = Self(None);

    pub fn new(kcal: u32) -> Self {
        Self((kcal > 0).then_some(kcal))
    }

    /// Negative values are treated like zero.
    pub fn from_kcal(kcal: i64) -> Self {
        match u32::try_from(kcal) {
            Ok(kcal) => Self::new(kcal),
            Err(_) if kcal > 0 => Self::new(u32::MAX),
            Err(_) => Self::UNCONSTRAINED,
        }
    }

    /// NaN and infinities are unconstrained; finite values are truncated.
    pub fn from_f64(kcal: f64) -> Self {
        if !kcal.is_finite() {
            return Self::UNCONSTRAINED;
        }

        Self::from_kcal(kcal.trunc() as i64)
    }

    pub fn limit(&self) -> Option<u32> {
        self.0
    }

    pub fn is_constrained(&self) -> bool {
        self.0.is_some()
    }

    /// Budget left once `used` kcal have been placed. May be negative when
    /// locked slots already exceed the ceiling.
    pub fn remaining(&self, used: u64) -> Allowance {
        match self.0 {
            Some(limit) => {
                let used = i64::try_from(used).unwrap_or(i64::MAX);
                Allowance::Remaining(i64::from(limit).saturating_sub(used))
            }
            None => Allowance::Unconstrained,
        }
    }
}

impl From<u32> for CalorieCeiling {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<CalorieCeiling> for u32 {
    fn from(value: CalorieCeiling) -> Self {
        value.0.unwrap_or_default()
    }
}

impl std::fmt::Display for CalorieCeiling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(limit) => write!(f, "{limit} kcal"),
            None => f.write_str("unconstrained"),
        }
    }
}

/// What a single draw may spend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Allowance {
    Unconstrained,
    /// Only recipes at or under this many kcal are eligible. Zero or negative
    /// leaves only zero-calorie recipes, or nothing.
    Remaining(i64),
}

impl Allowance {
    pub fn admits(&self, kcal: u32) -> bool {
        match self {
            Allowance::Unconstrained => true,
            Allowance::Remaining(remaining) => i64::from(kcal) <= *remaining,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Allowance::Remaining(remaining) if *remaining <= 0)
    }
}

impl From<CalorieCeiling> for Allowance {
    fn from(value: CalorieCeiling) -> Self {
        value.remaining(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_negative_are_unconstrained() {
        assert!(!CalorieCeiling::new(0).is_constrained());
        assert!(!CalorieCeiling::from_kcal(-500).is_constrained());
        assert!(!CalorieCeiling::from_f64(f64::INFINITY).is_constrained());
        assert!(!CalorieCeiling::from_f64(f64::NAN).is_constrained());
        assert_eq!(CalorieCeiling::from_f64(1800.6).limit(), Some(1800));
    }

    #[test]
    fn test_remaining_can_go_negative() {
        let ceiling = CalorieCeiling::new(800);
        assert_eq!(ceiling.remaining(300), Allowance::Remaining(500));
        assert_eq!(ceiling.remaining(900), Allowance::Remaining(-100));
        assert!(ceiling.remaining(800).is_exhausted());
        assert_eq!(
            CalorieCeiling::UNCONSTRAINED.remaining(10_000),
            Allowance::Unconstrained
        );
    }

    #[test]
    fn test_allowance_admits() {
        assert!(Allowance::Unconstrained.admits(u32::MAX));
        assert!(Allowance::Remaining(100).admits(100));
        assert!(!Allowance::Remaining(100).admits(101));
        assert!(Allowance::Remaining(0).admits(0));
        assert!(!Allowance::Remaining(-5).admits(0));
    }

    #[test]
    fn test_serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&CalorieCeiling::new(1800)).unwrap(), "1800");
        assert_eq!(serde_json::to_string(&CalorieCeiling::UNCONSTRAINED).unwrap(), "0");
        assert_eq!(
            serde_json::from_str::<CalorieCeiling>("0").unwrap(),
            CalorieCeiling::UNCONSTRAINED
        );
    }
}
