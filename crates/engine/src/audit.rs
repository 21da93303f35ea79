use serde::{Deserialize, Serialize};

use crate::calories::day_calories;
use crate::ceiling::CalorieCeiling;
use crate::week::Week;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverBudgetDay {
    pub day_index: usize,
    pub total: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusReport {
    pub ceiling: CalorieCeiling,
    pub over_budget_days: Vec<OverBudgetDay>,
    pub empty_slot_count: usize,
}

impl StatusReport {
    pub fn is_over_budget(&self) -> bool {
        !self.over_budget_days.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.empty_slot_count == 0
    }
}

/// Reports days whose total exceeds `ceiling` and counts empty slots.
///
/// Both checks always run; empty slots are counted even without a ceiling.
pub fn audit(week: &Week, ceiling: CalorieCeiling) -> StatusReport {
    let over_budget_days = match ceiling.limit() {
        Some(limit) => week
            .days()
            .iter()
            .enumerate()
            .map(|(day_index, day)| OverBudgetDay {
                day_index,
                total: day_calories(day),
            })
            .filter(|day| day.total > u64::from(limit))
            .collect(),
        None => Vec::new(),
    };

    let empty_slot_count = week.slots().filter(|slot| slot.is_empty()).count();

    StatusReport {
        ceiling,
        over_budget_days,
        empty_slot_count,
    }
}
