use menuplan_shared::recipe::Recipe;
use serde::{Deserialize, Serialize};

pub const DAYS_PER_WEEK: usize = 7;
pub const MAX_MEALS_PER_DAY: u8 = 5;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Slot {
    #[serde(default)]
    pub category: String,
    /// `None` once allocation ran and nothing could be assigned.
    pub recipe: Option<Recipe>,
    #[serde(default)]
    pub locked: bool,
}

impl Slot {
    pub fn empty(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            recipe: None,
            locked: false,
        }
    }

    pub fn filled(category: impl Into<String>, recipe: Recipe) -> Self {
        Self {
            category: category.into(),
            recipe: Some(recipe),
            locked: false,
        }
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.recipe.is_none()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Meal {
    #[serde(default)]
    pub slots: Vec<Slot>,
}

impl Meal {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self { slots }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Day {
    pub meals: Vec<Meal>,
}

impl Day {
    pub fn new(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.meals.iter().flat_map(|meal| meal.slots.iter())
    }
}

/// Seven days, index 0..6. Weekday names are a presentation concern.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct Week {
    days: [Day; DAYS_PER_WEEK],
}

impl Week {
    pub fn new(days: [Day; DAYS_PER_WEEK]) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[Day; DAYS_PER_WEEK] {
        &self.days
    }

    pub fn day(&self, index: usize) -> menuplan_shared::Result<&Day> {
        match self.days.get(index) {
            Some(day) => Ok(day),
            None => menuplan_shared::precondition!(
                "day index {} is outside 0..{}",
                index,
                DAYS_PER_WEEK
            ),
        }
    }

    pub fn day_mut(&mut self, index: usize) -> menuplan_shared::Result<&mut Day> {
        match self.days.get_mut(index) {
            Some(day) => Ok(day),
            None => menuplan_shared::precondition!(
                "day index {} is outside 0..{}",
                index,
                DAYS_PER_WEEK
            ),
        }
    }

    pub fn meal_mut(&mut self, day: usize, meal: usize) -> menuplan_shared::Result<&mut Meal> {
        let meals = &mut self.day_mut(day)?.meals;
        let count = meals.len();

        match meals.get_mut(meal) {
            Some(meal) => Ok(meal),
            None => menuplan_shared::precondition!(
                "meal index {} is outside 0..{} on day {}",
                meal,
                count,
                day
            ),
        }
    }

    pub fn slot(&self, at: SlotRef) -> menuplan_shared::Result<&Slot> {
        let day = self.day(at.day)?;
        let Some(meal) = day.meals.get(at.meal) else {
            menuplan_shared::precondition!("no meal {} on day {}", at.meal, at.day);
        };

        match meal.slots.get(at.slot) {
            Some(slot) => Ok(slot),
            None => menuplan_shared::precondition!("no slot at {}", at),
        }
    }

    pub fn slot_mut(&mut self, at: SlotRef) -> menuplan_shared::Result<&mut Slot> {
        let meal = self.meal_mut(at.day, at.meal)?;

        match meal.slots.get_mut(at.slot) {
            Some(slot) => Ok(slot),
            None => menuplan_shared::precondition!("no slot at {}", at),
        }
    }

    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.days.iter().flat_map(Day::slots)
    }
}

/// Number of meals in each day, between 1 and 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MealsPerDay(u8);

impl MealsPerDay {
    pub fn new(count: usize) -> menuplan_shared::Result<Self> {
        match u8::try_from(count) {
            Ok(count) if (1..=MAX_MEALS_PER_DAY).contains(&count) => Ok(Self(count)),
            _ => menuplan_shared::precondition!(
                "meals per day must be between 1 and {}, got {}",
                MAX_MEALS_PER_DAY,
                count
            ),
        }
    }

    pub fn get(&self) -> usize {
        usize::from(self.0)
    }
}

impl Default for MealsPerDay {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for MealsPerDay {
    type Error = menuplan_shared::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(usize::from(value))
    }
}

/// Coordinates of one slot in a week.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pub day: usize,
    pub meal: usize,
    pub slot: usize,
}

impl SlotRef {
    pub fn new(day: usize, meal: usize, slot: usize) -> Self {
        Self { day, meal, slot }
    }
}

impl std::fmt::Display for SlotRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "day {} meal {} slot {}", self.day, self.meal, self.slot)
    }
}
