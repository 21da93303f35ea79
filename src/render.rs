use menuplan_engine::{StatusReport, Week, day_calories, recipe_calories};

pub const DAYS: [&str; 7] = [
    "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
];

const MEAL_LABELS_BY_COUNT: [&[&str]; 5] = [
    &["Déjeuner"],
    &["Déjeuner", "Dîner"],
    &["Petit déjeuner", "Déjeuner", "Dîner"],
    &["Petit déjeuner", "Déjeuner", "Goûter", "Dîner"],
    &["Petit déjeuner", "Collation", "Déjeuner", "Goûter", "Dîner"],
];

/// Label of week position `offset` when the week begins on `week_start`
/// (0 = Sunday .. 6 = Saturday).
pub fn day_label(offset: usize, week_start: u8) -> &'static str {
    let start = if week_start == 0 {
        6
    } else {
        usize::from(week_start) - 1
    };

    DAYS[(start + offset) % DAYS.len()]
}

pub fn meal_label(meals_per_day: usize, meal_index: usize) -> String {
    meals_per_day
        .checked_sub(1)
        .and_then(|i| MEAL_LABELS_BY_COUNT.get(i))
        .and_then(|labels| labels.get(meal_index))
        .map(|label| label.to_string())
        .unwrap_or_else(|| format!("Repas {}", meal_index + 1))
}

/// Human readable summary of an audit, `None` when there is nothing to report.
pub fn status_message(report: &StatusReport, week_start: u8) -> Option<String> {
    let limit = report.ceiling.limit()?;

    if report.is_over_budget() {
        let days = report
            .over_budget_days
            .iter()
            .map(|over| format!("{} ({} kcal)", day_label(over.day_index, week_start), over.total))
            .collect::<Vec<_>>()
            .join(", ");

        return Some(format!(
            "Menu généré, mais certaines journées dépassent le MAX {limit} kcal/jour. \
             Cause probable : un ou plusieurs slots verrouillés sont trop caloriques. \
             Jours concernés : {days}. Déverrouille/ajuste des slots, ou augmente le MAX."
        ));
    }

    if report.empty_slot_count > 0 {
        return Some(format!(
            "Menu généré sous le MAX {limit} kcal/jour, mais {} slot(s) n’ont pas pu être remplis \
             sans dépasser le plafond (aucune recette assez légère dans le type).",
            report.empty_slot_count
        ));
    }

    None
}

/// Plain text rendering of a week, one block per day.
pub fn render_week(week: &Week, week_start: u8) -> String {
    let mut out = String::new();

    for (offset, day) in week.days().iter().enumerate() {
        out.push_str(&format!("{}\n", day_label(offset, week_start)));

        for (m, meal) in day.meals.iter().enumerate() {
            out.push_str(&format!("  {}\n", meal_label(day.meals.len(), m)));

            for slot in &meal.slots {
                let lock = if slot.locked { " [verrouillé]" } else { "" };
                let line = match &slot.recipe {
                    Some(recipe) => format!(
                        "    [{}] {} — {} kcal{lock}\n",
                        slot.category,
                        recipe.title,
                        recipe_calories(Some(recipe))
                    ),
                    None => format!("    [{}] —{lock}\n", slot.category),
                };
                out.push_str(&line);
            }
        }

        out.push_str(&format!("  Total : {} kcal\n", day_calories(day)));
    }

    out
}
