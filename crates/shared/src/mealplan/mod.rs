use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::recipe::{MealTime, Recipe};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    #[strum(to_string = "monday", serialize = "lundi")]
    #[serde(alias = "lundi")]
    Monday,
    #[strum(to_string = "tuesday", serialize = "mardi")]
    #[serde(alias = "mardi")]
    Tuesday,
    #[strum(to_string = "wednesday", serialize = "mercredi")]
    #[serde(alias = "mercredi")]
    Wednesday,
    #[strum(to_string = "thursday", serialize = "jeudi")]
    #[serde(alias = "jeudi")]
    Thursday,
    #[strum(to_string = "friday", serialize = "vendredi")]
    #[serde(alias = "vendredi")]
    Friday,
    #[strum(to_string = "saturday", serialize = "samedi")]
    #[serde(alias = "samedi")]
    Saturday,
    #[strum(to_string = "sunday", serialize = "dimanche")]
    #[serde(alias = "dimanche")]
    Sunday,
}

impl Weekday {
    /// Capitalized name used in printed reports.
    pub fn title(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

/// The two meal assignments of one weekday, with recipes resolved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DaySlots {
    pub day: Weekday,
    pub midday: Option<Recipe>,
    pub evening: Option<Recipe>,
}

impl DaySlots {
    pub fn empty(day: Weekday) -> Self {
        Self {
            day,
            midday: None,
            evening: None,
        }
    }

    pub fn slot(&self, meal_time: MealTime) -> Option<&Recipe> {
        match meal_time {
            MealTime::Midday => self.midday.as_ref(),
            MealTime::Evening => self.evening.as_ref(),
        }
    }

    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.midday.iter().chain(self.evening.iter())
    }
}

/// Seven [`DaySlots`], always ordered Monday to Sunday.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeeklyPlan(Vec<DaySlots>);

impl Default for WeeklyPlan {
    fn default() -> Self {
        Self(
            Weekday::VARIANTS
                .iter()
                .map(|day| DaySlots::empty(*day))
                .collect(),
        )
    }
}

impl WeeklyPlan {
    /// Builds a plan from stored days. Missing days read as empty, later
    /// duplicates replace earlier ones.
    pub fn from_days(days: impl IntoIterator<Item = DaySlots>) -> Self {
        let mut plan = Self::default();

        for slots in days {
            plan.set(slots);
        }

        plan
    }

    pub fn set(&mut self, slots: DaySlots) {
        let index = slots.day as usize;
        self.0[index] = slots;
    }

    pub fn get(&self, day: Weekday) -> &DaySlots {
        &self.0[day as usize]
    }

    pub fn days(&self) -> &[DaySlots] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|d| d.midday.is_none() && d.evening.is_none())
    }

    pub fn into_days(self) -> Vec<DaySlots> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn default_plan_has_seven_empty_days_in_order() {
        let plan = WeeklyPlan::default();

        assert_eq!(plan.days().len(), 7);
        assert_eq!(plan.days()[0].day, Weekday::Monday);
        assert_eq!(plan.days()[6].day, Weekday::Sunday);
        assert!(plan.is_empty());
    }

    #[test]
    fn from_days_places_each_day_by_key() {
        let plan = WeeklyPlan::from_days([DaySlots::empty(Weekday::Friday)]);

        assert_eq!(plan.get(Weekday::Friday).day, Weekday::Friday);
        assert_eq!(plan.get(Weekday::Monday).day, Weekday::Monday);
    }

    #[test]
    fn french_day_keys_are_accepted() {
        assert_eq!(Weekday::from_str("mercredi").unwrap(), Weekday::Wednesday);
        assert_eq!(Weekday::from_str("sunday").unwrap(), Weekday::Sunday);
        assert!(Weekday::from_str("someday").is_err());
        assert_eq!(Weekday::Thursday.to_string(), "thursday");
    }
}
