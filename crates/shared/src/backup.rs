use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::mealplan::{WeeklyPlan, Weekday};
use crate::recipe::Recipe;

pub const BACKUP_VERSION: &str = "1.0";

fn default_version() -> String {
    BACKUP_VERSION.to_owned()
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BackupDay {
    #[serde(default, alias = "midi")]
    pub midday: Option<Recipe>,
    #[serde(default, alias = "soir")]
    pub evening: Option<Recipe>,
}

/// Portable snapshot of the whole catalog and plan.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub weekly_plan: BTreeMap<Weekday, BackupDay>,
    #[serde(default = "default_version")]
    pub version: String,
}

impl Backup {
    pub fn new(recipes: Vec<Recipe>, plan: &WeeklyPlan) -> Self {
        let weekly_plan = plan
            .days()
            .iter()
            .map(|slots| {
                (
                    slots.day,
                    BackupDay {
                        midday: slots.midday.clone(),
                        evening: slots.evening.clone(),
                    },
                )
            })
            .collect();

        Self {
            recipes,
            weekly_plan,
            version: BACKUP_VERSION.to_owned(),
        }
    }

    pub fn is_supported_version(&self) -> bool {
        self.version.split('.').next() == Some("1")
    }
}
