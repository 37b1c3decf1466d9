use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::repositories::crud::{CrudEntity, EntityValues};
use crate::validation::{RuleSet, ValidationRule};

/// Reminder time is a required string stored verbatim (the clients submit
/// whatever their picker produces); it is not parsed into a timestamp here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reminder {
    pub id: Uuid,
    pub time: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateReminder {
    pub time: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReminder {
    pub time: Option<String>,
}

impl EntityValues for CreateReminder {
    fn values(&self) -> Vec<Option<String>> {
        vec![Some(self.time.clone())]
    }
}

impl EntityValues for UpdateReminder {
    fn values(&self) -> Vec<Option<String>> {
        vec![self.time.clone()]
    }
}

static CREATE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new().field("time", vec![ValidationRule::required("Time is required")])
});

impl CrudEntity for Reminder {
    const TABLE: &'static str = "reminders";
    const DATA_COLUMNS: &'static [&'static str] = &["time"];
    type Create = CreateReminder;
    type Update = UpdateReminder;

    fn create_rules() -> &'static RuleSet {
        &CREATE_RULES
    }
}
