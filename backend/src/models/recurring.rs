use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::repositories::crud::{CrudEntity, EntityValues};
use crate::validation::{RuleSet, ValidationRule};

/// Recurrence pattern for repeating tasks ("daily", "every monday", a cron
/// string, ...). Stored verbatim; interpretation happens in the scheduler
/// that consumes it, not here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecurringRule {
    pub id: Uuid,
    pub pattern: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecurringRule {
    pub pattern: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRecurringRule {
    pub pattern: Option<String>,
}

impl EntityValues for CreateRecurringRule {
    fn values(&self) -> Vec<Option<String>> {
        vec![Some(self.pattern.clone())]
    }
}

impl EntityValues for UpdateRecurringRule {
    fn values(&self) -> Vec<Option<String>> {
        vec![self.pattern.clone()]
    }
}

static CREATE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new().field(
        "pattern",
        vec![ValidationRule::required("Pattern is required")],
    )
});

impl CrudEntity for RecurringRule {
    const TABLE: &'static str = "recurring_rules";
    const DATA_COLUMNS: &'static [&'static str] = &["pattern"];
    type Create = CreateRecurringRule;
    type Update = UpdateRecurringRule;

    fn create_rules() -> &'static RuleSet {
        &CREATE_RULES
    }
}
