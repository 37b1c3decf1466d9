use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::repositories::crud::{CrudEntity, EntityValues};
use crate::validation::{RuleSet, ValidationRule};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Status {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateStatus {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStatus {
    pub name: Option<String>,
}

impl EntityValues for CreateStatus {
    fn values(&self) -> Vec<Option<String>> {
        vec![Some(self.name.clone())]
    }
}

impl EntityValues for UpdateStatus {
    fn values(&self) -> Vec<Option<String>> {
        vec![self.name.clone()]
    }
}

static CREATE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new().field("name", vec![ValidationRule::required("Name is required")])
});

impl CrudEntity for Status {
    const TABLE: &'static str = "statuses";
    const DATA_COLUMNS: &'static [&'static str] = &["name"];
    type Create = CreateStatus;
    type Update = UpdateStatus;

    fn create_rules() -> &'static RuleSet {
        &CREATE_RULES
    }
}
