use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::repositories::crud::{CrudEntity, EntityValues};
use crate::validation::{RuleSet, ValidationRule};

/// Priority levels are free-form strings ("urgent", "3", ...) ordered by
/// the frontend, not by this service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Priority {
    pub id: Uuid,
    pub name: String,
    pub level: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePriority {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePriority {
    pub name: Option<String>,
    pub level: Option<String>,
}

impl EntityValues for CreatePriority {
    fn values(&self) -> Vec<Option<String>> {
        vec![Some(self.name.clone()), Some(self.level.clone())]
    }
}

impl EntityValues for UpdatePriority {
    fn values(&self) -> Vec<Option<String>> {
        vec![self.name.clone(), self.level.clone()]
    }
}

static CREATE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .field("name", vec![ValidationRule::required("Name is required")])
        .field("level", vec![ValidationRule::required("Level is required")])
});

impl CrudEntity for Priority {
    const TABLE: &'static str = "priorities";
    const DATA_COLUMNS: &'static [&'static str] = &["name", "level"];
    type Create = CreatePriority;
    type Update = UpdatePriority;

    fn create_rules() -> &'static RuleSet {
        &CREATE_RULES
    }
}
