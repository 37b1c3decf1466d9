use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::repositories::crud::{CrudEntity, EntityValues};
use crate::validation::{RuleSet, ValidationRule};

/// User-defined field attached to tasks, e.g. "Sprint" = "2024-Q3".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CustomField {
    pub id: Uuid,
    pub name: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCustomField {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl EntityValues for CreateCustomField {
    fn values(&self) -> Vec<Option<String>> {
        vec![Some(self.name.clone()), Some(self.value.clone())]
    }
}

impl EntityValues for UpdateCustomField {
    fn values(&self) -> Vec<Option<String>> {
        vec![self.name.clone(), self.value.clone()]
    }
}

static CREATE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new()
        .field("name", vec![ValidationRule::required("Name is required")])
        .field("value", vec![ValidationRule::required("Value is required")])
});

impl CrudEntity for CustomField {
    const TABLE: &'static str = "custom_fields";
    const DATA_COLUMNS: &'static [&'static str] = &["name", "value"];
    type Create = CreateCustomField;
    type Update = UpdateCustomField;

    fn create_rules() -> &'static RuleSet {
        &CREATE_RULES
    }
}
