use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::repositories::crud::{CrudEntity, EntityValues};
use crate::validation::{RuleSet, ValidationRule};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTag {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTag {
    pub name: Option<String>,
}

impl EntityValues for CreateTag {
    fn values(&self) -> Vec<Option<String>> {
        vec![Some(self.name.clone())]
    }
}

impl EntityValues for UpdateTag {
    fn values(&self) -> Vec<Option<String>> {
        vec![self.name.clone()]
    }
}

static CREATE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new().field("name", vec![ValidationRule::required("Name is required")])
});

impl CrudEntity for Tag {
    const TABLE: &'static str = "tags";
    const DATA_COLUMNS: &'static [&'static str] = &["name"];
    type Create = CreateTag;
    type Update = UpdateTag;

    fn create_rules() -> &'static RuleSet {
        &CREATE_RULES
    }
}
