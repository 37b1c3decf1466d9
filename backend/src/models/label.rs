use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::repositories::crud::{CrudEntity, EntityValues};
use crate::validation::{RuleSet, ValidationRule};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Label {
    pub id: Uuid,
    pub name: String,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateLabel {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLabel {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl EntityValues for CreateLabel {
    fn values(&self) -> Vec<Option<String>> {
        vec![Some(self.name.clone()), self.color.clone()]
    }
}

impl EntityValues for UpdateLabel {
    fn values(&self) -> Vec<Option<String>> {
        vec![self.name.clone(), self.color.clone()]
    }
}

static CREATE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new().field("name", vec![ValidationRule::required("Name is required")])
});

impl CrudEntity for Label {
    const TABLE: &'static str = "labels";
    const DATA_COLUMNS: &'static [&'static str] = &["name", "color"];
    type Create = CreateLabel;
    type Update = UpdateLabel;

    fn create_rules() -> &'static RuleSet {
        &CREATE_RULES
    }
}
