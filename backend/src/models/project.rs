use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::repositories::crud::{CrudEntity, EntityValues};
use crate::validation::{RuleSet, ValidationRule};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProject {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl EntityValues for CreateProject {
    fn values(&self) -> Vec<Option<String>> {
        vec![Some(self.name.clone()), self.description.clone()]
    }
}

impl EntityValues for UpdateProject {
    fn values(&self) -> Vec<Option<String>> {
        vec![self.name.clone(), self.description.clone()]
    }
}

static CREATE_RULES: LazyLock<RuleSet> = LazyLock::new(|| {
    RuleSet::new().field("name", vec![ValidationRule::required("Name is required")])
});

impl CrudEntity for Project {
    const TABLE: &'static str = "projects";
    const DATA_COLUMNS: &'static [&'static str] = &["name", "description"];
    type Create = CreateProject;
    type Update = UpdateProject;

    fn create_rules() -> &'static RuleSet {
        &CREATE_RULES
    }
}
