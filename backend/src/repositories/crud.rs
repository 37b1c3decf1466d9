//! Generic CRUD repository.
//!
//! The custom-entity catalog (labels, tags, statuses, priorities, custom
//! fields, recurring rules, reminders, projects) shares one storage contract:
//! create, list, partial update, delete. Instead of eight near-identical
//! repository modules, each entity describes its table and data columns via
//! [`CrudEntity`] and a single [`CrudRepository`] implements the SQL once.
//!
//! All data columns are text; create/update payloads surface their column
//! values through [`EntityValues`] in `DATA_COLUMNS` order.

use std::marker::PhantomData;

use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::error::AppError;
use crate::validation::RuleSet;

/// Column values of a create or update payload, aligned positionally with
/// [`CrudEntity::DATA_COLUMNS`]. `None` on update means "keep the stored
/// value"; required create fields are always `Some` by construction.
pub trait EntityValues {
    fn values(&self) -> Vec<Option<String>>;
}

/// Storage description of a uniform CRUD entity.
pub trait CrudEntity:
    for<'r> FromRow<'r, PgRow> + Serialize + Unpin + Send + Sync + 'static
{
    const TABLE: &'static str;
    /// Data columns besides `id`, `created_at` and `updated_at`.
    const DATA_COLUMNS: &'static [&'static str];

    type Create: EntityValues + DeserializeOwned + Send + Sync + 'static;
    type Update: EntityValues + DeserializeOwned + Send + Sync + 'static;

    /// Rules applied to the raw JSON body before a create is attempted.
    fn create_rules() -> &'static RuleSet;
}

#[derive(Debug)]
pub struct CrudRepository<E: CrudEntity> {
    _marker: PhantomData<E>,
}

impl<E: CrudEntity> Default for CrudRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CrudEntity> CrudRepository<E> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    fn select_columns() -> String {
        format!("id, {}, created_at, updated_at", E::DATA_COLUMNS.join(", "))
    }

    fn insert_sql() -> String {
        let column_count = E::DATA_COLUMNS.len();
        let placeholders = (0..column_count)
            .map(|i| format!("${}", i + 2))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} (id, {}, created_at, updated_at) VALUES ($1, {}, ${}, ${}) RETURNING {}",
            E::TABLE,
            E::DATA_COLUMNS.join(", "),
            placeholders,
            column_count + 2,
            column_count + 3,
            Self::select_columns()
        )
    }

    fn update_sql() -> String {
        let column_count = E::DATA_COLUMNS.len();
        let assignments = E::DATA_COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = COALESCE(${}, {column})", i + 2))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE {} SET {}, updated_at = ${} WHERE id = $1 RETURNING {}",
            E::TABLE,
            assignments,
            column_count + 2,
            Self::select_columns()
        )
    }

    pub async fn create(&self, db: &PgPool, data: &E::Create) -> Result<E, AppError> {
        let query = Self::insert_sql();
        let now = Utc::now();
        let mut q = sqlx::query_as::<_, E>(&query).bind(Uuid::new_v4());
        for value in data.values() {
            q = q.bind(value);
        }
        let row = q.bind(now).bind(now).fetch_one(db).await?;
        Ok(row)
    }

    pub async fn find_all(&self, db: &PgPool) -> Result<Vec<E>, AppError> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY created_at ASC",
            Self::select_columns(),
            E::TABLE
        );
        let rows = sqlx::query_as::<_, E>(&query).fetch_all(db).await?;
        Ok(rows)
    }

    /// Partial update. Omitted fields keep their stored value; `None` means
    /// the id does not exist.
    pub async fn update(
        &self,
        db: &PgPool,
        id: Uuid,
        changes: &E::Update,
    ) -> Result<Option<E>, AppError> {
        let query = Self::update_sql();
        let mut q = sqlx::query_as::<_, E>(&query).bind(id);
        for value in changes.values() {
            q = q.bind(value);
        }
        let row = q.bind(Utc::now()).fetch_optional(db).await?;
        Ok(row)
    }

    /// Returns whether a record existed and was removed.
    pub async fn delete(&self, db: &PgPool, id: Uuid) -> Result<bool, AppError> {
        let query = format!("DELETE FROM {} WHERE id = $1", E::TABLE);
        let result = sqlx::query(&query).bind(id).execute(db).await?;
        Ok(result.rows_affected() > 0)
    }
}
