use std::marker::PhantomData;

use color_eyre::eyre::eyre;
use sqlx::{postgres::PgRow, types::Json, FromRow, PgConnection, PgPool};

use crate::domain::{Entity, RecordId, RecordStore, RecordStoreError};

/// Table-per-entity store. Column names come from `E::FIELDS`; field values
/// are bound as one JSONB document and expanded with
/// `jsonb_populate_record`, so absent optionals land as SQL NULL.
pub struct PostgresRecordStore<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> PostgresRecordStore<E> {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

fn columns<E: Entity>() -> String {
    E::FIELDS
        .iter()
        .map(|field| field.name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn select_sql<E: Entity>() -> String {
    format!(
        "SELECT id, {columns} FROM {table} ORDER BY {sort} ASC, id ASC",
        columns = columns::<E>(),
        table = E::RESOURCE,
        sort = E::SORT_KEY,
    )
}

fn insert_sql<E: Entity>() -> String {
    format!(
        "INSERT INTO {table} ({columns}) SELECT {columns} FROM jsonb_populate_record(NULL::{table}, $1)",
        columns = columns::<E>(),
        table = E::RESOURCE,
    )
}

fn update_sql<E: Entity>() -> String {
    format!(
        "UPDATE {table} SET ({columns}) = (SELECT {columns} FROM jsonb_populate_record(NULL::{table}, $1)) WHERE id = $2",
        columns = columns::<E>(),
        table = E::RESOURCE,
    )
}

fn delete_sql<E: Entity>() -> String {
    format!("DELETE FROM {table} WHERE id = $1", table = E::RESOURCE)
}

fn unexpected(e: sqlx::Error) -> RecordStoreError {
    RecordStoreError::UnexpectedError(eyre!(e))
}

async fn fetch_sorted<E>(conn: &mut PgConnection) -> Result<Vec<E>, sqlx::Error>
where
    E: Entity + for<'r> FromRow<'r, PgRow>,
{
    let sql = select_sql::<E>();
    sqlx::query_as::<_, E>(&sql).fetch_all(conn).await
}

#[async_trait::async_trait]
impl<E> RecordStore<E> for PostgresRecordStore<E>
where
    E: Entity + for<'r> FromRow<'r, PgRow>,
{
    #[tracing::instrument(name = "Listing records from PostgreSQL", skip_all, fields(table = E::RESOURCE))]
    async fn list(&self) -> Result<Vec<E>, RecordStoreError> {
        let mut conn = self.pool.acquire().await.map_err(unexpected)?;
        fetch_sorted(&mut conn).await.map_err(unexpected)
    }

    #[tracing::instrument(name = "Adding record to PostgreSQL", skip_all, fields(table = E::RESOURCE))]
    async fn insert(
        &mut self,
        fields: &E::Fields,
    ) -> Result<Vec<E>, RecordStoreError> {
        let mut tx = self.pool.begin().await.map_err(unexpected)?;

        let sql = insert_sql::<E>();
        sqlx::query(&sql)
            .bind(Json(fields))
            .execute(&mut *tx)
            .await
            .map_err(unexpected)?;

        let items = fetch_sorted(&mut tx).await.map_err(unexpected)?;
        tx.commit().await.map_err(unexpected)?;
        Ok(items)
    }

    #[tracing::instrument(name = "Updating record in PostgreSQL", skip(self, fields), fields(table = E::RESOURCE))]
    async fn update(
        &mut self,
        id: RecordId,
        fields: &E::Fields,
    ) -> Result<Vec<E>, RecordStoreError> {
        let mut tx = self.pool.begin().await.map_err(unexpected)?;

        let sql = update_sql::<E>();
        let result = sqlx::query(&sql)
            .bind(Json(fields))
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(unexpected)?;
        if result.rows_affected() == 0 {
            return Err(RecordStoreError::RecordNotFound(id));
        }

        let items = fetch_sorted(&mut tx).await.map_err(unexpected)?;
        tx.commit().await.map_err(unexpected)?;
        Ok(items)
    }

    #[tracing::instrument(name = "Deleting record from PostgreSQL", skip(self), fields(table = E::RESOURCE))]
    async fn delete(
        &mut self,
        id: RecordId,
    ) -> Result<Vec<E>, RecordStoreError> {
        let mut tx = self.pool.begin().await.map_err(unexpected)?;

        let sql = delete_sql::<E>();
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(unexpected)?;
        if result.rows_affected() == 0 {
            return Err(RecordStoreError::RecordNotFound(id));
        }

        let items = fetch_sorted(&mut tx).await.map_err(unexpected)?;
        tx.commit().await.map_err(unexpected)?;
        Ok(items)
    }
}
