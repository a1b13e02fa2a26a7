use std::marker::PhantomData;

use color_eyre::eyre::{eyre, Result, WrapErr};
use reqwest::{Client, RequestBuilder, Url};
use secrecy::{ExposeSecret, Secret};

use crate::domain::{Entity, RecordId, RecordStore, RecordStoreError};

/// Store backed by a hosted PostgREST endpoint such as Supabase's
/// `/rest/v1` API.
pub struct PostgrestRecordStore<E> {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> PostgrestRecordStore<E> {
    pub fn new(
        base_url: String,
        api_key: Secret<String>,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
            _entity: PhantomData,
        }
    }

    fn table_url(&self) -> Result<Url> {
        let base = Url::parse(&self.base_url).wrap_err("invalid PostgREST URL")?;
        base.join(&format!("rest/v1/{}", E::RESOURCE))
            .wrap_err("failed to build table URL")
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
    }

    async fn fetch_sorted(&self) -> Result<Vec<E>> {
        let order = format!("{}.asc,id.asc", E::SORT_KEY);
        let request = self
            .http_client
            .get(self.table_url()?)
            .query(&[("select", "*"), ("order", order.as_str())]);

        self.authorized(request)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<E>>()
            .await
            .wrap_err("failed to decode rows")
    }

    /// Sends a write filtered to one row and reports whether that row
    /// existed.
    async fn write_one(
        &self,
        request: RequestBuilder,
        id: RecordId,
    ) -> Result<bool> {
        let rows = self
            .authorized(request)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<serde_json::Value>>()
            .await
            .wrap_err("failed to decode written rows")?;
        Ok(!rows.is_empty())
    }
}

fn unexpected(e: color_eyre::eyre::Report) -> RecordStoreError {
    RecordStoreError::UnexpectedError(e)
}

#[async_trait::async_trait]
impl<E: Entity> RecordStore<E> for PostgrestRecordStore<E> {
    #[tracing::instrument(name = "Listing records from PostgREST", skip_all, fields(table = E::RESOURCE))]
    async fn list(&self) -> Result<Vec<E>, RecordStoreError> {
        self.fetch_sorted().await.map_err(unexpected)
    }

    #[tracing::instrument(name = "Adding record via PostgREST", skip_all, fields(table = E::RESOURCE))]
    async fn insert(
        &mut self,
        fields: &E::Fields,
    ) -> Result<Vec<E>, RecordStoreError> {
        let url = self.table_url().map_err(unexpected)?;
        let request = self
            .http_client
            .post(url)
            .header("Prefer", "return=minimal")
            .json(fields);

        self.authorized(request)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| unexpected(eyre!(e)))?;

        self.fetch_sorted().await.map_err(unexpected)
    }

    #[tracing::instrument(name = "Updating record via PostgREST", skip(self, fields), fields(table = E::RESOURCE))]
    async fn update(
        &mut self,
        id: RecordId,
        fields: &E::Fields,
    ) -> Result<Vec<E>, RecordStoreError> {
        let url = self.table_url().map_err(unexpected)?;
        let request = self.http_client.patch(url).json(fields);

        if !self.write_one(request, id).await.map_err(unexpected)? {
            return Err(RecordStoreError::RecordNotFound(id));
        }
        self.fetch_sorted().await.map_err(unexpected)
    }

    #[tracing::instrument(name = "Deleting record via PostgREST", skip(self), fields(table = E::RESOURCE))]
    async fn delete(
        &mut self,
        id: RecordId,
    ) -> Result<Vec<E>, RecordStoreError> {
        let url = self.table_url().map_err(unexpected)?;
        let request = self.http_client.delete(url);

        if !self.write_one(request, id).await.map_err(unexpected)? {
            return Err(RecordStoreError::RecordNotFound(id));
        }
        self.fetch_sorted().await.map_err(unexpected)
    }
}
