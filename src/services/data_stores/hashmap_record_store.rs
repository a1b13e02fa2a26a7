use std::collections::HashMap;

use crate::domain::{Entity, RecordId, RecordStore, RecordStoreError};

pub struct HashmapRecordStore<E: Entity> {
    records: HashMap<RecordId, E>,
    next_id: i64,
}

impl<E: Entity> Default for HashmapRecordStore<E> {
    fn default() -> Self {
        Self {
            records: HashMap::new(),
            next_id: 1,
        }
    }
}

impl<E: Entity> HashmapRecordStore<E> {
    /// Case-insensitive order, ties broken by exact text and then id. Close
    /// to a database's linguistic collation, though not identical to it.
    fn sorted(&self) -> Vec<E> {
        let mut items: Vec<E> = self.records.values().cloned().collect();
        items.sort_by(|a, b| {
            a.sort_value()
                .to_lowercase()
                .cmp(&b.sort_value().to_lowercase())
                .then_with(|| a.sort_value().cmp(b.sort_value()))
                .then_with(|| a.id().cmp(&b.id()))
        });
        items
    }
}

#[async_trait::async_trait]
impl<E: Entity> RecordStore<E> for HashmapRecordStore<E> {
    async fn list(&self) -> Result<Vec<E>, RecordStoreError> {
        Ok(self.sorted())
    }

    async fn insert(
        &mut self,
        fields: &E::Fields,
    ) -> Result<Vec<E>, RecordStoreError> {
        let id = RecordId::new(self.next_id);
        self.next_id += 1;
        self.records.insert(id, E::from_parts(id, fields.clone()));
        Ok(self.sorted())
    }

    async fn update(
        &mut self,
        id: RecordId,
        fields: &E::Fields,
    ) -> Result<Vec<E>, RecordStoreError> {
        match self.records.get_mut(&id) {
            Some(record) => *record = E::from_parts(id, fields.clone()),
            None => return Err(RecordStoreError::RecordNotFound(id)),
        }
        Ok(self.sorted())
    }

    async fn delete(
        &mut self,
        id: RecordId,
    ) -> Result<Vec<E>, RecordStoreError> {
        match self.records.remove(&id) {
            Some(_) => Ok(self.sorted()),
            None => Err(RecordStoreError::RecordNotFound(id)),
        }
    }
}
