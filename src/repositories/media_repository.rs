use uuid::Uuid;

use crate::models::verification::MediaRecord;
use crate::state::Store;

pub struct MediaRepository {
    store: Store,
}

impl MediaRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub async fn insert(&self, record: MediaRecord) -> MediaRecord {
        let mut media = self.store.media.write().await;
        media.insert(record.id, record.clone());
        record
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<MediaRecord> {
        let media = self.store.media.read().await;
        media.get(&id).cloned()
    }
}
