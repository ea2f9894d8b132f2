use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Handles of the per-community daily posting jobs, keyed by community id.
#[derive(Clone, Default)]
pub struct DailyPostJobs {
    jobs: Arc<RwLock<HashMap<String, JoinHandle<()>>>>,
}

impl DailyPostJobs {
    pub async fn is_running(&self, community_id: &str) -> bool {
        self.jobs.read().await.contains_key(community_id)
    }

    /// Registers a job handle unless one is already registered for the
    /// community; a rejected handle is aborted on the spot.
    pub async fn register(&self, community_id: &str, handle: JoinHandle<()>) -> bool {
        match self.jobs.write().await.entry(community_id.to_string()) {
            Entry::Occupied(_) => {
                handle.abort();
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(handle);
                true
            }
        }
    }

    pub async fn cancel(&self, community_id: &str) -> bool {
        match self.jobs.write().await.remove(community_id) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}
