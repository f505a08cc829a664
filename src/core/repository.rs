use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::storefront::StorefrontResult;

// Repository over a whole serialized state slot rather than per-entity rows;
// client-local state like the cart persists as one collection value.
#[async_trait]
pub trait StateRepository<State>: Sync + Send {
    // load the persisted state, empty default when nothing was stored yet
    async fn load(&self) -> StorefrontResult<State>;

    // replace the persisted state with the given snapshot
    async fn save(&self, state: &State) -> StorefrontResult<()>;

    // remove the persisted state entirely
    async fn clear(&self) -> StorefrontResult<()>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    LocalFile,
    InMemory,
}
