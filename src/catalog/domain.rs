pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::catalog::domain::model::{CatalogPage, CatalogQuery};
use crate::core::storefront::StorefrontResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    // single best-effort fetch; a transport or parse failure comes back as an
    // empty page and is only reported to the log
    async fn browse(&self, query: &CatalogQuery) -> StorefrontResult<CatalogPage>;

    // browse that yields None when a later browse was issued before this one
    // completed, so only the latest user intent reaches the caller
    async fn browse_latest(&self, query: &CatalogQuery) -> StorefrontResult<Option<CatalogPage>>;
}
