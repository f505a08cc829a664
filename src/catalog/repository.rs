pub mod http_catalog_repository;

use async_trait::async_trait;
use crate::catalog::domain::model::{CatalogPage, CatalogQuery};
use crate::core::storefront::StorefrontResult;

#[async_trait]
pub(crate) trait CatalogRepository: Sync + Send {
    // one request, one parsed page; the caller decides how to recover
    async fn fetch(&self, query: &CatalogQuery) -> StorefrontResult<CatalogPage>;
}
