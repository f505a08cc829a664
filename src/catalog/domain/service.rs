use std::sync::atomic::{AtomicU64, Ordering};
use async_trait::async_trait;
use tracing::warn;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::{CatalogPage, CatalogQuery};
use crate::catalog::repository::CatalogRepository;
use crate::core::domain::Configuration;
use crate::core::storefront::StorefrontResult;

// Hands out monotonically increasing tickets so a completed fetch can tell
// whether a later browse was issued while it was in flight. Fetches are not
// cancellable; superseded completions are dropped instead.
pub(crate) struct RequestSequencer {
    issued: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
        }
    }

    pub fn ticket(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket
    }
}

pub(crate) struct CatalogServiceImpl {
    catalog_repository: Box<dyn CatalogRepository>,
    sequencer: RequestSequencer,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, catalog_repository: Box<dyn CatalogRepository>) -> Self {
        Self {
            catalog_repository,
            sequencer: RequestSequencer::new(),
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn browse(&self, query: &CatalogQuery) -> StorefrontResult<CatalogPage> {
        match self.catalog_repository.fetch(query).await {
            Ok(page) => Ok(page),
            Err(err) => {
                warn!("catalog fetch failed for page {}: {}", query.page, err);
                Ok(CatalogPage::empty())
            }
        }
    }

    async fn browse_latest(&self, query: &CatalogQuery) -> StorefrontResult<Option<CatalogPage>> {
        let ticket = self.sequencer.ticket();
        let page = self.browse(query).await?;
        if !self.sequencer.is_latest(ticket) {
            return Ok(None);
        }
        Ok(Some(page))
    }
}
