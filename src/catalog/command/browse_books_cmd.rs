use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::{CatalogPage, CatalogQuery};
use crate::core::command::{Command, CommandError};
use crate::core::storefront::{PageSize, SortOrder, StorefrontResult};

pub(crate) struct BrowseBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl BrowseBooksCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BrowseBooksCommandRequest {
    pub(crate) page: usize,
    pub(crate) page_size: u32,
    pub(crate) sort_order: SortOrder,
    #[serde(default)]
    pub(crate) categories: Vec<String>,
}

impl BrowseBooksCommandRequest {
    pub fn new(page: usize, page_size: u32, sort_order: SortOrder, categories: &[String]) -> Self {
        Self {
            page,
            page_size,
            sort_order,
            categories: categories.to_vec(),
        }
    }

    pub fn build_query(&self) -> StorefrontResult<CatalogQuery> {
        let page_size = PageSize::try_from(self.page_size)?;
        Ok(CatalogQuery::new(self.page, page_size, self.sort_order, &self.categories))
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BrowseBooksCommandResponse {
    pub books: Vec<Book>,
    pub total_books: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl BrowseBooksCommandResponse {
    pub fn new(query: &CatalogQuery, page: CatalogPage) -> Self {
        Self {
            total_pages: query.total_pages(page.total_books),
            has_previous: query.has_previous(),
            has_next: query.has_next(page.total_books),
            total_books: page.total_books,
            books: page.books,
        }
    }
}

#[async_trait]
impl Command<BrowseBooksCommandRequest, BrowseBooksCommandResponse> for BrowseBooksCommand {
    async fn execute(&self, req: BrowseBooksCommandRequest) -> Result<BrowseBooksCommandResponse, CommandError> {
        let query = req.build_query().map_err(CommandError::from)?;
        let page = self.catalog_service.browse_latest(&query).await.map_err(CommandError::from)?
            // superseded completion, nothing left to render
            .unwrap_or_else(CatalogPage::empty);
        Ok(BrowseBooksCommandResponse::new(&query, page))
    }
}
