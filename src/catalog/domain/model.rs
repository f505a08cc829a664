use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::core::storefront::{PageSize, SortOrder};

// Catalog browsing state: the 1-based page plus the knobs whose change
// triggers a refetch. Changing page size, sort or filters does not move the
// page back to 1; the caller owns that decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CatalogQuery {
    pub page: usize,
    pub page_size: PageSize,
    pub sort_order: SortOrder,
    pub categories: Vec<String>,
}

impl CatalogQuery {
    pub fn new(page: usize, page_size: PageSize, sort_order: SortOrder,
               categories: &[String]) -> Self {
        Self {
            page,
            page_size,
            sort_order,
            categories: categories.to_vec(),
        }
    }

    // Request parameters for GET /api/Book; each selected category is a
    // repeated bookCategory parameter and the parameter is absent when no
    // category is selected, which the server reads as "all categories".
    pub fn query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("pageSize".to_string(), self.page_size.count().to_string()),
            ("sortOrder".to_string(), self.sort_order.to_string()),
        ];
        for category in &self.categories {
            params.push(("bookCategory".to_string(), category.to_string()));
        }
        params
    }

    pub fn total_pages(&self, total_books: usize) -> usize {
        (total_books + self.page_size.count() - 1) / self.page_size.count()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    // computed from the reported total, not server-confirmed
    pub fn has_next(&self, total_books: usize) -> bool {
        self.page < self.total_pages(total_books)
    }
}

// One page of the remote catalog as the service returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CatalogPage {
    pub books: Vec<Book>,
    #[serde(rename = "totalBooks")]
    pub total_books: usize,
}

impl CatalogPage {
    pub fn empty() -> Self {
        Self {
            books: vec![],
            total_books: 0,
        }
    }
}
