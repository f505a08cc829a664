use async_trait::async_trait;
use reqwest::Client;
use crate::catalog::domain::model::{CatalogPage, CatalogQuery};
use crate::catalog::repository::CatalogRepository;
use crate::core::storefront::{StorefrontError, StorefrontResult};

#[derive(Debug)]
pub struct HttpCatalogRepository {
    client: Client,
    base_url: String,
}

impl HttpCatalogRepository {
    pub(crate) fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/api/Book", self.base_url)
    }
}

#[async_trait]
impl CatalogRepository for HttpCatalogRepository {
    async fn fetch(&self, query: &CatalogQuery) -> StorefrontResult<CatalogPage> {
        let response = self.client
            .get(self.endpoint())
            .query(&query.query_params())
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StorefrontError::api(
                format!("catalog request for page {} failed", query.page).as_str(),
                Some(status.as_u16())));
        }
        response.json::<CatalogPage>().await.map_err(StorefrontError::from)
    }
}
