use reqwest::Client;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::catalog::repository::CatalogRepository;
use crate::catalog::repository::http_catalog_repository::HttpCatalogRepository;
use crate::core::domain::Configuration;

pub(crate) async fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    let catalog_repo: Box<dyn CatalogRepository> = Box::new(
        HttpCatalogRepository::new(Client::new(), config.catalog_base_url.as_str()));
    Box::new(CatalogServiceImpl::new(config, catalog_repo))
}
