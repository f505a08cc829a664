use crate::cart::domain::CartService;
use crate::cart::domain::service::CartServiceImpl;
use crate::cart::repository::CartRepository;
use crate::cart::repository::file_cart_repository::FileCartRepository;
use crate::cart::repository::memory_cart_repository::MemoryCartRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

pub(crate) async fn create_cart_service(config: &Configuration, store: RepositoryStore) -> Box<dyn CartService> {
    let cart_repo: Box<dyn CartRepository> = match store {
        RepositoryStore::LocalFile => {
            Box::new(FileCartRepository::new(config.cart_dir.as_path()))
        }
        RepositoryStore::InMemory => {
            Box::new(MemoryCartRepository::new())
        }
    };
    Box::new(CartServiceImpl::load(cart_repo).await)
}
