pub mod file_cart_repository;
pub mod memory_cart_repository;

use crate::cart::domain::model::CartItem;
use crate::core::repository::StateRepository;

// The cart persists as a single serialized collection slot.
pub(crate) trait CartRepository: StateRepository<Vec<CartItem>> {}
