pub mod command;
pub mod domain;
pub mod repository;
pub mod storefront;
