//! Document storage for products.

mod memory_repo;

pub use memory_repo::InMemoryProductsRepository;
