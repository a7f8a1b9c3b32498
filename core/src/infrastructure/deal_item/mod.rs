pub mod repositories;

pub use repositories::InMemoryDealStore;
