//! Finco Repository - product storage
//!
//! `ProductRepository` is the storage seam used by the company service.
//! `InMemoryProductRepository` keeps products for the lifetime of the
//! process, indexed by product number and by owning customer.

pub mod memory;
pub mod traits;

pub use memory::InMemoryProductRepository;
pub use traits::ProductRepository;
