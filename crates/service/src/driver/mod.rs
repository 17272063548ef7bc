pub mod repository;
pub mod service;

pub use repository::{DriverRepository, SeaOrmDriverRepository};
pub use service::DriverService;
