use models::driver::NewDriver;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),
    /// Uniqueness violation. For batch creation `drivers` carries the
    /// colliding candidates so callers can echo them back; for updates it is
    /// empty.
    #[error("{message}")]
    Conflict { message: String, drivers: Vec<NewDriver> },
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn driver_not_found(id: i64) -> Self {
        Self::NotFound(format!("Driver with ID {} does not exist", id))
    }

    pub fn conflict(message: &str) -> Self {
        Self::Conflict { message: message.to_string(), drivers: Vec::new() }
    }

    pub fn conflict_with(message: &str, drivers: Vec<NewDriver>) -> Self {
        Self::Conflict { message: message.to_string(), drivers }
    }
}
