use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::driver::{Model, NewDriver};

use crate::db::driver_store::{self, DriverFilter};
use crate::errors::ServiceError;

/// Persistence capability set the driver service is written against.
#[async_trait]
pub trait DriverRepository: Send + Sync {
    async fn find_matching(&self, filter: &DriverFilter) -> Result<Vec<Model>, ServiceError>;
    async fn exists_by_key(&self, name: &str, year: i32, team: &str) -> Result<bool, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Model>, ServiceError>;
    async fn save_all(&self, drivers: &[NewDriver]) -> Result<Vec<Model>, ServiceError>;
    async fn update_fields(&self, id: i64, replacement: &NewDriver) -> Result<Model, ServiceError>;
    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmDriverRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl DriverRepository for SeaOrmDriverRepository {
    async fn find_matching(&self, filter: &DriverFilter) -> Result<Vec<Model>, ServiceError> {
        driver_store::find_drivers(&self.db, filter).await
    }

    async fn exists_by_key(&self, name: &str, year: i32, team: &str) -> Result<bool, ServiceError> {
        driver_store::exists_by_key(&self.db, name, year, team).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Model>, ServiceError> {
        driver_store::find_by_id(&self.db, id).await
    }

    async fn save_all(&self, drivers: &[NewDriver]) -> Result<Vec<Model>, ServiceError> {
        driver_store::insert_drivers(&self.db, drivers).await
    }

    async fn update_fields(&self, id: i64, replacement: &NewDriver) -> Result<Model, ServiceError> {
        driver_store::update_driver(&self.db, id, replacement).await
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        driver_store::delete_by_id(&self.db, id).await
    }
}
