use std::sync::Arc;

use tracing::{info, instrument};

use models::driver::{Model, NewDriver};

use crate::db::driver_store::DriverFilter;
use crate::driver::repository::DriverRepository;
use crate::errors::ServiceError;

/// Application service encapsulating driver business rules: dynamic search
/// filtering and the (name, year, team) uniqueness policy around writes.
pub struct DriverService<R: DriverRepository> {
    repo: Arc<R>,
}

impl<R: DriverRepository> DriverService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Search by the conjunction of the supplied criteria. A result with no
    /// rows is reported as not-found rather than an empty success.
    #[instrument(skip_all)]
    pub async fn search(&self, filter: &DriverFilter) -> Result<Vec<Model>, ServiceError> {
        let data = self.repo.find_matching(filter).await?;
        if data.is_empty() {
            return Err(ServiceError::NotFound("No results found".to_string()));
        }
        Ok(data)
    }

    /// Create a batch of drivers. Any candidate whose (name, year, team)
    /// triple is already persisted rejects the whole batch; the colliding
    /// candidates travel with the error. Checks run only against persisted
    /// rows, so identical candidates within one batch are all inserted.
    #[instrument(skip_all, fields(count = drivers.len()))]
    pub async fn add(&self, drivers: Vec<NewDriver>) -> Result<Vec<Model>, ServiceError> {
        let mut existing = Vec::new();
        for d in &drivers {
            if self.repo.exists_by_key(&d.name, d.year, &d.team).await? {
                existing.push(d.clone());
            }
        }
        if !existing.is_empty() {
            info!(conflicts = existing.len(), "driver_batch_rejected");
            return Err(ServiceError::conflict_with("Existing drivers detected", existing));
        }
        let created = self.repo.save_all(&drivers).await?;
        info!(count = created.len(), "drivers_created");
        Ok(created)
    }

    /// Replace year, name and team of an existing driver. The uniqueness
    /// check does not exclude the row under edit, so writing back a row's
    /// own unchanged triple reports a conflict.
    #[instrument(skip_all, fields(id = id))]
    pub async fn update(&self, id: i64, replacement: NewDriver) -> Result<Model, ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::driver_not_found(id));
        }
        if self
            .repo
            .exists_by_key(&replacement.name, replacement.year, &replacement.team)
            .await?
        {
            return Err(ServiceError::conflict("Driver already exists"));
        }
        let updated = self.repo.update_fields(id, &replacement).await?;
        info!(id = updated.id, "driver_updated");
        Ok(updated)
    }

    /// Delete by id, echoing the removed row's prior state.
    #[instrument(skip_all, fields(id = id))]
    pub async fn delete(&self, id: i64) -> Result<Model, ServiceError> {
        let Some(existing) = self.repo.find_by_id(id).await? else {
            return Err(ServiceError::driver_not_found(id));
        };
        self.repo.delete_by_id(id).await?;
        info!(id = id, "driver_deleted");
        Ok(existing)
    }
}
