use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use models::driver::{self, Entity as DriverEntity, NewDriver};

use crate::errors::ServiceError;

/// Optional search criteria; absent fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverFilter {
    pub name: Option<String>,
    pub team: Option<String>,
    pub position: Option<i32>,
    pub year: Option<i32>,
}

/// Find drivers matching the conjunction of all supplied criteria, ordered by
/// id ascending. Name and team are case-sensitive substring matches; position
/// and year are exact.
pub async fn find_drivers(
    db: &DatabaseConnection,
    filter: &DriverFilter,
) -> Result<Vec<driver::Model>, ServiceError> {
    let mut cond = Condition::all();
    if let Some(name) = filter.name.as_deref() {
        cond = cond.add(driver::Column::Name.contains(name));
    }
    if let Some(team) = filter.team.as_deref() {
        cond = cond.add(driver::Column::Team.contains(team));
    }
    if let Some(position) = filter.position {
        cond = cond.add(driver::Column::Position.eq(position));
    }
    if let Some(year) = filter.year {
        cond = cond.add(driver::Column::Year.eq(year));
    }
    DriverEntity::find()
        .filter(cond)
        .order_by_asc(driver::Column::Id)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// True when a persisted row already carries this (name, year, team) triple.
pub async fn exists_by_key(
    db: &DatabaseConnection,
    name: &str,
    year: i32,
    team: &str,
) -> Result<bool, ServiceError> {
    let found = DriverEntity::find()
        .filter(driver::Column::Name.eq(name))
        .filter(driver::Column::Year.eq(year))
        .filter(driver::Column::Team.eq(team))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found.is_some())
}

pub async fn find_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<driver::Model>, ServiceError> {
    DriverEntity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Insert every candidate, returning the created rows with ids populated.
/// Uniqueness has already been decided by the caller at this point.
pub async fn insert_drivers(
    db: &DatabaseConnection,
    drivers: &[NewDriver],
) -> Result<Vec<driver::Model>, ServiceError> {
    let mut created = Vec::with_capacity(drivers.len());
    for d in drivers {
        let row = d
            .active_model()
            .insert(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        created.push(row);
    }
    Ok(created)
}

/// Overwrite year, name and team of an existing row inside one transaction.
/// Position is deliberately left untouched.
pub async fn update_driver(
    db: &DatabaseConnection,
    id: i64,
    replacement: &NewDriver,
) -> Result<driver::Model, ServiceError> {
    let txn = db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let existing = DriverEntity::find_by_id(id)
        .one(&txn)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::driver_not_found(id))?;
    let mut am: driver::ActiveModel = existing.into();
    am.year = Set(replacement.year);
    am.name = Set(replacement.name.clone());
    am.team = Set(replacement.team.clone());
    let updated = am.update(&txn).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete a driver; returns true if a row was removed.
pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<bool, ServiceError> {
    let res = DriverEntity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use uuid::Uuid;

    fn candidate(name: &str, team: &str, position: i32, year: i32) -> NewDriver {
        NewDriver { name: name.into(), team: team.into(), position, year }
    }

    #[tokio::test]
    async fn driver_store_roundtrip() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let Some(db) = get_db().await else { return Ok(()) };

        // Unique marker so this test is isolated from other rows in the table
        let tag = Uuid::new_v4().simple().to_string();
        let team = format!("store_team_{}", tag);

        let rows = insert_drivers(
            &db,
            &[
                candidate(&format!("Alpha {}", tag), &team, 1, 2021),
                candidate(&format!("Bravo {}", tag), &team, 2, 2021),
                candidate(&format!("Charlie {}", tag), &team, 3, 2022),
            ],
        )
        .await?;
        assert_eq!(rows.len(), 3);
        assert!(rows[0].id < rows[1].id && rows[1].id < rows[2].id);

        // Substring filter on team is case-sensitive and unanchored
        let filter = DriverFilter { team: Some(format!("store_team_{}", tag)), ..Default::default() };
        let found = find_drivers(&db, &filter).await?;
        assert_eq!(found.len(), 3);
        assert!(found.windows(2).all(|w| w[0].id < w[1].id));

        let upper = DriverFilter { team: Some(format!("STORE_TEAM_{}", tag)), ..Default::default() };
        assert!(find_drivers(&db, &upper).await?.is_empty());

        // Conjunction of team substring and exact year
        let narrowed = DriverFilter { team: Some(team.clone()), year: Some(2021), ..Default::default() };
        assert_eq!(find_drivers(&db, &narrowed).await?.len(), 2);

        // Existence check keys on the full triple
        assert!(exists_by_key(&db, &format!("Alpha {}", tag), 2021, &team).await?);
        assert!(!exists_by_key(&db, &format!("Alpha {}", tag), 1999, &team).await?);

        // Update rewrites year/name/team but leaves position alone
        let updated = update_driver(
            &db,
            rows[0].id,
            &candidate(&format!("Alpha Prime {}", tag), &team, 99, 2023),
        )
        .await?;
        assert_eq!(updated.name, format!("Alpha Prime {}", tag));
        assert_eq!(updated.year, 2023);
        assert_eq!(updated.position, 1);

        let missing = update_driver(&db, i64::MAX, &candidate("Nobody", &team, 1, 2020)).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));

        for row in &rows {
            assert!(delete_by_id(&db, row.id).await?);
        }
        assert!(!delete_by_id(&db, rows[0].id).await?);
        Ok(())
    }
}
