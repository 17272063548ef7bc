use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "driver")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub team: String,
    pub position: i32,
    pub year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Candidate driver record as submitted by clients; the id is generated on
/// insert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDriver {
    pub name: String,
    pub team: String,
    pub position: i32,
    pub year: i32,
}

impl NewDriver {
    pub fn active_model(&self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name.clone()),
            team: Set(self.team.clone()),
            position: Set(self.position),
            year: Set(self.year),
        }
    }
}

impl From<Model> for NewDriver {
    fn from(m: Model) -> Self {
        Self { name: m.name, team: m.team, position: m.position, year: m.year }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_driver_deserializes_from_plain_record() {
        let d: NewDriver = serde_json::from_str(
            r#"{"name":"Lewis Hamilton","team":"Mercedes","position":3,"year":2023}"#,
        )
        .unwrap();
        assert_eq!(d.name, "Lewis Hamilton");
        assert_eq!(d.team, "Mercedes");
        assert_eq!(d.position, 3);
        assert_eq!(d.year, 2023);
    }

    #[test]
    fn active_model_leaves_id_unset() {
        let d = NewDriver { name: "Max Verstappen".into(), team: "Red Bull".into(), position: 1, year: 2023 };
        let am = d.active_model();
        assert!(matches!(am.id, NotSet));
        assert_eq!(am.name.unwrap(), "Max Verstappen");
    }
}
