use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cv::application::ports::outgoing::CreateCvData;
use crate::cv::domain::entities::CvInfo;
use crate::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::user::adapter::outgoing::sea_orm_entity::users;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cvs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub name: String,
    #[sea_orm(column_type = "Text", string_len = 100)]
    pub firstname: String,
    pub age: i32,
    pub cin: String,
    pub job: String,
    pub path: String,

    // Nullable owner: cleared on detach, rewritten on reassignment
    pub user_id: Option<i32>,
}

impl Model {
    pub fn to_domain(&self) -> CvInfo {
        CvInfo {
            id: self.id,
            name: self.name.clone(),
            firstname: self.firstname.clone(),
            age: self.age,
            cin: self.cin.clone(),
            job: self.job.clone(),
            path: self.path.clone(),
            user_id: self.user_id,
            skills: None,
            user: None,
        }
    }

    pub fn from_create_data(owner_id: i32, data: &CreateCvData) -> Self {
        Self {
            id: 0,
            name: data.name.clone(),
            firstname: data.firstname.clone(),
            age: data.age,
            cin: data.cin.clone(),
            job: data.job.clone(),
            path: data.path.clone(),
            user_id: Some(owner_id),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::user::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::user::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Users,
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<skills::Entity> for Entity {
    fn to() -> RelationDef {
        super::cv_skills::Relation::Skills.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cv_skills::Relation::Cvs.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
