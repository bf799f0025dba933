use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cv::adapter::outgoing::sea_orm_entity::{cv_skills, cvs};
use crate::skill::domain::entities::SkillInfo;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text", string_len = 50)]
    pub designation: String,
}

impl Model {
    pub fn to_domain(&self) -> SkillInfo {
        SkillInfo {
            id: self.id,
            designation: self.designation.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<cvs::Entity> for Entity {
    fn to() -> RelationDef {
        cv_skills::Relation::Cvs.def()
    }

    fn via() -> Option<RelationDef> {
        Some(cv_skills::Relation::Skills.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
