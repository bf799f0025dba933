use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::skill::adapter::outgoing::sea_orm_entity::skills;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cv_skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub cv_id: i32,

    #[sea_orm(primary_key, auto_increment = false)]
    pub skill_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cvs::Entity",
        from = "Column::CvId",
        to = "super::cvs::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Cvs,

    #[sea_orm(
        belongs_to = "crate::skill::adapter::outgoing::sea_orm_entity::skills::Entity",
        from = "Column::SkillId",
        to = "crate::skill::adapter::outgoing::sea_orm_entity::skills::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Skills,
}

impl Related<super::cvs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cvs.def()
    }
}

impl Related<skills::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skills.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
