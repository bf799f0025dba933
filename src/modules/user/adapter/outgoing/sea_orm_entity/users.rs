use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::cv::adapter::outgoing::sea_orm_entity::cvs;
use crate::user::domain::entities::{UserCredentials, UserInfo};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text", string_len = 50, unique)]
    pub username: String,
    #[sea_orm(column_type = "Text", string_len = 255, unique)]
    pub email: String,
    pub password: String,
    pub salt: String,
    pub role: String,
    pub is_admin: bool,
}

impl Model {
    /// Projection handed to API callers; password and salt never leave the
    /// adapter except through `to_credentials`.
    pub fn to_domain(&self) -> UserInfo {
        UserInfo {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            is_admin: self.is_admin,
            cvs: None,
        }
    }

    pub fn to_credentials(&self) -> UserCredentials {
        UserCredentials {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            salt: self.salt.clone(),
            role: self.role.clone(),
            is_admin: self.is_admin,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::cv::adapter::outgoing::sea_orm_entity::cvs::Entity")]
    Cvs,
}

impl Related<cvs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cvs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
