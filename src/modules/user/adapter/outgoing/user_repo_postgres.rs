use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    NotSet, QueryFilter, QueryOrder, Set, Statement,
};

use super::sea_orm_entity::users;
use crate::cv::adapter::outgoing::sea_orm_entity::{cv_skills, cvs};
use crate::cv::domain::entities::CvInfo;
use crate::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::skill::domain::entities::SkillInfo;
use crate::user::application::ports::outgoing::{
    CreateUserData, UpdateUserData, UserRepository, UserRepositoryError,
};
use crate::user::domain::entities::{UserCredentials, UserCvCount, UserInfo};

#[derive(Debug, Clone)]
pub struct UserRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> UserRepositoryError {
        UserRepositoryError::DatabaseError(e.to_string())
    }

    /// Most-CVs ranking. LEFT JOIN: users without any CV rank with a count
    /// of 0. Ties break by user id ascending.
    fn most_cvs_stmt(limit: u64) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT u.id AS id,
                   u.username AS username,
                   u.email AS email,
                   COUNT(c.id) AS cv_count
            FROM users u
            LEFT JOIN cvs c ON c.user_id = u.id
            GROUP BY u.id, u.username, u.email
            ORDER BY cv_count DESC, u.id ASC
            LIMIT $1
            "#,
            vec![(limit as i64).into()],
        )
    }

    /// Attach each user's CVs (plain rows, no nested relations).
    async fn attach_cvs(&self, infos: &mut [UserInfo]) -> Result<(), UserRepositoryError> {
        if infos.is_empty() {
            return Ok(());
        }

        let user_ids: Vec<i32> = infos.iter().map(|u| u.id).collect();
        let cv_models = cvs::Entity::find()
            .filter(cvs::Column::UserId.is_in(user_ids))
            .order_by_asc(cvs::Column::Id)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        for info in infos.iter_mut() {
            let owned: Vec<CvInfo> = cv_models
                .iter()
                .filter(|m| m.user_id == Some(info.id))
                .map(|m| m.to_domain())
                .collect();
            info.cvs = Some(owned);
        }

        Ok(())
    }

    async fn user_exists(&self, id: i32) -> Result<bool, UserRepositoryError> {
        let model = users::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;
        Ok(model.is_some())
    }
}

#[async_trait]
impl UserRepository for UserRepoPostgres {
    async fn create(&self, data: CreateUserData) -> Result<UserInfo, UserRepositoryError> {
        let active = users::ActiveModel {
            id: NotSet,
            username: Set(data.username),
            email: Set(data.email),
            password: Set(data.password),
            salt: Set(data.salt),
            role: Set(data.role),
            is_admin: Set(false),
        };

        let inserted: users::Model = users::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn find_all(&self, with_cvs: bool) -> Result<Vec<UserInfo>, UserRepositoryError> {
        let models = users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        let mut infos: Vec<UserInfo> = models.iter().map(|m| m.to_domain()).collect();
        if with_cvs {
            self.attach_cvs(&mut infos).await?;
        }
        Ok(infos)
    }

    async fn find_one(
        &self,
        id: i32,
        with_cvs: bool,
    ) -> Result<Option<UserInfo>, UserRepositoryError> {
        let model = users::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        match model {
            None => Ok(None),
            Some(model) => {
                let mut infos = vec![model.to_domain()];
                if with_cvs {
                    self.attach_cvs(&mut infos).await?;
                }
                Ok(infos.pop())
            }
        }
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserInfo>, UserRepositoryError> {
        let model = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        match model {
            None => Ok(None),
            Some(model) => {
                let mut infos = vec![model.to_domain()];
                self.attach_cvs(&mut infos).await?;
                Ok(infos.pop())
            }
        }
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserRepositoryError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(model.map(|m| m.to_credentials()))
    }

    async fn find_user_cvs(&self, user_id: i32) -> Result<Vec<CvInfo>, UserRepositoryError> {
        if !self.user_exists(user_id).await? {
            return Err(UserRepositoryError::UserNotFound(user_id));
        }

        let cv_models = cvs::Entity::find()
            .filter(cvs::Column::UserId.eq(user_id))
            .order_by_asc(cvs::Column::Id)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        let mut infos: Vec<CvInfo> = cv_models.iter().map(|m| m.to_domain()).collect();
        if infos.is_empty() {
            return Ok(infos);
        }

        // The per-user CV listing carries each CV's skill set
        let cv_ids: Vec<i32> = infos.iter().map(|c| c.id).collect();
        let links = cv_skills::Entity::find()
            .filter(cv_skills::Column::CvId.is_in(cv_ids))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        let skill_ids: Vec<i32> = links
            .iter()
            .map(|l| l.skill_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let by_id: HashMap<i32, SkillInfo> = if skill_ids.is_empty() {
            HashMap::new()
        } else {
            skills::Entity::find()
                .filter(skills::Column::Id.is_in(skill_ids))
                .all(&*self.db)
                .await
                .map_err(Self::map_db_err)?
                .iter()
                .map(|m| (m.id, m.to_domain()))
                .collect()
        };

        for info in infos.iter_mut() {
            let set: Vec<SkillInfo> = links
                .iter()
                .filter(|l| l.cv_id == info.id)
                .filter_map(|l| by_id.get(&l.skill_id).cloned())
                .collect();
            info.skills = Some(set);
        }

        Ok(infos)
    }

    async fn find_users_with_most_cvs(
        &self,
        limit: u64,
    ) -> Result<Vec<UserCvCount>, UserRepositoryError> {
        let rows = self
            .db
            .query_all(Self::most_cvs_stmt(limit))
            .await
            .map_err(Self::map_db_err)?;

        let mut ranking = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i32 = row.try_get("", "id").map_err(Self::map_db_err)?;
            let username: String = row.try_get("", "username").map_err(Self::map_db_err)?;
            let email: String = row.try_get("", "email").map_err(Self::map_db_err)?;
            let cv_count: i64 = row.try_get("", "cv_count").map_err(Self::map_db_err)?;
            ranking.push(UserCvCount {
                id,
                username,
                email,
                cv_count,
            });
        }

        Ok(ranking)
    }

    async fn update(
        &self,
        id: i32,
        patch: UpdateUserData,
    ) -> Result<UserInfo, UserRepositoryError> {
        if patch.has_scalar_fields() {
            let mut update = users::Entity::update_many().filter(users::Column::Id.eq(id));
            if let Some(username) = patch.username.clone() {
                update = update.col_expr(users::Column::Username, Expr::value(username));
            }
            if let Some(email) = patch.email.clone() {
                update = update.col_expr(users::Column::Email, Expr::value(email));
            }
            if let Some(password) = patch.password.clone() {
                update = update.col_expr(users::Column::Password, Expr::value(password));
            }

            let result = update.exec(&*self.db).await.map_err(Self::map_db_err)?;
            if result.rows_affected == 0 {
                return Err(UserRepositoryError::UserNotFound(id));
            }
        }

        // Additive reassignment: resolved CVs get this user as owner,
        // previously owned CVs not in the list are left attached.
        if let Some(cv_ids) = patch.cvs {
            if !cv_ids.is_empty() {
                if !self.user_exists(id).await? {
                    return Err(UserRepositoryError::UserNotFound(id));
                }

                let resolved = cvs::Entity::find()
                    .filter(cvs::Column::Id.is_in(cv_ids))
                    .all(&*self.db)
                    .await
                    .map_err(Self::map_db_err)?;

                let resolved_ids: Vec<i32> = resolved.iter().map(|m| m.id).collect();
                if !resolved_ids.is_empty() {
                    cvs::Entity::update_many()
                        .filter(cvs::Column::Id.is_in(resolved_ids))
                        .col_expr(cvs::Column::UserId, Expr::value(id))
                        .exec(&*self.db)
                        .await
                        .map_err(Self::map_db_err)?;
                }
            }
        }

        // Refreshed entity with CVs, whether or not the list was supplied
        self.find_one(id, true)
            .await?
            .ok_or(UserRepositoryError::UserNotFound(id))
    }

    async fn remove(&self, id: i32) -> Result<(), UserRepositoryError> {
        if !self.user_exists(id).await? {
            return Err(UserRepositoryError::UserNotFound(id));
        }

        // Owned CVs go with the user via the FK cascade
        let result = users::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound(id));
        }

        Ok(())
    }

    async fn remove_cv_from_user(
        &self,
        user_id: i32,
        cv_id: i32,
    ) -> Result<(), UserRepositoryError> {
        if !self.user_exists(user_id).await? {
            return Err(UserRepositoryError::UserNotFound(user_id));
        }

        let cv = cvs::Entity::find_by_id(cv_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(UserRepositoryError::CvNotFound(cv_id))?;

        if cv.user_id != Some(user_id) {
            return Err(UserRepositoryError::CvNotOwned { user_id, cv_id });
        }

        cvs::Entity::update_many()
            .filter(cvs::Column::Id.eq(cv_id))
            .col_expr(cvs::Column::UserId, Expr::value(Option::<i32>::None))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(())
    }
}
