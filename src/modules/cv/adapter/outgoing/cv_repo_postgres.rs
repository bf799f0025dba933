use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    NotSet, QueryFilter, QueryOrder, Statement,
};

use super::sea_orm_entity::{cv_skills, cvs};
use crate::cv::application::ports::outgoing::{
    CreateCvData, CvFilter, CvRepository, CvRepositoryError, DeleteConfirmation, UpdateCvData,
};
use crate::cv::domain::entities::{CvInfo, CvRelations};
use crate::shared::pagination::{apply_pagination, PageRequest};
use crate::shared::policy::{visibility_scope, Principal};
use crate::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::skill::domain::entities::SkillInfo;
use crate::user::adapter::outgoing::sea_orm_entity::users;

#[derive(Debug, Clone)]
pub struct CvRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl CvRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> CvRepositoryError {
        CvRepositoryError::DatabaseError(e.to_string())
    }

    // =====================================================
    // SQL builders (join table)
    // =====================================================

    fn delete_links_stmt(cv_id: i32) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            DELETE FROM cv_skills
            WHERE cv_id = $1
            "#,
            vec![cv_id.into()],
        )
    }

    fn delete_link_stmt(cv_id: i32, skill_id: i32) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            DELETE FROM cv_skills
            WHERE cv_id = $1
              AND skill_id = $2
            "#,
            vec![cv_id.into(), skill_id.into()],
        )
    }

    /// Membership insert for the resolved skill set. ON CONFLICT keeps the
    /// no-duplicates invariant even if a caller repeats an id.
    fn insert_links_stmt(cv_id: i32, skill_ids: &[i32]) -> Statement {
        let mut values: Vec<sea_orm::Value> = vec![cv_id.into()];
        let mut rows = Vec::with_capacity(skill_ids.len());
        for (i, skill_id) in skill_ids.iter().enumerate() {
            rows.push(format!("($1, ${})", i + 2));
            values.push((*skill_id).into());
        }
        let sql = format!(
            "INSERT INTO cv_skills (cv_id, skill_id) VALUES {} \
             ON CONFLICT (cv_id, skill_id) DO NOTHING",
            rows.join(", ")
        );
        Statement::from_sql_and_values(DatabaseBackend::Postgres, sql, values)
    }

    // =====================================================
    // Resolution helpers
    // =====================================================

    /// Silent-drop resolution: ids with no matching skill row are omitted,
    /// never an error.
    async fn resolve_skills(&self, ids: &[i32]) -> Result<Vec<SkillInfo>, CvRepositoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = skills::Entity::find()
            .filter(skills::Column::Id.is_in(ids.to_vec()))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;
        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn find_user_model(&self, user_id: i32) -> Result<Option<users::Model>, CvRepositoryError> {
        users::Entity::find()
            .filter(users::Column::Id.eq(user_id))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)
    }

    /// Replace a CV's whole skill set with an already-resolved list.
    async fn replace_links(
        &self,
        cv_id: i32,
        resolved: &[SkillInfo],
    ) -> Result<(), CvRepositoryError> {
        self.db
            .execute(Self::delete_links_stmt(cv_id))
            .await
            .map_err(Self::map_db_err)?;

        if !resolved.is_empty() {
            let ids: Vec<i32> = resolved.iter().map(|s| s.id).collect();
            self.db
                .execute(Self::insert_links_stmt(cv_id, &ids))
                .await
                .map_err(Self::map_db_err)?;
        }
        Ok(())
    }

    /// Attach the requested relations to a batch of CV rows. Issues at most
    /// one query per relation kind regardless of batch size.
    async fn hydrate(
        &self,
        models: Vec<cvs::Model>,
        relations: CvRelations,
    ) -> Result<Vec<CvInfo>, CvRepositoryError> {
        let mut infos: Vec<CvInfo> = models.iter().map(|m| m.to_domain()).collect();
        if infos.is_empty() {
            return Ok(infos);
        }

        if relations.skills {
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
        }

        if relations.user {
            let user_ids: Vec<i32> = infos
                .iter()
                .filter_map(|c| c.user_id)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();

            let owners: HashMap<i32, users::Model> = if user_ids.is_empty() {
                HashMap::new()
            } else {
                users::Entity::find()
                    .filter(users::Column::Id.is_in(user_ids))
                    .all(&*self.db)
                    .await
                    .map_err(Self::map_db_err)?
                    .into_iter()
                    .map(|m| (m.id, m))
                    .collect()
            };

            for info in infos.iter_mut() {
                info.user = info
                    .user_id
                    .and_then(|uid| owners.get(&uid).map(|m| m.to_domain()));
            }
        }

        Ok(infos)
    }

    async fn fetch_one(
        &self,
        id: i32,
        relations: CvRelations,
    ) -> Result<Option<CvInfo>, CvRepositoryError> {
        let model = cvs::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        match model {
            None => Ok(None),
            Some(model) => {
                let mut infos = self.hydrate(vec![model], relations).await?;
                Ok(infos.pop())
            }
        }
    }
}

#[async_trait]
impl CvRepository for CvRepoPostgres {
    async fn create(
        &self,
        owner_id: i32,
        data: CreateCvData,
    ) -> Result<CvInfo, CvRepositoryError> {
        let mut active: cvs::ActiveModel = cvs::Model::from_create_data(owner_id, &data).into();
        active.id = NotSet;

        let inserted: cvs::Model = cvs::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        let mut info = inserted.to_domain();

        if let Some(skill_ids) = data.skills {
            if !skill_ids.is_empty() {
                let resolved = self.resolve_skills(&skill_ids).await?;
                if !resolved.is_empty() {
                    let ids: Vec<i32> = resolved.iter().map(|s| s.id).collect();
                    self.db
                        .execute(Self::insert_links_stmt(inserted.id, &ids))
                        .await
                        .map_err(Self::map_db_err)?;
                }
                info.skills = Some(resolved);
            }
        }

        Ok(info)
    }

    async fn find_all(
        &self,
        principal: &Principal,
        relations: CvRelations,
        page: Option<PageRequest>,
    ) -> Result<Vec<CvInfo>, CvRepositoryError> {
        let mut select = cvs::Entity::find()
            .filter(visibility_scope(principal, cvs::Column::UserId))
            .order_by_asc(cvs::Column::Id);

        if let Some(page) = page {
            select = apply_pagination(select, &page);
        }

        let models = select.all(&*self.db).await.map_err(Self::map_db_err)?;
        self.hydrate(models, relations).await
    }

    async fn find_with_filters(
        &self,
        principal: &Principal,
        filter: CvFilter,
    ) -> Result<Vec<CvInfo>, CvRepositoryError> {
        let mut condition = visibility_scope(principal, cvs::Column::UserId);

        if let Some(age) = filter.age {
            condition = condition.add(cvs::Column::Age.eq(age));
        }

        if let Some(search) = filter.search_value.as_deref() {
            condition = condition.add(
                sea_orm::Condition::any()
                    .add(cvs::Column::Name.contains(search))
                    .add(cvs::Column::Firstname.contains(search))
                    .add(cvs::Column::Job.contains(search)),
            );
        }

        let models = cvs::Entity::find()
            .filter(condition)
            .order_by_asc(cvs::Column::Id)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        self.hydrate(models, CvRelations::default()).await
    }

    async fn find_one(
        &self,
        id: i32,
        relations: CvRelations,
    ) -> Result<Option<CvInfo>, CvRepositoryError> {
        self.fetch_one(id, relations).await
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<CvInfo>, CvRepositoryError> {
        if self.find_user_model(user_id).await?.is_none() {
            return Err(CvRepositoryError::UserNotFound(user_id));
        }

        let models = cvs::Entity::find()
            .filter(cvs::Column::UserId.eq(user_id))
            .order_by_asc(cvs::Column::Id)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        self.hydrate(models, CvRelations::default()).await
    }

    async fn find_by_skill(&self, skill_id: i32) -> Result<Vec<CvInfo>, CvRepositoryError> {
        let skill = skills::Entity::find()
            .filter(skills::Column::Id.eq(skill_id))
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if skill.is_none() {
            return Err(CvRepositoryError::SkillNotFound(skill_id));
        }

        let links = cv_skills::Entity::find()
            .filter(cv_skills::Column::SkillId.eq(skill_id))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        let cv_ids: Vec<i32> = links.iter().map(|l| l.cv_id).collect();
        if cv_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = cvs::Entity::find()
            .filter(cvs::Column::Id.is_in(cv_ids))
            .order_by_asc(cvs::Column::Id)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        self.hydrate(models, CvRelations::default()).await
    }

    async fn update(&self, id: i32, patch: UpdateCvData) -> Result<CvInfo, CvRepositoryError> {
        // Scalars first, by direct UPDATE. Relation columns are never
        // touched here, so a partial patch cannot null them by accident.
        if patch.has_scalar_fields() {
            let mut update = cvs::Entity::update_many().filter(cvs::Column::Id.eq(id));
            if let Some(name) = patch.name.clone() {
                update = update.col_expr(cvs::Column::Name, Expr::value(name));
            }
            if let Some(firstname) = patch.firstname.clone() {
                update = update.col_expr(cvs::Column::Firstname, Expr::value(firstname));
            }
            if let Some(age) = patch.age {
                update = update.col_expr(cvs::Column::Age, Expr::value(age));
            }
            if let Some(cin) = patch.cin.clone() {
                update = update.col_expr(cvs::Column::Cin, Expr::value(cin));
            }
            if let Some(job) = patch.job.clone() {
                update = update.col_expr(cvs::Column::Job, Expr::value(job));
            }
            if let Some(path) = patch.path.clone() {
                update = update.col_expr(cvs::Column::Path, Expr::value(path));
            }

            let result = update.exec(&*self.db).await.map_err(Self::map_db_err)?;
            if result.rows_affected == 0 {
                return Err(CvRepositoryError::CvNotFound(id));
            }
        }

        let mut info = self
            .fetch_one(id, CvRelations::default())
            .await?
            .ok_or(CvRepositoryError::CvNotFound(id))?;

        // Wholesale skill replacement, guarded on a non-empty list: an
        // empty list is a no-op, not a clear.
        if let Some(skill_ids) = patch.skills {
            if !skill_ids.is_empty() {
                let resolved = self.resolve_skills(&skill_ids).await?;
                self.replace_links(id, &resolved).await?;
                info.skills = Some(resolved);
            }
        }

        match patch.user {
            None => {}
            Some(Some(user_id)) => {
                let owner = self
                    .find_user_model(user_id)
                    .await?
                    .ok_or(CvRepositoryError::UserNotFound(user_id))?;

                cvs::Entity::update_many()
                    .filter(cvs::Column::Id.eq(id))
                    .col_expr(cvs::Column::UserId, Expr::value(user_id))
                    .exec(&*self.db)
                    .await
                    .map_err(Self::map_db_err)?;

                info.user_id = Some(user_id);
                info.user = Some(owner.to_domain());
            }
            Some(None) => {
                cvs::Entity::update_many()
                    .filter(cvs::Column::Id.eq(id))
                    .col_expr(cvs::Column::UserId, Expr::value(Option::<i32>::None))
                    .exec(&*self.db)
                    .await
                    .map_err(Self::map_db_err)?;

                info.user_id = None;
                info.user = None;
            }
        }

        Ok(info)
    }

    async fn update_skills(
        &self,
        id: i32,
        skill_ids: Vec<i32>,
    ) -> Result<CvInfo, CvRepositoryError> {
        let mut info = self
            .fetch_one(id, CvRelations::default())
            .await?
            .ok_or(CvRepositoryError::CvNotFound(id))?;

        let resolved = self.resolve_skills(&skill_ids).await?;
        self.replace_links(id, &resolved).await?;
        info.skills = Some(resolved);

        Ok(info)
    }

    async fn assign_to_user(
        &self,
        cv_id: i32,
        user_id: i32,
    ) -> Result<CvInfo, CvRepositoryError> {
        let mut info = self
            .fetch_one(cv_id, CvRelations::default())
            .await?
            .ok_or(CvRepositoryError::CvNotFound(cv_id))?;

        let owner = self
            .find_user_model(user_id)
            .await?
            .ok_or(CvRepositoryError::UserNotFound(user_id))?;

        cvs::Entity::update_many()
            .filter(cvs::Column::Id.eq(cv_id))
            .col_expr(cvs::Column::UserId, Expr::value(user_id))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        info.user_id = Some(user_id);
        info.user = Some(owner.to_domain());

        Ok(info)
    }

    async fn remove_skill(
        &self,
        cv_id: i32,
        skill_id: i32,
    ) -> Result<CvInfo, CvRepositoryError> {
        let mut info = self
            .fetch_one(cv_id, CvRelations::default())
            .await?
            .ok_or(CvRepositoryError::CvNotFound(cv_id))?;

        // Idempotent: deleting an absent membership row affects nothing.
        self.db
            .execute(Self::delete_link_stmt(cv_id, skill_id))
            .await
            .map_err(Self::map_db_err)?;

        if let Some(skills) = info.skills.as_mut() {
            skills.retain(|s| s.id != skill_id);
        }

        Ok(info)
    }

    async fn remove(&self, id: i32) -> Result<DeleteConfirmation, CvRepositoryError> {
        let existing = cvs::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if existing.is_none() {
            return Err(CvRepositoryError::CvNotFound(id));
        }

        let result = cvs::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(CvRepositoryError::CvNotFound(id));
        }

        Ok(DeleteConfirmation { deleted: true })
    }
}
