use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, EntityTrait,
    NotSet, QueryFilter, QueryOrder, Set, Statement,
};

use super::sea_orm_entity::skills;
use crate::cv::adapter::outgoing::sea_orm_entity::{cv_skills, cvs};
use crate::cv::domain::entities::CvInfo;
use crate::skill::application::ports::outgoing::{
    CreateSkillData, SkillRepository, SkillRepositoryError, SkillWithCvs, UpdateSkillData,
};
use crate::skill::domain::entities::{SkillInfo, SkillPopularity};

#[derive(Debug, Clone)]
pub struct SkillRepoPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepoPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> SkillRepositoryError {
        SkillRepositoryError::DatabaseError(e.to_string())
    }

    /// Popularity ranking. INNER JOIN: skills referenced by no CV never
    /// show up in the result.
    fn popular_stmt(limit: u64) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT s.id AS id,
                   s.designation AS designation,
                   COUNT(cs.cv_id) AS cv_count
            FROM skills s
            INNER JOIN cv_skills cs ON cs.skill_id = s.id
            GROUP BY s.id, s.designation
            ORDER BY cv_count DESC, s.id ASC
            LIMIT $1
            "#,
            vec![(limit as i64).into()],
        )
    }

    /// CVs referencing each of the given skills, one query per batch.
    async fn attach_cvs(
        &self,
        items: &mut [SkillWithCvs],
    ) -> Result<(), SkillRepositoryError> {
        if items.is_empty() {
            return Ok(());
        }

        let skill_ids: Vec<i32> = items.iter().map(|s| s.id).collect();
        let links = cv_skills::Entity::find()
            .filter(cv_skills::Column::SkillId.is_in(skill_ids))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        let cv_ids: Vec<i32> = {
            let mut ids: Vec<i32> = links.iter().map(|l| l.cv_id).collect();
            ids.sort_unstable();
            ids.dedup();
            ids
        };

        let cv_models: Vec<cvs::Model> = if cv_ids.is_empty() {
            Vec::new()
        } else {
            cvs::Entity::find()
                .filter(cvs::Column::Id.is_in(cv_ids))
                .all(&*self.db)
                .await
                .map_err(Self::map_db_err)?
        };

        for item in items.iter_mut() {
            let related: Vec<CvInfo> = links
                .iter()
                .filter(|l| l.skill_id == item.id)
                .filter_map(|l| cv_models.iter().find(|m| m.id == l.cv_id))
                .map(|m| m.to_domain())
                .collect();
            item.cvs = Some(related);
        }

        Ok(())
    }
}

#[async_trait]
impl SkillRepository for SkillRepoPostgres {
    async fn create(&self, data: CreateSkillData) -> Result<SkillInfo, SkillRepositoryError> {
        let active = skills::ActiveModel {
            id: NotSet,
            designation: Set(data.designation),
        };

        let inserted: skills::Model = skills::Entity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn find_all(&self, with_cvs: bool) -> Result<Vec<SkillWithCvs>, SkillRepositoryError> {
        let models = skills::Entity::find()
            .order_by_asc(skills::Column::Id)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        let mut items: Vec<SkillWithCvs> = models
            .iter()
            .map(|m| SkillWithCvs {
                id: m.id,
                designation: m.designation.clone(),
                cvs: None,
            })
            .collect();

        if with_cvs {
            self.attach_cvs(&mut items).await?;
        }

        Ok(items)
    }

    async fn find_one(
        &self,
        id: i32,
        with_cvs: bool,
    ) -> Result<SkillWithCvs, SkillRepositoryError> {
        let model = skills::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(SkillRepositoryError::SkillNotFound(id))?;

        let mut item = SkillWithCvs {
            id: model.id,
            designation: model.designation.clone(),
            cvs: None,
        };

        if with_cvs {
            self.attach_cvs(std::slice::from_mut(&mut item)).await?;
        }

        Ok(item)
    }

    async fn find_popular(
        &self,
        limit: u64,
    ) -> Result<Vec<SkillPopularity>, SkillRepositoryError> {
        let rows = self
            .db
            .query_all(Self::popular_stmt(limit))
            .await
            .map_err(Self::map_db_err)?;

        let mut ranking = Vec::with_capacity(rows.len());
        for row in rows {
            let id: i32 = row.try_get("", "id").map_err(Self::map_db_err)?;
            let designation: String =
                row.try_get("", "designation").map_err(Self::map_db_err)?;
            let cv_count: i64 = row.try_get("", "cv_count").map_err(Self::map_db_err)?;
            ranking.push(SkillPopularity {
                id,
                designation,
                cv_count,
            });
        }

        Ok(ranking)
    }

    async fn find_by_cv(&self, cv_id: i32) -> Result<Vec<SkillInfo>, SkillRepositoryError> {
        let cv = cvs::Entity::find_by_id(cv_id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if cv.is_none() {
            return Err(SkillRepositoryError::CvNotFound(cv_id));
        }

        let links = cv_skills::Entity::find()
            .filter(cv_skills::Column::CvId.eq(cv_id))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        let skill_ids: Vec<i32> = links.iter().map(|l| l.skill_id).collect();
        if skill_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = skills::Entity::find()
            .filter(skills::Column::Id.is_in(skill_ids))
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn update(
        &self,
        id: i32,
        patch: UpdateSkillData,
    ) -> Result<SkillInfo, SkillRepositoryError> {
        if let Some(designation) = patch.designation {
            let result = skills::Entity::update_many()
                .filter(skills::Column::Id.eq(id))
                .col_expr(skills::Column::Designation, Expr::value(designation))
                .exec(&*self.db)
                .await
                .map_err(Self::map_db_err)?;

            if result.rows_affected == 0 {
                return Err(SkillRepositoryError::SkillNotFound(id));
            }
        }

        let refreshed = skills::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(SkillRepositoryError::SkillNotFound(id))?;

        Ok(refreshed.to_domain())
    }

    async fn remove(&self, id: i32) -> Result<(), SkillRepositoryError> {
        // Join rows vanish with the FK cascade; CVs themselves stay.
        let result = skills::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SkillRepositoryError::SkillNotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::collections::BTreeMap;

    fn ok_exec(rows: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected: rows,
        }
    }

    fn skill_model(id: i32, designation: &str) -> skills::Model {
        skills::Model {
            id,
            designation: designation.to_string(),
        }
    }

    fn cv_model(id: i32) -> cvs::Model {
        cvs::Model {
            id,
            name: "Doe".to_string(),
            firstname: "Jane".to_string(),
            age: 30,
            cin: "AB123456".to_string(),
            job: "Engineer".to_string(),
            path: "uploads/cvs/jane.pdf".to_string(),
            user_id: None,
        }
    }

    fn popularity_row(id: i32, designation: &str, cv_count: i64) -> BTreeMap<String, Value> {
        BTreeMap::from([
            ("id".to_string(), Value::Int(Some(id))),
            (
                "designation".to_string(),
                Value::String(Some(Box::new(designation.to_string()))),
            ),
            ("cv_count".to_string(), Value::BigInt(Some(cv_count))),
        ])
    }

    #[tokio::test]
    async fn test_create_returns_persisted_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![skill_model(1, "rust")]])
            .into_connection();

        let repo = SkillRepoPostgres::new(Arc::new(db));

        let skill = repo
            .create(CreateSkillData {
                designation: "rust".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(skill.id, 1);
        assert_eq!(skill.designation, "rust");
    }

    #[tokio::test]
    async fn test_find_one_missing_skill() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<skills::Model>::new()])
            .into_connection();

        let repo = SkillRepoPostgres::new(Arc::new(db));

        let err = repo.find_one(404, false).await.unwrap_err();
        assert!(matches!(err, SkillRepositoryError::SkillNotFound(404)));
    }

    #[tokio::test]
    async fn test_find_one_with_cvs_attaches_relation() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![skill_model(1, "rust")]])
            .append_query_results([vec![cv_skills::Model {
                cv_id: 5,
                skill_id: 1,
            }]])
            .append_query_results([vec![cv_model(5)]])
            .into_connection();

        let repo = SkillRepoPostgres::new(Arc::new(db));

        let skill = repo.find_one(1, true).await.unwrap();
        let cvs = skill.cvs.unwrap();
        assert_eq!(cvs.len(), 1);
        assert_eq!(cvs[0].id, 5);
    }

    #[tokio::test]
    async fn test_popular_ranking_maps_rows_in_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                popularity_row(1, "rust", 3),
                popularity_row(2, "sql", 1),
            ]])
            .into_connection();

        let repo = SkillRepoPostgres::new(Arc::new(db));

        let ranking = repo.find_popular(2).await.unwrap();
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].id, 1);
        assert_eq!(ranking[0].cv_count, 3);
        assert_eq!(ranking[1].cv_count, 1);
    }

    #[tokio::test]
    async fn test_find_by_cv_missing_cv() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<cvs::Model>::new()])
            .into_connection();

        let repo = SkillRepoPostgres::new(Arc::new(db));

        let err = repo.find_by_cv(404).await.unwrap_err();
        assert!(matches!(err, SkillRepositoryError::CvNotFound(404)));
    }

    #[tokio::test]
    async fn test_find_by_cv_returns_skill_set() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![cv_model(5)]])
            .append_query_results([vec![
                cv_skills::Model {
                    cv_id: 5,
                    skill_id: 1,
                },
                cv_skills::Model {
                    cv_id: 5,
                    skill_id: 2,
                },
            ]])
            .append_query_results([vec![skill_model(1, "rust"), skill_model(2, "sql")]])
            .into_connection();

        let repo = SkillRepoPostgres::new(Arc::new(db));

        let skills = repo.find_by_cv(5).await.unwrap();
        assert_eq!(skills.len(), 2);
    }

    #[tokio::test]
    async fn test_update_zero_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([ok_exec(0)])
            .into_connection();

        let repo = SkillRepoPostgres::new(Arc::new(db));

        let err = repo
            .update(
                404,
                UpdateSkillData {
                    designation: Some("go".to_string()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, SkillRepositoryError::SkillNotFound(404)));
    }

    #[tokio::test]
    async fn test_update_returns_refreshed_entity() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([ok_exec(1)])
            .append_query_results([vec![skill_model(1, "go")]])
            .into_connection();

        let repo = SkillRepoPostgres::new(Arc::new(db));

        let skill = repo
            .update(
                1,
                UpdateSkillData {
                    designation: Some("go".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(skill.designation, "go");
    }

    #[tokio::test]
    async fn test_remove_missing_skill() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([ok_exec(0)])
            .into_connection();

        let repo = SkillRepoPostgres::new(Arc::new(db));

        let err = repo.remove(404).await.unwrap_err();
        assert!(matches!(err, SkillRepositoryError::SkillNotFound(404)));
    }
}
