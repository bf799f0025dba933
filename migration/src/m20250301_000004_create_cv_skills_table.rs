use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create cv_skills join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(CvSkills::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(CvSkills::CvId).integer().not_null())
                    .col(ColumnDef::new(CvSkills::SkillId).integer().not_null())
                    // Composite primary key: one membership row per (cv, skill)
                    .primary_key(
                        Index::create()
                            .col(CvSkills::CvId)
                            .col(CvSkills::SkillId),
                    )
                    // FK → cvs
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cv_skills_cv_id")
                            .from(CvSkills::Table, CvSkills::CvId)
                            .to(Cvs::Table, Cvs::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → skills
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cv_skills_skill_id")
                            .from(CvSkills::Table, CvSkills::SkillId)
                            .to(Skills::Table, Skills::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Fast lookup: all CVs for a skill
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_cv_skills_skill_id
                ON cv_skills (skill_id);
                "#,
            )
            .await?;

        // Fast lookup: all skills for a CV
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_cv_skills_cv_id
                ON cv_skills (cv_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_cv_skills_skill_id;
                DROP INDEX IF EXISTS idx_cv_skills_cv_id;
                "#,
            )
            .await?;

        // Drop table
        manager
            .drop_table(Table::drop().table(CvSkills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CvSkills {
    Table,
    CvId,
    SkillId,
}

#[derive(DeriveIden)]
enum Cvs {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
}
