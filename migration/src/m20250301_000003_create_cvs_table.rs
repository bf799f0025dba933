use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cvs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cvs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Cvs::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Cvs::Firstname).string_len(100).not_null())
                    .col(ColumnDef::new(Cvs::Age).integer().not_null())
                    .col(ColumnDef::new(Cvs::Cin).string_len(30).not_null())
                    .col(ColumnDef::new(Cvs::Job).string_len(100).not_null())
                    .col(ColumnDef::new(Cvs::Path).string_len(255).not_null())
                    // Nullable owner: a CV can be orphaned or reassigned
                    .col(ColumnDef::new(Cvs::UserId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cvs_user_id")
                            .from(Cvs::Table, Cvs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Owner-scoped listing filters on user_id
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_cvs_user_id
                ON cvs (user_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_cvs_user_id;")
            .await?;

        manager
            .drop_table(Table::drop().table(Cvs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Cvs {
    Table,
    Id,
    Name,
    Firstname,
    Age,
    Cin,
    Job,
    Path,
    UserId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
