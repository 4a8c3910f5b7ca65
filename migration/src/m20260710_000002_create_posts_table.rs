use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Posts::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Posts::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Posts::AccountId).uuid().not_null())
                    .col(ColumnDef::new(Posts::Content).text().not_null())
                    .col(
                        ColumnDef::new(Posts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Posts::IsApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Posts::Reactions)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_posts_account_id")
                            .from(Posts::Table, Posts::AccountId)
                            .to(Accounts::Table, Accounts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Feed ordering: created_at DESC with id as the deterministic tie-break.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_posts_created_at
                ON posts (created_at DESC, id ASC);
                "#,
            )
            .await?;

        // Profile pages list by author.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_posts_account_id
                ON posts (account_id, created_at DESC);
                "#,
            )
            .await?;

        // Partial index for the moderation queue (pending posts only).
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_posts_pending
                ON posts (created_at DESC)
                WHERE is_approved = false;
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_posts_created_at;
                DROP INDEX IF EXISTS idx_posts_account_id;
                DROP INDEX IF EXISTS idx_posts_pending;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
    AccountId,
    Content,
    CreatedAt,
    IsApproved,
    Reactions,
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
}
