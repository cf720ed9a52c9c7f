use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users::Users;
use super::m20240101_000002_create_posts::Posts;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No unique (user_id, post_id): repeated likes are stored.
        manager
            .create_table(
                Table::create()
                    .table(Likes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Likes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Likes::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Likes::PostId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Likes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_user_id")
                            .from(Likes::Table, Likes::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_likes_post_id")
                            .from(Likes::Table, Likes::PostId)
                            .to(Posts::Table, Posts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, col) in [
            ("idx_likes_user_id", Likes::UserId),
            ("idx_likes_post_id", Likes::PostId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name(name)
                        .table(Likes::Table)
                        .col(col)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Likes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Likes {
    Table,
    Id,
    UserId,
    PostId,
    CreatedAt,
}
