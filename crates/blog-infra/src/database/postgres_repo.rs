//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use blog_core::domain::{Like, NewLike, NewPost, NewUser, Post, User};
use blog_core::error::RepoError;
use blog_core::ports::{LikeRepository, PostRepository, UserRepository};

use super::entity::like::{self, Entity as LikeEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};
use crate::mask_email;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL like repository.
pub type PostgresLikeRepository = PostgresBaseRepository<LikeEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn email_exists(&self, email: &str) -> Result<bool, RepoError> {
        let count = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::DeletedAt.is_null())
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, RepoError> {
        let active: user::ActiveModel = new_user.into();
        let model = active.insert(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(user_id = model.id, "User row inserted");
        Ok(model.into())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let active: user::ActiveModel = user.into();
        let model = active.update(&self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let active: post::ActiveModel = new_post.into();
        let model = active.insert(&self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .filter(post::Column::DeletedAt.is_null())
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn soft_delete(&self, post_id: i64) -> Result<(), RepoError> {
        let now: sea_orm::prelude::DateTimeWithTimeZone = Utc::now().into();

        let result = PostEntity::update_many()
            .col_expr(post::Column::DeletedAt, Expr::value(now))
            .col_expr(post::Column::UpdatedAt, Expr::value(now))
            .filter(post::Column::Id.eq(post_id))
            .filter(post::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id, rows = result.rows_affected, "Post soft-deleted");
        Ok(())
    }
}

#[async_trait]
impl LikeRepository for PostgresLikeRepository {
    async fn add(&self, new_like: NewLike) -> Result<Like, RepoError> {
        let active: like::ActiveModel = new_like.into();
        let model = active.insert(&self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn remove(&self, post_id: i64, user_id: i64) -> Result<u64, RepoError> {
        let result = LikeEntity::delete_many()
            .filter(like::Column::PostId.eq(post_id))
            .filter(like::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn count_by_post(&self, post_id: i64) -> Result<u64, RepoError> {
        LikeEntity::find()
            .filter(like::Column::PostId.eq(post_id))
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }
}
