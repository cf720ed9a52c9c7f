//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::like::Entity")]
    Like,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Like.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for blog_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            content: model.content,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            deleted_at: model.deleted_at.map(Into::into),
        }
    }
}

/// Conversion from a new Domain Post to SeaORM ActiveModel.
impl From<blog_core::domain::NewPost> for ActiveModel {
    fn from(post: blog_core::domain::NewPost) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: NotSet,
            user_id: Set(post.user_id),
            title: Set(post.title),
            content: Set(post.content),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            deleted_at: Set(None),
        }
    }
}
