//! User entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub is_verified: bool,
    pub verification_code: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
    #[sea_orm(has_many = "super::like::Entity")]
    Like,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::like::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Like.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for blog_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password,
            is_verified: model.is_verified,
            verification_code: model.verification_code,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            deleted_at: model.deleted_at.map(Into::into),
        }
    }
}

/// Full-row ActiveModel for updating an existing user.
impl From<blog_core::domain::User> for ActiveModel {
    fn from(user: blog_core::domain::User) -> Self {
        Self {
            id: Set(user.id),
            name: Set(user.name),
            email: Set(user.email),
            password: Set(user.password_hash),
            is_verified: Set(user.is_verified),
            verification_code: Set(user.verification_code),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
            deleted_at: Set(user.deleted_at.map(Into::into)),
        }
    }
}

/// Insert ActiveModel; the id comes from the sequence.
impl From<blog_core::domain::NewUser> for ActiveModel {
    fn from(user: blog_core::domain::NewUser) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: NotSet,
            name: Set(user.name),
            email: Set(user.email),
            password: Set(user.password_hash),
            is_verified: Set(false),
            verification_code: Set(Some(user.verification_code)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
            deleted_at: Set(None),
        }
    }
}
