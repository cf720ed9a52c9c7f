#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::database::entity::{like, post, user};
    use crate::database::postgres_base::{map_db_err, map_sql_err};
    use crate::database::postgres_repo::{
        PostgresLikeRepository, PostgresPostRepository, PostgresUserRepository,
    };
    use blog_core::domain::{NewLike, NewPost, NewUser};
    use blog_core::error::RepoError;
    use blog_core::ports::{LikeRepository, PostRepository, UserRepository};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, SqlErr, Value};

    fn post_model(id: i64, user_id: i64, title: &str) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id,
            user_id,
            title: title.to_owned(),
            content: "Content".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
            deleted_at: None,
        }
    }

    fn user_model(id: i64, email: &str) -> user::Model {
        let now = chrono::Utc::now();
        user::Model {
            id,
            name: "Alice".to_owned(),
            email: email.to_owned(),
            password: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_owned(),
            is_verified: false,
            verification_code: Some("code".to_owned()),
            created_at: now.into(),
            updated_at: now.into(),
            deleted_at: None,
        }
    }

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Into::<Value>::into(n))])
    }

    #[tokio::test]
    async fn test_find_posts_by_user_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                post_model(1, 7, "First"),
                post_model(2, 7, "Second"),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts = repo.find_by_user_id(7).await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "First");
        assert!(posts.iter().all(|p| p.user_id == 7 && !p.is_deleted()));
    }

    #[tokio::test]
    async fn test_create_post_returns_generated_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![post_model(42, 1, "t")]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let post = repo
            .create(NewPost {
                user_id: 1,
                title: "t".to_owned(),
                content: "c".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(post.id, 42);
        assert_eq!(post.user_id, 1);
    }

    #[tokio::test]
    async fn test_soft_delete_issues_update() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);
        repo.soft_delete(5).await.unwrap();

        let log = repo.into_connection().into_transaction_log();
        let sql = format!("{:?}", log);
        assert!(sql.contains("UPDATE"));
        assert!(sql.contains("deleted_at"));
    }

    #[tokio::test]
    async fn test_email_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[count_row(1)], [count_row(0)]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        assert!(repo.email_exists("a@x.com").await.unwrap());
        assert!(!repo.email_exists("b@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_find_user_by_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(3, "a@x.com")]])
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let found = repo.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.id, 3);
        assert_eq!(found.verification_code.as_deref(), Some("code"));

        assert!(repo.find_by_email("missing@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![user_model(9, "a@x.com")]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let user = repo
            .create(NewUser {
                name: "Alice".to_owned(),
                email: "a@x.com".to_owned(),
                password_hash: "hash".to_owned(),
                verification_code: "code".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(user.id, 9);
        assert!(!user.is_verified);
    }

    #[tokio::test]
    async fn test_query_failure_maps_to_repo_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([sea_orm::DbErr::Custom("boom".to_owned())])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let err = repo.find_by_email("a@x.com").await.unwrap_err();
        assert!(matches!(err, RepoError::Query(_)));
    }

    #[tokio::test]
    async fn test_add_and_count_likes() {
        let now = chrono::Utc::now();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![like::Model {
                id: 1,
                user_id: 2,
                post_id: 3,
                created_at: now.into(),
            }]])
            .append_query_results([[count_row(4)]])
            .into_connection();

        let repo = PostgresLikeRepository::new(db);

        let like = repo
            .add(NewLike {
                user_id: 2,
                post_id: 3,
            })
            .await
            .unwrap();
        assert_eq!(like.post_id, 3);

        assert_eq!(repo.count_by_post(3).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_remove_likes_reports_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            }])
            .into_connection();

        let repo = PostgresLikeRepository::new(db);

        assert_eq!(repo.remove(3, 2).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_user_persists_verification() {
        let mut verified = user_model(3, "a@x.com");
        verified.is_verified = true;
        verified.verification_code = None;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![verified]])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let mut user: blog_core::domain::User = user_model(3, "a@x.com").into();
        user.mark_verified();
        let saved = repo.update(user).await.unwrap();

        assert_eq!(saved.id, 3);
        assert!(saved.is_verified);
        assert!(saved.verification_code.is_none());

        let log = format!("{:?}", repo.into_connection().into_transaction_log());
        assert!(log.contains("UPDATE"));
        assert!(log.contains("is_verified"));
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user::Model>::new()])
            .into_connection();

        let repo = PostgresUserRepository::new(db);

        let err = repo
            .update(user_model(404, "gone@x.com").into())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[test]
    fn test_unique_violation_maps_to_constraint() {
        let err = map_sql_err(SqlErr::UniqueConstraintViolation(
            "duplicate key value violates unique constraint \"users_email_key\"".to_owned(),
        ));
        assert!(matches!(err, Some(RepoError::Constraint(ref msg)) if msg.contains("users_email_key")));

        let err = map_sql_err(SqlErr::ForeignKeyConstraintViolation(
            "posts_user_id_fkey".to_owned(),
        ));
        assert!(err.is_none());
    }

    #[test]
    fn test_constraint_surfaces_as_duplicate() {
        let repo_err = map_sql_err(SqlErr::UniqueConstraintViolation("users_email_key".to_owned()))
            .unwrap();

        let domain: blog_core::DomainError = repo_err.into();
        assert!(matches!(domain, blog_core::DomainError::Duplicate(_)));
    }

    #[test]
    fn test_plain_db_errors_keep_their_kind() {
        assert!(matches!(
            map_db_err(DbErr::RecordNotFound("users".to_owned())),
            RepoError::NotFound
        ));
        assert!(matches!(
            map_db_err(DbErr::Custom("boom".to_owned())),
            RepoError::Query(_)
        ));
    }
}
