use std::marker::PhantomData;

use sea_orm::{DbConn, DbErr, EntityTrait, SqlErr};

use blog_core::error::RepoError;

/// PostgreSQL repository bound to a single SeaORM entity.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Give back the connection, e.g. to read a mock transaction log.
    #[cfg(test)]
    pub(crate) fn into_connection(self) -> DbConn {
        self.db
    }
}

/// Translate a SeaORM error into the repository taxonomy.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    if let Some(constraint) = err.sql_err().and_then(map_sql_err) {
        return constraint;
    }
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        other => RepoError::Query(other.to_string()),
    }
}

/// Only unique violations get their own variant; the rest stay query errors.
pub(crate) fn map_sql_err(err: SqlErr) -> Option<RepoError> {
    match err {
        SqlErr::UniqueConstraintViolation(detail) => Some(RepoError::Constraint(detail)),
        _ => None,
    }
}
