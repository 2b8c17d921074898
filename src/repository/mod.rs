//! Data access, one repository per entity behind a shared contract.
//!
//! Every default query is scoped to live rows (`deleted_at IS NULL`);
//! deletes only set the tombstone.

mod movie;
mod screening;

use async_trait::async_trait;
use sea_orm::DbErr;

pub use movie::MovieRepository;
pub use screening::ScreeningRepository;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("record not found")]
    NotFound,

    #[error(transparent)]
    Db(DbErr),
}

impl From<DbErr> for RepoError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
            other => RepoError::Db(other),
        }
    }
}

pub type RepoResult<T> = Result<T, RepoError>;

#[async_trait]
pub trait Repository: Send + Sync {
    type Record: Send;
    type Create: Send;
    type Update: Send;

    async fn all(&self) -> RepoResult<Vec<Self::Record>>;

    /// Fails with [`RepoError::NotFound`] for unknown or soft-deleted ids.
    async fn find(&self, id: i32) -> RepoResult<Self::Record>;

    async fn create(&self, fields: Self::Create) -> RepoResult<Self::Record>;

    /// Applies only the supplied fields and returns the refreshed record.
    async fn update(&self, id: i32, fields: Self::Update) -> RepoResult<Self::Record>;

    /// Soft-deletes the record; `false` if no live row was tombstoned.
    async fn delete(&self, id: i32) -> RepoResult<bool>;
}

fn now_sec() -> i64 {
    jiff::Timestamp::now().as_second()
}
