use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};
use tracing::debug;

use super::{RepoError, RepoResult, Repository, now_sec};
use crate::{
    entities::{movie, screening},
    models::{NewScreening, ScreeningPatch, ScreeningWithMovie},
};

/// Screenings are always read together with their movie.
#[derive(Clone)]
pub struct ScreeningRepository {
    db: DatabaseConnection,
}

impl ScreeningRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_live(&self, id: i32) -> RepoResult<screening::Model> {
        screening::Entity::find_by_id(id)
            .filter(screening::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .ok_or(RepoError::NotFound)
    }

    async fn load_with_movie(&self, id: i32) -> RepoResult<ScreeningWithMovie> {
        let (screening, movie) = screening::Entity::find_by_id(id)
            .filter(screening::Column::DeletedAt.is_null())
            .find_also_related(movie::Entity)
            .one(&self.db)
            .await?
            .ok_or(RepoError::NotFound)?;
        Ok(ScreeningWithMovie::new(screening, movie))
    }
}

#[async_trait]
impl Repository for ScreeningRepository {
    type Record = ScreeningWithMovie;
    type Create = NewScreening;
    type Update = ScreeningPatch;

    async fn all(&self) -> RepoResult<Vec<ScreeningWithMovie>> {
        let rows = screening::Entity::find()
            .filter(screening::Column::DeletedAt.is_null())
            .order_by_asc(screening::Column::Id)
            .find_also_related(movie::Entity)
            .all(&self.db)
            .await?;
        debug!(count = rows.len(), "loaded screenings");
        Ok(rows.into_iter().map(|(s, m)| ScreeningWithMovie::new(s, m)).collect())
    }

    async fn find(&self, id: i32) -> RepoResult<ScreeningWithMovie> {
        self.load_with_movie(id).await
    }

    async fn create(&self, fields: NewScreening) -> RepoResult<ScreeningWithMovie> {
        let now = now_sec();
        let model = screening::ActiveModel {
            id: Default::default(),
            date: Set(fields.date),
            available_seats: Set(fields.available_seats),
            movie_id: Set(fields.movie_id),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        };

        let screening = model.insert(&self.db).await?;
        debug!(id = screening.id, movie_id = screening.movie_id, "created screening");
        self.load_with_movie(screening.id).await
    }

    async fn update(&self, id: i32, fields: ScreeningPatch) -> RepoResult<ScreeningWithMovie> {
        let mut model: screening::ActiveModel = self.find_live(id).await?.into();

        if let Some(date) = fields.date {
            model.date = Set(date);
        }
        if let Some(available_seats) = fields.available_seats {
            model.available_seats = Set(available_seats);
        }
        if let Some(movie_id) = fields.movie_id {
            model.movie_id = Set(movie_id);
        }
        model.updated_at = Set(now_sec());

        let screening = model.update(&self.db).await?;
        debug!(id = screening.id, "updated screening");
        self.load_with_movie(screening.id).await
    }

    async fn delete(&self, id: i32) -> RepoResult<bool> {
        self.find_live(id).await?;

        let result = screening::Entity::update_many()
            .col_expr(screening::Column::DeletedAt, Expr::value(now_sec()))
            .filter(screening::Column::Id.eq(id))
            .filter(screening::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await?;

        debug!(id, rows = result.rows_affected, "soft-deleted screening");
        Ok(result.rows_affected > 0)
    }
}
