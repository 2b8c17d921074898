use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, sea_query::Expr,
};
use tracing::debug;

use super::{RepoError, RepoResult, Repository, now_sec};
use crate::{
    entities::movie,
    models::{MoviePatch, NewMovie},
};

#[derive(Clone)]
pub struct MovieRepository {
    db: DatabaseConnection,
}

impl MovieRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether a live movie with this id exists.
    pub async fn exists(&self, id: i32) -> RepoResult<bool> {
        let count = movie::Entity::find_by_id(id)
            .filter(movie::Column::DeletedAt.is_null())
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn find_live(&self, id: i32) -> RepoResult<movie::Model> {
        movie::Entity::find_by_id(id)
            .filter(movie::Column::DeletedAt.is_null())
            .one(&self.db)
            .await?
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl Repository for MovieRepository {
    type Record = movie::Model;
    type Create = NewMovie;
    type Update = MoviePatch;

    async fn all(&self) -> RepoResult<Vec<movie::Model>> {
        let movies = movie::Entity::find()
            .filter(movie::Column::DeletedAt.is_null())
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?;
        debug!(count = movies.len(), "loaded movies");
        Ok(movies)
    }

    async fn find(&self, id: i32) -> RepoResult<movie::Model> {
        self.find_live(id).await
    }

    async fn create(&self, fields: NewMovie) -> RepoResult<movie::Model> {
        let now = now_sec();
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(fields.title),
            description: Set(fields.description),
            age_limit: Set(fields.age_limit),
            language: Set(fields.language),
            cover_art: Set(fields.cover_art),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        };

        let movie = model.insert(&self.db).await?;
        debug!(id = movie.id, "created movie");
        Ok(movie)
    }

    async fn update(&self, id: i32, fields: MoviePatch) -> RepoResult<movie::Model> {
        let mut model: movie::ActiveModel = self.find_live(id).await?.into();

        if let Some(title) = fields.title {
            model.title = Set(title);
        }
        if let Some(description) = fields.description {
            model.description = Set(description);
        }
        if let Some(age_limit) = fields.age_limit {
            model.age_limit = Set(age_limit);
        }
        if let Some(language) = fields.language {
            model.language = Set(language);
        }
        if let Some(cover_art) = fields.cover_art {
            model.cover_art = Set(cover_art);
        }
        model.updated_at = Set(now_sec());

        let movie = model.update(&self.db).await?;
        debug!(id = movie.id, "updated movie");
        Ok(movie)
    }

    async fn delete(&self, id: i32) -> RepoResult<bool> {
        self.find_live(id).await?;

        let result = movie::Entity::update_many()
            .col_expr(movie::Column::DeletedAt, Expr::value(now_sec()))
            .filter(movie::Column::Id.eq(id))
            .filter(movie::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await?;

        debug!(id, rows = result.rows_affected, "soft-deleted movie");
        Ok(result.rows_affected > 0)
    }
}
