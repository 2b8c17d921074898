pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod seed;
pub mod validation;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::Config,
    repository::{MovieRepository, ScreeningRepository},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub movies: MovieRepository,
    pub screenings: ScreeningRepository,
}

impl AppState {
    pub fn new(config: Arc<Config>, db: DatabaseConnection) -> Self {
        Self {
            config,
            movies: MovieRepository::new(db.clone()),
            screenings: ScreeningRepository::new(db),
        }
    }
}
