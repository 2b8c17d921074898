//! Demo rows for an empty store, enabled with `SEED_DEMO_DATA=true`.

use jiff::{Span, civil::Date};
use tracing::{debug, info};

use crate::{
    AppState,
    models::{NewMovie, NewScreening, SCREENING_DATE_FORMAT},
    repository::{RepoResult, Repository},
};

const DEMO_COUNT: usize = 10;

const LANGUAGES: [&str; 6] = ["Hungarian", "English", "Spanish", "French", "Korean", "Japanese"];

const TITLES: [&str; DEMO_COUNT] = [
    "The Quiet Harbor",
    "Midnight Express Line",
    "A Garden of Glass",
    "Northern Lights Over Budapest",
    "The Last Projectionist",
    "Paper Moons",
    "Red Thread",
    "Seven Bridges",
    "Saltwater Summer",
    "The Clockmaker's Daughter",
];

pub async fn seed_demo_data(state: &AppState) -> RepoResult<()> {
    if !state.movies.all().await?.is_empty() {
        debug!("movies already present, skipping demo data");
        return Ok(());
    }

    let mut movie_ids = Vec::with_capacity(DEMO_COUNT);
    for n in 0..DEMO_COUNT {
        let movie = state.movies.create(demo_movie(n)).await?;
        movie_ids.push(movie.id);
    }

    let today: Date = jiff::Zoned::now().into();
    for n in 0..DEMO_COUNT {
        let movie_id = movie_ids[(n * 3) % movie_ids.len()];
        state.screenings.create(demo_screening(n, today, movie_id)).await?;
    }

    info!(movies = DEMO_COUNT, screenings = DEMO_COUNT, "seeded demo data");
    Ok(())
}

fn demo_movie(n: usize) -> NewMovie {
    let title = TITLES[n % TITLES.len()];
    NewMovie {
        title: title.to_string(),
        description: format!("{title} is a demo feature presentation, entry {} of the catalog.", n + 1),
        age_limit: 10 + (n % 9) as i32,
        language: LANGUAGES[n % LANGUAGES.len()].to_string(),
        cover_art: format!("https://via.placeholder.com/200x300.png?text=movie+poster+{}", n + 1),
    }
}

/// Evening shows on consecutive days with 15..=31 seats.
fn demo_screening(n: usize, start: Date, movie_id: i32) -> NewScreening {
    let day = start.checked_add(Span::new().days(n as i64)).unwrap_or(start);
    let hour = 17 + (n % 5) as i8;
    NewScreening {
        date: day.at(hour, 30, 0, 0).strftime(SCREENING_DATE_FORMAT).to_string(),
        available_seats: 15 + ((n * 7) % 17) as i32,
        movie_id,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{config::Config, db::test_db};

    fn test_config() -> Config {
        Config {
            addr: "127.0.0.1:0".parse().unwrap(),
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            seed_demo_data: true,
        }
    }

    #[test]
    fn demo_values_respect_validation_bounds() {
        let start = jiff::civil::date(2025, 5, 15);
        for n in 0..DEMO_COUNT {
            let movie = demo_movie(n);
            assert!((10..=18).contains(&movie.age_limit));
            assert!((10..=255).contains(&movie.description.chars().count()));
            assert!(movie.language.len() <= 25);

            let screening = demo_screening(n, start, 1);
            assert!((15..=31).contains(&screening.available_seats));
        }
        assert_eq!(demo_screening(0, start, 1).date, "2025-05-15 17:30:00");
    }

    #[tokio::test]
    async fn seeds_once() {
        let state = AppState::new(Arc::new(test_config()), test_db().await);

        seed_demo_data(&state).await.unwrap();
        seed_demo_data(&state).await.unwrap();

        assert_eq!(state.movies.all().await.unwrap().len(), DEMO_COUNT);
        let screenings = state.screenings.all().await.unwrap();
        assert_eq!(screenings.len(), DEMO_COUNT);
        assert!(screenings.iter().all(|s| s.movie.is_some()));
    }
}
