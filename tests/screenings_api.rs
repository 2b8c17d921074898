//! HTTP tests for the screening endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_movie, delete, get, post_json};
use serde_json::{Value, json};

fn assert_public_movie(movie: &Value, id: i64) {
    assert_eq!(movie["id"], id);
    let mut keys: Vec<&str> = movie.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["age_limit", "cover_art", "description", "id", "language", "title"]);
}

async fn create_screening(app: &axum::Router, movie_id: i64) -> Value {
    let response = post_json(
        app,
        "/screenings/create",
        json!({ "date": "2025-05-15 19:30:00", "available_seats": 30, "movie_id": movie_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

#[tokio::test]
async fn create_returns_screening_with_movie() {
    let app = build_test_app().await;
    let movie_id = create_movie(&app, "Screened").await;

    let created = create_screening(&app, movie_id).await;
    assert_eq!(created["date"], "2025-05-15 19:30:00");
    assert_eq!(created["available_seats"], 30);
    assert!(created.get("movie_id").is_none());
    assert!(created.get("deleted_at").is_none());
    assert_public_movie(&created["movie"], movie_id);

    let id = created["id"].as_i64().unwrap();
    let fetched = body_json(get(&app, &format!("/screenings/get/{id}")).await).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn list_attaches_movies() {
    let app = build_test_app().await;
    let movie_id = create_movie(&app, "Listed").await;
    create_screening(&app, movie_id).await;
    create_screening(&app, movie_id).await;

    let response = get(&app, "/screenings/list").await;
    assert_eq!(response.status(), StatusCode::OK);

    let screenings = body_json(response).await;
    let screenings = screenings.as_array().unwrap();
    assert_eq!(screenings.len(), 2);
    for screening in screenings {
        assert_public_movie(&screening["movie"], movie_id);
    }
}

#[tokio::test]
async fn unknown_movie_is_rejected_before_writing() {
    let app = build_test_app().await;

    let response = post_json(
        &app,
        "/screenings/create",
        json!({ "date": "2025-05-15 19:30:00", "available_seats": 30, "movie_id": 77 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert_eq!(body["errors"]["movie_id"], json!(["The movie must exist."]));

    let list = body_json(get(&app, "/screenings/list").await).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn seat_limit_is_enforced() {
    let app = build_test_app().await;
    let movie_id = create_movie(&app, "Crowded").await;

    let response = post_json(
        &app,
        "/screenings/create",
        json!({ "date": "2025-05-15 19:30:00", "available_seats": 51, "movie_id": movie_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await["errors"]["available_seats"],
        json!(["The available seats must not exceed 50."])
    );
}

#[tokio::test]
async fn partial_update_keeps_date() {
    let app = build_test_app().await;
    let movie_id = create_movie(&app, "Updated").await;
    let id = create_screening(&app, movie_id).await["id"].as_i64().unwrap();

    let response =
        post_json(&app, &format!("/screenings/update/{id}"), json!({ "available_seats": 40 }))
            .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["available_seats"], 40);
    assert_eq!(updated["date"], "2025-05-15 19:30:00");
    assert_public_movie(&updated["movie"], movie_id);
}

#[tokio::test]
async fn update_to_missing_movie_is_422() {
    let app = build_test_app().await;
    let movie_id = create_movie(&app, "Original").await;
    let id = create_screening(&app, movie_id).await["id"].as_i64().unwrap();

    let response =
        post_json(&app, &format!("/screenings/update/{id}"), json!({ "movie_id": 500 })).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unknown_screening_is_404() {
    let app = build_test_app().await;

    let response = get(&app, "/screenings/get/12").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!({ "message": "Screening not found" }));

    let response = delete(&app, "/screenings/delete/12").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_soft_deletes_once() {
    let app = build_test_app().await;
    let movie_id = create_movie(&app, "Cancelled").await;
    let id = create_screening(&app, movie_id).await["id"].as_i64().unwrap();

    let response = delete(&app, &format!("/screenings/delete/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "message": "Screening deleted successfully" }));

    assert_eq!(get(&app, &format!("/screenings/get/{id}")).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        delete(&app, &format!("/screenings/delete/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn deleting_the_movie_detaches_it() {
    let app = build_test_app().await;
    let movie_id = create_movie(&app, "Retired").await;
    let id = create_screening(&app, movie_id).await["id"].as_i64().unwrap();

    assert_eq!(delete(&app, &format!("/movies/delete/{movie_id}")).await.status(), StatusCode::OK);

    let fetched = body_json(get(&app, &format!("/screenings/get/{id}")).await).await;
    assert!(fetched["movie"].is_null());
}

#[tokio::test]
async fn update_rejects_explicit_null() {
    let app = build_test_app().await;
    let movie_id = create_movie(&app, "Nullable").await;
    let id = create_screening(&app, movie_id).await["id"].as_i64().unwrap();

    let response =
        post_json(&app, &format!("/screenings/update/{id}"), json!({ "available_seats": null }))
            .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body_json(response).await["errors"]["available_seats"][0],
        "Please provide the maximum seating number for the movie."
    );

    let fetched = body_json(get(&app, &format!("/screenings/get/{id}")).await).await;
    assert_eq!(fetched["available_seats"], 30);
}

#[tokio::test]
async fn unparsable_id_is_json_404() {
    let app = build_test_app().await;

    for response in [
        get(&app, "/screenings/get/abc").await,
        get(&app, "/screenings/get/99999999999").await,
        delete(&app, "/screenings/delete/abc").await,
    ] {
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "message": "Screening not found" }));
    }
}
