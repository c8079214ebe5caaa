//! # User Routes
//!
//! ```text
//! GET  /api/users        → 200 [User]
//! GET  /api/users/{id}   → 200 User | 404 {"error": "User not found"}
//! POST /api/users        → 201 User | 400 {"error": "Name and email are required"}
//! ```
//!
//! The collection routes answer with and without the trailing slash.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{debug, info};

use devops_core::validation::validate_new_user;
use devops_core::{CreateUserRequest, User};

use crate::error::ApiError;
use crate::routes::create_payload;
use crate::AppState;

/// User routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/", get(list_users).post(create_user))
        .route("/api/users/{id}", get(get_user))
}

/// Lists every user.
async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    let users = state.store.users().list().await;
    debug!(count = users.len(), "Listing users");
    Json(users)
}

/// Fetches one user. Non-numeric ids are treated as unknown users.
async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Ok(Path(id)) = id else {
        return Err(ApiError::not_found("User"));
    };

    state
        .store
        .users()
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("User"))
}

/// Creates a user from `{"name", "email"}`.
///
/// A body that is not JSON counts as an empty payload; JSON with mistyped
/// fields is reported as such.
async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let request = create_payload(payload)?;

    let new_user = validate_new_user(request)?;
    let user = state.store.users().create(new_user).await;

    info!(id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::routes::test_support::{seeded_router, send, send_raw};

    #[tokio::test]
    async fn test_list_users() {
        let router = seeded_router();
        let res = send(&router, Method::GET, "/api/users/", None).await;

        assert_eq!(res.status, StatusCode::OK);
        let users = res.json();
        let users = users.as_array().unwrap();
        assert_eq!(users.len(), 2);
        for user in users {
            assert!(user.get("id").is_some());
            assert!(user.get("name").is_some());
            assert!(user.get("email").is_some());
        }
    }

    #[tokio::test]
    async fn test_list_users_without_trailing_slash() {
        let router = seeded_router();
        let res = send(&router, Method::GET, "/api/users", None).await;
        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(res.json().as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_user_by_id() {
        let router = seeded_router();
        let res = send(&router, Method::GET, "/api/users/1", None).await;

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(
            res.json(),
            json!({ "id": 1, "name": "John Doe", "email": "john@example.com" })
        );
    }

    #[tokio::test]
    async fn test_get_nonexistent_user() {
        let router = seeded_router();
        let res = send(&router, Method::GET, "/api/users/999", None).await;

        assert_eq!(res.status, StatusCode::NOT_FOUND);
        assert_eq!(res.json()["error"], "User not found");
    }

    #[tokio::test]
    async fn test_get_user_non_numeric_id() {
        let router = seeded_router();
        let res = send(&router, Method::GET, "/api/users/abc", None).await;
        assert_eq!(res.status, StatusCode::NOT_FOUND);
        assert_eq!(res.json()["error"], "User not found");
    }

    #[tokio::test]
    async fn test_create_user() {
        let router = seeded_router();
        let res = send(
            &router,
            Method::POST,
            "/api/users/",
            Some(json!({ "name": "Test User", "email": "test@example.com" })),
        )
        .await;

        assert_eq!(res.status, StatusCode::CREATED);
        let body = res.json();
        assert_eq!(body["name"], "Test User");
        assert_eq!(body["email"], "test@example.com");
        assert_eq!(body["id"], 3);
    }

    #[tokio::test]
    async fn test_create_user_missing_data() {
        let router = seeded_router();
        let res = send(
            &router,
            Method::POST,
            "/api/users/",
            Some(json!({ "name": "Test User" })),
        )
        .await;

        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.json()["error"], "Name and email are required");
        assert_eq!(res.json()["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_user_without_json_body() {
        let router = seeded_router();
        let res = send_raw(
            &router,
            Method::POST,
            "/api/users/",
            Some(("text/plain", "name=Test".to_string())),
        )
        .await;

        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.json()["error"], "Name and email are required");
    }

    #[tokio::test]
    async fn test_create_user_wrong_field_type() {
        let router = seeded_router();
        let res = send(
            &router,
            Method::POST,
            "/api/users/",
            Some(json!({ "name": 42, "email": "test@example.com" })),
        )
        .await;

        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        let body = res.json();
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
    }

    #[tokio::test]
    async fn test_user_creation_then_retrieval() {
        let router = seeded_router();
        let created = send(
            &router,
            Method::POST,
            "/api/users/",
            Some(json!({ "name": "Workflow User", "email": "workflow@example.com" })),
        )
        .await;
        assert_eq!(created.status, StatusCode::CREATED);

        let id = created.json()["id"].as_u64().unwrap();
        let fetched = send(&router, Method::GET, &format!("/api/users/{id}"), None).await;

        assert_eq!(fetched.status, StatusCode::OK);
        assert_eq!(fetched.json()["name"], "Workflow User");
        assert_eq!(fetched.json()["email"], "workflow@example.com");
    }
}
