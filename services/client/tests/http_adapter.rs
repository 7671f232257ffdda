//! Runs the reqwest adapter against an in-process stub of the auth backend.

use athletic_spirit_core::domain::{Credentials, PasswordReset, Registration};
use athletic_spirit_core::ports::{AuthApi, PortError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use client_lib::adapters::HttpAuthAdapter;
use serde_json::{json, Value};

async fn login(Json(body): Json<Value>) -> Response {
    if body["email"] == "sam@example.com" && body["password"] == "Passw0rd!" {
        Json(json!({
            "token": "jwt-abc",
            "user": { "user_id": "u1", "email": "sam@example.com", "username": "sam" }
        }))
        .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "detail": "Invalid email or password" })),
        )
            .into_response()
    }
}

async fn signup(Json(body): Json<Value>) -> Response {
    if body["username"] == "taken" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Username already taken" })),
        )
            .into_response();
    }
    Json(json!({ "message": "User registered successfully", "user_id": "u2" })).into_response()
}

async fn google(Json(body): Json<Value>) -> Response {
    assert!(body["id_token"].is_string());
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({ "detail": "Google OAuth integration requires proper configuration." })),
    )
        .into_response()
}

async fn forgot_password(Json(body): Json<Value>) -> Response {
    assert!(body["email"].is_string());
    Json(json!({
        "message": "If an account with that email exists, a reset link has been sent."
    }))
    .into_response()
}

async fn reset_password() -> Response {
    (StatusCode::BAD_GATEWAY, "upstream unavailable").into_response()
}

async fn spawn_backend() -> String {
    let app = Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
        .route("/auth/google", post(google))
        .route("/forgot-password", post(forgot_password))
        .route("/reset-password", post(reset_password));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn adapter(base_url: &str) -> HttpAuthAdapter {
    HttpAuthAdapter::new(reqwest::Client::new(), base_url)
}

#[tokio::test]
async fn login_returns_token_on_success() {
    let api = adapter(&spawn_backend().await);

    let response = api
        .login(&Credentials {
            email: "sam@example.com".into(),
            password: "Passw0rd!".into(),
        })
        .await
        .unwrap();

    assert!(response.is_ok());
    assert_eq!(response.token.as_deref(), Some("jwt-abc"));
}

#[tokio::test]
async fn login_failure_reads_fastapi_detail() {
    let api = adapter(&spawn_backend().await);

    let response = api
        .login(&Credentials {
            email: "sam@example.com".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.status, 401);
    assert_eq!(response.error.as_deref(), Some("Invalid email or password"));
    assert_eq!(response.token, None);
}

#[tokio::test]
async fn signup_passes_message_and_error_through() {
    let api = adapter(&spawn_backend().await);

    let ok = api
        .signup(&Registration {
            username: "sam".into(),
            email: "sam@example.com".into(),
            password: "Passw0rd!".into(),
        })
        .await
        .unwrap();
    assert!(ok.is_ok());
    assert_eq!(ok.message.as_deref(), Some("User registered successfully"));

    let taken = api
        .signup(&Registration {
            username: "taken".into(),
            email: "other@example.com".into(),
            password: "Passw0rd!".into(),
        })
        .await
        .unwrap();
    assert_eq!(taken.status, 400);
    assert_eq!(taken.error.as_deref(), Some("Username already taken"));
}

#[tokio::test]
async fn google_and_forgot_password_post_json() {
    let api = adapter(&spawn_backend().await);

    let google = api.google_login("id-token").await.unwrap();
    assert_eq!(google.status, 501);
    assert!(google.error.is_some());

    let forgot = api.forgot_password("sam@example.com").await.unwrap();
    assert!(forgot.is_ok());
}

#[tokio::test]
async fn non_json_body_is_a_decode_error() {
    let api = adapter(&spawn_backend().await);

    let err = api
        .reset_password(&PasswordReset {
            token: "t".into(),
            password: "p".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, PortError::Decode(_)));
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = adapter(&format!("http://{}", addr));
    let err = api.forgot_password("sam@example.com").await.unwrap_err();

    assert!(matches!(err, PortError::Transport(_)));
}
