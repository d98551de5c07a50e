//! Tests for `HttpReservationClient` against a local stand-in server.
//!
//! The stand-in speaks the same envelope as the real intake service:
//! 200 `{ success: true, message }` or 4xx/5xx `{ success: false, message }`.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use bistro_client::{
    ApiReply, ClientConfig, HttpReservationClient, NotificationKind, NotificationQueue,
    ReservationApi, ReservationForm, SubmitOutcome, View, ViewRouter,
};
use bistro_core::reservation::{ReservationField, ReservationFields};
use serde_json::{json, Value};

const ORIGIN: &str = "http://localhost:5173";

#[derive(Clone, Default)]
struct Seen {
    origins: Arc<Mutex<Vec<String>>>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

async fn send(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if let Some(origin) = headers.get("origin").and_then(|v| v.to_str().ok()) {
        seen.origins.lock().unwrap().push(origin.to_string());
    }
    seen.bodies.lock().unwrap().push(body.clone());

    match body["email"].as_str() {
        Some("boom@example.com") => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "success": false })),
        ),
        Some(email) if email.contains('@') => (
            StatusCode::OK,
            Json(json!({ "success": true, "message": "Reservation sent successfully!" })),
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "message": "Provide a valid email!" })),
        ),
    }
}

/// Start the stand-in server and return its config and request log.
async fn spawn_server() -> (ClientConfig, Seen) {
    let seen = Seen::default();
    let app = Router::new()
        .route("/api/v1/reservation/send", post(send))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (ClientConfig::new(format!("http://{addr}"), ORIGIN), seen)
}

fn john() -> ReservationFields {
    ReservationFields {
        first_name: "John".into(),
        last_name: "Smith".into(),
        email: "john@example.com".into(),
        phone: "1234567890".into(),
        date: "2025-01-01".into(),
        time: "19:00".into(),
    }
}

#[tokio::test]
async fn sends_camel_case_body_with_origin() {
    let (config, seen) = spawn_server().await;
    let client = HttpReservationClient::new(&config).unwrap();

    let reply = client.send_reservation(&john()).await.unwrap();

    assert_eq!(
        reply,
        ApiReply {
            success: true,
            message: Some("Reservation sent successfully!".into()),
        }
    );
    assert_eq!(seen.origins.lock().unwrap().as_slice(), [ORIGIN]);

    let body = seen.bodies.lock().unwrap()[0].clone();
    assert_eq!(body["firstName"], "John");
    assert_eq!(body["phone"], "1234567890");
}

#[tokio::test]
async fn error_status_is_a_failed_reply_with_server_message() {
    let (config, _) = spawn_server().await;
    let client = HttpReservationClient::new(&config).unwrap();

    let mut fields = john();
    fields.email = "nope".into();
    let reply = client.send_reservation(&fields).await.unwrap();

    assert!(!reply.success);
    assert_eq!(reply.message.as_deref(), Some("Provide a valid email!"));
}

#[tokio::test]
async fn form_round_trip_success_clears_and_navigates() {
    let (config, seen) = spawn_server().await;
    let client = HttpReservationClient::new(&config).unwrap();
    let toasts = NotificationQueue::new();
    let router = ViewRouter::new(View::Reservation);

    let mut form = ReservationForm::new();
    for field in ReservationField::ALL {
        form.set(field, john().get(field));
    }

    let outcome = form.submit(&client, &toasts, &router).await;

    assert_eq!(outcome, SubmitOutcome::Sent);
    assert_eq!(router.current(), View::Success);
    assert_eq!(form.values(), &ReservationFields::default());
    assert_eq!(seen.bodies.lock().unwrap().len(), 1);
    assert_eq!(toasts.drain()[0].kind, NotificationKind::Success);
}

#[tokio::test]
async fn form_round_trip_without_message_uses_fallback() {
    let (config, _) = spawn_server().await;
    let client = HttpReservationClient::new(&config).unwrap();
    let toasts = NotificationQueue::new();
    let router = ViewRouter::new(View::Reservation);

    let mut form = ReservationForm::new();
    for field in ReservationField::ALL {
        form.set(field, john().get(field));
    }
    form.set(ReservationField::Email, "boom@example.com");

    let outcome = form.submit(&client, &toasts, &router).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            message: "Something went wrong. Please try again.".into()
        }
    );
    assert_eq!(router.current(), View::Reservation);
    assert_eq!(form.get(ReservationField::Email), "boom@example.com");
}

#[tokio::test]
async fn unreachable_server_is_a_client_error() {
    let config = ClientConfig::new("http://127.0.0.1:1", ORIGIN);
    let client = HttpReservationClient::new(&config).unwrap();

    assert!(client.send_reservation(&john()).await.is_err());
}
