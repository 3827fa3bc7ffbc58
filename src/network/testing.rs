//! In-process stand-in for the Ghassan backend, used by the network tests.

use std::collections::HashMap;
use std::net::Ipv4Addr;

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Json;
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// Starts the mock backend on a random local port and returns its base URL
/// (without the `/api` prefix).
pub async fn spawn_mock_backend() -> String {
    serve(mock_router()).await
}

/// A URL nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn mock_router() -> Router {
    Router::new()
        .route("/api/", get(|| async { Json(json!({"message": "مرحباً"})) }))
        .route(
            "/api/chat/session",
            post(|| async { Json(json!({"session_id": "session-1"})) }),
        )
        .route("/api/chat/message", post(chat_message))
        .route("/api/chat/message-advanced", post(chat_message_advanced))
        .route("/api/chat/history/{session_id}", get(chat_history))
        .route("/api/contact/send", post(contact))
        .route(
            "/api/rag/stats",
            get(|| async {
                Json(json!({
                    "authors_count": 3,
                    "works_count": 5,
                    "sources_count": 8,
                    "embeddings": {"total_embeddings": 42}
                }))
            }),
        )
        .route(
            "/api/collect/simple",
            post(|| async {
                Json(json!({"collection_completed": false, "error": "لا توجد مصادر"}))
            }),
        )
        .route("/api/search/semantic", get(semantic_search))
        .route(
            "/api/authors/add",
            post(|| async { Json(json!({"success": true, "embedding_id": "emb-1"})) }),
        )
        .route(
            "/api/knowledge/add-source",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"detail": "خطأ في قاعدة البيانات"})),
                )
            }),
        )
        .route("/api/upload/avatar", post(upload_avatar))
}

fn reply(body: &Value, extra: Value) -> Value {
    let message = body["message"].as_str().unwrap_or_default();
    let session = body["session_id"].as_str().unwrap_or_default();
    let mut reply = json!({
        "message_id": "reply-1",
        "text": format!("{session}: {message}"),
        "session_id": session,
        "timestamp": "2024-05-01T08:30:00.000001",
        "has_web_search": message.contains("من هو"),
        "model_used": "claude-3-5-sonnet"
    });
    if let (Some(target), Some(extra)) = (reply.as_object_mut(), extra.as_object()) {
        for (key, value) in extra {
            target.insert(key.clone(), value.clone());
        }
    }
    reply
}

async fn chat_message(Json(body): Json<Value>) -> Json<Value> {
    Json(reply(&body, json!({})))
}

async fn chat_message_advanced(Json(body): Json<Value>) -> Json<Value> {
    Json(reply(
        &body,
        json!({"reliability_score": 0.87, "confidence_level": "عالي"}),
    ))
}

async fn chat_history(
    Path(session_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let limit = params.get("limit").cloned().unwrap_or_default();
    Json(json!({
        "messages": [
            {
                "id": format!("{session_id}-1"),
                "text": format!("limit={limit}"),
                "sender": "user",
                "timestamp": "2024-05-01T08:00:00"
            },
            {
                "id": format!("{session_id}-2"),
                "text": "أهلاً",
                "sender": "ghassan",
                "timestamp": "2024-05-01T08:00:05",
                "hasWebSearch": false
            }
        ]
    }))
}

async fn contact(Json(body): Json<Value>) -> Json<Value> {
    if body["name"].as_str().unwrap_or_default().is_empty() {
        Json(json!({"success": false, "error": "الاسم مطلوب"}))
    } else {
        Json(json!({"success": true}))
    }
}

async fn semantic_search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let query = params.get("query").cloned().unwrap_or_default();
    let limit = params.get("limit").cloned().unwrap_or_default();
    Json(json!({
        "results": [
            {
                "content_type": "author",
                "similarity_score": 0.91,
                "text_content": format!("{query}|{limit}")
            }
        ]
    }))
}

async fn upload_avatar(body: Bytes) -> impl IntoResponse {
    let raw = String::from_utf8_lossy(&body);
    let complete = raw.contains("name=\"image\"")
        && raw.contains("ghassan-avatar")
        && raw.contains("name=\"type\"");
    if complete {
        Json(json!({"success": true, "filename": "ghassan-avatar.png"}))
    } else {
        Json(json!({"success": false, "error": "حقول ناقصة"}))
    }
}
