use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::get,
};
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::Mutex;

use super::{list_drink, margarita_json};

/// In-process stand-in for TheCocktailDB, recording every query string.
pub struct MockCocktailDb {
    pub port: u16,
    pub requests: Arc<Mutex<Vec<String>>>,
}

type Shared = Arc<Mutex<Vec<String>>>;

async fn search(
    State(log): State<Shared>,
    Query(q): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let s = q.get("s").cloned().unwrap_or_default();
    log.lock().await.push(format!("search:{s}"));

    match s.to_lowercase().as_str() {
        "boom" => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"error": "boom"}))),
        "nothing" => (StatusCode::OK, Json(json!({ "drinks": null }))),
        _ => (
            StatusCode::OK,
            Json(json!({
                "drinks": [
                    list_drink("178332", "Smashed Watermelon Margarita"),
                    list_drink("11007", "Margarita"),
                    list_drink("11118", "Blue Margarita"),
                    list_drink("16158", "Whitecap Margarita"),
                    list_drink("17216", "Tommy's Margarita"),
                ]
            })),
        ),
    }
}

async fn lookup(
    State(log): State<Shared>,
    Query(q): Query<HashMap<String, String>>,
) -> Json<Value> {
    let i = q.get("i").cloned().unwrap_or_default();
    log.lock().await.push(format!("lookup:{i}"));

    if i == "11007" {
        Json(json!({ "drinks": [margarita_json()] }))
    } else {
        Json(json!({ "drinks": null }))
    }
}

impl MockCocktailDb {
    pub async fn start() -> Self {
        let requests: Shared = Arc::new(Mutex::new(Vec::new()));

        let app = Router::new()
            .route("/api/json/v1/1/search.php", get(search))
            .route("/api/json/v1/1/lookup.php", get(lookup))
            .with_state(requests.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock cocktaildb");
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(axum::serve(listener, app).into_future());

        Self { port, requests }
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}/api/json/v1/1", self.port)
    }

    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }
}

/// Server that answers 200 with a body shorter than its `content-length`,
/// then hangs up. Returns the API base URL.
pub async fn start_truncating() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind truncating server");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 512\r\n\r\n{\"drinks\":[",
                )
                .await;
            // socket dropped here, mid-body
        }
    });

    format!("http://127.0.0.1:{port}/api/json/v1/1")
}
