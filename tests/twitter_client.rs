// tests/twitter_client.rs
//
// The reqwest client against a local server speaking the v2 wire format:
// endpoint paths, query wiring, bearer header, and envelope decoding.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use social_pulse::config::Settings;
use social_pulse::source::PostSource;
use social_pulse::twitter::TwitterClient;

#[derive(Clone, Default)]
struct Recorded {
    search_params: Arc<Mutex<Vec<HashMap<String, String>>>>,
    auth_headers: Arc<Mutex<Vec<String>>>,
}

async fn search_handler(
    State(rec): State<Recorded>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Json<serde_json::Value> {
    let auth = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    rec.auth_headers.lock().unwrap().push(auth);
    rec.search_params.lock().unwrap().push(params);

    Json(json!({
        "data": [
            {
                "id": "1",
                "author_id": "a1",
                "text": "rust is great",
                "created_at": "2024-05-01T12:00:00Z",
                "lang": "en"
            },
            {
                "id": "2",
                "author_id": "a2",
                "text": "meh"
            }
        ]
    }))
}

async fn likers_handler(Path(id): Path<String>) -> Json<serde_json::Value> {
    if id == "1" {
        Json(json!({ "data": [ { "id": "u1" }, { "id": "u2" } ] }))
    } else {
        // zero likes: the remote omits the data member entirely
        Json(json!({ "meta": { "result_count": 0 } }))
    }
}

async fn user_handler(Path(id): Path<String>) -> (StatusCode, Json<serde_json::Value>) {
    if id == "a1" {
        let body = json!({ "data": { "id": "a1", "username": "alice" } });
        (StatusCode::OK, Json(body))
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "title": "boom" })))
    }
}

async fn spawn_fake_api(rec: Recorded) -> String {
    let router = Router::new()
        .route("/2/tweets/search/recent", get(search_handler))
        .route("/2/tweets/{id}/liking_users", get(likers_handler))
        .route("/2/users/{id}", get(user_handler))
        .with_state(rec);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn settings(api_base: String) -> Settings {
    Settings {
        bearer_token: "test-token".to_string(),
        api_base,
        bind_addr: "127.0.0.1:0".to_string(),
    }
}

#[tokio::test]
async fn search_decodes_posts_and_wires_query_parameters() {
    let rec = Recorded::default();
    let base = spawn_fake_api(rec.clone()).await;
    let client = TwitterClient::new(&settings(base)).unwrap();

    let posts = client.search_posts("rust -is:retweet", 25).await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, "1");
    assert_eq!(posts[0].author_id, "a1");
    assert_eq!(posts[0].text, "rust is great");
    assert!(posts[0].created_at.is_some());
    assert_eq!(posts[0].lang.as_deref(), Some("en"));
    // fields the remote did not send stay None
    assert_eq!(posts[1].created_at, None);
    assert_eq!(posts[1].lang, None);

    let params = rec.search_params.lock().unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params[0]["query"], "rust -is:retweet");
    assert_eq!(params[0]["max_results"], "25");
    assert_eq!(params[0]["tweet.fields"], "created_at,author_id,lang");

    let auth = rec.auth_headers.lock().unwrap();
    assert_eq!(auth[0], "Bearer test-token");
}

#[tokio::test]
async fn likers_with_no_data_member_decode_to_none() {
    let base = spawn_fake_api(Recorded::default()).await;
    let client = TwitterClient::new(&settings(base)).unwrap();

    let liked = client.get_likers("1").await.unwrap();
    let ids: Vec<String> = liked.unwrap().into_iter().map(|u| u.id).collect();
    assert_eq!(ids, vec!["u1".to_string(), "u2".to_string()]);

    assert_eq!(client.get_likers("2").await.unwrap(), None);
}

#[tokio::test]
async fn user_lookup_decodes_and_trailing_base_slash_is_tolerated() {
    let base = spawn_fake_api(Recorded::default()).await;
    let client = TwitterClient::new(&settings(format!("{base}/"))).unwrap();

    let user = client.get_user("a1").await.unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.id, "a1");
}

#[tokio::test]
async fn remote_error_statuses_become_errors() {
    let base = spawn_fake_api(Recorded::default()).await;
    let client = TwitterClient::new(&settings(base)).unwrap();

    let err = client.get_user("gone").await.unwrap_err();
    assert!(err.to_string().contains("remote status"), "{err}");
}
