//! End-to-end flows through the router, the SeaORM repository and a real
//! (in-memory SQLite) database migrated by the production `Migrator`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database};
use serde_json::{json, Value};
use tower::Service;

async fn start_app() -> anyhow::Result<Router> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(server::startup::build_app(db))
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder.header("content-type", "application/json").body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = app.clone().call(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, value))
}

#[tokio::test]
async fn e2e_added_student_listed_exactly_once() -> anyhow::Result<()> {
    let app = start_app().await?;

    let (status, created) = call(&app, "POST", "/students", Some(json!({"name": "John", "surname": "Doe"}))).await?;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap_or_default().to_string();
    assert!(!id.is_empty());

    let (status, listed) = call(&app, "GET", "/students?page=1&size=10", None).await?;
    assert_eq!(status, StatusCode::OK);
    let students = listed["students"].as_array().cloned().unwrap_or_default();
    let matches: Vec<&Value> = students.iter().filter(|s| s["id"] == id.as_str()).collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(*matches[0], json!({"id": id, "name": "John", "surname": "Doe"}));
    assert_eq!(listed["page"], json!({"pageNumber": 1, "pageSize": 10, "totalElements": 1, "totalPages": 1}));
    Ok(())
}

#[tokio::test]
async fn e2e_fetch_and_delete_lifecycle() -> anyhow::Result<()> {
    let app = start_app().await?;

    let (_, created) = call(&app, "POST", "/students", Some(json!({"name": "ahmet", "surname": "talha"}))).await?;
    let id = created["id"].as_str().unwrap_or_default().to_string();

    let (status, fetched) = call(&app, "GET", &format!("/students/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, _) = call(&app, "DELETE", &format!("/students/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = call(&app, "GET", &format!("/students/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "student not found");

    // deleting again is still a success
    let (status, _) = call(&app, "DELETE", &format!("/students/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);

    let (_, listed) = call(&app, "GET", "/students", None).await?;
    assert_eq!(listed["page"]["totalElements"], 0);
    assert_eq!(listed["page"]["totalPages"], 0);
    Ok(())
}

#[tokio::test]
async fn e2e_pages_are_disjoint_and_cover_all_rows() -> anyhow::Result<()> {
    let app = start_app().await?;
    for i in 0..7 {
        call(&app, "POST", "/students", Some(json!({"name": format!("student{i}"), "surname": "x"}))).await?;
    }

    let mut seen = Vec::new();
    for page in 1..=3 {
        let (status, listed) = call(&app, "GET", &format!("/students?page={page}&size=3"), None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed["page"]["totalPages"], 3);
        for s in listed["students"].as_array().cloned().unwrap_or_default() {
            seen.push(s["id"].as_str().unwrap_or_default().to_string());
        }
    }
    let mut unique = seen.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(seen.len(), 7);
    assert_eq!(unique.len(), 7);
    Ok(())
}
