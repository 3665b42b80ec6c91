use adapter::database::ConnectionPool;
use api::route::routes;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use registry::AppRegistry;
use serde_json::Value;
use shared::config::{AppConfig, AuthConfig, DatabaseConfig, ServerConfig};
use tower::ServiceExt;

pub fn make_router(pool: sqlx::PgPool) -> Router {
    // 接続情報は使われない（プールは sqlx::test から渡される）
    let app_config = AppConfig {
        database: DatabaseConfig {
            host: "localhost".into(),
            port: 5432,
            username: "app".into(),
            password: "passwd".into(),
            database: "app".into(),
        },
        auth: AuthConfig { ttl: 3600 },
        server: ServerConfig { port: 8080 },
    };
    let registry = AppRegistry::new(ConnectionPool::new(pool), app_config);
    routes().with_state(registry)
}

pub fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
