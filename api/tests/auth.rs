mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{make_router, request, send};

#[sqlx::test(
    migrations = "../adapter/migrations",
    fixtures(path = "../../adapter/fixtures", scripts("common"))
)]
async fn sign_up_login_and_logout(pool: sqlx::PgPool) {
    let app = make_router(pool);

    let credentials = json!({ "email": "frank@example.com", "password": "s3cret-pass" });
    let (status, user) = send(&app, request(Method::POST, "/users", None, Some(credentials.clone()))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["email"], "frank@example.com");

    // 同じメールアドレスでは登録できない
    let (status, _) = send(&app, request(Method::POST, "/users", None, Some(credentials.clone()))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, session) = send(&app, request(Method::POST, "/auth/login", None, Some(credentials))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["userId"], user["id"]);
    let token = session["accessToken"].as_str().unwrap().to_string();

    let (status, me) = send(&app, request(Method::GET, "/users/me", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "frank@example.com");

    let (status, _) = send(&app, request(Method::POST, "/auth/logout", Some(&token), None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // ログアウト後のトークンは使えない
    let (status, _) = send(&app, request(Method::GET, "/users/me", Some(&token), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[sqlx::test(
    migrations = "../adapter/migrations",
    fixtures(path = "../../adapter/fixtures", scripts("common"))
)]
async fn wrong_password_is_rejected(pool: sqlx::PgPool) {
    let app = make_router(pool);

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/users",
            None,
            Some(json!({ "email": "grace@example.com", "password": "correct-horse" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/auth/login",
            None,
            Some(json!({ "email": "grace@example.com", "password": "battery-staple" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["name"], "UnauthorizedError");
}

#[sqlx::test(
    migrations = "../adapter/migrations",
    fixtures(path = "../../adapter/fixtures", scripts("common"))
)]
async fn protected_routes_require_a_token(pool: sqlx::PgPool) {
    let app = make_router(pool);

    for (method, uri) in [
        (Method::GET, "/enrollments"),
        (Method::GET, "/tickets"),
        (Method::GET, "/tickets/types"),
        (Method::GET, "/hotels"),
        (Method::GET, "/hotels/1"),
        (Method::GET, "/booking"),
        (Method::GET, "/payments?ticketId=1"),
    ] {
        let (status, _) = send(&app, request(method.clone(), uri, None, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");

        let (status, _) = send(&app, request(method, uri, Some("no-such-token"), None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[sqlx::test(
    migrations = "../adapter/migrations",
    fixtures(path = "../../adapter/fixtures", scripts("common"))
)]
async fn health_endpoints(pool: sqlx::PgPool) {
    let app = make_router(pool);

    let (status, _) = send(&app, request(Method::GET, "/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, request(Method::GET, "/health/db", None, None)).await;
    assert_eq!(status, StatusCode::OK);
}
