mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{make_router, request, send};

#[sqlx::test(
    migrations = "../adapter/migrations",
    fixtures(path = "../../adapter/fixtures", scripts("common"))
)]
async fn last_seat_goes_to_the_first_caller(pool: sqlx::PgPool) {
    let app = make_router(pool);

    // 定員 1 の部屋に alice が入る
    let (status, body) = send(
        &app,
        request(Method::POST, "/booking", Some("token-alice"), Some(json!({ "roomId": 1 }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["bookingId"].as_i64().is_some());

    // bob は満室で弾かれる
    let (status, body) = send(
        &app,
        request(Method::POST, "/booking", Some("token-bob"), Some(json!({ "roomId": 1 }))),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["name"], "FullRoomError");
}

#[sqlx::test(
    migrations = "../adapter/migrations",
    fixtures(path = "../../adapter/fixtures", scripts("common", "booking"))
)]
async fn booking_is_stable_across_reads(pool: sqlx::PgPool) {
    let app = make_router(pool);

    let (status, first) = send(&app, request(Method::GET, "/booking", Some("token-alice"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["id"], 1);
    assert_eq!(first["room"]["id"], 2);
    assert_eq!(first["room"]["occupancy"], 1);

    let (_, second) = send(&app, request(Method::GET, "/booking", Some("token-alice"), None)).await;
    assert_eq!(first, second);

    // 予約の無いユーザーは 404
    let (status, _) = send(&app, request(Method::GET, "/booking", Some("token-bob"), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(
    migrations = "../adapter/migrations",
    fixtures(path = "../../adapter/fixtures", scripts("common", "booking"))
)]
async fn change_room(pool: sqlx::PgPool) {
    let app = make_router(pool);

    let (status, body) = send(
        &app,
        request(Method::PUT, "/booking/1", Some("token-alice"), Some(json!({ "roomId": 3 }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["bookingId"], 1);

    let (_, booking) = send(&app, request(Method::GET, "/booking", Some("token-alice"), None)).await;
    assert_eq!(booking["room"]["id"], 3);

    // 他人の予約は変更できない
    let (status, _) = send(
        &app,
        request(Method::PUT, "/booking/1", Some("token-bob"), Some(json!({ "roomId": 2 }))),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // パスの予約 ID が数値でなければ 400
    let (status, _) = send(
        &app,
        request(Method::PUT, "/booking/abc", Some("token-alice"), Some(json!({ "roomId": 2 }))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(
    migrations = "../adapter/migrations",
    fixtures(path = "../../adapter/fixtures", scripts("common"))
)]
async fn booking_requires_a_paid_hotel_ticket(pool: sqlx::PgPool) {
    let app = make_router(pool);

    // carol は未払い、dave はオンライン参加。どちらも予約系では 403
    for token in ["token-carol", "token-dave"] {
        let (status, _) = send(
            &app,
            request(Method::POST, "/booking", Some(token), Some(json!({ "roomId": 2 }))),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    // 存在しない部屋は 404
    let (status, _) = send(
        &app,
        request(Method::POST, "/booking", Some("token-alice"), Some(json!({ "roomId": 99 }))),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // roomId 欠落は 400
    let (status, _) = send(
        &app,
        request(Method::POST, "/booking", Some("token-alice"), Some(json!({}))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
