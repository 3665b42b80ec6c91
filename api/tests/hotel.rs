mod common;

use axum::http::{Method, StatusCode};

use common::{make_router, request, send};

#[sqlx::test(
    migrations = "../adapter/migrations",
    fixtures(path = "../../adapter/fixtures", scripts("common", "booking"))
)]
async fn hotel_rooms_show_live_occupancy(pool: sqlx::PgPool) {
    let app = make_router(pool);

    let (status, hotel) = send(&app, request(Method::GET, "/hotels/1", Some("token-bob"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hotel["name"], "Driven Resort");

    let rooms = hotel["rooms"].as_array().unwrap();
    let triple = rooms.iter().find(|r| r["id"] == 2).unwrap();
    assert_eq!(triple["capacity"], 3);
    assert_eq!(triple["occupancy"], 1);

    let (status, _) = send(&app, request(Method::GET, "/hotels/99", Some("token-bob"), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(
    migrations = "../adapter/migrations",
    fixtures(path = "../../adapter/fixtures", scripts("common"))
)]
async fn hotel_listing_rules(pool: sqlx::PgPool) {
    let app = make_router(pool);

    // 参加登録なし
    let (status, _) = send(&app, request(Method::GET, "/hotels", Some("token-erin"), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // 未払い、オンライン参加
    for token in ["token-carol", "token-dave"] {
        let (status, body) = send(&app, request(Method::GET, "/hotels", Some(token), None)).await;
        assert_eq!(status, StatusCode::PAYMENT_REQUIRED);
        assert_eq!(body["name"], "PaymentRequired");
    }
}
