mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{make_router, request, send};

#[sqlx::test(
    migrations = "../adapter/migrations",
    fixtures(path = "../../adapter/fixtures", scripts("common"))
)]
async fn enroll_then_buy_and_pay_for_a_ticket(pool: sqlx::PgPool) {
    let app = make_router(pool);

    // erin はまだ参加登録していない
    let (status, _) = send(&app, request(Method::GET, "/enrollments", Some("token-erin"), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(
        &app,
        request(Method::POST, "/tickets", Some("token-erin"), Some(json!({ "ticketTypeId": 3 }))),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, enrollment) = send(
        &app,
        request(
            Method::POST,
            "/enrollments",
            Some("token-erin"),
            Some(json!({
                "name": "Erin",
                "cpf": "55555555555",
                "birthday": "1995-05-05",
                "phone": "21999990005"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(enrollment["cpf"], "55555555555");

    let (status, types) = send(&app, request(Method::GET, "/tickets/types", Some("token-erin"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(types.as_array().map(Vec::len), Some(3));

    let (status, ticket) = send(
        &app,
        request(Method::POST, "/tickets", Some("token-erin"), Some(json!({ "ticketTypeId": 3 }))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(ticket["status"], "RESERVED");
    assert_eq!(ticket["ticketType"]["includesHotel"], true);
    let ticket_id = ticket["id"].as_i64().unwrap();

    // 未払いの間はホテルを見られない
    let (status, _) = send(&app, request(Method::GET, "/hotels", Some("token-erin"), None)).await;
    assert_eq!(status, StatusCode::PAYMENT_REQUIRED);

    let (status, _) = send(
        &app,
        request(
            Method::GET,
            &format!("/payments?ticketId={ticket_id}"),
            Some("token-erin"),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, payment) = send(
        &app,
        request(
            Method::POST,
            "/payments/process",
            Some("token-erin"),
            Some(json!({
                "ticketId": ticket_id,
                "cardData": {
                    "issuer": "VISA",
                    "number": "4111111111111234",
                    "name": "ERIN",
                    "expirationDate": "12/30",
                    "cvv": "123"
                }
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payment["value"], 600);
    assert_eq!(payment["cardLastDigits"], "1234");

    let (status, ticket) = send(&app, request(Method::GET, "/tickets", Some("token-erin"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ticket["status"], "PAID");

    let (status, found) = send(
        &app,
        request(
            Method::GET,
            &format!("/payments?ticketId={ticket_id}"),
            Some("token-erin"),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, payment);

    let (status, hotels) = send(&app, request(Method::GET, "/hotels", Some("token-erin"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hotels.as_array().map(Vec::len), Some(2));
}

#[sqlx::test(
    migrations = "../adapter/migrations",
    fixtures(path = "../../adapter/fixtures", scripts("common"))
)]
async fn malformed_input_is_bad_request(pool: sqlx::PgPool) {
    let app = make_router(pool);

    let (status, body) = send(
        &app,
        request(Method::POST, "/tickets", Some("token-erin"), Some(json!({}))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["name"], "InvalidDataError");

    let (status, _) = send(
        &app,
        request(Method::GET, "/payments?ticketId=abc", Some("token-alice"), None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, request(Method::GET, "/payments", Some("token-alice"), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // カード情報の欠落
    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/payments/process",
            Some("token-carol"),
            Some(json!({ "ticketId": 3 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/enrollments",
            Some("token-erin"),
            Some(json!({
                "name": "Erin",
                "cpf": "555",
                "birthday": "1995-05-05",
                "phone": "21999990005"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(
    migrations = "../adapter/migrations",
    fixtures(path = "../../adapter/fixtures", scripts("common", "payment"))
)]
async fn payments_are_private_to_the_ticket_owner(pool: sqlx::PgPool) {
    let app = make_router(pool);

    let (status, payment) = send(
        &app,
        request(Method::GET, "/payments?ticketId=1", Some("token-alice"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payment["cardIssuer"], "VISA");

    let (status, _) = send(
        &app,
        request(Method::GET, "/payments?ticketId=1", Some("token-bob"), None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        request(Method::GET, "/payments?ticketId=99", Some("token-alice"), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(
    migrations = "../adapter/migrations",
    fixtures(path = "../../adapter/fixtures", scripts("common"))
)]
async fn card_number_with_letters_is_rejected(pool: sqlx::PgPool) {
    let app = make_router(pool);

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/payments/process",
            Some("token-carol"),
            Some(json!({
                "ticketId": 3,
                "cardData": {
                    "issuer": "VISA",
                    "number": "abcd",
                    "name": "CAROL",
                    "expirationDate": "12/30",
                    "cvv": "123"
                }
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["name"], "InvalidDataError");

    // 検証で弾かれたのでチケットは未払いのまま
    let (status, ticket) = send(&app, request(Method::GET, "/tickets", Some("token-carol"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ticket["status"], "RESERVED");
}
