use actix_web::http::StatusCode;
use commission_engine::{NotificationError, NotificationMessage};
use log::*;

use super::{helpers::post_webhook, mocks::MockSink};
use crate::data_objects::JsonResponse;

fn expect_message(title: &'static str, text: &'static str) -> MockSink {
    let mut sink = MockSink::new();
    sink.expect_send()
        .withf(move |m: &NotificationMessage| m.title == title && m.text == text)
        .times(1)
        .returning(|_| Ok(()));
    sink
}

fn expect_nothing() -> MockSink {
    let mut sink = MockSink::new();
    sink.expect_send().never();
    sink
}

fn json_response(body: &str) -> JsonResponse {
    serde_json::from_str(body).unwrap_or_else(|e| panic!("Not a JsonResponse: {body}. {e}"))
}

const BRL_SALE: &str = r#"{
    "currency": "BRL",
    "total_price": "150.00",
    "line_items": [{"name": "Widget"}],
    "financial_status": "paid",
    "payment_gateway_names": ["pix"]
}"#;

#[actix_web::test]
async fn gated_sale_is_notified() {
    let _ = env_logger::try_init().ok();
    let sink = expect_message("Sale Approved! Widget", "Your commission: R$\u{a0}150,00 • Pix");
    let (status, body) = post_webhook("/shopify-venda", BRL_SALE, sink).await;
    info!("Response body: {body}");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_response(&body), JsonResponse::success("Notification sent."));
}

#[actix_web::test]
async fn country_route_formats_in_its_own_currency() {
    let _ = env_logger::try_init().ok();
    let sink = expect_message("Sale Approved! Course", "🇨🇷 Your commission: ₡1,000.00");
    let payload = r#"{"commission": 1000, "total_price": "9999", "currency": "USD", "line_items": [{"title": "Course"}]}"#;
    let (status, _) = post_webhook("/costa-rica", payload, sink).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn usd_country_routes() {
    let _ = env_logger::try_init().ok();
    let payload = r#"{"total_price": 10, "line_items": [{"name": "Ebook"}]}"#;
    let sink = expect_message("Sale Approved! Ebook", "🇨🇦 Your commission: $10.00");
    let (status, _) = post_webhook("/panama", payload, sink).await;
    assert_eq!(status, StatusCode::OK);
    let sink = expect_message("Sale Approved! Ebook", "🇺🇸 Your commission: $10.00");
    let (status, _) = post_webhook("/el-salvador", payload, sink).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn legacy_route_accepts_whole_unit_currencies() {
    let _ = env_logger::try_init().ok();
    let sink = expect_message("Sale Approved! Unknown Product", "Your commission: ₩50,000");
    let (status, _) = post_webhook("/shopify-aprovado", r#"{"currency": "KRW", "total_price": "50000"}"#, sink).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn legacy_route_handles_unknown_currencies() {
    let _ = env_logger::try_init().ok();
    let sink = expect_message("Sale Approved! Unknown Product", "Your commission: XXX 12.50");
    let (status, _) = post_webhook("/shopify-aprovado", r#"{"currency": "xxx", "total_price": 12.5}"#, sink).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn unpaid_sale_is_acknowledged_but_ignored() {
    let _ = env_logger::try_init().ok();
    let payload = r#"{"currency": "BRL", "total_price": "150.00", "financial_status": "pending"}"#;
    let (status, body) = post_webhook("/shopify-venda", payload, expect_nothing()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_response(&body), JsonResponse::failure("Ignored: order status is 'pending', not 'paid'"));
}

#[actix_web::test]
async fn unlisted_currency_is_acknowledged_but_ignored() {
    let _ = env_logger::try_init().ok();
    let payload = r#"{"currency": "GBP", "total_price": "15.00", "financial_status": "paid"}"#;
    let (status, body) = post_webhook("/shopify-venda", payload, expect_nothing()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_response(&body), JsonResponse::failure("Ignored: currency GBP is not accepted"));
}

#[actix_web::test]
async fn malformed_body_is_a_server_error() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_webhook("/shopify-aprovado", "{not json", expect_nothing()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Could not read the webhook payload."}"#);
    let (status, _) = post_webhook("/shopify-aprovado", "[1, 2, 3]", expect_nothing()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn empty_object_uses_defaults() {
    let _ = env_logger::try_init().ok();
    let sink = expect_message("Sale Approved! Unknown Product", "Your commission: $0.00");
    let (status, _) = post_webhook("/shopify-aprovado", "{}", sink).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn unknown_channel() {
    let _ = env_logger::try_init().ok();
    let (status, body) = post_webhook("/atlantis", BRL_SALE, expect_nothing()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("No webhook is configured for 'atlantis'."), "was: {body}");
}

#[actix_web::test]
async fn delivery_failure_is_a_server_error() {
    let _ = env_logger::try_init().ok();
    let mut sink = MockSink::new();
    sink.expect_send()
        .times(1)
        .returning(|_| Err(NotificationError::Transport("connection reset by peer".to_string())));
    let (status, body) = post_webhook("/shopify-venda", BRL_SALE, sink).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, r#"{"error":"Could not deliver the sale notification."}"#);
}
