use actix_web::http::StatusCode;

use super::helpers::get_request;

#[actix_web::test]
async fn ping_endpoint() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/ping").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[actix_web::test]
async fn root_endpoint() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

#[actix_web::test]
async fn webhooks_are_post_only() {
    let _ = env_logger::try_init().ok();
    let (status, _) = get_request("/costa-rica").await;
    assert!(status.is_client_error(), "was: {status}");
}
