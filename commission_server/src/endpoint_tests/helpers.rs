use actix_web::{body::MessageBody, http::StatusCode, test, test::TestRequest, web, App};
use commission_engine::{ChannelTable, SaleRelayApi};
use log::debug;

use super::mocks::MockSink;
use crate::routes::{index, ping, ChannelWebhookRoute};

pub async fn post_webhook(path: &str, body: &str, sink: MockSink) -> (StatusCode, String) {
    let req = TestRequest::post()
        .uri(path)
        .insert_header(("Content-Type", "application/json"))
        .set_payload(body.to_string())
        .to_request();
    call(req, sink).await
}

pub async fn get_request(path: &str) -> (StatusCode, String) {
    let req = TestRequest::get().uri(path).to_request();
    call(req, MockSink::new()).await
}

async fn call(req: actix_http::Request, sink: MockSink) -> (StatusCode, String) {
    let app = App::new()
        .app_data(web::Data::new(ChannelTable::default()))
        .app_data(web::Data::new(SaleRelayApi::new(sink)))
        .service(ping)
        .service(index)
        .service(ChannelWebhookRoute::<MockSink>::new());
    let service = test::init_service(app).await;
    debug!("Making request");
    let (_, res) = test::call_service(&service, req).await.into_parts();
    let status = res.status();
    let body = String::from_utf8_lossy(&res.into_body().try_into_bytes().unwrap()).into_owned();
    (status, body)
}
