use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use commission_engine::{NotificationSink, SaleRelayApi};
use log::*;

use crate::{
    config::ServerConfig,
    errors::ServerError,
    integrations::pushcut::PushcutSink,
    keep_alive::start_keep_alive_worker,
    routes::{index, ping, ChannelWebhookRoute},
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let sink = PushcutSink::new(config.pushcut.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    match config.keep_alive.target() {
        Some(url) => {
            // Runs for the lifetime of the process
            let _ = start_keep_alive_worker(url.to_string(), config.keep_alive.interval);
        },
        None => debug!("🏓 Keep-alive worker not started"),
    }
    info!("📬 Serving webhooks for: {}", config.channels.names().join(", "));
    let srv = create_server_instance(config, sink)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance<S>(config: ServerConfig, sink: S) -> Result<Server, ServerError>
where S: NotificationSink + Clone + Send + 'static {
    let channels = web::Data::new(config.channels.clone());
    let srv = HttpServer::new(move || {
        let relay_api = SaleRelayApi::new(sink.clone());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("relay::access_log"))
            .app_data(channels.clone())
            .app_data(web::Data::new(relay_api))
            .service(ping)
            .service(index)
            .service(ChannelWebhookRoute::<S>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
