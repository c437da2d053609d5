use std::time::Duration;

use log::*;
use reqwest::Client;
use tokio::{
    task::JoinHandle,
    time::{interval, MissedTickBehavior},
};

const PING_TIMEOUT: Duration = Duration::from_secs(30);

/// Starts the keep-alive worker, which GETs `url` every `every` to stop the hosting platform from idling the server.
/// The first ping goes out one interval after startup. Do not await the returned JoinHandle, as it will run
/// indefinitely.
pub fn start_keep_alive_worker(url: String, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let client = match Client::builder().timeout(PING_TIMEOUT).build() {
            Ok(c) => c,
            Err(e) => {
                error!("🏓 Could not create the keep-alive HTTP client. The keep-alive ping will not run. {e}");
                return;
            },
        };
        let mut timer = interval(every);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        timer.tick().await;
        info!("🏓 Keep-alive worker started. Pinging {url} every {}s", every.as_secs());
        loop {
            timer.tick().await;
            let _ = ping(&client, &url).await;
        }
    })
}

/// Sends a single keep-alive request. Returns whether it succeeded; failures are logged and otherwise ignored.
pub async fn ping(client: &Client, url: &str) -> bool {
    match client.get(url).send().await {
        Ok(res) if res.status().is_success() => {
            info!("🏓 Keep-alive ping to {url} succeeded ({})", res.status());
            true
        },
        Ok(res) => {
            warn!("🏓 Keep-alive ping to {url} returned {}", res.status());
            false
        },
        Err(e) => {
            warn!("🏓 Keep-alive ping to {url} failed. {e}");
            false
        },
    }
}

#[cfg(test)]
mod test {
    use wiremock::{
        matchers::{method, path},
        Mock,
        MockServer,
        ResponseTemplate,
    };

    use super::*;

    #[tokio::test]
    async fn single_ping() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).and(path("/ping")).respond_with(ResponseTemplate::new(200)).mount(&server).await;
        let client = Client::new();
        assert!(ping(&client, &format!("{}/ping", server.uri())).await);
        assert!(!ping(&client, &format!("{}/nope", server.uri())).await);
        assert!(!ping(&client, "http://127.0.0.1:1/ping").await);
    }

    #[tokio::test]
    async fn worker_keeps_pinging_through_failures() {
        let _ = env_logger::try_init();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;
        let handle = start_keep_alive_worker(format!("{}/ping", server.uri()), Duration::from_millis(50));
        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(!handle.is_finished());
        handle.abort();
        let count = server.received_requests().await.map(|r| r.len()).unwrap_or_default();
        assert!(count >= 3, "Only {count} pings were sent");
    }

    #[tokio::test]
    async fn first_ping_waits_one_interval() {
        let server = MockServer::start().await;
        Mock::given(method("GET")).respond_with(ResponseTemplate::new(200)).mount(&server).await;
        let handle = start_keep_alive_worker(format!("{}/ping", server.uri()), Duration::from_secs(60));
        tokio::time::sleep(Duration::from_millis(200)).await;
        handle.abort();
        let count = server.received_requests().await.map(|r| r.len()).unwrap_or_default();
        assert_eq!(count, 0);
    }
}
