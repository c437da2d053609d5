//! # Commission relay server
//! This crate hosts the HTTP server for the commission relay. It is responsible for:
//! Listening for "order paid" webhook calls from storefronts.
//! Running each call through the [`commission_engine`] pipeline for the channel it arrived on.
//! Delivering the resulting notification through Pushcut.
//! Keeping the hosting platform from idling the process, via a periodic self-ping.
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
//!
//! ## Routes
//! The server exposes the following routes:
//! * `GET /ping` and `GET /`: health checks that return a 200 `OK` response.
//! * `POST /{channel}`: the webhook route for each configured channel, e.g. `/costa-rica` or `/shopify-venda`.

pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod helpers;
pub mod integrations;
pub mod keep_alive;
pub mod routes;
pub mod server;
