//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause the
//! current worker to stop processing new requests. The webhook handler awaits the outbound notification, so it must
//! stay async all the way down.
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};
use commission_engine::{ChannelTable, NotificationSink, RelayOutcome, SaleRelayApi};
use log::*;

use crate::{data_objects::JsonResponse, errors::ServerError, helpers::parse_webhook_body};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/ping")]
pub async fn ping() -> impl Responder {
    trace!("🏓 Received ping");
    HttpResponse::Ok().body("OK")
}

#[get("/")]
pub async fn index() -> impl Responder {
    trace!("🏓 Received health check request");
    HttpResponse::Ok().body("OK")
}

//----------------------------------------------   Webhooks  ----------------------------------------------------
route!(channel_webhook => Post "/{channel}" impl NotificationSink);
/// Route handler for every sale webhook.
///
/// The channel is taken from the path and looked up in the [`ChannelTable`]. The body is handed to the
/// [`SaleRelayApi`] and the response is only sent once the notification has been delivered (or has failed).
///
/// Responses:
/// * 200 `{"success": true, ...}` once the notification was accepted.
/// * 200 `{"success": false, ...}` when the sale was ignored, e.g. because the order is not paid. The storefront must
///   not retry these, so they are not errors.
/// * 404 for channels that do not exist.
/// * 500 when the body is not a JSON object, or the notification could not be delivered.
pub async fn channel_webhook<S>(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Bytes,
    channels: web::Data<ChannelTable>,
    api: web::Data<SaleRelayApi<S>>,
) -> Result<HttpResponse, ServerError>
where
    S: NotificationSink,
{
    let name = path.into_inner();
    trace!("📬 Received webhook request: {}", req.uri());
    let channel = channels.get(&name).ok_or_else(|| {
        debug!("📬 No channel named '{name}'");
        ServerError::UnknownChannel(name.clone())
    })?;
    let payload = parse_webhook_body(&body).map_err(|e| {
        warn!("📬 [{name}] Could not parse webhook body. {e}");
        ServerError::CouldNotDeserializePayload
    })?;
    debug!("📬 [{name}] payload: {payload}");
    let outcome = api.relay_sale(channel, &payload).await.map_err(|e| {
        error!("📬 [{name}] Webhook failed. {e}");
        ServerError::from(e)
    })?;
    let response = match outcome {
        RelayOutcome::Notified(_) => JsonResponse::success("Notification sent."),
        RelayOutcome::Ignored(reason) => JsonResponse::failure(reason),
    };
    Ok(HttpResponse::Ok().json(response))
}
