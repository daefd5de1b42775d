//! Local Actix server serving canned JSON responses.
//!
//! The server binds `127.0.0.1:0` and must be started from inside an Actix
//! system (for example `#[actix_web::test]`) because it is spawned onto the
//! current `LocalSet`.

use std::net::TcpListener;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};
use reqwest::Url;
use serde_json::Value;

/// One canned response served for `GET path`.
#[derive(Debug, Clone)]
pub struct CannedRoute {
    path: &'static str,
    status: u16,
    body: String,
    delay: Option<Duration>,
}

impl CannedRoute {
    pub fn json(path: &'static str, status: u16, body: &Value) -> Self {
        Self::raw(path, status, &body.to_string())
    }

    pub fn raw(path: &'static str, status: u16, body: &str) -> Self {
        Self {
            path,
            status,
            body: body.to_owned(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

pub struct MockApi {
    base_url: Url,
    handle: ServerHandle,
}

impl MockApi {
    pub fn start(routes: Vec<CannedRoute>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock listener");
        let addr = listener.local_addr().expect("mock listener address");

        let server = HttpServer::new(move || {
            routes.iter().cloned().fold(App::new(), |app, route| {
                app.route(route.path, web::get().to(move || respond(route.clone())))
            })
        })
        .disable_signals()
        .workers(1)
        .listen(listener)
        .expect("listen on mock listener")
        .run();

        let handle = server.handle();
        actix_web::rt::spawn(server);

        Self {
            base_url: Url::parse(&format!("http://{addr}/")).expect("mock base URL"),
            handle,
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

/// Base URL of a port that nothing listens on.
pub fn unreachable_base_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("probe listener address");
    drop(listener);
    Url::parse(&format!("http://{addr}/")).expect("unreachable base URL")
}

async fn respond(route: CannedRoute) -> HttpResponse {
    if let Some(delay) = route.delay {
        actix_web::rt::time::sleep(delay).await;
    }
    let status = StatusCode::from_u16(route.status).expect("canned status code");
    HttpResponse::build(status)
        .content_type("application/json")
        .body(route.body)
}
