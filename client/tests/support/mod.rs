//! Shared fixtures for client integration tests: a fake Saltline backend on
//! the Actix stack, canned raw-socket responders, and recording test doubles.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use async_trait::async_trait;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use client::domain::ports::{
    HttpTransport, Navigator, TransportError, WireRequest, WireResponse,
};

/// Install a fmt subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn faq_payload() -> serde_json::Value {
    json!({"data": [{"id": 1, "question": "Q", "answer": "A"}]})
}

fn trip_payload(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Coastal caves",
        "description": "Three days along the coast",
        "price": "1200.00",
        "duration_days": 3,
        "boat_id": 7,
        "cover_image": null
    })
}

async fn echo_auth(req: HttpRequest) -> HttpResponse {
    let authorization = req
        .headers()
        .get("authorization")
        .and_then(|value| value.to_str().ok());
    HttpResponse::Ok().json(json!({"data": {"authorization": authorization}}))
}

fn backend_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .route(
            "/api/landing-page/faq",
            web::get().to(|| async { HttpResponse::Ok().json(faq_payload()) }),
        )
        .route("/api/echo-auth", web::get().to(echo_auth))
        .route(
            "/api/bookings/42",
            web::get().to(|| async {
                HttpResponse::Unauthorized().json(json!({"error": "token expired"}))
            }),
        )
        .route(
            "/api/blogs",
            web::post().to(|| async {
                HttpResponse::InternalServerError().json(json!({"error": "failed"}))
            }),
        )
        .route(
            "/api/auth/login",
            web::post().to(|body: web::Json<serde_json::Value>| async move {
                if body.get("email").is_some() && body.get("password").is_some() {
                    HttpResponse::Ok().json(json!({
                        "data": {
                            "token": "tok-123",
                            "user": {
                                "id": 5,
                                "name": "Skipper",
                                "email": "skipper@saltline.example",
                                "role": "admin"
                            }
                        }
                    }))
                } else {
                    HttpResponse::UnprocessableEntity().json(json!({"error": "missing fields"}))
                }
            }),
        )
        .route(
            "/api/auth/logout",
            web::post().to(|| async { HttpResponse::NoContent().finish() }),
        )
        .route(
            "/api/trips",
            web::get().to(|| async {
                HttpResponse::Ok().json(json!({"data": [trip_payload(1), trip_payload(2)]}))
            }),
        )
        .route(
            "/api/trips",
            web::post().to(|body: web::Json<serde_json::Value>| async move {
                let mut created = trip_payload(99);
                if let (Some(title), Some(object)) = (body.get("title"), created.as_object_mut()) {
                    object.insert("title".to_owned(), title.clone());
                }
                HttpResponse::Created().json(json!({"data": created}))
            }),
        )
        .route(
            "/api/trips/{id}",
            web::delete().to(|| async { HttpResponse::NoContent().finish() }),
        )
}

/// Start the fake backend on an ephemeral port.
pub async fn spawn_backend() -> (Url, ServerHandle) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind backend listener");
    let addr = listener.local_addr().expect("backend local addr");

    let server = HttpServer::new(backend_app)
        .disable_signals()
        .workers(1)
        .listen(listener)
        .expect("listen on backend socket")
        .run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let base = Url::parse(&format!("http://{addr}")).expect("backend base url");
    (base, handle)
}

/// Serve one canned byte response to the first connection, then exit.
pub async fn canned_responder(response: &'static [u8]) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind canned listener");
    let addr = listener.local_addr().expect("canned local addr");
    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut head = [0_u8; 4096];
            let _ = socket.read(&mut head).await;
            let _ = socket.write_all(response).await;
            let _ = socket.shutdown().await;
        }
    });
    addr
}

/// Navigator double counting login redirects.
#[derive(Default)]
pub struct RecordingNavigator {
    redirects: AtomicUsize,
}

impl RecordingNavigator {
    pub fn redirect_count(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

/// Primary transport double that always fails before a response exists.
#[derive(Default)]
pub struct RefusedTransport {
    calls: AtomicUsize,
}

impl RefusedTransport {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpTransport for RefusedTransport {
    async fn execute(&self, _request: WireRequest) -> Result<WireResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(TransportError::connect("connection refused (scripted)"))
    }
}

/// Convenience: shared pointers the wiring helpers below hand out.
pub struct TestShell {
    pub session: Arc<client::outbound::session::MemorySessionStore>,
    pub navigator: Arc<RecordingNavigator>,
}

impl TestShell {
    pub fn new() -> Self {
        Self {
            session: Arc::new(client::outbound::session::MemorySessionStore::new()),
            navigator: Arc::new(RecordingNavigator::default()),
        }
    }
}

/// Build a production-wired client (reqwest + raw fallback) against `base`.
pub fn production_client(base: &Url, shell: &TestShell) -> client::ApiClient {
    let settings = client::ClientSettings {
        base_url: Some(base.to_string()),
        timeout_seconds: Some(5),
        login_path: None,
    };
    client::outbound::build_client(&settings, shell.session.clone(), shell.navigator.clone())
        .expect("client builds")
}
