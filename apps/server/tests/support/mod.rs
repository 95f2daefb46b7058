use anyhow::Context as _;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use scoped_data_server::{api::create_router, AppState, Config};
use std::net::SocketAddr;
use tokio::task::JoinHandle;
use tower::ServiceExt as _;

pub const NO_DATA: &str = "No data set for current request";

pub fn set_ack(data: &str) -> String {
    format!("Data set for current request: {data}")
}

pub fn data_body(data: &str) -> Bytes {
    Bytes::from(serde_json::json!({ "data": data }).to_string())
}

/// In-process app driven through `tower::ServiceExt::oneshot`.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        Self::new_with_config(|_| {})
    }

    pub fn new_with_config(configure: impl FnOnce(&mut Config)) -> Self {
        let mut config = Config::default();
        configure(&mut config);
        let state = AppState::new(config);
        let router = create_router(state.clone());
        Self { router, state }
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Bytes>,
    ) -> anyhow::Result<(StatusCode, HeaderMap, String)> {
        self.request_with_extra_headers(method, path, body, &[])
            .await
    }

    pub async fn request_with_extra_headers(
        &self,
        method: Method,
        path: &str,
        body: Option<Bytes>,
        extra_headers: &[(&str, &str)],
    ) -> anyhow::Result<(StatusCode, HeaderMap, String)> {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header("content-type", "application/json");
        for (name, value) in extra_headers {
            builder = builder.header(*name, *value);
        }
        let request = builder
            .body(match body {
                Some(bytes) => Body::from(bytes),
                None => Body::empty(),
            })
            .context("build request")?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .context("dispatch request")?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .context("read response body")?;
        let body = String::from_utf8(body.to_vec()).context("response body is UTF-8")?;

        Ok((status, headers, body))
    }

    pub async fn get_data(&self) -> anyhow::Result<String> {
        let (status, _, body) = self.request(Method::GET, "/api/data", None).await?;
        anyhow::ensure!(status == StatusCode::OK, "GET /api/data returned {status}: {body}");
        Ok(body)
    }

    pub async fn post_data(&self, data: &str) -> anyhow::Result<String> {
        let (status, _, body) = self
            .request(Method::POST, "/api/data", Some(data_body(data)))
            .await?;
        anyhow::ensure!(status == StatusCode::OK, "POST /api/data returned {status}: {body}");
        Ok(body)
    }
}

/// The app served over a real socket on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> anyhow::Result<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind ephemeral port")?;
        let addr = listener.local_addr().context("local addr")?;
        let router = create_router(AppState::new(Config::default()));

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                eprintln!("test server stopped: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
