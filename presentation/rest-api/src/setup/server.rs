use poem::error::{MethodNotAllowedError, NotFoundError};
use poem::http::StatusCode;
use poem::middleware::{Cors, NormalizePath, Tracing, TrailingSlash};
use poem::{
    Endpoint, EndpointExt, IntoResponse, Response, Route, Server as PoemServer,
    listener::TcpListener,
};
use poem_openapi::OpenApiService;

use crate::api::error::BAD_REQUEST_MESSAGE;
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = Self::app(&addr, container, config.cors);
        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }

    /// Builds the full router. Trailing slashes are ignored; any method/path
    /// pair outside the documented endpoints is answered with 400 "Bad request".
    pub fn app(addr: &str, container: DependencyContainer, cors: Cors) -> impl Endpoint + use<> {
        let api_service = OpenApiService::new(
            (container.health_api, container.receipt_api),
            "Receipt Points API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(NormalizePath::new(TrailingSlash::Trim))
            .with(cors)
            .with(Tracing)
            .catch_all_error(unmatched_route)
    }
}

async fn unmatched_route(err: poem::Error) -> Response {
    if err.is::<NotFoundError>() || err.is::<MethodNotAllowedError>() {
        return (StatusCode::BAD_REQUEST, BAD_REQUEST_MESSAGE).into_response();
    }
    err.into_response()
}
