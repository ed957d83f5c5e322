use poem::{
    EndpointExt, IntoResponse, Route, Server as PoemServer, listener::TcpListener,
    middleware::Tracing,
};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.shopcart_api,
                container.cart_item_api,
            ),
            "ShopCarts REST API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .catch_all_error(api_error)
            .with(config.cors)
            .with(Tracing);
        println!("Server running at http://{}", addr);
        println!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

/// Converts framework-level failures (unparseable body, wrong media type,
/// unmatched method or path) into the same JSON error body the API handlers
/// produce.
async fn api_error(err: poem::Error) -> impl IntoResponse {
    let status = err.status();
    let body = serde_json::json!({
        "status": status.as_u16(),
        "error": status.canonical_reason().unwrap_or("Error"),
        "message": err.to_string(),
    });
    poem::web::Json(body).with_status(status)
}
