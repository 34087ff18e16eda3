//! 咖啡馆查询服务
//!
//! 提供按城市查询咖啡馆的 HTTP 接口：
//! - `GET /cafe`：按城市、数量和关键字筛选咖啡馆
//! - `GET /api/health`：健康检查
//! - `GET /api-docs/openapi.json`：OpenAPI 文档

mod catalog;
mod handlers;
mod routes;
mod service;
mod state;

use anyhow::Context;
use axum::{middleware, routing::get, Json, Router};
use catalog::CityCatalog;
use common::config::{AppConfig, LogFormat};
use common::middleware::request_id::request_id_middleware;
use state::AppState;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utoipa::OpenApi;

const SERVICE_NAME: &str = "cafe-service";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "咖啡馆查询服务 API",
        version = "0.1.0",
        description = "按城市查询咖啡馆的微服务"
    ),
    paths(
        handlers::list_cafes,
        handlers::health_check,
    ),
    components(schemas(
        handlers::HealthResponse,
    )),
    tags(
        (name = "cafe", description = "咖啡馆查询端点"),
        (name = "health", description = "健康检查端点")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置
    let config = AppConfig::load_with_service(SERVICE_NAME);

    // 初始化日志追踪
    init_tracing(config.log_format);

    // 加载咖啡馆目录
    let catalog = match &config.catalog_path {
        Some(path) => CityCatalog::from_file(path)
            .with_context(|| format!("加载咖啡馆目录失败: {}", path.display()))?,
        None => CityCatalog::builtin(),
    };
    if catalog.is_empty() {
        warn!("咖啡馆目录为空，所有请求都将返回 unknown city");
    }
    info!(cities = ?catalog.cities(), "咖啡馆目录已加载");

    // 创建应用状态
    let state = AppState::new(config.clone(), catalog);

    // 创建路由
    let app = create_router(state);

    // 启动服务
    let addr = config.addr();
    info!(service = SERVICE_NAME, address = %addr, "启动服务");

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("绑定地址失败: {}", addr))?;
    axum::serve(listener, app).await.context("服务启动失败")?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::router())
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
