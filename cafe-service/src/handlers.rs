//! Handler模块

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use common::errors::AppError;
use common::models::cafe::CafeQuery;
use crate::service::CafeService;
use crate::state::AppState;

/// 按城市查询咖啡馆
///
/// 返回以逗号分隔的咖啡馆名称，没有匹配时返回空响应体。
/// 重复的查询参数只取第一个值。
#[utoipa::path(
    get,
    path = "/cafe",
    tag = "cafe",
    params(CafeQuery),
    responses(
        (status = 200, description = "逗号分隔的咖啡馆名称", body = String, content_type = "text/plain"),
        (status = 400, description = "unknown city 或 incorrect count", body = String, content_type = "text/plain")
    )
)]
pub async fn list_cafes(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<String, AppError> {
    let query = CafeQuery::from_pairs(pairs);

    let service = CafeService::new(state.catalog.clone());
    let names = service.find(&query)?;
    Ok(CafeService::render(&names))
}

/// 健康检查端点
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "服务运行正常", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.config.service_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        cities: state.catalog.len(),
    })
}

/// 健康检查响应
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// 服务状态
    pub status: String,
    /// 服务名称
    pub service: String,
    /// 服务版本
    pub version: String,
    /// 当前时间戳
    pub timestamp: DateTime<Utc>,
    /// 目录中的城市数量
    pub cities: usize,
}
