//! 产品处理器
//!
//! HTTP 传输层：请求体校验、路径 id 归一化、状态码映射。

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::{model::Product, service::ProductService};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
    pub db: SqlitePool,
}

/// 检索参数，三个都可以省略
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

/// 路由表
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/products", get(find_all_products).post(create_product))
        .route("/products/search", get(search_products))
        .route(
            "/products/:id",
            get(find_product_by_id)
                .put(update_product)
                .delete(delete_product),
        )
}

/// 创建产品
pub async fn create_product(
    State(state): State<AppState>,
    Json(mut product): Json<Product>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    product.validate()?;
    // id 由持久层生成，请求体中的 id 一律丢弃
    product.id = None;

    let created = state.product_service.create(product).await?;
    info!("Created product: {:?}", created.id);

    Ok((StatusCode::CREATED, Json(created)))
}

/// 更新产品（整行替换）
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut product): Json<Product>,
) -> Result<Json<Product>, CoreError> {
    product.validate()?;
    // 路径中的 id 优先于请求体中的 id
    product.id = Some(id);

    let updated = state.product_service.update(product).await?;
    info!("Updated product: {}", id);

    Ok(Json(updated))
}

/// 按 id 获取产品
pub async fn find_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Product>, CoreError> {
    let product = state.product_service.find_by_id(id).await?;
    Ok(Json(product))
}

/// 获取全部产品，顺序为存储层的自然顺序
pub async fn find_all_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.product_service.find_all().await?;
    Ok(Json(products))
}

/// 组合检索：名称/描述子串 + 价格闭区间
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Product>>, CoreError> {
    // 缺省值取可表示范围的边界，而不是真正的无界
    let q = params.q.unwrap_or_default();
    let min_price = params.min_price.unwrap_or(f64::MIN_POSITIVE);
    let max_price = params.max_price.unwrap_or(f64::MAX);

    let products = state
        .product_service
        .find_by_search_parameters(&q, min_price, max_price)
        .await?;

    Ok(Json(products))
}

/// 删除产品
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, CoreError> {
    state.product_service.delete(id).await?;
    info!("Deleted product: {}", id);

    Ok(StatusCode::OK)
}

/// 健康检查
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, CoreError> {
    // 探活底层连接
    sqlx::query("SELECT 1").execute(&state.db).await?;

    Ok(Json(serde_json::json!({
        "status": "healthy",
        "database": "connected",
        "timestamp": chrono::Utc::now()
    })))
}
