//! 产品管理微服务入口
//!
//! 显式装配各层：日志 → 数据库 → 数据访问 → 业务服务 → 路由。

use std::env;

use product_ms::app::product::handler::{create_routes, AppState};
use product_ms::app::product::repository::ProductRepository;
use product_ms::app::product::service::ProductService;
use product_ms::infrastructure::database::DatabaseManager;
use product_ms::infrastructure::logger::Logger;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info, Level};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    Logger::init(Level::INFO);

    info!("Starting product service...");

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:products.db".to_string());

    let db = DatabaseManager::new(&database_url).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        e
    })?;
    db.create_tables().await?;

    let pool = db.get_pool().clone();
    let state = AppState {
        product_service: ProductService::new(ProductRepository::new(pool.clone())),
        db: pool,
    };

    let app = create_routes()
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = TcpListener::bind(&addr).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Product service running on http://{}", addr);
    info!("📖 Available endpoints:");
    info!("   GET    /health          - Health check");
    info!("   GET    /products        - List all products");
    info!("   POST   /products        - Create product");
    info!("   GET    /products/:id    - Get product by ID");
    info!("   PUT    /products/:id    - Replace product");
    info!("   DELETE /products/:id    - Delete product");
    info!("   GET    /products/search - Search (supports ?q=&min_price=&max_price=)");

    axum::serve(listener, app).await?;

    Ok(())
}
