//! 产品服务端到端测试
//!
//! 通过 TestServer 驱动真实路由，每个测试使用独立的临时数据库文件。

use axum::http::StatusCode;
use axum_test::TestServer;
use product_ms::app::product::handler::{create_routes, AppState};
use product_ms::app::product::model::Product;
use product_ms::app::product::repository::ProductRepository;
use product_ms::app::product::service::ProductService;
use product_ms::infrastructure::database::DatabaseManager;
use serde_json::json;
use tempfile::TempDir;
use uuid::Uuid;

async fn create_test_server() -> (TempDir, TestServer) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let url = format!("sqlite:{}", dir.path().join("products.db").display());

    let db = DatabaseManager::new(&url)
        .await
        .expect("failed to open database");
    db.create_tables().await.expect("failed to create tables");

    let pool = db.get_pool().clone();
    let state = AppState {
        product_service: ProductService::new(ProductRepository::new(pool.clone())),
        db: pool,
    };

    let server = TestServer::new(create_routes().with_state(state)).unwrap();
    (dir, server)
}

async fn create_product(server: &TestServer, name: &str, description: &str, price: f64) -> Product {
    let response = server
        .post("/products")
        .json(&json!({
            "name": name,
            "description": description,
            "price": price
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json()
}

#[tokio::test]
async fn product_lifecycle_follows_the_crud_contract() {
    let (_dir, server) = create_test_server().await;

    // 创建 → 201，四个字段全部填充
    let created = create_product(&server, "Product 1", "Description 1", 1.0).await;
    let id = created.id.expect("created product must carry a generated id");
    assert_eq!(created.name.as_deref(), Some("Product 1"));
    assert_eq!(created.description.as_deref(), Some("Description 1"));
    assert_eq!(created.price, Some(1.0));

    // 除 price 外为空的整行替换 → 400，消息按字典序聚合
    let response = server
        .put(&format!("/products/{}", id))
        .json(&json!({ "price": -1.0 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status_code"], 400);
    assert_eq!(
        body["message"],
        "[Description must not be blank, Name must not be blank, Price must be greater than 0]"
    );

    // 删除从未存在的 id → 404
    let response = server.delete(&format!("/products/{}", Uuid::new_v4())).await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn create_discards_any_body_supplied_id() {
    let (_dir, server) = create_test_server().await;

    let body_id = Uuid::new_v4();
    let response = server
        .post("/products")
        .json(&json!({
            "id": body_id,
            "name": "Product 1",
            "description": "Description 1",
            "price": 1.0
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let created: Product = response.json();
    assert_ne!(created.id, Some(body_id));

    let response = server.get(&format!("/products/{}", body_id)).await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn update_replaces_the_full_row_and_keeps_the_path_id() {
    let (_dir, server) = create_test_server().await;

    let created = create_product(&server, "Product 1", "Description 1", 1.0).await;
    let id = created.id.unwrap();

    // 请求体携带另一个 id，路径 id 必须胜出
    let response = server
        .put(&format!("/products/{}", id))
        .json(&json!({
            "id": Uuid::new_v4(),
            "name": "Product 2",
            "description": "Description 2",
            "price": 2.0
        }))
        .await;

    response.assert_status_ok();
    let updated: Product = response.json();
    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.name.as_deref(), Some("Product 2"));

    let response = server.get(&format!("/products/{}", id)).await;
    response.assert_status_ok();
    let fetched: Product = response.json();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_on_unknown_id_returns_not_found_even_for_valid_body() {
    let (_dir, server) = create_test_server().await;

    let response = server
        .put(&format!("/products/{}", Uuid::new_v4()))
        .json(&json!({
            "name": "Product 1",
            "description": "Description 1",
            "price": 1.0
        }))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn find_all_returns_every_stored_product() {
    let (_dir, server) = create_test_server().await;

    let response = server.get("/products").await;
    response.assert_status_ok();
    let products: Vec<Product> = response.json();
    assert!(products.is_empty());

    for i in 1..=5 {
        create_product(
            &server,
            &format!("Product {}", i),
            &format!("Description {}", i),
            i as f64,
        )
        .await;
    }

    let response = server.get("/products").await;
    response.assert_status_ok();
    let products: Vec<Product> = response.json();
    assert_eq!(products.len(), 5);
}

#[tokio::test]
async fn delete_returns_ok_and_removes_the_row() {
    let (_dir, server) = create_test_server().await;

    let created = create_product(&server, "Product 1", "Description 1", 1.0).await;
    let id = created.id.unwrap();

    let response = server.delete(&format!("/products/{}", id)).await;
    response.assert_status_ok();
    assert!(response.text().is_empty());

    let response = server.get(&format!("/products/{}", id)).await;
    response.assert_status_not_found();

    let response = server.delete(&format!("/products/{}", id)).await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn search_combines_substring_and_price_range() {
    let (_dir, server) = create_test_server().await;

    create_product(&server, "Product 1", "Description 1", 1.0).await;
    create_product(&server, "Product 2", "Description 2", 2.0).await;
    create_product(&server, "Product 3", "Description 3", 3.0).await;
    create_product(&server, "Other", "Nothing here", 10.0).await;

    // 子串 + 闭区间
    let response = server
        .get("/products/search?q=Description&min_price=1&max_price=3")
        .await;
    response.assert_status_ok();
    let products: Vec<Product> = response.json();
    assert_eq!(products.len(), 3);

    // 省略价格参数时区间覆盖所有正价格
    let response = server.get("/products/search?q=Description").await;
    response.assert_status_ok();
    let products: Vec<Product> = response.json();
    assert_eq!(products.len(), 3);

    // 全部省略时返回所有行
    let response = server.get("/products/search").await;
    response.assert_status_ok();
    let products: Vec<Product> = response.json();
    assert_eq!(products.len(), 4);

    // 只限定上界
    let response = server.get("/products/search?max_price=2").await;
    response.assert_status_ok();
    let products: Vec<Product> = response.json();
    assert_eq!(products.len(), 2);

    // 子串匹配区分大小写
    let response = server.get("/products/search?q=description").await;
    response.assert_status_ok();
    let products: Vec<Product> = response.json();
    assert!(products.is_empty());
}
