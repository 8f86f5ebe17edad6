//! 产品数据访问层
//!
//! products 表的唯一所有者。id 以带连字符的 TEXT 形式存储，
//! 仅在本层边界与 Uuid 互转。

use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use super::model::Product;

/// products 表行记录
#[derive(Debug, FromRow)]
struct ProductRow {
    id: String,
    name: String,
    description: String,
    price: f64,
}

impl ProductRow {
    fn try_into_product(self) -> Result<Product, sqlx::Error> {
        let id = Uuid::parse_str(&self.id).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        Ok(Product {
            id: Some(id),
            name: Some(self.name),
            description: Some(self.description),
            price: Some(self.price),
        })
    }
}

#[derive(Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 插入或整行替换；没有 id 的产品在此处分配新 id
    pub async fn save(&self, product: Product) -> Result<Product, sqlx::Error> {
        let id = product.id.unwrap_or_else(Uuid::new_v4);

        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (id, name, description, price)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                price = excluded.price
            RETURNING id, name, description, price
            "#,
        )
        .bind(id.to_string())
        .bind(product.name)
        .bind(product.description)
        .bind(product.price)
        .fetch_one(&self.pool)
        .await?;

        row.try_into_product()
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, sqlx::Error> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, price FROM products WHERE id = ?1",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(ProductRow::try_into_product).transpose()
    }

    pub async fn find_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        let rows =
            sqlx::query_as::<_, ProductRow>("SELECT id, name, description, price FROM products")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter().map(ProductRow::try_into_product).collect()
    }

    /// 名称或描述包含 q（区分大小写），且价格落在闭区间内
    pub async fn find_by_search_parameters(
        &self,
        q: &str,
        min_price: f64,
        max_price: f64,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let pattern = format!("%{}%", q);

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price FROM products
            WHERE (name LIKE ?1 OR description LIKE ?1)
              AND price BETWEEN ?2 AND ?3
            "#,
        )
        .bind(&pattern)
        .bind(min_price)
        .bind(max_price)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ProductRow::try_into_product).collect()
    }

    /// 返回是否确实删除了行
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
