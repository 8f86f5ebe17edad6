//! 产品业务服务
//!
//! 纯编排层：更新前的存在性检查在此完成，其余操作直接委托数据访问层。

use uuid::Uuid;

use super::model::Product;
use super::repository::ProductRepository;
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct ProductService {
    repository: ProductRepository,
}

impl ProductService {
    pub fn new(repository: ProductRepository) -> Self {
        Self { repository }
    }

    pub async fn create(&self, product: Product) -> Result<Product, CoreError> {
        Ok(self.repository.save(product).await?)
    }

    /// 整行替换；目标 id 不存在时返回 NotFound
    pub async fn update(&self, product: Product) -> Result<Product, CoreError> {
        // 不带 id 的更新请求等同于目标不存在
        let id = product.id.ok_or(CoreError::NotFound)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound)?;

        Ok(self.repository.save(product).await?)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Product, CoreError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    pub async fn find_all(&self) -> Result<Vec<Product>, CoreError> {
        Ok(self.repository.find_all().await?)
    }

    pub async fn find_by_search_parameters(
        &self,
        q: &str,
        min_price: f64,
        max_price: f64,
    ) -> Result<Vec<Product>, CoreError> {
        Ok(self
            .repository
            .find_by_search_parameters(q, min_price, max_price)
            .await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        if self.repository.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(CoreError::NotFound)
        }
    }
}
