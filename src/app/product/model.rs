//! 产品数据模型
//!
//! 所有字段均为 Option：请求体中缺失或显式 null 的字段要进入校验阶段
//! 产出聚合错误消息，而不是在反序列化阶段被拒绝。已存储的产品四个字段
//! 必然全部填充。

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// 产品实体，同时充当请求与响应表示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    pub id: Option<Uuid>,

    #[validate(
        required(message = "Name must not be blank"),
        custom(function = "not_blank", message = "Name must not be blank")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Description must not be blank"),
        custom(function = "not_blank", message = "Description must not be blank")
    )]
    pub description: Option<String>,

    #[validate(
        required(message = "Price must not be null"),
        range(exclusive_min = 0.0, message = "Price must be greater than 0")
    )]
    pub price: Option<f64>,
}

/// trim 后为空的字符串视为违规
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}
