//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

/// 核心错误类型
#[derive(Debug)]
pub enum CoreError {
    /// 字段校验失败，携带所有违规消息
    Validation(Vec<String>),
    /// 目标产品不存在
    NotFound,
    /// 底层存储错误
    Database(sqlx::Error),
}

/// 校验失败的错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            CoreError::Validation(mut messages) => {
                // 渲染前按字典序排序，输出形如 [a, b, c] 的列表
                messages.sort();
                let body = ErrorResponse {
                    status_code: StatusCode::BAD_REQUEST.as_u16(),
                    message: format!("[{}]", messages.join(", ")),
                };
                (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
            }
            // 404 不带响应体
            CoreError::NotFound => StatusCode::NOT_FOUND.into_response(),
            CoreError::Database(e) => {
                error!("Database error: {}", e);
                let body = ErrorResponse {
                    status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    message: "Internal server error".to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
            }
        }
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .into_iter()
            .flat_map(|(_, errors)| {
                errors.iter().map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| "Validation error".to_string())
                })
            })
            .collect();

        CoreError::Validation(messages)
    }
}

impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        CoreError::Database(err)
    }
}
