//! # 产品管理微服务
//!
//! 基于 Axum + SQLx 的单资源 CRUD 服务，按分层架构组织：
//! - app: 应用层（处理器、业务服务、数据访问）
//! - core: 核心层（错误处理）
//! - infrastructure: 基础设施层（数据库连接、日志）

pub mod app;
pub mod core;
pub mod infrastructure;
