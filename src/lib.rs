//! EduPortal - 校园门户后端服务
//!
//! 基于 Actix Web 构建的学生门户后端：登录、仪表盘、科目与作业提交。
//!
//! # 架构
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `storage`: 数据存储层（SeaORM）
//! - `utils`: 工具函数

pub mod config;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
