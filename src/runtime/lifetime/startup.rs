use crate::config::AppConfig;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::warn;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
///
/// 配置里缺库连接或 schema 名属于部署错误，直接终止进程，
/// 不把问题拖到第一个请求。
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let config = AppConfig::get();
    if config.database.url.is_empty() {
        eprintln!("DATABASE_URL (or DB_HOST/DB_USER/DB_NAME) must be configured");
        std::process::exit(1);
    }

    let storage = crate::storage::create_storage().await.unwrap_or_else(|e| {
        eprintln!("Failed to create storage backend: {e}");
        std::process::exit(1);
    });
    warn!(
        "Storage backend initialized (directory schema: {}, college schema: {})",
        config.database.directory_schema, config.database.college_schema
    );

    StartupContext { storage }
}
