//! 仪表盘存储操作

use super::SeaOrmStorage;
use crate::errors::{EduPortalError, Result};
use crate::models::dashboard::entities::DashboardRow;
use sea_orm::{FromQueryResult, Statement};

impl SeaOrmStorage {
    /// 列出全部仪表盘条目
    pub async fn list_dashboard_rows_impl(&self) -> Result<Vec<DashboardRow>> {
        let sql = format!(
            "SELECT dashboard_id, dashboard_title, dashboard_image FROM {}",
            self.tables.dashboard
        );
        let stmt = Statement::from_string(self.db.get_database_backend(), sql);

        DashboardRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(|e| EduPortalError::database_operation(format!("Dashboard query failed: {e}")))
    }
}
