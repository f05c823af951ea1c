//! 仪表盘查询行

use sea_orm::FromQueryResult;

#[derive(Debug, Clone, FromQueryResult)]
pub struct DashboardRow {
    pub dashboard_id: i64,
    pub dashboard_title: Option<String>,
    pub dashboard_image: Option<Vec<u8>>,
}

impl DashboardRow {
    pub fn into_item(self) -> super::responses::DashboardItem {
        super::responses::DashboardItem {
            id: self.dashboard_id,
            title: self.dashboard_title,
            // 仪表盘图片带 data URI 前缀，历史前端直接塞进 <img src>
            image: crate::utils::to_data_uri(self.dashboard_image),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_item() {
        let item = DashboardRow {
            dashboard_id: 3,
            dashboard_title: Some("Sports Day".into()),
            dashboard_image: Some(b"img".to_vec()),
        }
        .into_item();
        assert_eq!(item.id, 3);
        assert_eq!(item.image.as_deref(), Some("data:image/jpeg;base64,aW1n"));
    }

    #[test]
    fn test_null_image() {
        let item = DashboardRow {
            dashboard_id: 1,
            dashboard_title: None,
            dashboard_image: None,
        }
        .into_item();
        assert_eq!(item.image, None);
    }
}
