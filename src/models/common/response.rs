use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 接口响应形状沿用既有前端约定：
// 成功为 {"success": true, "message": ...}（部分接口附带 data 或直接返回数组），
// 失败为 {"error": ...}。

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn new() -> Self {
        Self { success: true }
    }
}

impl Default for SuccessResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// 存储层错误统一对外收敛为这一条消息，细节只进日志
    pub fn internal() -> Self {
        Self::new("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_shape() {
        let json = serde_json::to_value(MessageResponse::new("College code found")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": true, "message": "College code found"})
        );
    }

    #[test]
    fn test_error_response_shape() {
        let json = serde_json::to_value(ErrorResponse::internal()).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Internal server error"}));
    }
}
