//! 图片列整形
//!
//! 查询结果里的二进制图片列在进入响应前统一转成 base64 文本；
//! NULL 保持为 null，绝不变成空串。

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// 二进制图片列 → base64 字符串
pub fn to_base64(blob: Option<Vec<u8>>) -> Option<String> {
    blob.map(|bytes| STANDARD.encode(bytes))
}

/// 二进制图片列 → data URI（仪表盘图片沿用原接口的 data:image/jpeg 前缀）
pub fn to_data_uri(blob: Option<Vec<u8>>) -> Option<String> {
    blob.map(|bytes| format!("data:image/jpeg;base64,{}", STANDARD.encode(bytes)))
}

/// base64 字符串 → 二进制（作业提交的图片上行方向）
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base64() {
        assert_eq!(to_base64(Some(b"abc".to_vec())), Some("YWJj".to_string()));
        assert_eq!(to_base64(Some(vec![])), Some(String::new()));
    }

    #[test]
    fn test_null_blob_stays_null() {
        assert_eq!(to_base64(None), None);
        assert_eq!(to_data_uri(None), None);
    }

    #[test]
    fn test_to_data_uri() {
        assert_eq!(
            to_data_uri(Some(b"abc".to_vec())),
            Some("data:image/jpeg;base64,YWJj".to_string())
        );
    }

    #[test]
    fn test_from_base64_roundtrip() {
        let blob = from_base64("YWJj").expect("decode failed");
        assert_eq!(blob, b"abc");
        assert!(from_base64("not//valid!!").is_err());
    }
}
