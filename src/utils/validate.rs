use once_cell::sync::Lazy;
use regex::Regex;

static SCHEMA_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("Invalid schema name regex"));

/// 校验 schema 名称
///
/// schema 名称来自配置，启动时校验一次，之后作为常量拼进 SQL 语句。
/// 用户输入永远不会走到这里——所有请求参数都通过占位符绑定。
pub fn validate_schema_name(name: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Schema name must not be empty");
    }
    if name.len() > 64 {
        return Err("Schema name must be at most 64 characters");
    }
    if !SCHEMA_NAME_RE.is_match(name) {
        return Err("Schema name must start with a letter and contain only letters, numbers or underscores");
    }
    Ok(())
}

/// 必填字符串参数：去除首尾空白，空串视为缺失
pub fn required_field(value: &Option<String>) -> Option<&str> {
    match value {
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() { None } else { Some(trimmed) }
        }
        None => None,
    }
}
