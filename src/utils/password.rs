use argon2::{Argon2, PasswordHash, PasswordVerifier};

/// 验证密码
///
/// 学生口令由校方后台以 Argon2 哈希写入，本服务只做校验，从不落库。
/// 哈希解析失败（历史明文数据等）一律按验证失败处理。
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};

    fn hash(password: &str) -> String {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .expect("hashing failed")
            .to_string()
    }

    #[test]
    fn test_verify_roundtrip() {
        let h = hash("s3cret-pass");
        assert!(verify_password("s3cret-pass", &h));
        assert!(!verify_password("wrong-pass", &h));
    }

    #[test]
    fn test_plaintext_stored_value_never_verifies() {
        // 旧系统存的是明文；这些值不是合法哈希，必须验证失败
        assert!(!verify_password("password123", "password123"));
        assert!(!verify_password("", ""));
    }
}
