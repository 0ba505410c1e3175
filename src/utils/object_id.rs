use crate::error::{AppError, AppResult};
use chrono::Utc;
use rand::Rng;
use regex::Regex;

/// 检查标识符是否为 24 位十六进制对象 ID
pub fn is_valid_object_id(candidate: &str) -> bool {
    let id_regex = Regex::new(r"^[0-9a-fA-F]{24}$").unwrap();
    id_regex.is_match(candidate)
}

/// 验证标识符格式，格式错误时返回 ValidationError
pub fn validate_object_id(candidate: &str) -> AppResult<()> {
    if !is_valid_object_id(candidate) {
        return Err(AppError::ValidationError(format!(
            "Malformed identifier: {candidate}"
        )));
    }
    Ok(())
}

/// 生成新的 24 位十六进制对象 ID（4 字节秒级时间戳 + 8 字节随机数）
pub fn generate_object_id() -> String {
    let timestamp = Utc::now().timestamp() as u32;
    let mut rng = rand::thread_rng();
    let random: [u8; 8] = rng.r#gen();

    let mut id = format!("{timestamp:08x}");
    for byte in random {
        id.push_str(&format!("{byte:02x}"));
    }
    id
}
