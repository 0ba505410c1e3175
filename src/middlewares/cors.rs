use crate::config::CorsConfig;
use actix_cors::Cors;

/// 按配置的来源白名单构建 CORS；列表为空时放行所有来源（本地开发）
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_any_header()
        .supports_credentials()
        .max_age(3600);

    if config.allowed_origins.is_empty() {
        cors = cors.allowed_origin_fn(|_, _req_head| true);
    } else {
        for origin in &config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
