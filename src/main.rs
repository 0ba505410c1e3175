use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter

use dinebook_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    external::RazorpayClient,
    handlers,
    middlewares::create_cors,
    realtime::NotificationHub,
    services::*,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().expect("Failed to load configuration file");

    // 创建数据库连接池
    let pool = create_pool(&config.database)
        .await
        .expect("Failed to create database connection pool");

    // 运行数据库迁移
    run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    // 创建外部服务
    let razorpay_client = RazorpayClient::new(config.razorpay.clone());

    // 创建服务
    let booking_service = BookingService::new(pool.clone());
    let restaurant_service = RestaurantService::new(pool.clone());
    let payment_service = PaymentService::new(razorpay_client);

    // 进程级通知中心，随服务启动创建、注入各处理器
    let notification_hub = NotificationHub::new();

    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    let cors_config = config.cors.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors(&cors_config))
            .app_data(web::Data::new(booking_service.clone()))
            .app_data(web::Data::new(restaurant_service.clone()))
            .app_data(web::Data::new(payment_service.clone()))
            .app_data(web::Data::new(notification_hub.clone()))
            .configure(swagger_config)
            .configure(handlers::booking_config)
            .configure(handlers::restaurant_config)
            .configure(handlers::payment_config)
            .configure(handlers::events_config)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
