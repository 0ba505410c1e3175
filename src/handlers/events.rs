use crate::realtime::NotificationHub;
use crate::utils::generate_object_id;
use actix_web::{HttpResponse, Result, web};
use futures_util::stream;
use tokio::sync::broadcast::error::RecvError;

/// 响应流被丢弃（客户端断开）时注销连接
struct ClientGuard {
    hub: NotificationHub,
    client_id: String,
}

impl Drop for ClientGuard {
    fn drop(&mut self) {
        self.hub.deregister_client(&self.client_id);
    }
}

#[utoipa::path(
    get,
    path = "/events",
    tag = "events",
    responses(
        (status = 200, description = "SSE 事件流，推送 connect/disconnect 生命周期事件")
    )
)]
pub async fn events(hub: web::Data<NotificationHub>) -> Result<HttpResponse> {
    let client_id = generate_object_id();

    // 先订阅再登记，确保本连接能收到自己的 connect 事件
    let rx = hub.subscribe();
    hub.register_client(&client_id);
    let guard = ClientGuard {
        hub: hub.get_ref().clone(),
        client_id,
    };

    let stream = stream::unfold((rx, guard), |(mut rx, guard)| async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    let data = serde_json::to_string(&event.payload)
                        .unwrap_or_else(|_| "{}".to_string());
                    let frame = format!("event: {}\ndata: {}\n\n", event.event, data);
                    return Some((
                        Ok::<_, actix_web::Error>(web::Bytes::from(frame)),
                        (rx, guard),
                    ));
                }
                Err(RecvError::Lagged(skipped)) => {
                    // 尽力而为：积压被丢弃，不中断连接
                    log::warn!("SSE subscriber lagged, {skipped} events dropped");
                    continue;
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Ok(HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(stream))
}

pub fn events_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/events").route("", web::get().to(events)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_events_endpoint_streams_and_registers_client() {
        let hub = NotificationHub::new();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(hub.clone()))
                .configure(events_config),
        )
        .await;

        let req = test::TestRequest::get().uri("/events").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/event-stream"
        );
        assert_eq!(hub.client_count(), 1);
    }
}
