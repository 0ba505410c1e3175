use crate::config::RazorpayConfig;
use crate::error::{AppError, AppResult};
use crate::models::PaymentOrder;
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CreateOrderBody<'a> {
    /// 最小单位金额
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
}

#[derive(Clone)]
pub struct RazorpayClient {
    client: Client,
    config: RazorpayConfig,
}

impl RazorpayClient {
    pub fn new(config: RazorpayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// 调用网关创建支付订单（金额已为最小单位）
    pub async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        receipt: &str,
    ) -> AppResult<PaymentOrder> {
        let url = format!("{}/v1/orders", self.config.base_url);

        let body = CreateOrderBody {
            amount: amount_minor,
            currency,
            receipt,
        };

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::GatewayUnavailable(e.to_string()))?;

        if response.status().is_success() {
            let order: PaymentOrder = response
                .json()
                .await
                .map_err(|e| AppError::GatewayUnavailable(e.to_string()))?;
            Ok(order)
        } else {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            Err(AppError::GatewayRejected(format!(
                "order creation failed ({status}): {error_text}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_razorpay_client_creation() {
        let config = RazorpayConfig {
            key_id: "rzp_test_123".to_string(),
            key_secret: "secret_123".to_string(),
            base_url: "https://api.razorpay.com".to_string(),
        };
        let client = RazorpayClient::new(config);
        assert!(!client.config.key_id.is_empty());
    }
}
