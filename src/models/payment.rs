use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 支持的结算货币，网关按 1:100 主/最小单位换算
pub const SUPPORTED_CURRENCIES: [&str; 2] = ["INR", "USD"];

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentOrderRequest {
    /// 主单位金额（如卢比），网关侧换算为最小单位
    pub amount: i64,
    pub currency: String,
}

impl CreatePaymentOrderRequest {
    pub fn validate(&self) -> AppResult<()> {
        if self.amount <= 0 {
            return Err(AppError::ValidationError(
                "amount must be a positive integer".to_string(),
            ));
        }
        if !SUPPORTED_CURRENCIES.contains(&self.currency.as_str()) {
            return Err(AppError::ValidationError(format!(
                "Unsupported currency: {}",
                self.currency
            )));
        }
        Ok(())
    }
}

/// 网关返回的支付订单对象
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentOrder {
    pub id: String,
    /// 最小单位金额
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_must_be_positive() {
        let req = CreatePaymentOrderRequest {
            amount: 0,
            currency: "INR".to_string(),
        };
        assert!(req.validate().is_err());

        let req = CreatePaymentOrderRequest {
            amount: 100,
            currency: "INR".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_unsupported_currency_rejected() {
        let req = CreatePaymentOrderRequest {
            amount: 100,
            currency: "EUR".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
