use crate::error::{AppError, AppResult};
use crate::external::RazorpayClient;
use crate::models::{CreatePaymentOrderRequest, PaymentOrder};
use std::sync::atomic::{AtomicU64, Ordering};

/// 进程内收据序号，保证同一毫秒内的收据号也不重复
static RECEIPT_SEQ: AtomicU64 = AtomicU64::new(0);

/// 主单位转最小单位的换算系数（INR/USD 均为 1:100）
const MINOR_UNIT_FACTOR: i64 = 100;

#[derive(Clone)]
pub struct PaymentService {
    razorpay: RazorpayClient,
}

impl PaymentService {
    pub fn new(razorpay: RazorpayClient) -> Self {
        Self { razorpay }
    }

    /// 创建网关支付订单；与预订落库相互独立，调用方自行关联
    pub async fn create_payment_order(
        &self,
        request: CreatePaymentOrderRequest,
    ) -> AppResult<PaymentOrder> {
        request.validate()?;

        let amount_minor = to_minor_units(request.amount)?;
        let receipt = generate_receipt_id();

        let order = self
            .razorpay
            .create_order(amount_minor, &request.currency, &receipt)
            .await?;

        log::info!(
            "Payment order {} created: {} {} (receipt {})",
            order.id,
            order.amount,
            order.currency,
            order.receipt
        );

        Ok(order)
    }
}

/// 主单位转最小单位；超出 i64 可表示范围的金额拒绝
pub fn to_minor_units(amount_major: i64) -> AppResult<i64> {
    amount_major
        .checked_mul(MINOR_UNIT_FACTOR)
        .ok_or_else(|| AppError::ValidationError("amount is too large".to_string()))
}

pub fn generate_receipt_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let seq = RECEIPT_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("order_rcptid_{millis}_{seq}")
}
