use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

// Payment Status Enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "UPPERCASE")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Paypal,
}

#[derive(Debug, Clone)]
pub struct Payment {
    pub payment_id: Uuid,
    pub amount: Decimal,
    pub method: PaymentMethod,
    status: PaymentStatus,
    pub timestamp: DateTime<Utc>,
}

impl Payment {
    pub fn new(amount: Decimal, method: PaymentMethod) -> Self {
        Payment {
            payment_id: Uuid::new_v4(),
            amount,
            method,
            status: PaymentStatus::Pending,
            timestamp: Utc::now(),
        }
    }

    // Simulated payment processing. A payment is processed at most once;
    // repeated calls report the outcome of the first attempt.
    pub fn process(&mut self) -> bool {
        if self.status != PaymentStatus::Pending {
            return self.status == PaymentStatus::Completed;
        }
        self.status = PaymentStatus::Completed;
        true
    }

    pub fn status(&self) -> PaymentStatus {
        self.status
    }
}
