//! Message delivery — pluggable sink behind a trait.
//!
//! The service ships only `SimulatedSink`: it waits a fixed delay so the client can
//! show progress, logs the submission, and reports success. A single attempt, no retry.
//!
//! `AppState` holds an `Arc<dyn MessageSink>`.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::contact::validation::Accepted;
use crate::errors::AppError;

#[derive(Debug, Clone, Serialize)]
pub struct DeliveryReceipt {
    pub message_id: Uuid,
    pub received_at: DateTime<Utc>,
    pub backend: &'static str,
}

#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn deliver(&self, message: &Accepted) -> Result<DeliveryReceipt, AppError>;
}

/// Pretends to send: sleeps `delay`, then logs the message metadata.
pub struct SimulatedSink {
    delay: Duration,
}

impl SimulatedSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl MessageSink for SimulatedSink {
    async fn deliver(&self, message: &Accepted) -> Result<DeliveryReceipt, AppError> {
        tokio::time::sleep(self.delay).await;

        let receipt = DeliveryReceipt {
            message_id: Uuid::new_v4(),
            received_at: Utc::now(),
            backend: "simulated",
        };
        info!(
            message_id = %receipt.message_id,
            subject = message.subject.label(),
            notify = message.notify,
            urgent = message.urgent,
            chars = message.message.chars().count(),
            "Contact message from {} accepted",
            message.name
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::Subject;
    use tokio::time::Instant;

    fn accepted() -> Accepted {
        Accepted {
            name: "Juan".to_string(),
            email: "a@b.com".to_string(),
            subject: Subject::GeneralInquiry,
            message: "hi".to_string(),
            notify: false,
            urgent: false,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_sink_waits_configured_delay() {
        let sink = SimulatedSink::new(Duration::from_millis(1500));
        let start = Instant::now();
        let receipt = sink.deliver(&accepted()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(1500));
        assert_eq!(receipt.backend, "simulated");
    }

    #[tokio::test]
    async fn test_receipts_are_unique() {
        let sink = SimulatedSink::new(Duration::ZERO);
        let a = sink.deliver(&accepted()).await.unwrap();
        let b = sink.deliver(&accepted()).await.unwrap();
        assert_ne!(a.message_id, b.message_id);
    }
}
