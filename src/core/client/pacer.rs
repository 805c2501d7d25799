use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Enforces a minimum spacing between consecutive outbound requests.
///
/// Every request goes through [`RequestPacer::wait`], which sleeps until at least
/// `spacing` has elapsed since the previous request was released.
#[derive(Debug)]
pub struct RequestPacer {
    spacing: Duration,
    last: Mutex<Option<Instant>>,
}

impl RequestPacer {
    pub fn new(spacing: Duration) -> Self {
        Self {
            spacing,
            last: Mutex::new(None),
        }
    }

    pub fn spacing(&self) -> Duration {
        self.spacing
    }

    pub async fn wait(&self) {
        if self.spacing.is_zero() {
            return;
        }
        let mut last = self.last.lock().await;
        if let Some(prev) = *last {
            let ready = prev + self.spacing;
            if ready > Instant::now() {
                tokio::time::sleep_until(ready).await;
            }
        }
        *last = Some(Instant::now());
    }
}
