//! Request middleware

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Fixed message logged for every routed request.
pub const DIAGNOSTIC_MESSAGE: &str = "Deze boodschap werd geplaatst door mijn custom middleware";

/// No-op middleware that only logs [`DIAGNOSTIC_MESSAGE`].
///
/// Attach with `route_layer` so unmatched paths do not log it.
pub async fn diagnostic(request: Request, next: Next) -> Response {
    tracing::info!("{}", DIAGNOSTIC_MESSAGE);
    next.run(request).await
}

/// Log capture for tests that assert on emitted lines.
#[cfg(test)]
pub(crate) mod captured {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing::subscriber::DefaultGuard;

    /// Shared buffer that a fmt subscriber writes into
    #[derive(Clone, Default)]
    pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        /// Install a subscriber writing into a fresh buffer for the current
        /// thread. Logs are captured until the guard is dropped.
        pub fn install() -> (Self, DefaultGuard) {
            let logs = Self::default();
            let writer = logs.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(move || writer.clone())
                .with_ansi(false)
                .finish();
            let guard = tracing::subscriber::set_default(subscriber);
            (logs, guard)
        }

        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }

        pub fn count(&self, needle: &str) -> usize {
            self.contents().matches(needle).count()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
