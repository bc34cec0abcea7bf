//! Small helpers for application-side command handling.

use std::{future::Future, time::Duration};

use tracing::debug;

use pawbridge_common::Result;

/// Delay between retry attempts.
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Split a message into a command name and its arguments.
/// Returns `None` for blank input.
#[must_use]
pub fn parse_command(input: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = input.split_whitespace();
    let name = parts.next()?;
    Some((name, parts.collect()))
}

/// Whether `id` appears in the admin list.
#[must_use]
pub fn is_admin(id: &str, admins: &[String]) -> bool {
    admins.iter().any(|admin| admin == id)
}

/// Opt-in retry wrapper for response operations — the adapter itself
/// never retries. Dispatch refusals (`UnsupportedContext`,
/// `UnsupportedPlatform`) fail immediately; transport errors are
/// retried up to `attempts` times with a fixed delay.
pub async fn retry<T, F, Fut>(attempts: usize, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let attempts = attempts.max(1);
    let mut attempt = 0;
    loop {
        attempt += 1;
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if error.is_unsupported() || attempt >= attempts => return Err(error),
            Err(error) => {
                debug!(%error, attempt, "retrying after transport error");
                tokio::time::sleep(RETRY_DELAY).await;
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pawbridge_common::{Error, Platform, TransportError};

    #[test]
    fn parse_command_splits_name_and_args() {
        assert_eq!(parse_command("ban mira spam"), Some(("ban", vec!["mira", "spam"])));
        assert_eq!(parse_command("ping"), Some(("ping", Vec::new())));
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn is_admin_matches_exact_ids() {
        let admins = vec!["1".to_owned(), "2".to_owned()];
        assert!(is_admin("1", &admins));
        assert!(!is_admin("3", &admins));
        assert!(!is_admin("1", &[]));
    }

    #[tokio::test(start_paused = true)]
    async fn retry_returns_first_success() {
        let calls = AtomicUsize::new(0);
        let result = retry(3, || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(Error::Transport(TransportError::message("send", "down")))
                } else {
                    Ok(n)
                }
            }
        })
        .await;
        assert_eq!(result.unwrap(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn retry_gives_up_after_attempts() {
        let calls = AtomicUsize::new(0);
        let result: Result<()> = retry(2, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(Error::Transport(TransportError::message("send", "down"))) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn retry_does_not_repeat_dispatch_refusals() {
        let calls = AtomicUsize::new(0);
        let result: Result<()> = retry(5, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(Error::UnsupportedPlatform(Platform::Revolt)) }
        })
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
