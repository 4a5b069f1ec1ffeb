// Copyright (C) Microsoft Corporation. All rights reserved.

//! Bounded retry with exponential backoff for background key generation.

use std::thread;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use super::*;

/// Default number of retries after the first failed attempt.
pub(crate) const MAX_RETRIES: u32 = 3;

/// Default base delay between attempts.
pub(crate) const BACKOFF_BASE_MS: u64 = 100;

// Caps the doubling so the delay cannot overflow.
const MAX_BACKOFF_SHIFT: u32 = 16;

/// Retry behavior of the background refill worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Retries after the initial attempt; total attempts are
    /// `max_retries + 1`.
    pub max_retries: u32,

    /// Delay before the first retry, doubled for each further retry.
    pub backoff_base_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            backoff_base_ms: BACKOFF_BASE_MS,
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `attempt` (zero based).
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 1u64 << attempt.min(MAX_BACKOFF_SHIFT);
        Duration::from_millis(self.backoff_base_ms.saturating_mul(factor))
    }
}

/// Runs `operation` until it succeeds, `predicate` rejects the result, or
/// `policy.max_retries` retries have been spent.
pub(crate) fn execute_with_backoff<T, F>(
    mut operation: F,
    predicate: fn(&KeyPoolResult<T>) -> bool,
    policy: RetryPolicy,
) -> KeyPoolResult<T>
where
    F: FnMut() -> KeyPoolResult<T>,
{
    let mut result = operation();
    let mut attempt = 0;

    while predicate(&result) && attempt < policy.max_retries {
        let delay = policy.backoff(attempt);
        tracing::warn!(
            error = ?result.as_ref().err(),
            attempt = attempt + 1,
            max_retries = policy.max_retries,
            delay_ms = delay.as_millis() as u64,
            "retrying after backoff"
        );
        thread::sleep(delay);
        result = operation();
        attempt += 1;
    }

    if let Err(error) = result.as_ref() {
        tracing::error!(?error, attempts = attempt + 1, "giving up");
    }
    result
}

/// Whether a failed generation may succeed when repeated.
pub(crate) fn retry_on_generation_error<T>(result: &KeyPoolResult<T>) -> bool {
    matches!(result, Err(KeyPoolError::KeyGeneration(_)))
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use signservice_crypto::CryptoError;
    use test_log::test;

    use super::*;

    const FAST: RetryPolicy = RetryPolicy {
        max_retries: 3,
        backoff_base_ms: 1,
    };

    #[test]
    fn test_backoff_doubles() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff(0), Duration::from_millis(100));
        assert_eq!(policy.backoff(1), Duration::from_millis(200));
        assert_eq!(policy.backoff(3), Duration::from_millis(800));
        assert_eq!(
            policy.backoff(100),
            Duration::from_millis(100 * (1 << MAX_BACKOFF_SHIFT))
        );
    }

    #[test]
    fn test_success_first_try() {
        let calls = Cell::new(0);
        let result = execute_with_backoff(
            || {
                calls.set(calls.get() + 1);
                Ok(7)
            },
            retry_on_generation_error,
            FAST,
        );
        assert_eq!(result, Ok(7));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_recovers_after_transient_failures() {
        let calls = Cell::new(0);
        let result = execute_with_backoff(
            || {
                calls.set(calls.get() + 1);
                if calls.get() < 3 {
                    Err(KeyPoolError::KeyGeneration(CryptoError::RsaKeyGenError))
                } else {
                    Ok(calls.get())
                }
            },
            retry_on_generation_error,
            FAST,
        );
        assert_eq!(result, Ok(3));
    }

    #[test]
    fn test_gives_up_after_max_retries() {
        let calls = Cell::new(0);
        let result: KeyPoolResult<()> = execute_with_backoff(
            || {
                calls.set(calls.get() + 1);
                Err(KeyPoolError::KeyGeneration(CryptoError::EccKeyGenError))
            },
            retry_on_generation_error,
            FAST,
        );
        assert!(result.is_err());
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_no_retry_for_non_generation_error() {
        let calls = Cell::new(0);
        let result: KeyPoolResult<()> = execute_with_backoff(
            || {
                calls.set(calls.get() + 1);
                Err(KeyPoolError::UnsupportedKeyType("DSA".to_string()))
            },
            retry_on_generation_error,
            FAST,
        );
        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }
}
