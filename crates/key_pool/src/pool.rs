// Copyright (C) Microsoft Corporation. All rights reserved.

//! Background-refilled stack of pre-generated key pairs.
//!
//! The stack is guarded by a mutex; every push, pop and size read takes the
//! lock. A single `refilling` flag, claimed with compare-exchange, decides
//! whether a refill worker may be spawned, so at most one worker runs per
//! pool. The worker generates keys until the stack reaches its target size,
//! clears the flag, and then checks the stack once more so that a pop racing
//! with its shutdown still leads to a refill.

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread;

use parking_lot::Mutex;

use super::*;
use crate::resiliency::execute_with_backoff;
use crate::resiliency::retry_on_generation_error;

/// Snapshot of a pool's background refill state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolHealth {
    /// A refill worker is currently running.
    pub refilling: bool,

    /// Failed background generation attempts since the last success.
    pub consecutive_failures: u32,

    /// Most recent background generation failure, if any.
    pub last_error: Option<KeyPoolError>,
}

impl PoolHealth {
    /// The last background generation attempt succeeded, or none failed.
    pub fn is_healthy(&self) -> bool {
        self.consecutive_failures == 0
    }
}

#[derive(Debug, Default)]
struct FailureState {
    consecutive_failures: u32,
    last_error: Option<KeyPoolError>,
}

struct PoolInner {
    generator: Box<dyn KeyGenerator>,
    target_size: usize,
    retry: RetryPolicy,
    stack: Mutex<Vec<KeyCredential>>,
    refilling: AtomicBool,
    failures: Mutex<FailureState>,
}

impl PoolInner {
    fn needs_refill(&self) -> bool {
        self.stack.lock().len() < self.target_size
    }

    fn try_claim_worker(&self) -> bool {
        self.refilling
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    fn generate_with_tracking(&self) -> KeyPoolResult<KeyCredential> {
        let result = self.generator.generate();
        let mut failures = self.failures.lock();
        match &result {
            Ok(_) => failures.consecutive_failures = 0,
            Err(error) => {
                failures.consecutive_failures = failures.consecutive_failures.saturating_add(1);
                failures.last_error = Some(error.clone());
            }
        }
        result
    }

    /// Generates and pushes keys until the stack holds `target_size` entries.
    fn fill(&self) -> KeyPoolResult<()> {
        while self.needs_refill() {
            let credential = execute_with_backoff(
                || self.generate_with_tracking(),
                retry_on_generation_error,
                self.retry,
            )?;

            let mut stack = self.stack.lock();
            if stack.len() >= self.target_size {
                break;
            }
            stack.push(credential);
            tracing::debug!(size = stack.len(), target = self.target_size, "pushed key pair");
        }
        Ok(())
    }

    fn run_worker(self: Arc<Self>) {
        let params = self.generator.params();
        tracing::info!(%params, target = self.target_size, "key pool refill started");

        loop {
            let result = self.fill();
            self.refilling.store(false, Ordering::Release);

            if let Err(error) = result {
                tracing::error!(
                    ?error,
                    %params,
                    size = self.stack.lock().len(),
                    target = self.target_size,
                    "key pool refill stopped after repeated generation failures"
                );
                return;
            }

            if !self.needs_refill() || !self.try_claim_worker() {
                break;
            }
        }

        tracing::info!(%params, "key pool refill finished");
    }
}

/// Pool of pre-generated key pairs of one family and size.
///
/// Cloning a `KeyPool` yields another handle to the same stack.
#[derive(Clone)]
pub struct KeyPool {
    inner: Arc<PoolInner>,
}

impl KeyPool {
    /// Pool generating `params` keys and keeping `target_size` of them
    /// ready. Background filling starts immediately.
    pub fn new(params: KeyParams, target_size: usize, retry: RetryPolicy) -> Self {
        Self::with_generator(params, target_size, retry)
    }

    /// Pool backed by a custom generator.
    pub fn with_generator(
        generator: impl KeyGenerator,
        target_size: usize,
        retry: RetryPolicy,
    ) -> Self {
        let pool = Self {
            inner: Arc::new(PoolInner {
                generator: Box::new(generator),
                target_size,
                retry,
                stack: Mutex::new(Vec::with_capacity(target_size)),
                refilling: AtomicBool::new(false),
                failures: Mutex::new(FailureState::default()),
            }),
        };
        pool.trigger_refill();
        pool
    }

    /// Takes a key pair from the pool, or generates one on the calling thread
    /// when the pool is empty. Either way a refill check follows.
    ///
    /// # Errors
    ///
    /// [`KeyPoolError::KeyGeneration`] if the pool was empty and generating
    /// a key failed.
    pub fn get_key_pair(&self) -> KeyPoolResult<KeyCredential> {
        let popped = self.inner.stack.lock().pop();

        let result = match popped {
            Some(credential) => Ok(credential),
            None => {
                tracing::debug!(params = %self.inner.generator.params(), "key pool empty, generating on demand");
                self.inner.generator.generate()
            }
        };

        self.trigger_refill();
        result
    }

    /// Starts a background worker unless one is already running or the pool
    /// is full. Returns whether a worker was started.
    pub fn trigger_refill(&self) -> bool {
        if !self.inner.needs_refill() || !self.inner.try_claim_worker() {
            return false;
        }

        let inner = Arc::clone(&self.inner);
        let spawned = thread::Builder::new()
            .name("key-pool-refill".to_string())
            .spawn(move || inner.run_worker());

        match spawned {
            Ok(_) => true,
            Err(error) => {
                tracing::error!(?error, "failed to spawn key pool refill worker");
                self.inner.refilling.store(false, Ordering::Release);
                false
            }
        }
    }

    /// Number of key pairs currently in the pool.
    pub fn current_stack_size(&self) -> usize {
        self.inner.stack.lock().len()
    }

    /// Size the background worker fills the pool to.
    pub fn target_size(&self) -> usize {
        self.inner.target_size
    }

    /// Parameters of the pooled keys.
    pub fn params(&self) -> KeyParams {
        self.inner.generator.params()
    }

    /// Snapshot of the background refill state.
    pub fn health(&self) -> PoolHealth {
        let failures = self.inner.failures.lock();
        PoolHealth {
            refilling: self.inner.refilling.load(Ordering::Acquire),
            consecutive_failures: failures.consecutive_failures,
            last_error: failures.last_error.clone(),
        }
    }
}
