//! Long-running operation polling.
//!
//! [`wait_for_operation`] blocks until a named server-side operation
//! completes, the caller cancels, or the transport fails. The poll loop
//! runs as its own task and reports through a one-shot channel; the
//! caller races that channel against a [`CancellationToken`]. First of
//! {completed, cancelled} wins, exactly once.
//!
//! Outcomes:
//!
//! * `Ok(Some(op))` — the operation finished; `op.done` is true.
//! * `Ok(None)` — the caller cancelled before completion. Deliberately
//!   not an error: the operation state is unknown, not failed.
//! * `Err(e)` — the wait call itself failed; the error is the transport
//!   or API error, unwrapped. The loop is not retried internally.

use std::time::Duration;

use async_trait::async_trait;
use blue_models::Operation;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use crate::error::SdkError;

/// Remote surface the waiter polls.
///
/// `wait_operation` is a long-poll: the server holds the request open up
/// to `timeout`, returning early once the operation is done. A response
/// with `done == false` means the window elapsed first.
#[async_trait]
pub trait OperationsApi: Send + Sync {
    async fn wait_operation(&self, name: &str, timeout: Duration)
        -> Result<Operation, SdkError>;
}

/// Tuning for [`wait_for_operation`].
#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    /// Server-side long-poll window sent with each wait call.
    pub server_timeout: Duration,
    /// Pause between unfinished polls. Guards against a tight loop when
    /// the server answers `done=false` without actually blocking.
    pub poll_delay: Duration,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            server_timeout: Duration::from_secs(240),
            poll_delay: Duration::from_secs(1),
        }
    }
}

/// Wait until the named operation completes or the token is cancelled.
///
/// Fails fast with [`SdkError::InvalidArgument`] on an empty name, before
/// any network call. On cancellation the in-flight poll task is aborted,
/// which tears down the underlying request.
///
/// # Examples
///
/// ```rust,no_run
/// use blue_sdk::{wait_for_operation, BlueClient, Credentials, WaitOptions};
/// use tokio_util::sync::CancellationToken;
///
/// # async fn run() -> Result<(), blue_sdk::SdkError> {
/// let client = BlueClient::new(Credentials::from_env());
/// let cancel = CancellationToken::new();
/// match wait_for_operation(client, "operations/calc-1", cancel, WaitOptions::default()).await? {
///     Some(op) => println!("[{}] done", op.name),
///     None => println!("interrupted"),
/// }
/// # Ok(())
/// # }
/// ```
pub async fn wait_for_operation<C>(
    client: C,
    name: impl Into<String>,
    cancel: CancellationToken,
    opts: WaitOptions,
) -> Result<Option<Operation>, SdkError>
where
    C: OperationsApi + 'static,
{
    let name = name.into();
    if name.is_empty() {
        return Err(SdkError::InvalidArgument(
            "operation name cannot be empty".into(),
        ));
    }

    let (tx, rx) = oneshot::channel::<Result<Operation, SdkError>>();
    let poller = tokio::spawn(async move {
        loop {
            match client.wait_operation(&name, opts.server_timeout).await {
                Err(err) => {
                    let _ = tx.send(Err(err));
                    return;
                }
                Ok(op) if op.done => {
                    tracing::debug!(name = %op.name, "operation finished");
                    let _ = tx.send(Ok(op));
                    return;
                }
                Ok(op) => {
                    tracing::trace!(name = %op.name, "operation still running");
                    if !opts.poll_delay.is_zero() {
                        tokio::time::sleep(opts.poll_delay).await;
                    }
                }
            }
        }
    });

    tokio::select! {
        outcome = rx => match outcome {
            Ok(Ok(op)) => Ok(Some(op)),
            Ok(Err(err)) => Err(err),
            // Poll task went away without reporting; treat as interrupted.
            Err(_) => Ok(None),
        },
        () = cancel.cancelled() => {
            poller.abort();
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Scripted remote: a fixed list of poll outcomes plus a call counter.
    struct ScriptedOps {
        calls: Arc<AtomicUsize>,
        script: Vec<Step>,
    }

    enum Step {
        NotDone,
        Done,
        Fail,
        Hang,
    }

    fn operation(done: bool) -> Operation {
        Operation {
            name: "operations/test".into(),
            done,
            metadata: None,
            response: None,
            error: None,
        }
    }

    #[async_trait]
    impl OperationsApi for ScriptedOps {
        async fn wait_operation(
            &self,
            _name: &str,
            _timeout: Duration,
        ) -> Result<Operation, SdkError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let step = self.script.get(call).unwrap_or(&Step::Hang);
            match step {
                Step::NotDone => Ok(operation(false)),
                Step::Done => Ok(operation(true)),
                Step::Fail => Err(SdkError::InvalidResponse("poll exploded".into())),
                Step::Hang => {
                    // Simulate a server that blocks forever.
                    std::future::pending::<()>().await;
                    unreachable!()
                }
            }
        }
    }

    fn scripted(script: Vec<Step>) -> (ScriptedOps, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            ScriptedOps {
                calls: Arc::clone(&calls),
                script,
            },
            calls,
        )
    }

    fn quick() -> WaitOptions {
        WaitOptions {
            server_timeout: Duration::from_secs(240),
            poll_delay: Duration::ZERO,
        }
    }

    #[tokio::test]
    async fn empty_name_is_rejected_without_polling() {
        let (ops, calls) = scripted(vec![]);
        let err = wait_for_operation(ops, "", CancellationToken::new(), quick())
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::InvalidArgument(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn polls_until_done_and_returns_finished_operation() {
        let (ops, calls) = scripted(vec![Step::NotDone, Step::NotDone, Step::Done]);
        let op = wait_for_operation(ops, "operations/test", CancellationToken::new(), quick())
            .await
            .unwrap()
            .expect("operation should complete");
        assert!(op.done);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn cancellation_yields_none_not_error() {
        let (ops, _calls) = scripted(vec![Step::Hang]);
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.cancel();
        });

        let outcome = tokio::time::timeout(
            Duration::from_secs(5),
            wait_for_operation(ops, "operations/test", cancel, quick()),
        )
        .await
        .expect("waiter must return promptly after cancellation")
        .unwrap();
        assert!(outcome.is_none());
    }

    #[tokio::test]
    async fn transport_error_propagates_after_single_poll() {
        let (ops, calls) = scripted(vec![Step::Fail, Step::Done]);
        let err = wait_for_operation(ops, "operations/test", CancellationToken::new(), quick())
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::InvalidResponse(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn pre_cancelled_token_still_counts_as_interrupted() {
        let (ops, _calls) = scripted(vec![Step::Hang]);
        let cancel = CancellationToken::new();
        cancel.cancel();
        let outcome = wait_for_operation(ops, "operations/test", cancel, quick())
            .await
            .unwrap();
        assert!(outcome.is_none());
    }
}
