//! # Blue SDK
//!
//! Client SDK for the **Alphaus Blue** platform.
//!
//! The SDK provides:
//!
//! * [`Credentials`] — credential bundle resolved from explicit values,
//!   environment variables, and built-in defaults.
//! * [`Session`] — OAuth2 token provider (client-credentials or password
//!   grant) for the Blue login endpoint.
//! * [`BlueClient`] — authenticated HTTP client for the Blue API; every
//!   call fetches a fresh bearer token unless a fixed token was supplied.
//! * [`wait_for_operation`] — polls a long-running operation until it
//!   completes, the caller cancels, or the transport fails.
//! * [`SdkError`] — unified error type for all SDK operations.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use blue_sdk::{BlueClient, Credentials, wait_for_operation, WaitOptions};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn run() -> Result<(), blue_sdk::SdkError> {
//! let client = BlueClient::new(Credentials::from_env());
//! let who = client.whoami().await?;
//! println!("signed in as {}", who.id);
//!
//! let cancel = CancellationToken::new();
//! let op = wait_for_operation(
//!     client.clone(),
//!     "operations/calc-123",
//!     cancel,
//!     WaitOptions::default(),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod credentials;
pub mod error;
pub mod ops;
pub mod session;

pub use client::BlueClient;
pub use credentials::{Credentials, GrantType};
pub use error::SdkError;
pub use ops::{wait_for_operation, OperationsApi, WaitOptions};
pub use session::Session;
