//! Command handlers, one module per resource.

pub mod cost;
pub mod identity;
pub mod kv;
pub mod notifications;
pub mod ops;
pub mod token;

use blue_sdk::BlueClient;

use crate::output::OutputOptions;

/// Everything a handler needs: the authenticated client and the caller's
/// output preferences.
pub struct AppContext {
    pub client: BlueClient,
    pub output: OutputOptions,
}
