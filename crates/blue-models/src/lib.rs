//! # Blue data models
//!
//! Shared wire types for the Alphaus Blue platform, used by both the SDK
//! and the `bluectl` command-line client.
//!
//! The crate provides:
//!
//! * [`Operation`] — a server-side long-running operation observed by
//!   polling, with its response/error result union.
//! * [`UserIdentity`] / [`IamUser`] — caller identity and IAM users.
//! * [`OrgInfo`] — organization information.
//! * [`KvEntry`] — a key/value pair from the platform store.
//! * [`TagCost`] — a tag-level cost record for a billing group.
//! * [`NotificationChannel`] — a configured notification target.
//!
//! All types are plain serde-serializable data; no I/O happens here.

pub mod identity;
pub mod kv;
pub mod notification;
pub mod operation;
pub mod org;
pub mod tagcost;

pub use identity::{IamUser, UserIdentity};
pub use kv::KvEntry;
pub use notification::NotificationChannel;
pub use operation::{Operation, OperationError};
pub use org::OrgInfo;
pub use tagcost::TagCost;
