// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Vendor-neutral network policy model. The topology and policy of every router
//! lives in a store reached through the [`PolicyStore`] trait; the internal model is
//! the resolved configuration of one router, ready to be rendered for a device.

#![deny(
    unsafe_code,
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::return_self_not_must_use)]

pub mod address;
pub mod errors;
pub mod internal;
pub mod topology;

pub use address::{AnnouncedPrefix, InterfaceAddress, PrefixKey}; // re-export
pub use errors::{ConfigError, ConfigResult, stringify}; // re-export
pub use internal::RouterConfig; // re-export
pub use topology::PolicyStore; // re-export
pub use topology::graph::NetworkGraph; // re-export
