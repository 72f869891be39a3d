// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Router configuration generator for Cisco IOS devices.
//!
//! Generation runs in two phases per router. First, the configuration processor
//! resolves the router's topology and policy into a [`config::RouterConfig`],
//! synthesizing the announcements requested by boundary routers when needed.
//! Then the IOS renderer turns that configuration into device syntax.

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

/* Address allocation for abstract prefixes */
pub mod allocator;

/* Configuration processor */
pub mod processor;

/* IOS drivers */
pub mod ios;

/* Entry point */
pub mod generator;

pub use allocator::PrefixAllocator; // re-export
pub use generator::ConfigGenerator; // re-export
