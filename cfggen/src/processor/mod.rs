// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Configuration processor: builds the internal configuration of a router
//! out of the topology and policy store.

pub mod announce;
pub mod confbuild;
pub(crate) mod namegen;
