// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Policy model: routing

pub mod access;
pub mod bgp;
pub mod communitylist;
pub mod ospf;
pub mod prefixlist;
pub mod routemap;
pub mod tracker;
