// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! IOS drivers: the logic to produce Cisco IOS configurations.
//! The target is IOS 15.2; exact keywords and sub-statement indentation are
//! what the device expects.

pub mod renderer;
