// SPDX-License-Identifier: Apache-2.0
// Copyright Open Network Fabric Authors

//! Configuration generator: entry point to produce router configurations
//! out of a topology and policy store.

use ordermap::OrderMap;
use tracing::{debug, error, info};

use crate::allocator::PrefixAllocator;
use crate::ios::renderer::render_router_config;
use crate::processor::announce::synthesize_announcements;
use crate::processor::confbuild::build_router_config;
use config::{ConfigError, PolicyStore};

/// Generates IOS configurations. A generator owns the allocator used for
/// abstract prefixes, so all the routers generated with the same generator
/// agree on the networks allocated.
#[derive(Debug, Default)]
pub struct ConfigGenerator {
    allocator: PrefixAllocator,
}

impl ConfigGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    #[must_use]
    pub fn with_allocator(allocator: PrefixAllocator) -> Self {
        Self { allocator }
    }
    #[must_use]
    pub fn allocator(&self) -> &PrefixAllocator {
        &self.allocator
    }

    /// Generate the configuration of one router. Boundary routers get their
    /// announcements synthesized first, which modifies the store: generating
    /// the same boundary router twice on one store is a policy conflict.
    pub fn generate(
        &mut self,
        store: &mut impl PolicyStore,
        router: &str,
    ) -> Result<String, ConfigError> {
        if !store.is_router(router) {
            error!("Can't generate config for {router}: no such router");
            return Err(ConfigError::NoSuchNode(router.to_owned()));
        }
        if store.is_peer(router) {
            debug!("{router} is a boundary router, synthesizing announcements");
            synthesize_announcements(store, &mut self.allocator, router)?;
        }
        let config = build_router_config(&*store, router)?;
        let document = render_router_config(&config)?;
        info!("Generated configuration for router {router}");
        Ok(document)
    }

    /// Generate the configuration of every router of the store, in store order.
    /// The first failure aborts the whole generation.
    pub fn generate_all(
        &mut self,
        store: &mut impl PolicyStore,
    ) -> Result<OrderMap<String, String>, ConfigError> {
        let mut documents = OrderMap::new();
        for router in store.routers() {
            let document = self.generate(store, &router)?;
            documents.insert(router, document);
        }
        Ok(documents)
    }
}
