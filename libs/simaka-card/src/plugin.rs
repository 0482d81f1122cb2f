//! Plugin Registration
//!
//! Glue between the card and the host authentication framework. The host
//! discovers plugins by name and feature list: this plugin provides an
//! `aka-card` capability and depends on the host's `aka-manager` to drive
//! it. Dropping the plugin drops the card; there is no process-global
//! state to tear down.

use std::sync::Arc;

use simaka_core::card::SimakaCard;
use simaka_fetch::{FetchClient, FetchClientConfig, Fetcher};

use crate::card::ManagerCard;
use crate::config::CardConfig;

/// A capability the plugin provides to, or requires from, the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginFeature {
    /// Capability offered by this plugin
    Provide(&'static str),
    /// Capability that must be present before this plugin can register
    Depend(&'static str),
}

/// The SIM Manager card plugin
pub struct CardPlugin {
    card: Arc<ManagerCard>,
}

impl CardPlugin {
    /// Create the plugin from configuration, constructing the default
    /// HTTP transport from the configured timeouts.
    pub fn new(config: CardConfig) -> Self {
        let client = FetchClient::new(
            FetchClientConfig::default()
                .with_connect_timeout(config.connect_timeout())
                .with_request_timeout(config.request_timeout()),
        );
        Self::with_fetcher(config, Arc::new(client))
    }

    /// Create the plugin with an explicit transport
    pub fn with_fetcher(config: CardConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        log::debug!("registering SIM Manager card plugin");
        Self {
            card: Arc::new(ManagerCard::new(config, fetcher)),
        }
    }

    /// Plugin name as known to the host framework
    pub fn name(&self) -> &'static str {
        "sim-manager-card"
    }

    /// Capabilities this plugin provides and depends on
    pub fn features(&self) -> Vec<PluginFeature> {
        vec![
            PluginFeature::Provide("aka-card"),
            PluginFeature::Depend("aka-manager"),
        ]
    }

    /// The card to register with the host's SIM/AKA manager
    pub fn card(&self) -> Arc<dyn SimakaCard> {
        self.card.clone()
    }
}
