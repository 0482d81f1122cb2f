//! SIM Manager Card Backend
//!
//! An EAP-AKA (U)SIM card that delegates the AKA quintuplet calculation
//! to a remote SIM Manager HTTP service instead of a physical card. The
//! card sends the peer's RAND/AUTN to `{sim_url}/3g-authenticate` as hex
//! query parameters and interprets the JSON reply as either CK/IK/RES
//! material or a synchronization failure carrying AUTS.
//!
//! # Modules
//!
//! - [`config`] - Card configuration (SIM Manager URL, timeouts)
//! - [`request`] - Challenge URL builder
//! - [`response`] - Response interpreter
//! - [`card`] - The card state machine
//! - [`plugin`] - Registration glue for the host authentication framework

pub mod card;
pub mod config;
pub mod plugin;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use card::ManagerCard;
pub use config::{CardConfig, ConfigError};
pub use plugin::{CardPlugin, PluginFeature};
pub use request::build_challenge_url;
pub use response::{interpret_response, AuthOutcome};
