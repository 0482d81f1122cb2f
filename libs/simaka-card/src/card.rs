//! SIM Manager Card
//!
//! The card state machine. A challenge is delegated to the remote SIM
//! Manager; a synchronization failure primes a single resync slot which a
//! subsequent `resync` call answers from local state.
//!
//! Resync state transitions per card instance:
//!
//! ```text
//! NoResyncData  --[get_quintuplet -> SyncFailure]--> ResyncPending(rand, auts)
//! ResyncPending --[get_quintuplet -> SyncFailure]--> ResyncPending(new rand, new auts)
//! ResyncPending --[resync(matching rand)]--> ResyncPending (slot retained)
//! ResyncPending --[resync(other rand)]--> ResyncPending (reports failure)
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use simaka_core::card::SimakaCard;
use simaka_core::error::{CardError, CardResult};
use simaka_core::types::{
    AkaChallenge, AkaQuintuplet, Identification, AKA_AUTS_LEN, AKA_RAND_LEN,
};
use simaka_fetch::{FetchRequest, Fetcher};

use crate::config::CardConfig;
use crate::request::build_challenge_url;
use crate::response::{interpret_response, AuthOutcome};

/// RAND/AUTS pair captured from the most recent synchronization failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ResyncSlot {
    rand: [u8; AKA_RAND_LEN],
    auts: [u8; AKA_AUTS_LEN],
}

/// A (U)SIM card backed by the remote SIM Manager service.
///
/// Owns its configuration and resync state exclusively; instances are
/// fully independent. The resync slot is guarded by a mutex so the host
/// framework may invoke operations from separate threads; the lock is
/// held only to copy the slot in or out, never across the HTTP call.
pub struct ManagerCard {
    config: CardConfig,
    fetcher: Arc<dyn Fetcher>,
    resync_slot: Mutex<Option<ResyncSlot>>,
}

impl ManagerCard {
    /// Create a card from configuration and a transport.
    ///
    /// Does not probe the SIM Manager for reachability; an absent URL is
    /// legal and surfaces as `NotConfigured` on the first challenge.
    pub fn new(config: CardConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        log::debug!(
            "SIM Manager card created, sim_url: {:?}",
            config.sim_url.as_deref()
        );
        Self {
            config,
            fetcher,
            resync_slot: Mutex::new(None),
        }
    }

    /// Get the card configuration
    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    fn store_resync(&self, rand: [u8; AKA_RAND_LEN], auts: [u8; AKA_AUTS_LEN]) {
        let mut slot = self.resync_slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(ResyncSlot { rand, auts });
    }
}

impl Drop for ManagerCard {
    fn drop(&mut self) {
        log::debug!("SIM Manager card destroyed");
    }
}

#[async_trait]
impl SimakaCard for ManagerCard {
    // get_triplet: inherited default, always NotSupported. The SIM Manager
    // backend has no 2G path.

    async fn get_quintuplet(
        &self,
        id: &Identification,
        challenge: &AkaChallenge,
    ) -> CardResult<AkaQuintuplet> {
        let url = build_challenge_url(
            self.config.sim_url.as_deref(),
            &challenge.rand,
            &challenge.autn,
        )?;

        log::debug!("[{id}] 3g-authenticate request to SIM Manager");
        let request = FetchRequest::get(url).with_header("Accept", "application/json");
        let result = self.fetcher.fetch(request).await;

        match interpret_response(result)? {
            AuthOutcome::Success(quintuplet) => Ok(quintuplet),
            AuthOutcome::SyncFailure(auts) => {
                self.store_resync(challenge.rand, auts);
                Err(CardError::SyncRequired)
            }
        }
    }

    fn resync(
        &self,
        id: &Identification,
        rand: &[u8; AKA_RAND_LEN],
    ) -> Option<[u8; AKA_AUTS_LEN]> {
        let slot = self.resync_slot.lock().unwrap_or_else(|e| e.into_inner());
        match *slot {
            Some(ref stored) if stored.rand == *rand => {
                log::debug!("[{id}] answering resync from stored AUTS");
                Some(stored.auts)
            }
            _ => {
                log::debug!("[{id}] no resync state for presented RAND");
                None
            }
        }
    }
}
