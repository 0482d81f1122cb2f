//! Card capability trait
//!
//! The interface a SIM/AKA card exposes to the host authentication
//! framework. The host discovers a registered card and drives it through
//! these operations; the card never calls back into the host.
//!
//! Operations a backend does not implement have explicit defaults
//! (`NotSupported` / absent) rather than missing entries.

use async_trait::async_trait;

use crate::error::{CardError, CardResult};
use crate::types::{
    AkaChallenge, AkaQuintuplet, Identification, SimTriplet, AKA_AUTS_LEN, AKA_RAND_LEN,
    SIM_RAND_LEN,
};

/// SIM/AKA card capability
#[async_trait]
pub trait SimakaCard: Send + Sync {
    /// Run a GSM triplet calculation (2G SIM).
    ///
    /// Default: not supported.
    async fn get_triplet(
        &self,
        _id: &Identification,
        _rand: &[u8; SIM_RAND_LEN],
    ) -> CardResult<SimTriplet> {
        Err(CardError::NotSupported)
    }

    /// Run an AKA quintuplet calculation (3G USIM).
    ///
    /// `Err(CardError::SyncRequired)` means the challenge was out of
    /// sequence; the caller should initiate a resync dialogue and may then
    /// harvest the AUTS via [`resync`](Self::resync).
    async fn get_quintuplet(
        &self,
        id: &Identification,
        challenge: &AkaChallenge,
    ) -> CardResult<AkaQuintuplet>;

    /// Answer a resynchronization request for `rand`.
    ///
    /// Returns the AUTS captured during the preceding out-of-sequence
    /// challenge, or `None` if no matching state exists. Purely local.
    fn resync(&self, id: &Identification, rand: &[u8; AKA_RAND_LEN])
        -> Option<[u8; AKA_AUTS_LEN]>;

    /// Fetch a stored pseudonym identity. Default: none stored.
    fn get_pseudonym(&self, _id: &Identification) -> Option<Identification> {
        None
    }

    /// Store a pseudonym identity. Default: dropped.
    fn set_pseudonym(&self, _id: &Identification, _pseudonym: &Identification) {}

    /// Fetch stored re-authentication state. Default: none stored.
    fn get_reauth(&self, _id: &Identification) -> Option<Identification> {
        None
    }

    /// Store re-authentication state. Default: dropped.
    fn set_reauth(&self, _id: &Identification, _next: &Identification) {}
}
