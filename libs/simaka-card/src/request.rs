//! Challenge Request Builder
//!
//! Formats the SIM Manager `3g-authenticate` query from a RAND/AUTN pair.
//! The query string is assembled directly so parameter order is fixed.

use simaka_core::conv::hex_to_string_upper;
use simaka_core::error::{CardError, CardResult};
use simaka_core::types::{AKA_AUTN_LEN, AKA_RAND_LEN};

/// Build the `3g-authenticate` challenge URL.
///
/// `{sim_url}/3g-authenticate?rand={HEX}&autn={HEX}` with uppercase hex.
/// Fails fast with `NotConfigured` when no SIM Manager URL is set.
pub fn build_challenge_url(
    sim_url: Option<&str>,
    rand: &[u8; AKA_RAND_LEN],
    autn: &[u8; AKA_AUTN_LEN],
) -> CardResult<String> {
    let sim_url = match sim_url {
        Some(url) if !url.is_empty() => url,
        _ => return Err(CardError::NotConfigured),
    };

    Ok(format!(
        "{}/3g-authenticate?rand={}&autn={}",
        sim_url,
        hex_to_string_upper(rand),
        hex_to_string_upper(autn)
    ))
}
