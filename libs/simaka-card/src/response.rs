//! Response Interpreter
//!
//! Classifies the SIM Manager `3g-authenticate` reply into a typed
//! outcome: a quintuplet, a synchronization failure carrying AUTS, or a
//! card error. The interpreter never retries; the remote service is the
//! authority on both transport- and protocol-level failure.

use simaka_core::conv::hex_from_string;
use simaka_core::error::{CardError, CardResult};
use simaka_core::types::{
    AkaQuintuplet, AKA_AUTS_LEN, AKA_CK_LEN, AKA_IK_LEN, AKA_RES_MAX,
};
use simaka_fetch::{FetchError, FetchResponse};

/// HTTP statuses the SIM Manager uses to report an unknown identity
const HTTP_STATUS_NOT_FOUND: u16 = 404;
const HTTP_STATUS_MISDIRECTED_REQUEST: u16 = 421;

/// Outcome of a successfully parsed `3g-authenticate` response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The service computed the quintuplet
    Success(AkaQuintuplet),
    /// The service reports an out-of-sequence challenge; AUTS for resync
    SyncFailure([u8; AKA_AUTS_LEN]),
}

/// Interpret the raw fetch result of a `3g-authenticate` call.
pub fn interpret_response(
    result: Result<FetchResponse, FetchError>,
) -> CardResult<AuthOutcome> {
    let response = match result {
        Ok(response) => response,
        Err(e) => {
            log::warn!("SIM Manager 3g-authenticate transport failure: {e}");
            return Err(CardError::TransportFailed);
        }
    };

    log::debug!(
        "SIM Manager 3g-authenticate status code: {}",
        response.status
    );

    if !response.is_success() {
        return match response.status {
            HTTP_STATUS_NOT_FOUND | HTTP_STATUS_MISDIRECTED_REQUEST => Err(CardError::NotFound),
            _ => Err(CardError::TransportFailed),
        };
    }

    let body = match response.body.as_deref() {
        Some(body) if !body.is_empty() => body,
        _ => {
            log::warn!("SIM Manager 3g-authenticate response does not have a body");
            return Err(CardError::TransportFailed);
        }
    };

    log::debug!("SIM Manager 3g-authenticate response: {body}");

    let json: serde_json::Value = match serde_json::from_str(body) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("SIM Manager 3g-authenticate response is not JSON: {e}");
            return Err(CardError::ParseFailed);
        }
    };
    let object = json.as_object().ok_or(CardError::ParseFailed)?;

    // An absent synchronization field counts as success; the service only
    // sends it explicitly when reporting a failure.
    let synchronized = object
        .get("synchronization")
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(true);

    if !synchronized {
        log::debug!("SIM Manager 3g-authenticate returned synchronization failure");
        let auts = decode_fixed(object, "auts", AKA_AUTS_LEN)?;
        let auts: [u8; AKA_AUTS_LEN] = auts.try_into().map_err(|_| CardError::ParseFailed)?;
        return Ok(AuthOutcome::SyncFailure(auts));
    }

    log::debug!("SIM Manager 3g-authenticate returned success");

    let ck: [u8; AKA_CK_LEN] = decode_fixed(object, "ck", AKA_CK_LEN)?
        .try_into()
        .map_err(|_| CardError::ParseFailed)?;
    let ik: [u8; AKA_IK_LEN] = decode_fixed(object, "ik", AKA_IK_LEN)?
        .try_into()
        .map_err(|_| CardError::ParseFailed)?;

    let res_hex = hex_field(object, "res")?;
    if res_hex.is_empty() || res_hex.len() % 2 != 0 || res_hex.len() > 2 * AKA_RES_MAX {
        return Err(CardError::ParseFailed);
    }
    let res = hex_from_string(res_hex, res_hex.len() / 2)?;

    Ok(AuthOutcome::Success(AkaQuintuplet::new(ck, ik, res)))
}

/// Fetch a string field from the response object
fn hex_field<'a>(
    object: &'a serde_json::Map<String, serde_json::Value>,
    field: &str,
) -> CardResult<&'a str> {
    object
        .get(field)
        .and_then(serde_json::Value::as_str)
        .ok_or(CardError::ParseFailed)
}

/// Decode a fixed-length hex field; wrong length is a parse failure,
/// a non-hex digit is a decode failure.
fn decode_fixed(
    object: &serde_json::Map<String, serde_json::Value>,
    field: &str,
    len: usize,
) -> CardResult<Vec<u8>> {
    let hex = hex_field(object, field)?;
    if hex.len() != 2 * len {
        return Err(CardError::ParseFailed);
    }
    Ok(hex_from_string(hex, len)?)
}
