//! Authentication vector types
//!
//! Fixed vector lengths and the owned vector structures exchanged between
//! the host authentication framework and a SIM/AKA card.

/// AKA RAND length in bytes
pub const AKA_RAND_LEN: usize = 16;
/// AKA AUTN length in bytes
pub const AKA_AUTN_LEN: usize = 16;
/// AKA CK (ciphering key) length in bytes
pub const AKA_CK_LEN: usize = 16;
/// AKA IK (integrity key) length in bytes
pub const AKA_IK_LEN: usize = 16;
/// Maximum AKA RES length in bytes
pub const AKA_RES_MAX: usize = 16;
/// AKA AUTS length in bytes
pub const AKA_AUTS_LEN: usize = 14;

/// GSM SIM RAND length in bytes
pub const SIM_RAND_LEN: usize = 16;
/// GSM SIM SRES length in bytes
pub const SIM_SRES_LEN: usize = 4;
/// GSM SIM Kc length in bytes
pub const SIM_KC_LEN: usize = 8;

/// AKA challenge presented by the peer: the RAND/AUTN pair to run against
/// the (remote) USIM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AkaChallenge {
    pub rand: [u8; AKA_RAND_LEN],
    pub autn: [u8; AKA_AUTN_LEN],
}

impl AkaChallenge {
    pub fn new(rand: [u8; AKA_RAND_LEN], autn: [u8; AKA_AUTN_LEN]) -> Self {
        Self { rand, autn }
    }
}

/// AKA quintuplet material returned on a successful challenge.
///
/// RAND and AUTN are the caller's; the card hands back CK, IK and RES.
/// Ownership transfers to the caller, which consumes it for session keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AkaQuintuplet {
    pub ck: [u8; AKA_CK_LEN],
    pub ik: [u8; AKA_IK_LEN],
    /// RES, 1..=AKA_RES_MAX bytes
    pub res: Vec<u8>,
}

impl AkaQuintuplet {
    pub fn new(ck: [u8; AKA_CK_LEN], ik: [u8; AKA_IK_LEN], res: Vec<u8>) -> Self {
        Self { ck, ik, res }
    }

    /// RES length in bytes
    pub fn res_len(&self) -> usize {
        self.res.len()
    }
}

/// GSM triplet material. Defined so the 2G operation has a complete
/// signature; this backend never produces one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimTriplet {
    pub sres: [u8; SIM_SRES_LEN],
    pub kc: [u8; SIM_KC_LEN],
}

/// Opaque caller identity supplied by the host framework.
///
/// The card never inspects it; it only appears in diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identification(pub String);

impl Identification {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
