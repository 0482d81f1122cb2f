//! SIM/AKA Card Core Library
//!
//! Protocol-independent building blocks shared by SIM/AKA card backends:
//!
//! - [`types`] - Authentication vector types and lengths (RAND, AUTN, CK, IK, RES, AUTS)
//! - [`conv`] - Hex codec for the SIM Manager wire format
//! - [`card`] - The card capability trait exposed to the host authentication framework
//! - [`error`] - Card error taxonomy

pub mod card;
pub mod conv;
pub mod error;
pub mod types;


// Re-export commonly used types
pub use card::SimakaCard;
pub use conv::{hex_from_string, hex_to_string, hex_to_string_upper, DecodeError};
pub use error::{CardError, CardResult};
pub use types::{
    AkaChallenge, AkaQuintuplet, Identification, SimTriplet, AKA_AUTN_LEN, AKA_AUTS_LEN,
    AKA_CK_LEN, AKA_IK_LEN, AKA_RAND_LEN, AKA_RES_MAX, SIM_KC_LEN, SIM_RAND_LEN, SIM_SRES_LEN,
};
