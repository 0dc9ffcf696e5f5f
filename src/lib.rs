pub mod error;
pub mod model;
pub mod qr_type;
pub mod time;
pub mod tlv;
pub mod vietqr;

#[macro_use]
extern crate log;

use serde::{Deserialize, Serialize};

/// Transfer details shown next to the rendered QR image so the payer can
/// copy them by hand. Every value is the exact string embedded in the
/// payload.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct TransferInfo {
    pub account_number: String,
    pub account_name: String,
    pub amount: String,
    /// Transfer content, normally the order number.
    pub content: String,
    /// The full VietQR payload the above values are embedded in.
    pub payload: String,
}
