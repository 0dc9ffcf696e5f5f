use serde::Serialize;

use crate::error::{Error, VietQrResult};

/// Point of initiation method, EMVCo tag 01.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrType {
    /// Static QR, reusable, no fixed amount.
    #[serde(rename(serialize = "11"))]
    Static,
    /// Dynamic QR, one transaction with a fixed amount.
    #[serde(rename(serialize = "12"))]
    Dynamic,
}

impl Default for QrType {
    fn default() -> Self {
        QrType::Dynamic
    }
}

impl QrType {
    pub fn as_str(&self) -> &str {
        match self {
            QrType::Static => "11",
            QrType::Dynamic => "12",
        }
    }

    /// Parses the two-digit wire code. Unknown codes fail fast rather than
    /// fall back to a default, so a typo never reaches the payload.
    pub fn from_code(code: &str) -> VietQrResult<Self> {
        match code {
            "11" => Ok(QrType::Static),
            "12" => Ok(QrType::Dynamic),
            _ => Err(Error::InvalidArgument(format!(
                "unknown point of initiation method: {}",
                code
            ))),
        }
    }
}
