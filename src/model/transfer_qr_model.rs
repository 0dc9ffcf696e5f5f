use serde::Serialize;

use crate::qr_type::QrType;

/// One bank-transfer QR request per the NAPAS IBFT-to-account profile.
/// Field reference: EMVCo Merchant-Presented QR, VietQR profile.
#[derive(Serialize, Debug, Default, Clone)]
pub struct TransferQrModel {
    /// Beneficiary bank identifier in the national interbank directory.
    /// Normally 6 digits.
    bank_bin: String,
    /// Beneficiary account number.
    account_number: String,
    /// Transaction amount in VND, decimal digits only, no separators.
    /// Empty for a static QR with no fixed amount.
    #[serde(skip_serializing_if = "String::is_empty")]
    amount: String,
    /// Beneficiary display name. Emitted in tag 59, truncated to the first
    /// 25 characters.
    #[serde(skip_serializing_if = "String::is_empty")]
    account_name: String,
    /// Free-text transfer content, here the order number. Tag 62/08.
    #[serde(skip_serializing_if = "String::is_empty")]
    purpose: String,
    /// Invoice identifier. Tag 62/01.
    #[serde(skip_serializing_if = "String::is_empty")]
    bill_number: String,
    qr_type: QrType,
}

impl TransferQrModel {
    pub fn new() -> Self {
        TransferQrModel::default()
    }

    pub fn get_bank_bin(&self) -> &str {
        self.bank_bin.as_ref()
    }

    pub fn set_bank_bin<S: Into<String>>(&mut self, bank_bin: S) {
        self.bank_bin = bank_bin.into();
    }

    pub fn get_account_number(&self) -> &str {
        self.account_number.as_ref()
    }

    pub fn set_account_number<S: Into<String>>(&mut self, account_number: S) {
        self.account_number = account_number.into();
    }

    pub fn get_amount(&self) -> &str {
        self.amount.as_ref()
    }

    pub fn set_amount<S: Into<String>>(&mut self, amount: S) {
        self.amount = amount.into();
    }

    pub fn get_account_name(&self) -> &str {
        self.account_name.as_ref()
    }

    pub fn set_account_name<S: Into<String>>(&mut self, account_name: S) {
        self.account_name = account_name.into();
    }

    pub fn get_purpose(&self) -> &str {
        self.purpose.as_ref()
    }

    pub fn set_purpose<S: Into<String>>(&mut self, purpose: S) {
        self.purpose = purpose.into();
    }

    pub fn get_bill_number(&self) -> &str {
        self.bill_number.as_ref()
    }

    pub fn set_bill_number<S: Into<String>>(&mut self, bill_number: S) {
        self.bill_number = bill_number.into();
    }

    pub fn get_qr_type(&self) -> QrType {
        self.qr_type
    }

    pub fn set_qr_type(&mut self, qr_type: QrType) {
        self.qr_type = qr_type;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::TransferQrModel;
    use crate::qr_type::QrType;

    #[test]
    fn defaults_to_a_dynamic_qr() {
        let model = TransferQrModel::new();
        assert_eq!(model.get_qr_type(), QrType::Dynamic);
        assert_eq!(model.get_amount(), "");
    }

    #[test]
    fn empty_optionals_are_skipped_when_serialized() {
        let mut model = TransferQrModel::new();
        model.set_bank_bin("963388");
        model.set_account_number("0857700655");
        model.set_amount("60000");

        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(
            value,
            json!({
                "bank_bin": "963388",
                "account_number": "0857700655",
                "amount": "60000",
                "qr_type": "12",
            })
        );
    }
}
