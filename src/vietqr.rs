use crate::{
    error::{Error, VietQrResult},
    model::transfer_qr_model::TransferQrModel,
    qr_type::QrType,
    tlv::{self, field},
    TransferInfo,
};

/// Globally unique identifier of the NAPAS interbank service, tag 38/00.
const NAPAS_GUID: &str = "A000000727";
/// Interbank fund transfer to account, tag 38/02.
const SERVICE_CODE: &str = "QRIBFTTA";
/// Payload format indicator, tag 00.
const PAYLOAD_FORMAT: &str = "01";
/// ISO 4217 numeric code for VND, tag 53.
const CURRENCY_VND: &str = "704";
/// Country code, tag 58.
const COUNTRY_CODE: &str = "VN";
/// Literal tag 63 plus length 04. The checksum is computed with this
/// placeholder already in place, then appended after it.
const CRC_PLACEHOLDER: &str = "6304";
/// Tag 59 caps the merchant name at 25 characters.
const MAX_NAME_LEN: usize = 25;

/// Assembles the full VietQR payload for `model`: TLV fields in scheme
/// order, the `6304` placeholder, then the CRC-16/CCITT-FALSE of
/// everything before it.
///
/// Required fields are validated up front; empty optional fields are
/// omitted from the output entirely, per the TLV builder's contract.
pub fn generate_qr_string(model: &TransferQrModel) -> VietQrResult<String> {
    validate(model)?;

    let id_00 = field("00", PAYLOAD_FORMAT);
    let id_01 = field("01", model.get_qr_type().as_str());

    // Tag 38: merchant account information. The inner tag 01 groups bank
    // BIN and account number as the beneficiary descriptor.
    let guid = field("00", NAPAS_GUID);
    let beneficiary_val = field("00", model.get_bank_bin()) + &field("01", model.get_account_number());
    tlv::check_len("38/01", &beneficiary_val)?;
    let beneficiary = field("01", &beneficiary_val);
    let service = field("02", SERVICE_CODE);
    let id_38_val = guid + &beneficiary + &service;
    tlv::check_len("38", &id_38_val)?;
    let id_38 = field("38", &id_38_val);

    let id_53 = field("53", CURRENCY_VND);
    let id_54 = field("54", model.get_amount());
    let id_58 = field("58", COUNTRY_CODE);
    let id_59 = field("59", truncate_name(model.get_account_name()));

    // Tag 62: additional data. Omitted as a whole when both nested fields
    // are empty.
    let id_62_val = field("01", model.get_bill_number()) + &field("08", model.get_purpose());
    tlv::check_len("62", &id_62_val)?;
    let id_62 = field("62", &id_62_val);

    let prefix = format!(
        "{}{}{}{}{}{}{}{}{}",
        id_00, id_01, id_38, id_53, id_54, id_58, id_59, id_62, CRC_PLACEHOLDER
    );
    debug!("pre-crc payload: {}", prefix);

    Ok(tlv::finalize(&prefix))
}

fn validate(model: &TransferQrModel) -> VietQrResult<()> {
    if model.get_bank_bin().is_empty() {
        return Err(Error::InvalidArgument("bank bin must not be empty".to_owned()));
    }
    if model.get_account_number().is_empty() {
        return Err(Error::InvalidArgument(
            "account number must not be empty".to_owned(),
        ));
    }

    // A dynamic QR carries a fixed amount; a static one may leave it out.
    if model.get_qr_type() == QrType::Dynamic {
        let amount = model.get_amount();
        if amount.is_empty() {
            return Err(Error::InvalidArgument(
                "dynamic qr requires an amount".to_owned(),
            ));
        }
        if !amount.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidArgument(format!(
                "amount must be decimal digits, got {:?}",
                amount
            )));
        }
    }

    for &(tag, value) in [
        ("38/01/00", model.get_bank_bin()),
        ("38/01/01", model.get_account_number()),
        ("54", model.get_amount()),
        ("62/01", model.get_bill_number()),
        ("62/08", model.get_purpose()),
    ]
    .iter()
    {
        tlv::check_len(tag, value)?;
    }

    Ok(())
}

fn truncate_name(name: &str) -> &str {
    match name.char_indices().nth(MAX_NAME_LEN) {
        Some((i, _)) => &name[..i],
        None => name,
    }
}

/// The deployment-fixed beneficiary a [`VietQr`] instance issues payloads
/// for.
#[derive(Debug, Clone)]
pub struct VietQrConfig {
    pub bank_bin: String,
    pub account_number: String,
    pub account_name: String,
    pub qr_type: QrType,
}

#[derive(Default)]
pub struct VietQrConfigBuilder {
    bank_bin: String,
    account_number: String,
    account_name: String,
    qr_type: QrType,
}

impl VietQrConfigBuilder {
    pub fn new<B, A>(bank_bin: B, account_number: A) -> Self
    where
        B: Into<String>,
        A: Into<String>,
    {
        VietQrConfigBuilder {
            bank_bin: bank_bin.into(),
            account_number: account_number.into(),
            account_name: Default::default(),
            qr_type: Default::default(),
        }
    }

    pub fn with_account_name<S: Into<String>>(mut self, account_name: S) -> Self {
        self.account_name = account_name.into();
        self
    }

    pub fn with_qr_type(mut self, qr_type: QrType) -> Self {
        self.qr_type = qr_type;
        self
    }

    pub fn build(self) -> VietQrConfig {
        VietQrConfig {
            bank_bin: self.bank_bin,
            account_number: self.account_number,
            account_name: self.account_name,
            qr_type: self.qr_type,
        }
    }
}

/// Payload generator bound to one beneficiary account.
pub struct VietQr {
    config: VietQrConfig,
}

impl VietQr {
    pub fn new(config: VietQrConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VietQrConfig {
        &self.config
    }

    /// Builds the transfer payload for one order: the order number becomes
    /// the transfer content (tag 62/08), the amount the fixed transaction
    /// amount (tag 54).
    pub fn transfer_payload(&self, order_no: &str, amount_vnd: u64) -> VietQrResult<String> {
        let model = self.transfer_model(order_no, amount_vnd);
        generate_qr_string(&model)
    }

    /// Like [`transfer_payload`](Self::transfer_payload), but also returns
    /// the copyable transfer fields the UI shows next to the QR image.
    /// They match the payload byte for byte.
    pub fn transfer_info(&self, order_no: &str, amount_vnd: u64) -> VietQrResult<TransferInfo> {
        let model = self.transfer_model(order_no, amount_vnd);
        let payload = generate_qr_string(&model)?;

        Ok(TransferInfo {
            account_number: self.config.account_number.clone(),
            account_name: truncate_name(&self.config.account_name).to_owned(),
            amount: model.get_amount().to_owned(),
            content: model.get_purpose().to_owned(),
            payload,
        })
    }

    fn transfer_model(&self, order_no: &str, amount_vnd: u64) -> TransferQrModel {
        let mut model = TransferQrModel::new();
        model.set_bank_bin(self.config.bank_bin.as_str());
        model.set_account_number(self.config.account_number.as_str());
        model.set_account_name(self.config.account_name.as_str());
        model.set_amount(amount_vnd.to_string());
        model.set_purpose(order_no);
        model.set_qr_type(self.config.qr_type);
        model
    }
}
