use crc::{Crc, CRC_16_IBM_3740};

use crate::error::{Error, VietQrResult};

/// CRC-16/CCITT-FALSE: polynomial 0x1021, initial value 0xFFFF, no
/// reflection. The parameterization NAPAS mandates for tag 63.
const CRC_QR: Crc<u16> = Crc::<u16>::new(&CRC_16_IBM_3740);

/// A 2-digit length prefix caps every TLV value at 99 characters.
pub const MAX_VALUE_LEN: usize = 99;

/// Builds one `tag + length + value` field.
///
/// An empty value contributes nothing: the whole field is omitted, not
/// emitted with a `00` length. Composite fields rely on this to disappear
/// when all of their nested fields are empty.
pub fn field(tag: &str, value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    format!("{}{:02}{}", tag, value.len(), value)
}

pub(crate) fn check_len(tag: &str, value: &str) -> VietQrResult<()> {
    if value.len() > MAX_VALUE_LEN {
        return Err(Error::InvalidArgument(format!(
            "value for tag {} is {} characters, limit is {}",
            tag,
            value.len(),
            MAX_VALUE_LEN
        )));
    }
    Ok(())
}

/// CRC-16/CCITT-FALSE over the ASCII bytes of `data`, rendered as 4
/// uppercase hex digits, zero-padded on the left.
pub fn crc16(data: &str) -> String {
    format!("{:04X}", CRC_QR.checksum(data.as_bytes()))
}

/// Appends the checksum to a prefix that already ends with the literal
/// `6304` placeholder, yielding the final scannable payload.
pub fn finalize(prefix: &str) -> String {
    let mut payload = String::with_capacity(prefix.len() + 4);
    payload.push_str(prefix);
    payload.push_str(&crc16(prefix));
    payload
}

/// One parsed tag-length-value field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlvField {
    pub tag: String,
    pub value: String,
}

/// Splits a payload, or a composite field's value, into its immediate TLV
/// fields: 2-digit tag, 2-digit length, that many value characters, repeat.
/// Nested composites stay unparsed inside their parent's value.
pub fn parse(data: &str) -> VietQrResult<Vec<TlvField>> {
    if !data.is_ascii() {
        return Err(Error::Parse("payload contains non-ASCII data".to_owned()));
    }

    let mut fields = Vec::new();
    let mut rest = data;

    while !rest.is_empty() {
        if rest.len() < 4 {
            return Err(Error::Parse(format!(
                "truncated field header: {:?}",
                rest
            )));
        }
        let (tag, after_tag) = rest.split_at(2);
        let (len_str, after_len) = after_tag.split_at(2);
        let len = len_str.parse::<usize>().map_err(|_| {
            Error::Parse(format!("non-numeric length {:?} for tag {}", len_str, tag))
        })?;
        if after_len.len() < len {
            return Err(Error::Parse(format!(
                "tag {} declares {} characters but only {} remain",
                tag,
                len,
                after_len.len()
            )));
        }
        let (value, tail) = after_len.split_at(len);
        trace!("parsed tag {} length {:02}", tag, len);
        fields.push(TlvField {
            tag: tag.to_owned(),
            value: value.to_owned(),
        });
        rest = tail;
    }

    Ok(fields)
}

/// Recomputes the checksum over everything before the final 4 characters
/// and compares it to those characters.
pub fn verify(payload: &str) -> VietQrResult<()> {
    if !payload.is_ascii() {
        return Err(Error::Parse("payload contains non-ASCII data".to_owned()));
    }
    if payload.len() < 4 {
        return Err(Error::Parse(
            "payload too short to carry a checksum".to_owned(),
        ));
    }

    let (prefix, found) = payload.split_at(payload.len() - 4);
    let expected = crc16(prefix);
    if expected != found {
        return Err(Error::Checksum {
            expected,
            found: found.to_owned(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn empty_value_omits_the_field() {
        assert_eq!(field("54", ""), "");
        assert_eq!(field("62", ""), "");
    }

    #[test]
    fn field_length_prefix_is_zero_padded() {
        assert_eq!(field("00", "01"), "000201");
        assert_eq!(field("58", "VN"), "5802VN");
        assert_eq!(field("54", "60000"), "540560000");
    }

    #[test]
    fn field_is_four_longer_than_its_value() {
        for n in [1usize, 9, 10, 25, 99] {
            let value = "X".repeat(n);
            let built = field("59", &value);
            assert_eq!(built.len(), 4 + n);
            assert!(built.starts_with(&format!("59{:02}", n)));
        }
    }

    #[test]
    fn check_len_rejects_oversize_values() {
        assert!(check_len("08", &"9".repeat(99)).is_ok());
        assert!(check_len("08", &"9".repeat(100)).is_err());
    }

    #[test]
    fn crc16_matches_ccitt_false_check_value() {
        // Standard check input for CRC-16/CCITT-FALSE.
        assert_eq!(crc16("123456789"), "29B1");
    }

    #[test]
    fn crc16_of_empty_input_is_the_initial_register() {
        assert_eq!(crc16(""), "FFFF");
    }

    #[test]
    fn finalize_appends_exactly_four_hex_chars() {
        init();

        let payload = finalize("0002010102126304");
        assert_eq!(payload.len(), "0002010102126304".len() + 4);
        assert!(payload[payload.len() - 4..]
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn parse_recovers_the_built_fields() {
        init();

        let data = format!("{}{}{}", field("00", "01"), field("58", "VN"), field("54", "60000"));
        let fields = parse(&data).unwrap();

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].tag, "00");
        assert_eq!(fields[0].value, "01");
        assert_eq!(fields[1].tag, "58");
        assert_eq!(fields[1].value, "VN");
        assert_eq!(fields[2].tag, "54");
        assert_eq!(fields[2].value, "60000");
    }

    #[test]
    fn parse_rejects_truncated_input() {
        assert!(parse("58").is_err());
        assert!(parse("5805VN").is_err());
        assert!(parse("58xxVN").is_err());
    }

    #[test]
    fn verify_accepts_a_finalized_payload() {
        let payload = finalize("000201010212");
        verify(&payload).unwrap();
    }

    #[test]
    fn verify_rejects_a_tampered_payload() {
        let mut payload = finalize("000201010212");
        payload.replace_range(2..3, "1");
        match verify(&payload) {
            Err(Error::Checksum { .. }) => {}
            other => panic!("expected checksum mismatch, got {:?}", other),
        }
    }
}
