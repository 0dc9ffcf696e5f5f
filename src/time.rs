use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::VietQrResult;

pub fn now() -> VietQrResult<Duration> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?)
}

/// Folds a point in time into an 8-digit decimal order number: epoch
/// seconds modulo 100,000,000, zero-padded on the left.
pub fn to_order_number(duration: Duration) -> String {
    format!("{:08}", duration.as_secs() % 100_000_000)
}

/// Mints an order number from the wall clock.
///
/// The value is non-decreasing across distinct seconds, but two calls
/// within the same second return the same number. Deduplication belongs to
/// the order store, not here.
pub fn generate_order_number() -> VietQrResult<String> {
    let order_no = to_order_number(now()?);
    debug!("minted order number {}", order_no);
    Ok(order_no)
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::{generate_order_number, to_order_number};

    #[test]
    fn order_number_is_epoch_seconds_mod_1e8() {
        let duration = Duration::new(1693580767, 0);
        assert_eq!(to_order_number(duration), "93580767");
    }

    #[test]
    fn order_number_is_left_zero_padded() {
        assert_eq!(to_order_number(Duration::new(100_000_042, 0)), "00000042");
        assert_eq!(to_order_number(Duration::new(0, 0)), "00000000");
    }

    #[test]
    fn sub_second_precision_is_ignored() {
        let a = to_order_number(Duration::new(1693580767, 1));
        let b = to_order_number(Duration::new(1693580767, 999_999_999));
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_seconds_yield_distinct_numbers() {
        let a = to_order_number(Duration::new(1693580767, 0));
        let b = to_order_number(Duration::new(1693580768, 0));
        assert_ne!(a, b);
    }

    #[test]
    fn minted_number_is_eight_decimal_digits() {
        let order_no = generate_order_number().unwrap();
        assert_eq!(order_no.len(), 8);
        assert!(order_no.bytes().all(|b| b.is_ascii_digit()));
    }
}
