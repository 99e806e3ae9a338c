//! Quantity rules resolved against the trip length.
use crate::catalog::QtyRule;

/// Quantity contributed by one catalog entry for a trip of `nights` nights.
/// Always non-negative.
pub fn resolve_qty(rule: &QtyRule, nights: u8) -> f64 {
    match *rule {
        QtyRule::Default => 1.0,
        QtyRule::Fixed { value } | QtyRule::Other { value } => non_negative(value),
        QtyRule::PerNight { value, cap } => {
            if nights == 0 {
                return 0.0;
            }
            let qty = f64::from(nights) * non_negative(value);
            match cap {
                // A negative cap still cannot push the result below zero.
                Some(cap) => non_negative(qty.min(cap)),
                None => qty,
            }
        }
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.max(0.0)
}
