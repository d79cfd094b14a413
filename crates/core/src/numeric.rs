//! Rounding shared by every derived ratio.

/// Round `value` to `places` decimal digits, ties going toward positive
/// infinity (`2.345 -> 2.35`, `-0.125 -> -0.12`).
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor + 0.5).floor() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_two_places() {
        assert_eq!(round_to(0.333_333, 2), 0.33);
        assert_eq!(round_to(0.666_666, 2), 0.67);
        assert_eq!(round_to(0.8, 2), 0.8);
    }

    #[test]
    fn negative_ties_round_up() {
        assert_eq!(round_to(-0.125, 2), -0.12);
        assert_eq!(round_to(-0.126, 2), -0.13);
    }

    #[test]
    fn whole_numbers_unchanged() {
        assert_eq!(round_to(1.0, 2), 1.0);
        assert_eq!(round_to(0.0, 2), 0.0);
    }
}
