//! Money
//!
//! Every price in the storefront is an Argentine peso amount. Prices are
//! effectively whole pesos, so rendered amounts carry `es-AR` thousands
//! separators and no decimal places.

use rusty_money::{
    Formatter, Money, Params,
    iso::{self, Currency},
};

/// Creates a whole-peso amount.
#[must_use]
pub fn pesos(amount: i64) -> Money<'static, Currency> {
    Money::from_major(amount, iso::ARS)
}

/// Renders an amount the way `es-AR` renders whole pesos: `.` as the
/// thousands separator, no decimal places (`2000` becomes `"2.000"`).
///
/// The `$` sign is left to the caller, since message and UI templates place
/// it themselves.
#[must_use]
pub fn format_ars(amount: &Money<'_, Currency>) -> String {
    let params = Params {
        digit_separator: '.',
        exponent_separator: ',',
        rounding: Some(0),
        ..Params::default()
    };

    Formatter::money(amount, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pesos_are_whole_ars_amounts() {
        let amount = pesos(5_500);

        assert_eq!(amount, Money::from_minor(550_000, iso::ARS));
        assert_eq!(amount.currency(), iso::ARS);
    }

    #[test]
    fn format_separates_thousands_with_dots() {
        assert_eq!(format_ars(&pesos(2_000)), "2.000");
        assert_eq!(format_ars(&pesos(13_500)), "13.500");
        assert_eq!(format_ars(&pesos(2_000_000)), "2.000.000");
    }

    #[test]
    fn format_leaves_small_amounts_unseparated() {
        assert_eq!(format_ars(&pesos(0)), "0");
        assert_eq!(format_ars(&pesos(500)), "500");
    }

    #[test]
    fn format_drops_decimal_places() {
        let amount = Money::from_minor(550_000, iso::ARS);

        assert_eq!(format_ars(&amount), "5.500");
    }
}
