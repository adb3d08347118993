#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::app::utils::{format_money, normalize_symbol, parse_quantity};

    #[test]
    fn parse_quantity_reads_the_leading_whole_number() {
        assert_eq!(parse_quantity("10"), Some(10));
        assert_eq!(parse_quantity(" 7 "), Some(7));
        assert_eq!(parse_quantity("+4"), Some(4));
        assert_eq!(parse_quantity("3.7"), Some(3));
        assert_eq!(parse_quantity("10abc"), Some(10));
        assert_eq!(parse_quantity("1.5"), Some(1));
    }

    #[test]
    fn parse_quantity_rejects_non_positive_and_non_numeric() {
        assert_eq!(parse_quantity("0"), None);
        assert_eq!(parse_quantity("0.9"), None);
        assert_eq!(parse_quantity("-1"), None);
        assert_eq!(parse_quantity("-0"), None);
        assert_eq!(parse_quantity("ten"), None);
        assert_eq!(parse_quantity(".5"), None);
        assert_eq!(parse_quantity("+"), None);
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("   "), None);
        assert_eq!(parse_quantity("99999999999"), None);
    }

    #[test]
    fn normalize_symbol_works() {
        assert_eq!(normalize_symbol(" aapl "), "AAPL");
        assert_eq!(normalize_symbol(""), "");
    }

    #[test]
    fn format_money_works() {
        assert_eq!(format_money(dec!(10500)), "$10500");
        assert_eq!(format_money(dec!(40.50)), "$40.5");
        assert_eq!(format_money(dec!(1.66666)), "$1.67");
        assert_eq!(format_money(dec!(-250)), "-$250");
        assert_eq!(format_money(dec!(0)), "$0");
    }
}
