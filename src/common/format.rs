// src/common/format.rs

use chrono::Datelike;
use rust_decimal::Decimal;

pub const CURRENCY_PREFIX: &str = "Bs.";

/// Abreviações de mês indexadas pelo número do mês (0-11).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthTable(pub [&'static str; 12]);

pub const MONTHS_ES: MonthTable = MonthTable([
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
]);

pub const MONTHS_EN: MonthTable = MonthTable([
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
]);

impl MonthTable {
    /// Escolhe a tabela pelo idioma primário do `Accept-Language` ("es", "en"...).
    pub fn for_lang(lang: &str) -> Self {
        match lang {
            "en" => MONTHS_EN,
            _ => MONTHS_ES,
        }
    }

    pub fn abbreviation(&self, month0: u32) -> &'static str {
        self.0[(month0 % 12) as usize]
    }
}

impl Default for MonthTable {
    fn default() -> Self {
        MONTHS_ES
    }
}

/// "Bs. 1234.50"
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    format!("{} {:.2}", CURRENCY_PREFIX, rounded)
}

/// "16 oct, 2026"
pub fn format_date<D: Datelike>(date: &D, months: MonthTable) -> String {
    format!(
        "{} {}, {}",
        date.day(),
        months.abbreviation(date.month0()),
        date.year()
    )
}

/// "15%" ou "12.5%"
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", value.round_dp(2).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal::prelude::FromPrimitive;

    #[test]
    fn currency_has_prefix_and_two_decimals() {
        let amount = Decimal::from_f64(1234.5).unwrap();
        assert_eq!(format_currency(amount), "Bs. 1234.50");
        assert_eq!(format_currency(Decimal::ZERO), "Bs. 0.00");
        assert_eq!(format_currency(Decimal::new(19999, 3)), "Bs. 20.00");
    }

    #[test]
    fn date_uses_static_month_table() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(format_date(&date, MONTHS_ES), "16 oct, 2026");
        assert_eq!(format_date(&date, MONTHS_EN), "16 Oct, 2026");

        let january = Utc.with_ymd_and_hms(2025, 1, 3, 12, 0, 0).unwrap();
        assert_eq!(format_date(&january, MonthTable::default()), "3 ene, 2025");
    }

    #[test]
    fn unknown_language_falls_back_to_spanish() {
        assert_eq!(MonthTable::for_lang("pt"), MONTHS_ES);
        assert_eq!(MonthTable::for_lang("en"), MONTHS_EN);
    }

    #[test]
    fn percent_drops_trailing_zeros() {
        assert_eq!(format_percent(Decimal::new(1500, 2)), "15%");
        assert_eq!(format_percent(Decimal::new(125, 1)), "12.5%");
    }
}
