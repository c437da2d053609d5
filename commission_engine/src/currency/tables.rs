//! Static currency and locale data.
//!
//! Only the currencies and locales this service actually deals with are listed. The data follows CLDR conventions for
//! the "symbol" and "narrowSymbol" currency display modes.

/// Non-breaking space, used between an ISO code (or a spaced symbol) and the number.
pub const NBSP: char = '\u{a0}';

pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    /// Symbol that is understood in any locale, e.g. `US$` or `€`. `None` means the ISO code is used instead.
    pub international_symbol: Option<&'static str>,
    /// The minimal glyph, e.g. `$` or `₡`.
    pub narrow_symbol: &'static str,
    /// Number of decimal places shown.
    pub fraction_digits: u32,
    /// The locale used when the caller does not ask for one.
    pub home_locale: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
    pub tag: &'static str,
    pub group_separator: char,
    pub decimal_separator: char,
    /// Whether the currency symbol is separated from the number by a space (e.g. `R$ 10,00` in pt-BR).
    pub spaced_symbol: bool,
    /// Currencies with a localised symbol in this locale, e.g. USD is plain `$` in en-US.
    pub local_symbols: &'static [(&'static str, &'static str)],
}

#[rustfmt::skip]
pub static CURRENCIES: &[CurrencyInfo] = &[
    CurrencyInfo { code: "USD", international_symbol: Some("US$"), narrow_symbol: "$", fraction_digits: 2, home_locale: "en-US" },
    CurrencyInfo { code: "EUR", international_symbol: Some("€"), narrow_symbol: "€", fraction_digits: 2, home_locale: "en-IE" },
    CurrencyInfo { code: "BRL", international_symbol: Some("R$"), narrow_symbol: "R$", fraction_digits: 2, home_locale: "pt-BR" },
    CurrencyInfo { code: "GBP", international_symbol: Some("£"), narrow_symbol: "£", fraction_digits: 2, home_locale: "en-GB" },
    CurrencyInfo { code: "CAD", international_symbol: Some("CA$"), narrow_symbol: "$", fraction_digits: 2, home_locale: "en-CA" },
    CurrencyInfo { code: "CRC", international_symbol: None, narrow_symbol: "₡", fraction_digits: 2, home_locale: "es-CR" },
    CurrencyInfo { code: "GTQ", international_symbol: None, narrow_symbol: "Q", fraction_digits: 2, home_locale: "es-GT" },
    CurrencyInfo { code: "HNL", international_symbol: None, narrow_symbol: "L", fraction_digits: 2, home_locale: "es-HN" },
    CurrencyInfo { code: "NIO", international_symbol: None, narrow_symbol: "C$", fraction_digits: 2, home_locale: "es-NI" },
    CurrencyInfo { code: "DOP", international_symbol: None, narrow_symbol: "RD$", fraction_digits: 2, home_locale: "es-DO" },
    // Won is always shown in whole units
    CurrencyInfo { code: "KRW", international_symbol: Some("₩"), narrow_symbol: "₩", fraction_digits: 0, home_locale: "ko-KR" },
];

#[rustfmt::skip]
pub static LOCALES: &[LocaleInfo] = &[
    LocaleInfo { tag: "en-US", group_separator: ',', decimal_separator: '.', spaced_symbol: false, local_symbols: &[("USD", "$")] },
    LocaleInfo { tag: "en-IE", group_separator: ',', decimal_separator: '.', spaced_symbol: false, local_symbols: &[] },
    LocaleInfo { tag: "en-GB", group_separator: ',', decimal_separator: '.', spaced_symbol: false, local_symbols: &[] },
    LocaleInfo { tag: "en-CA", group_separator: ',', decimal_separator: '.', spaced_symbol: false, local_symbols: &[("CAD", "$")] },
    LocaleInfo { tag: "pt-BR", group_separator: '.', decimal_separator: ',', spaced_symbol: true, local_symbols: &[] },
    LocaleInfo { tag: "es-CR", group_separator: NBSP, decimal_separator: ',', spaced_symbol: false, local_symbols: &[("CRC", "₡")] },
    LocaleInfo { tag: "es-GT", group_separator: ',', decimal_separator: '.', spaced_symbol: false, local_symbols: &[("GTQ", "Q")] },
    LocaleInfo { tag: "es-HN", group_separator: ',', decimal_separator: '.', spaced_symbol: false, local_symbols: &[("HNL", "L")] },
    LocaleInfo { tag: "es-NI", group_separator: ',', decimal_separator: '.', spaced_symbol: false, local_symbols: &[("NIO", "C$")] },
    LocaleInfo { tag: "es-DO", group_separator: ',', decimal_separator: '.', spaced_symbol: false, local_symbols: &[("DOP", "RD$")] },
    LocaleInfo { tag: "ko-KR", group_separator: ',', decimal_separator: '.', spaced_symbol: false, local_symbols: &[] },
];

/// Looks up a currency by its (already normalised) ISO 4217 code.
pub fn currency_info(code: &str) -> Option<&'static CurrencyInfo> {
    CURRENCIES.iter().find(|c| c.code == code)
}

/// Looks up a locale by BCP 47 tag. Matching ignores case and accepts `_` in place of `-`.
pub fn locale_info(tag: &str) -> Option<&'static LocaleInfo> {
    let tag = tag.trim().replace('_', "-");
    LOCALES.iter().find(|l| l.tag.eq_ignore_ascii_case(&tag))
}

pub fn default_locale() -> &'static LocaleInfo {
    &LOCALES[0]
}

impl LocaleInfo {
    pub fn local_symbol(&self, code: &str) -> Option<&'static str> {
        self.local_symbols.iter().find(|(c, _)| *c == code).map(|(_, s)| *s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_home_locale_exists() {
        for c in CURRENCIES {
            assert!(locale_info(c.home_locale).is_some(), "{} has no locale entry for {}", c.code, c.home_locale);
        }
        assert_eq!(default_locale().tag, DEFAULT_LOCALE);
    }

    #[test]
    fn locale_lookup_is_lenient() {
        assert_eq!(locale_info("pt_br").map(|l| l.tag), Some("pt-BR"));
        assert_eq!(locale_info(" EN-us ").map(|l| l.tag), Some("en-US"));
        assert!(locale_info("fr-FR").is_none());
    }
}
