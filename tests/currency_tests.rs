use records_core::currency::{
    format_currency_value, CurrencyCode, CurrencyDisplay, FormatOptions, LocaleConfig,
    NegativeStyle,
};
use rust_decimal_macros::dec;

#[test]
fn formats_currency_with_locale() {
    let mut locale = LocaleConfig::default();
    locale.decimal_separator = ',';
    locale.grouping_separator = ' ';
    let options = FormatOptions {
        currency_display: CurrencyDisplay::Symbol,
        negative_style: NegativeStyle::Parentheses,
        screen_reader_mode: false,
    };
    let code = CurrencyCode::new("EUR");
    let formatted = format_currency_value(dec!(-1234.5), &code, &locale, &options);
    assert_eq!(formatted, "€ (1 234,50)");
}

#[test]
fn formats_default_usd_amounts() {
    let locale = LocaleConfig::default();
    let options = FormatOptions::default();
    let code = CurrencyCode::default();
    assert_eq!(
        format_currency_value(dec!(100.50), &code, &locale, &options),
        "$100.50"
    );
    assert_eq!(
        format_currency_value(dec!(-0.5), &code, &locale, &options),
        "$-0.50"
    );
}

#[test]
fn zero_minor_unit_currencies_drop_fraction() {
    let locale = LocaleConfig::default();
    let options = FormatOptions {
        currency_display: CurrencyDisplay::Code,
        ..FormatOptions::default()
    };
    let code = CurrencyCode::new("jpy");
    assert_eq!(
        format_currency_value(dec!(1500000), &code, &locale, &options),
        "JPY 1,500,000"
    );
}

#[test]
fn screen_reader_mode_spells_out_negatives() {
    let locale = LocaleConfig::default();
    let options = FormatOptions {
        currency_display: CurrencyDisplay::SymbolAndCode,
        negative_style: NegativeStyle::Sign,
        screen_reader_mode: true,
    };
    let code = CurrencyCode::new("USD");
    assert_eq!(
        format_currency_value(dec!(12), &code, &locale, &options),
        "USD $ 12.00 (USD)"
    );
    assert_eq!(
        format_currency_value(dec!(-12), &code, &locale, &options),
        "minus USD $ 12.00 (USD)"
    );
}
