use shared::Currency;

/// Currency newly-created user settings default to
pub const DEFAULT_CURRENCY: &str = "INR";

const CURRENCIES: &[(&str, &str, &str)] = &[
    ("INR", "₹ Rupee", "hi-IN"),
    ("USD", "$ Dollar", "en-US"),
    ("EUR", "€ Euro", "de-DE"),
    ("GBP", "£ Pound", "en-GB"),
];

/// The supported currency table
pub fn supported() -> Vec<Currency> {
    CURRENCIES
        .iter()
        .map(|(value, label, locale)| Currency {
            value: value.to_string(),
            label: label.to_string(),
            locale: locale.to_string(),
        })
        .collect()
}

pub fn is_supported(code: &str) -> bool {
    CURRENCIES.iter().any(|(value, _, _)| *value == code)
}
