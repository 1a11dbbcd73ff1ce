use crate::core::mask::mask_tail;
use crate::core::{AppError, Result};
use serde::Deserialize;
use serde_json::Value;

pub const INVALID_AMOUNT_MESSAGE: &str = "Expected amount to be a number greater than 0";
pub const INVALID_PHONE_MESSAGE: &str = "Expected phone to be a number";

/// Body of `POST /lipa` as sent by the client
///
/// Both fields are kept as raw JSON so that numbers and numeric strings are
/// accepted alike; anything else is rejected by [`LipaRequest::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LipaRequest {
    #[serde(default)]
    pub amount: Value,
    #[serde(default)]
    pub phone: Value,
}

/// A payment request whose amount and phone both parsed to positive integers
///
/// The phone keeps the digits the client sent, leading zeros included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentRequest {
    pub amount: i64,
    pub phone: String,
}

impl LipaRequest {
    pub fn new(amount: impl Into<Value>, phone: impl Into<Value>) -> Self {
        Self {
            amount: amount.into(),
            phone: phone.into(),
        }
    }

    /// Amount is checked before phone.
    pub fn validate(&self) -> Result<PaymentRequest> {
        let amount = parse_integer(&self.amount)
            .filter(|amount| *amount > 0)
            .ok_or_else(|| AppError::validation(INVALID_AMOUNT_MESSAGE))?;

        let text = loose_string(&self.phone);
        let phone = parse_integer_str(&text)
            .filter(|phone| *phone > 0)
            .map(|phone| phone_digits(&text, phone))
            .ok_or_else(|| AppError::validation(INVALID_PHONE_MESSAGE))?;

        Ok(PaymentRequest { amount, phone })
    }
}

impl PaymentRequest {
    pub fn masked_phone(&self) -> String {
        mask_tail(&self.phone)
    }
}

/// Leading-integer parse of an arbitrary JSON value.
///
/// The value is first rendered the way a loosely typed client would render it
/// (`null`, `true`, `1.5`, `a,b` for arrays, `[object Object]` for objects) and
/// then parsed with [`parse_integer_str`]. Returns `None` when no digits lead
/// the text or the result does not fit in an `i64`.
pub fn parse_integer(value: &Value) -> Option<i64> {
    parse_integer_str(&loose_string(value))
}

/// Parse the integer prefix of `text`.
///
/// Leading whitespace is skipped, an optional sign and an optional `0x`/`0X`
/// hexadecimal prefix are honoured, then the longest run of digits is taken.
/// Trailing garbage is ignored: `"12abc"` parses to `12`.
pub fn parse_integer_str(text: &str) -> Option<i64> {
    let text = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');

    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = match text.get(..2) {
        Some("0x") | Some("0X") => (16, &text[2..]),
        _ => (10, text),
    };

    let prefix_len = digits
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(index, _)| index)
        .unwrap_or(digits.len());
    if prefix_len == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&digits[..prefix_len], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Leading decimal digits of `text` when they spell `parsed`, else `parsed` itself.
///
/// `" 0712345678"` keeps its zero; `"0x1A"` and `12.9` fall back to the number.
fn phone_digits(text: &str, parsed: i64) -> String {
    let text = text
        .trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .trim_start_matches('+');
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let digits = &text[..end];

    if digits.parse::<i64>().ok() == Some(parsed) {
        digits.to_string()
    } else {
        parsed.to_string()
    }
}

fn loose_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => loose_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}
