//! Normalization primitives shared by the matchers
//!
//! Every function here is pure: the output depends on the input string and
//! the explicit arguments only.

/// Significant digits kept when canonicalizing a number
pub const DEFAULT_PRECISION: usize = 5;

/// Characters trimmed by [`strip_punctuation`] besides ASCII punctuation.
const TRIM_WHITESPACE: [char; 6] = [' ', '\t', '\n', '\r', '\x0b', '\x0c'];

/// Symbols removed anywhere in a numeric answer.
const NUMERIC_SYMBOLS: [char; 4] = ['$', ',', '£', '€'];

/// Apply Unicode full default case folding (`"Straße"` → `"strasse"`).
pub fn casefold(s: &str) -> String {
    caseless::default_case_fold_str(s)
}

/// Trim runs of whitespace and ASCII punctuation from both ends.
///
/// Interior characters are never touched: `"¡U.S.A.!"` keeps its inner dots.
pub fn strip_punctuation(s: &str) -> &str {
    s.trim_matches(|c: char| TRIM_WHITESPACE.contains(&c) || c.is_ascii_punctuation())
}

/// Remove currency symbols and commas, and drop every `.` that is not
/// immediately followed by a digit.
///
/// ```rust
/// use strmatch::strip_numeric_punctuation;
///
/// assert_eq!(strip_numeric_punctuation("$1,234.50."), "1234.50");
/// assert_eq!(strip_numeric_punctuation("It costs €3. Done."), "It costs 3 Done");
/// ```
pub fn strip_numeric_punctuation(s: &str) -> String {
    let without_symbols = s.replace(NUMERIC_SYMBOLS, "");

    let mut out = String::with_capacity(without_symbols.len());
    let mut chars = without_symbols.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '.' && !chars.peek().is_some_and(char::is_ascii_digit) {
            continue;
        }
        out.push(c);
    }
    out
}

/// Loose numeric test: the word is digits only once every `.` is removed.
///
/// This accepts malformed tokens such as `"1.2.3"`; [`normalize_number`]
/// passes those through unchanged when they fail to parse.
pub fn is_numeric_word(word: &str) -> bool {
    let mut digits = word.chars().filter(|&c| c != '.').peekable();
    digits.peek().is_some() && digits.all(|c| c.is_ascii_digit())
}

/// Canonicalize a numeric token to `precision` significant digits.
///
/// Tokens failing [`is_numeric_word`] (including signed ones) and tokens that
/// do not parse as a float are returned unchanged.
pub fn normalize_number(token: &str, precision: usize) -> String {
    if !is_numeric_word(token) {
        return token.to_string();
    }

    match token.parse::<f64>() {
        Ok(value) => format_significant(value, precision),
        Err(_) => {
            tracing::trace!(token, "numeric-looking token did not parse, keeping as text");
            token.to_string()
        }
    }
}

/// Format a float in general notation with `precision` significant digits.
///
/// Fixed notation is used when the decimal exponent lies in
/// `[-4, precision)`, scientific otherwise. Trailing zeros are removed and
/// exponents carry a sign and at least two digits.
///
/// ```rust
/// use strmatch::format_significant;
///
/// assert_eq!(format_significant(1234.0, 5), "1234");
/// assert_eq!(format_significant(3.14159265, 5), "3.1416");
/// assert_eq!(format_significant(123456.0, 5), "1.2346e+05");
/// assert_eq!(format_significant(0.00001, 5), "1e-05");
/// ```
pub fn format_significant(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_string();
    }

    let precision = precision.max(1);

    // The exponent must come from the rounded value: 99999.7 is 1e+05 at p=5.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i64 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.unsigned_abs())
    } else {
        let decimals = (precision as i64 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
