//! Results returned by compute functions and the number rendering they use.
//!
//! Numbers render the way the browser rendered them. Plain numbers follow
//! `Number.prototype.toString` and fixed decimals follow
//! `Number.prototype.toFixed`: non-finite values print as `NaN`, `Infinity` or
//! `-Infinity`, negative zero prints as zero, exact ties round away from zero
//! and magnitudes of `1e21` and above switch to exponent form.

use serde::Serialize;
use std::fmt;

/// The value part of one result line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultValue {
    /// A number rendered with a fixed count of decimals
    Fixed { value: f64, decimals: usize },
    /// A number rendered in its shortest form (counts, pH)
    Plain { value: f64 },
    /// A yes/no verdict
    Flag { value: bool },
    /// A degenerate input the formula explicitly refuses to evaluate
    Undefined { message: &'static str },
}

impl ResultValue {
    /// Numeric content, if any
    pub fn numeric(&self) -> Option<f64> {
        match self {
            Self::Fixed { value, .. } | Self::Plain { value } => Some(*value),
            Self::Flag { .. } | Self::Undefined { .. } => None,
        }
    }

    /// Whether the formula refused to evaluate
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined { .. })
    }

    /// The text shown to the user
    pub fn formatted(&self) -> String {
        match self {
            Self::Fixed { value, decimals } => format_fixed(*value, *decimals),
            Self::Plain { value } => format_number(*value),
            Self::Flag { value } => (if *value { "Yes" } else { "No" }).to_string(),
            Self::Undefined { message } => (*message).to_string(),
        }
    }
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// One captioned line of a simulation result, e.g. `Current: 2.00 A`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultLine {
    pub caption: &'static str,
    pub value: ResultValue,
    /// Suffix appended verbatim after the value, including any leading space
    pub unit: &'static str,
}

impl ResultLine {
    /// A number shown with `decimals` digits after the point
    pub fn fixed(caption: &'static str, value: f64, decimals: usize, unit: &'static str) -> Self {
        Self {
            caption,
            value: ResultValue::Fixed { value, decimals },
            unit,
        }
    }

    /// A number shown in its shortest form
    pub fn plain(caption: &'static str, value: f64, unit: &'static str) -> Self {
        Self {
            caption,
            value: ResultValue::Plain { value },
            unit,
        }
    }

    pub fn flag(caption: &'static str, value: bool) -> Self {
        Self {
            caption,
            value: ResultValue::Flag { value },
            unit: "",
        }
    }

    pub fn undefined(caption: &'static str, message: &'static str, unit: &'static str) -> Self {
        Self {
            caption,
            value: ResultValue::Undefined { message },
            unit,
        }
    }

    /// Fixed rendering, or `message` when `value` is `NaN`.
    pub fn fixed_or_undefined(
        caption: &'static str,
        value: f64,
        decimals: usize,
        message: &'static str,
        unit: &'static str,
    ) -> Self {
        if value.is_nan() {
            Self::undefined(caption, message, unit)
        } else {
            Self::fixed(caption, value, decimals, unit)
        }
    }
}

impl fmt::Display for ResultLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}{}", self.caption, self.value, self.unit)
    }
}

/// Everything a compute function reports. Always holds at least one line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationOutput {
    lines: Vec<ResultLine>,
}

impl SimulationOutput {
    pub fn new(line: ResultLine) -> Self {
        Self { lines: vec![line] }
    }

    pub fn with_line(mut self, line: ResultLine) -> Self {
        self.lines.push(line);
        self
    }

    pub fn lines(&self) -> &[ResultLine] {
        &self.lines
    }

    /// The first line
    pub fn primary(&self) -> &ResultLine {
        &self.lines[0]
    }

    /// Looks up a line by caption.
    pub fn line(&self, caption: &str) -> Option<&ResultLine> {
        self.lines.iter().find(|line| line.caption == caption)
    }
}

impl fmt::Display for SimulationOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Magnitude from which both renderings switch to exponent form
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Enough fractional digits to print any finite `f64` exactly
const EXACT_DIGITS: usize = 1100;

/// Renders `value` with exactly `decimals` digits after the point.
///
/// Rounds the exact binary value, sending exact ties away from zero, so
/// `0.125` gives `0.13` while `1.005` (stored just below the tie) gives `1.00`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() || value.abs() >= EXPONENT_THRESHOLD {
        return format_number(value);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let padded = fraction.bytes().chain(std::iter::repeat(b'0'));
    let mut digits: Vec<u8> = whole.bytes().chain(padded.take(decimals)).collect();
    let first_dropped = fraction.as_bytes().get(decimals).copied();
    if first_dropped.is_some_and(|d| d >= b'5') {
        round_up_digits(&mut digits);
    }

    let point = digits.len() - decimals;
    let mut text = String::with_capacity(digits.len() + 2);
    text.push_str(sign);
    text.extend(digits[..point].iter().map(|d| char::from(*d)));
    if decimals > 0 {
        text.push('.');
        text.extend(digits[point..].iter().map(|d| char::from(*d)));
    }
    text
}

/// Adds one unit in the last place of a string of ASCII digits.
fn round_up_digits(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Renders `value` in its shortest round-trip form, switching to exponent
/// form outside `[1e-6, 1e21)`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == f64::INFINITY {
        return "Infinity".to_string();
    }
    if value == f64::NEG_INFINITY {
        return "-Infinity".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    ryu_js::Buffer::new().format_finite(value).to_string()
}

/// Rounds half toward positive infinity, so `-2.5` becomes `-2`.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rendering() {
        assert_eq!(format_fixed(2.0, 2), "2.00");
        assert_eq!(format_fixed(0.999_4, 3), "0.999");
        assert_eq!(format_fixed(-6082.369_2, 2), "-6082.37");
        assert_eq!(format_fixed(7.0, 0), "7");
        assert_eq!(format_fixed(-0.0, 2), "0.00");
        assert_eq!(format_fixed(-0.001, 2), "-0.00");
        assert_eq!(format_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 3), "-Infinity");
        assert_eq!(format_fixed(f64::NAN, 2), "NaN");
    }

    #[test]
    fn fixed_ties_round_away_from_zero() {
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(0.625, 2), "0.63");
        assert_eq!(format_fixed(0.0625, 3), "0.063");
        assert_eq!(format_fixed(-0.125, 2), "-0.13");
        assert_eq!(format_fixed(9.995, 2), "9.99");
        assert_eq!(format_fixed(99.5, 0), "100");
        assert_eq!(format_fixed(0.5, 0), "1");
    }

    #[test]
    fn fixed_keeps_the_binary_value() {
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_fixed(0.1 + 0.2, 2), "0.30");
        assert_eq!(format_fixed(1e20, 2), "100000000000000000000.00");
    }

    #[test]
    fn huge_values_use_exponent_form() {
        assert_eq!(format_fixed(1e21, 2), "1e+21");
        assert_eq!(format_fixed(-1e21, 2), "-1e+21");
        assert_eq!(format_number(2f64.powi(70) - 1.0), "1.1805916207174113e+21");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1e20), "100000000000000000000");
    }

    #[test]
    fn plain_rendering() {
        assert_eq!(format_number(4.0), "4");
        assert_eq!(format_number(0.4), "0.4");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.000_001), "0.000001");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn rounding_breaks_ties_upward() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(1.4), 1.0);
        assert!(round_half_up(f64::NAN).is_nan());
        assert_eq!(round_half_up(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn nan_turns_into_message() {
        let line = ResultLine::fixed_or_undefined("Cost", f64::NAN, 2, "Undefined (no data)", " $");
        assert!(line.value.is_undefined());
        assert_eq!(line.to_string(), "Cost: Undefined (no data) $");

        let line =
            ResultLine::fixed_or_undefined("Cost", f64::INFINITY, 2, "Undefined (no data)", " $");
        assert_eq!(line.to_string(), "Cost: Infinity $");
    }

    #[test]
    fn multi_line_output() {
        let output = SimulationOutput::new(ResultLine::plain("Minimum Height", 3.0, ""))
            .with_line(ResultLine::plain("Maximum Height", 7.0, ""));
        assert_eq!(output.to_string(), "Minimum Height: 3\nMaximum Height: 7");
        let maximum = output.line("Maximum Height").unwrap();
        assert_eq!(maximum.value.numeric(), Some(7.0));
        assert_eq!(output.primary().caption, "Minimum Height");
    }
}
