// Metric formatting for KPI labels
//
// Output follows the ru-RU conventions the portal is shown in: thousands are
// grouped with a no-break space and roubles carry a trailing `₽`.

/// Display string for any absent or non-finite value.
pub const PLACEHOLDER: &str = "—";

const GROUP_SEPARATOR: char = '\u{a0}';
const CURRENCY_SYMBOL: char = '₽';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    /// Whole roubles, grouped, with the currency symbol.
    Currency,
    /// One fractional digit followed by `%`.
    Percentage,
    /// Whole number, grouped, no symbol.
    Plain,
}

/// Format a metric for display.
///
/// `None`, `NaN` and infinities all render as [`PLACEHOLDER`]; zero is a real
/// value and renders as such.
pub fn format_metric(value: Option<f64>, kind: MetricKind) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return PLACEHOLDER.to_string();
    };

    match kind {
        MetricKind::Currency => format!(
            "{}{}{}",
            group_digits(value),
            GROUP_SEPARATOR,
            CURRENCY_SYMBOL
        ),
        MetricKind::Percentage => format!("{}%", to_fixed(value, 1)),
        MetricKind::Plain => group_digits(value),
    }
}

pub fn format_currency(value: Option<f64>) -> String {
    format_metric(value, MetricKind::Currency)
}

pub fn format_percent(value: Option<f64>) -> String {
    format_metric(value, MetricKind::Percentage)
}

pub fn format_plain(value: Option<f64>) -> String {
    format_metric(value, MetricKind::Plain)
}

/// Percentage rounded to a whole number, e.g. for plan completion hints.
pub fn format_percent_whole(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{}%", to_fixed(v, 0)),
        None => PLACEHOLDER.to_string(),
    }
}

/// Fixed-point rendering of the exact binary value.
///
/// Values that sit exactly halfway between two outputs round away from zero;
/// everything else rounds to the nearest output. Values too large to scale
/// still render in full rather than overflowing.
pub(crate) fn to_fixed(value: f64, decimals: u32) -> String {
    let precision = decimals as usize;
    let magnitude = value.abs();
    let scale = 10f64.powi(decimals as i32);
    let scaled = magnitude * scale;

    // `{:.N}` breaks exact ties towards the even digit
    let is_tie = scaled.is_finite()
        && scaled.fract() == 0.5
        && magnitude.mul_add(scale, -scaled) == 0.0;
    let digits = if is_tie {
        format!("{:.*}", precision, (scaled + 0.5) / scale)
    } else {
        format!("{:.*}", precision, magnitude)
    };

    let is_zero = digits.bytes().all(|b| b == b'0' || b == b'.');
    if value < 0.0 && !is_zero {
        format!("-{}", digits)
    } else {
        digits
    }
}

fn group_digits(value: f64) -> String {
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
