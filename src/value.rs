//! Typed value cells: the scalar representations an option can hold.
//!
//! Each [`Value`] variant knows how to parse itself from text and render
//! itself back. The contract the rest of the crate leans on is the round-trip
//! law: `parse(render(v))` yields a value equal to `v` (durations and floats
//! round-trip to within their own textual precision). There is no coercion
//! between variants — assigning `"true"` to an integer cell is an error.

use std::time::Duration;

/// A typed, convertible scalar value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i32),
    Int64(i64),
    Uint(u32),
    Uint64(u64),
    Float(f64),
    Str(String),
    Duration(Duration),
}

impl Value {
    /// Parse `text` according to the current variant and store the result.
    ///
    /// On failure returns a human-readable reason; the registry wraps it
    /// into [`ConfrcError::InvalidValue`](crate::ConfrcError::InvalidValue)
    /// together with the option name and the raw text.
    pub fn parse_assign(&mut self, text: &str) -> Result<(), String> {
        match self {
            Value::Bool(v) => *v = parse_bool(text)?,
            Value::Int(v) => *v = parse_signed(text, 32)? as i32,
            Value::Int64(v) => *v = parse_signed(text, 64)?,
            Value::Uint(v) => *v = parse_unsigned(text, 32)? as u32,
            Value::Uint64(v) => *v = parse_unsigned(text, 64)?,
            Value::Float(v) => {
                *v = text
                    .parse::<f64>()
                    .map_err(|_| format!("invalid float `{text}`"))?;
            }
            Value::Str(v) => *v = text.to_string(),
            Value::Duration(v) => *v = parse_duration(text)?,
        }
        Ok(())
    }

    /// Render the value back to text. Re-parsing the result with
    /// [`parse_assign`](Self::parse_assign) recovers an equal value.
    pub fn render(&self) -> String {
        match self {
            Value::Bool(v) => v.to_string(),
            Value::Int(v) => v.to_string(),
            Value::Int64(v) => v.to_string(),
            Value::Uint(v) => v.to_string(),
            Value::Uint64(v) => v.to_string(),
            Value::Float(v) => v.to_string(),
            Value::Str(v) => v.clone(),
            Value::Duration(v) => format_duration(*v),
        }
    }

    /// Name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Int64(_) => "int64",
            Value::Uint(_) => "uint",
            Value::Uint64(_) => "uint64",
            Value::Float(_) => "float64",
            Value::Str(_) => "string",
            Value::Duration(_) => "duration",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::Uint(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Uint64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Value::Duration(v) => Some(*v),
            _ => None,
        }
    }
}

/// Parse the canonical boolean token set: `1 t T TRUE true True` and
/// `0 f F FALSE false False`.
fn parse_bool(text: &str) -> Result<bool, String> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(format!("invalid boolean `{text}`")),
    }
}

/// Split an integer literal into sign, radix, and digit run.
///
/// Accepts an optional leading sign and the base prefixes `0x`, `0o`, `0b`
/// (either case). A bare digit run is decimal.
fn int_parts(text: &str) -> Result<(bool, u32, &str), String> {
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") if rest.len() > 2 => (16, &rest[2..]),
        Some("0o" | "0O") if rest.len() > 2 => (8, &rest[2..]),
        Some("0b" | "0B") if rest.len() > 2 => (2, &rest[2..]),
        _ => (10, rest),
    };

    if digits.is_empty() || digits.starts_with('+') || digits.starts_with('-') {
        return Err(format!("invalid integer `{text}`"));
    }
    Ok((negative, radix, digits))
}

fn parse_signed(text: &str, bits: u32) -> Result<i64, String> {
    let (negative, radix, digits) = int_parts(text)?;
    let magnitude = u128::from_str_radix(digits, radix)
        .map_err(|_| format!("invalid integer `{text}`"))?;

    let limit: u128 = if negative {
        1 << (bits - 1)
    } else {
        (1 << (bits - 1)) - 1
    };
    if magnitude > limit {
        return Err(format!("value `{text}` out of range for int{bits}"));
    }
    let signed = if negative {
        -(magnitude as i128)
    } else {
        magnitude as i128
    };
    Ok(signed as i64)
}

fn parse_unsigned(text: &str, bits: u32) -> Result<u64, String> {
    let (negative, radix, digits) = int_parts(text)?;
    if negative {
        return Err(format!("invalid negative value `{text}` for uint{bits}"));
    }
    let magnitude = u128::from_str_radix(digits, radix)
        .map_err(|_| format!("invalid integer `{text}`"))?;

    let limit: u128 = if bits == 64 {
        u64::MAX as u128
    } else {
        (1 << bits) - 1
    };
    if magnitude > limit {
        return Err(format!("value `{text}` out of range for uint{bits}"));
    }
    Ok(magnitude as u64)
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Nanoseconds per unit, longest suffixes first so `ms` wins over `m`.
const UNITS: &[(&str, u128)] = &[
    ("ns", 1),
    ("us", 1_000),
    ("µs", 1_000),
    ("ms", 1_000_000),
    ("s", NANOS_PER_SEC),
    ("m", 60 * NANOS_PER_SEC),
    ("h", 3_600 * NANOS_PER_SEC),
];

/// Parse a duration in magnitude+unit form: one or more terms like `300ms`,
/// `1.5h`, `2h45m`. Units are `ns`, `us`/`µs`, `ms`, `s`, `m`, `h`. A plain
/// `0` is accepted. Negative durations are rejected.
pub fn parse_duration(text: &str) -> Result<Duration, String> {
    let mut rest = text.strip_prefix('+').unwrap_or(text);
    if rest.starts_with('-') {
        return Err(format!("negative duration `{text}` is not supported"));
    }
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(format!("invalid duration `{text}`"));
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let int_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let int_digits = &rest[..int_end];
        rest = &rest[int_end..];

        let mut frac_digits = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_end = after_dot
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after_dot.len());
            frac_digits = &after_dot[..frac_end];
            rest = &after_dot[frac_end..];
        }

        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(format!("invalid duration `{text}`"));
        }

        let (unit, remainder) = match_unit(rest)
            .ok_or_else(|| format!("missing or unknown unit in duration `{text}`"))?;
        rest = remainder;

        let whole: u128 = if int_digits.is_empty() {
            0
        } else {
            int_digits
                .parse()
                .map_err(|_| format!("invalid duration `{text}`"))?
        };

        let mut term = whole
            .checked_mul(unit)
            .ok_or_else(|| format!("duration `{text}` overflows"))?;

        if !frac_digits.is_empty() {
            // 18 digits are more precision than any unit carries.
            let frac_digits = &frac_digits[..frac_digits.len().min(18)];
            let frac: u128 = frac_digits
                .parse()
                .map_err(|_| format!("invalid duration `{text}`"))?;
            let scale = 10u128.pow(frac_digits.len() as u32);
            term = term
                .checked_add(frac * unit / scale)
                .ok_or_else(|| format!("duration `{text}` overflows"))?;
        }

        total = total
            .checked_add(term)
            .ok_or_else(|| format!("duration `{text}` overflows"))?;
    }

    let secs = u64::try_from(total / NANOS_PER_SEC)
        .map_err(|_| format!("duration `{text}` overflows"))?;
    Ok(Duration::new(secs, (total % NANOS_PER_SEC) as u32))
}

fn match_unit(rest: &str) -> Option<(u128, &str)> {
    for (suffix, nanos) in UNITS {
        if let Some(remainder) = rest.strip_prefix(suffix) {
            return Some((*nanos, remainder));
        }
    }
    None
}

/// Render a duration in the same magnitude+unit grammar `parse_duration`
/// accepts: `0s`, `450ns`, `1.5us`, `300ms`, `1m30s`, `2h45m0s`.
pub fn format_duration(d: Duration) -> String {
    let total = d.as_nanos();
    if total == 0 {
        return "0s".to_string();
    }
    if total < 1_000 {
        return format!("{total}ns");
    }
    if total < 1_000_000 {
        return format_fractional(total, 1_000, "us");
    }
    if total < NANOS_PER_SEC {
        return format_fractional(total, 1_000_000, "ms");
    }

    let secs = d.as_secs();
    let hours = secs / 3_600;
    let minutes = (secs % 3_600) / 60;
    let seconds = secs % 60;
    let nanos = d.subsec_nanos();

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    if nanos == 0 {
        out.push_str(&format!("{seconds}s"));
    } else {
        let frac = format!("{nanos:09}");
        out.push_str(&format!("{seconds}.{}s", frac.trim_end_matches('0')));
    }
    out
}

fn format_fractional(total: u128, unit: u128, suffix: &str) -> String {
    let whole = total / unit;
    let rem = total % unit;
    if rem == 0 {
        return format!("{whole}{suffix}");
    }
    let width = unit.ilog10() as usize;
    let frac = format!("{rem:0width$}");
    format!("{whole}.{}{suffix}", frac.trim_end_matches('0'))
}
