use once_cell::sync::Lazy;
use regex::Regex;

use super::{hsl_to_hex, oklch_to_hex};

static HEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("valid hex regex"));

static HSL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^hsl\(\s*(\d+)\s*,\s*(\d+)%\s*,\s*(\d+)%\s*\)$").expect("valid hsl regex")
});

static OKLCH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^oklch\(\s*(\d+)%\s+(\d+)%\s+(\d+)\s*\)$").expect("valid oklch regex")
});

const MAX_HUE: u32 = 360;
const MAX_PERCENT: u32 = 100;

/// True iff `color` is `#` followed by exactly 3 or 6 hex digits.
pub fn is_valid_hex_color(color: &str) -> bool {
    HEX_RE.is_match(color)
}

/// Unsigned decimal integer with no sign, fraction or padding.
fn integer(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn percent(part: &str) -> Option<u32> {
    integer(part.strip_suffix('%')?).filter(|v| *v <= MAX_PERCENT)
}

fn hue(part: &str) -> Option<u32> {
    integer(part).filter(|v| *v <= MAX_HUE)
}

fn captures3(re: &Regex, input: &str) -> Option<[u32; 3]> {
    let caps = re.captures(input)?;
    let mut out = [0; 3];
    for (slot, i) in out.iter_mut().zip(1..=3) {
        *slot = integer(caps.get(i)?.as_str())?;
    }
    Some(out)
}

fn parse_hsl(input: &str) -> Option<String> {
    let [h, s, l] = captures3(&HSL_RE, input)?;
    if h > MAX_HUE || s > MAX_PERCENT || l > MAX_PERCENT {
        return None;
    }
    Some(hsl_to_hex(h as f64, s as f64, l as f64))
}

fn parse_oklch(input: &str) -> Option<String> {
    let [l, c, h] = captures3(&OKLCH_RE, input)?;
    if l > MAX_PERCENT || c > MAX_PERCENT || h > MAX_HUE {
        return None;
    }
    Some(oklch_to_hex(l as f64, c as f64, h as f64))
}

/// Normalize a hex, `hsl(...)` or `oklch(...)` string to hex.
///
/// Surrounding whitespace is ignored. Valid hex comes back as written; HSL
/// and OKLCH are converted to lowercase `#rrggbb`. When nothing matches, or a
/// component is out of range, the original input is returned unchanged.
pub fn parse_color_string(input: &str) -> String {
    let trimmed = input.trim();
    if is_valid_hex_color(trimmed) {
        return trimmed.to_string();
    }
    parse_hsl(trimmed)
        .or_else(|| parse_oklch(trimmed))
        .unwrap_or_else(|| input.to_string())
}

/// Structural check for an `hsl(H, S%, L%)` string being typed: the wrapper
/// is present and there are exactly three comma-separated components, each in
/// range.
pub fn is_valid_incomplete_hsl(input: &str) -> bool {
    let Some(inner) = input
        .trim()
        .strip_prefix("hsl(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return false;
    };
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [h, s, l] => hue(h).is_some() && percent(s).is_some() && percent(l).is_some(),
        _ => false,
    }
}

/// Structural check for an `oklch(L% C% H)` string being typed: the wrapper
/// is present and there are exactly three space-separated components, each in
/// range.
pub fn is_valid_incomplete_oklch(input: &str) -> bool {
    let Some(inner) = input
        .trim()
        .strip_prefix("oklch(")
        .and_then(|rest| rest.strip_suffix(')'))
    else {
        return false;
    };
    let parts: Vec<&str> = inner.split_whitespace().collect();
    match parts.as_slice() {
        [l, c, h] => percent(l).is_some() && percent(c).is_some() && hue(h).is_some(),
        _ => false,
    }
}
