//! SVG Introspection - Dimensions and Serialized Size
//!
//! Dimension lookup order: root `width`/`height`, then root `viewBox`,
//! then `DEFAULT_SVG_DIMENSIONS`. Only the root `<svg` tag is consulted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SvgDimensions {
    pub width: f64,
    pub height: f64,
}

pub const DEFAULT_SVG_DIMENSIONS: SvgDimensions = SvgDimensions {
    width: 800.0,
    height: 600.0,
};

pub fn svg_dimensions(svg: &str) -> SvgDimensions {
    if let Some(dims) = declared_dimensions(svg) {
        return dims;
    }
    if let Some(dims) = root_attribute(svg, "viewBox").and_then(view_box_dimensions) {
        return dims;
    }
    DEFAULT_SVG_DIMENSIONS
}

/// Byte length under UTF-8.
pub fn svg_file_size(svg: &str) -> usize {
    svg.len()
}

/// Size in KiB, one decimal place (e.g. `"2.4"`).
pub fn svg_file_size_kb(svg: &str) -> String {
    format_tenths(svg_file_size(svg) as f64 / 1024.0)
}

/// Fixed one-decimal formatting, ties rounded away from zero.
pub(crate) fn format_tenths(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

fn declared_dimensions(svg: &str) -> Option<SvgDimensions> {
    let width = parse_leading_float(root_attribute(svg, "width")?)?;
    let height = parse_leading_float(root_attribute(svg, "height")?)?;
    if width > 0.0 && height > 0.0 {
        Some(SvgDimensions { width, height })
    } else {
        None
    }
}

fn view_box_dimensions(raw: &str) -> Option<SvgDimensions> {
    let parts = split_view_box(raw);
    if parts.len() != 4 {
        return None;
    }
    let width = view_box_number(parts[2]);
    let height = view_box_number(parts[3]);
    if width > 0.0 && height > 0.0 {
        Some(SvgDimensions { width, height })
    } else {
        None
    }
}

/// Splits on runs of whitespace/commas. A leading or trailing run yields
/// an empty component, so `" 0 0 10 10"` has five parts.
fn split_view_box(raw: &str) -> Vec<&str> {
    let mut parts = Vec::with_capacity(4);
    let mut start = 0;
    let mut in_separator = false;

    for (i, c) in raw.char_indices() {
        let is_separator = c.is_whitespace() || c == ',';
        if is_separator && !in_separator {
            parts.push(&raw[start..i]);
            in_separator = true;
        } else if !is_separator && in_separator {
            start = i;
            in_separator = false;
        }
    }

    if in_separator {
        parts.push("");
    } else {
        parts.push(&raw[start..]);
    }
    parts
}

/// Strict numeric parse; an empty component counts as zero, anything
/// unparseable or non-finite (`inf`, `nan`, `1e999`) as NaN.
fn view_box_number(part: &str) -> f64 {
    if part.is_empty() {
        return 0.0;
    }
    part.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(f64::NAN)
}

/// Parses the longest numeric prefix, so `"400px"` yields 400. Only
/// finite decimal literals are accepted; `"Infinity"` is rejected.
fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut digit_count = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if frac_end > end + 1 {
            digit_count += frac_end - end - 1;
            end = frac_end;
        }
    }
    if digit_count == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Value of `name="..."` (or single-quoted) on the root `<svg` tag. When the
/// attribute name appears more than once the last well-formed one wins.
fn root_attribute<'a>(svg: &'a str, name: &str) -> Option<&'a str> {
    let tag_start = root_tag_start(svg)?;
    let tag_end = svg[tag_start..].find('>').map_or(svg.len(), |i| tag_start + i);
    let tag = &svg[tag_start..tag_end];
    let needle = format!("{name}=");

    tag.rmatch_indices(needle.as_str())
        .map(|(offset, _)| tag_start + offset)
        .filter(|&pos| !is_word_byte(svg.as_bytes()[pos - 1]))
        .find_map(|pos| quoted_value(&svg[pos + needle.len()..]))
}

/// Byte index just past `<svg` for the first real `<svg` element.
fn root_tag_start(svg: &str) -> Option<usize> {
    svg.match_indices("<svg")
        .map(|(i, m)| i + m.len())
        .find(|&end| svg.as_bytes().get(end).map_or(true, |&b| !is_word_byte(b) && b != b'-'))
}

fn quoted_value(rest: &str) -> Option<&str> {
    let body = rest.strip_prefix(['"', '\''])?;
    let close = body.find(['"', '\''])?;
    if close == 0 {
        return None;
    }
    Some(&body[..close])
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: f64, height: f64) -> SvgDimensions {
        SvgDimensions { width, height }
    }

    #[test]
    fn test_width_height_attributes() {
        let svg = r#"<svg width="400" height="300" xmlns="http://www.w3.org/2000/svg"></svg>"#;
        assert_eq!(svg_dimensions(svg), dims(400.0, 300.0));
    }

    #[test]
    fn test_single_quotes_and_fractions() {
        assert_eq!(svg_dimensions("<svg width='12.5' height='7.25'/>"), dims(12.5, 7.25));
    }

    #[test]
    fn test_unit_suffix_is_lenient() {
        assert_eq!(svg_dimensions(r#"<svg width="400px" height="2e2pt">"#), dims(400.0, 200.0));
    }

    #[test]
    fn test_view_box_fallback() {
        assert_eq!(svg_dimensions(r#"<svg viewBox="0 0 800 600">"#), dims(800.0, 600.0));
        assert_eq!(svg_dimensions(r#"<svg viewBox="0,0,200,150">"#), dims(200.0, 150.0));
        assert_eq!(svg_dimensions(r#"<svg viewBox="10, 10  64 32">"#), dims(64.0, 32.0));
    }

    #[test]
    fn test_declared_size_beats_view_box() {
        let svg = r#"<svg width="100" height="50" viewBox="0 0 800 600"></svg>"#;
        assert_eq!(svg_dimensions(svg), dims(100.0, 50.0));
    }

    #[test]
    fn test_non_positive_size_falls_through() {
        assert_eq!(svg_dimensions(r#"<svg width="0" height="0">"#), DEFAULT_SVG_DIMENSIONS);
        assert_eq!(
            svg_dimensions(r#"<svg width="-5" height="10" viewBox="0 0 30 40">"#),
            dims(30.0, 40.0)
        );
        assert_eq!(svg_dimensions(r#"<svg width="auto" height="10">"#), DEFAULT_SVG_DIMENSIONS);
    }

    #[test]
    fn test_malformed_view_box_uses_default() {
        assert_eq!(svg_dimensions(r#"<svg viewBox="0 0 800">"#), DEFAULT_SVG_DIMENSIONS);
        assert_eq!(svg_dimensions(r#"<svg viewBox=" 0 0 800 600">"#), DEFAULT_SVG_DIMENSIONS);
        assert_eq!(svg_dimensions(r#"<svg viewBox="0 0 0 600">"#), DEFAULT_SVG_DIMENSIONS);
        assert_eq!(svg_dimensions(r#"<svg viewBox="0 0 a 600">"#), DEFAULT_SVG_DIMENSIONS);
    }

    #[test]
    fn test_non_finite_view_box_uses_default() {
        for vb in ["0 0 inf 10", "0 0 10 Infinity", "0 0 NaN 10", "0 0 1e999 10"] {
            let svg = format!(r#"<svg viewBox="{vb}">"#);
            assert_eq!(svg_dimensions(&svg), DEFAULT_SVG_DIMENSIONS, "{vb}");
        }
    }

    #[test]
    fn test_non_finite_declared_size_falls_through() {
        let svg = r#"<svg width="Infinity" height="10" viewBox="0 0 30 40">"#;
        assert_eq!(svg_dimensions(svg), dims(30.0, 40.0));
        assert_eq!(svg_dimensions(r#"<svg width="1e999" height="10">"#), DEFAULT_SVG_DIMENSIONS);
    }

    #[test]
    fn test_no_attributes() {
        assert_eq!(svg_dimensions("<svg>"), DEFAULT_SVG_DIMENSIONS);
        assert_eq!(svg_dimensions(""), DEFAULT_SVG_DIMENSIONS);
    }

    #[test]
    fn test_nested_elements_ignored() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="10" height="20"/></svg>"#;
        assert_eq!(svg_dimensions(svg), DEFAULT_SVG_DIMENSIONS);

        let nested = r#"<svg viewBox="0 0 50 60"><svg width="10" height="20"></svg></svg>"#;
        assert_eq!(svg_dimensions(nested), dims(50.0, 60.0));
    }

    #[test]
    fn test_prefixed_attribute_names_not_confused() {
        // `linewidth=` has no word boundary before `width`
        let svg = r#"<svg linewidth="3" width="40" height="30">"#;
        assert_eq!(svg_dimensions(svg), dims(40.0, 30.0));
    }

    #[test]
    fn test_file_size_counts_utf8_bytes() {
        assert_eq!(svg_file_size("<svg/>"), 6);
        assert_eq!(svg_file_size("<text>日本</text>"), 13 + 6);
    }

    #[test]
    fn test_file_size_kb_format() {
        assert_eq!(svg_file_size_kb(""), "0.0");
        assert_eq!(svg_file_size_kb(&"a".repeat(1024)), "1.0");
        // 256 bytes is exactly 0.25 KiB
        assert_eq!(svg_file_size_kb(&"a".repeat(256)), "0.3");
        assert_eq!(svg_file_size_kb(&"a".repeat(2458)), "2.4");
    }

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float(" 42abc"), Some(42.0));
        assert_eq!(parse_leading_float(".5em"), Some(0.5));
        assert_eq!(parse_leading_float("7.px"), Some(7.0));
        assert_eq!(parse_leading_float("1e"), Some(1.0));
        assert_eq!(parse_leading_float("-"), None);
        assert_eq!(parse_leading_float("px"), None);
        assert_eq!(parse_leading_float("inf"), None);
        assert_eq!(parse_leading_float("1e400"), None);
    }
}
