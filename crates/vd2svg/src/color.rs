// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{Color, Opacity};

/// Splits an Android color literal into an SVG color and an opacity.
///
/// - `#AARRGGBB` becomes `#RRGGBB` with an `AA / 255` opacity.
/// - `#RRGGBB` is kept as is, with a full opacity.
/// - `#ARGB` becomes `#RRGGBB` with an `A / 15` opacity.
/// - `#RGB` becomes `#RRGGBB` with a full opacity.
/// - Anything else, like `@color/accent` or `?attr/colorPrimary`,
///   is kept as a reference with a full opacity.
///
/// Returns `None` for an empty string, meaning that the attribute must be omitted.
pub fn normalize(text: &str) -> Option<(Color, Opacity)> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let hex = match text.strip_prefix('#') {
        Some(hex) => hex,
        None => return Some((Color::Reference(text.to_string()), Opacity::ONE)),
    };

    let parsed = if hex.is_ascii() {
        match hex.len() {
            8 => parse_hex(&hex[2..]).zip(parse_byte(&hex[0..2])),
            6 => parse_hex(hex).map(|c| (c, 255)),
            4 => parse_short_hex(&hex[1..]).zip(parse_nibble(&hex[0..1])),
            3 => parse_short_hex(hex).map(|c| (c, 255)),
            _ => None,
        }
    } else {
        None
    };

    match parsed {
        Some((color, alpha)) => Some((color, Opacity::new_clamped(alpha as f32 / 255.0))),
        None => {
            log::warn!("'{}' is not a valid color. Written as is.", text);
            Some((Color::Reference(text.to_string()), Opacity::ONE))
        }
    }
}

// Validated, but written back unchanged.
fn parse_hex(text: &str) -> Option<Color> {
    if text.bytes().all(|c| c.is_ascii_hexdigit()) {
        Some(Color::Hex(format!("#{}", text)))
    } else {
        None
    }
}

fn parse_short_hex(text: &str) -> Option<Color> {
    Some(Color::new_rgb(
        parse_nibble(&text[0..1])?,
        parse_nibble(&text[1..2])?,
        parse_nibble(&text[2..3])?,
    ))
}

fn parse_byte(text: &str) -> Option<u8> {
    if !text.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    u8::from_str_radix(text, 16).ok()
}

// `F` is expanded into `FF`.
fn parse_nibble(text: &str) -> Option<u8> {
    parse_byte(text).map(|n| n * 17)
}
