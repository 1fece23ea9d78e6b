//! `limits.h` / `climits` macro generation.
//!
//! Analyzers seed their preprocessor with the integer limit macros of the
//! target platform so `#if INT_MAX > 32767` style conditionals resolve the
//! way the target's own headers would make them resolve.

use crate::platform::{DefaultSign, Platform};
use crate::ranges::{max_signed, max_unsigned, min_signed};
use crate::standards::Standard;

/// Render the integer limit macros of `platform` as a `;`-joined list of
/// `NAME=VALUE` definitions.
///
/// The `long long` family (`LLONG_MIN`, `LLONG_MAX`, `ULLONG_MAX`) is only
/// emitted when `standard` has `long long`, i.e. C99 / C++11 or later.
/// `CHAR_MIN` and `CHAR_MAX` follow the platform's `default_sign`; an
/// [`Unknown`][DefaultSign::Unknown] sign gets the signed bounds.
pub fn limits_defines(platform: &Platform, standard: Standard) -> String {
    let mut defines: Vec<String> = Vec::with_capacity(18);

    defines.push(format!("CHAR_BIT={}", platform.char_bit));
    defines.push(format!("SCHAR_MIN={}", platform.signed_char_min()));
    defines.push(format!("SCHAR_MAX={}", platform.signed_char_max()));
    defines.push(format!("UCHAR_MAX={}", platform.unsigned_char_max()));

    let (char_min, char_max) = match platform.default_sign {
        DefaultSign::Unsigned => (0, platform.unsigned_char_max()),
        DefaultSign::Signed | DefaultSign::Unknown => {
            (platform.signed_char_min(), platform.signed_char_max())
        }
    };
    defines.push(format!("CHAR_MIN={char_min}"));
    defines.push(format!("CHAR_MAX={char_max}"));

    defines.push(format!("SHRT_MIN={}", min_signed(platform.short_bit)));
    defines.push(format!("SHRT_MAX={}", max_signed(platform.short_bit)));
    defines.push(format!("USHRT_MAX={}", max_unsigned(platform.short_bit)));
    defines.push(format!("INT_MIN={}", min_signed(platform.int_bit)));
    defines.push(format!("INT_MAX={}", max_signed(platform.int_bit)));
    defines.push(format!("UINT_MAX={}", max_unsigned(platform.int_bit)));
    defines.push(format!("LONG_MIN={}", min_signed(platform.long_bit)));
    defines.push(format!("LONG_MAX={}", max_signed(platform.long_bit)));
    defines.push(format!("ULONG_MAX={}", max_unsigned(platform.long_bit)));

    if standard.has_long_long() {
        defines.push(format!("LLONG_MIN={}", min_signed(platform.long_long_bit)));
        defines.push(format!("LLONG_MAX={}", max_signed(platform.long_long_bit)));
        defines.push(format!(
            "ULLONG_MAX={}",
            max_unsigned(platform.long_long_bit)
        ));
    }

    defines.join(";")
}
