//! The platform descriptor and its built-in configurations.
//!
//! A [`Platform`] describes the numeric type system of the architecture a
//! translation unit targets: how wide each integer type is, how large each
//! standard type is, and whether plain `char` is signed. Built-in
//! configurations cover the common 32/64-bit Windows and Unix ABIs; anything
//! else is supplied by a description file (see [`crate::loader`]).

use std::ffi::{c_char, c_double, c_float, c_int, c_long, c_longlong, c_short};
use std::fmt;
use std::mem::size_of;

use serde::{Deserialize, Serialize};

use crate::error::{PlatformError, Result};
use crate::ranges::{max_signed, min_signed};

/// How a platform descriptor was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformType {
    /// No platform specified; sizes are set but not meaningful.
    Unspecified,
    /// Whatever system the analyzer itself was compiled on.
    Native,
    /// 32-bit Windows, ANSI character encoding.
    Win32A,
    /// 32-bit Windows, UNICODE character encoding.
    Win32W,
    /// 64-bit Windows (LLP64: `long` stays 4 bytes).
    Win64,
    /// 32-bit Unix (ILP32).
    Unix32,
    /// 64-bit Unix (LP64).
    Unix64,
    /// Loaded from a description file.
    File,
}

impl PlatformType {
    /// The fixed label for this platform type.
    pub fn as_str(self) -> &'static str {
        match self {
            PlatformType::Unspecified => "unspecified",
            PlatformType::Native => "native",
            PlatformType::Win32A => "win32A",
            PlatformType::Win32W => "win32W",
            PlatformType::Win64 => "win64",
            PlatformType::Unix32 => "unix32",
            PlatformType::Unix64 => "unix64",
            PlatformType::File => "platformFile",
        }
    }

    /// Inverse of [`as_str`][Self::as_str].
    pub fn from_name(name: &str) -> Option<PlatformType> {
        match name {
            "unspecified" => Some(PlatformType::Unspecified),
            "native" => Some(PlatformType::Native),
            "win32A" => Some(PlatformType::Win32A),
            "win32W" => Some(PlatformType::Win32W),
            "win64" => Some(PlatformType::Win64),
            "unix32" => Some(PlatformType::Unix32),
            "unix64" => Some(PlatformType::Unix64),
            "platformFile" => Some(PlatformType::File),
            _ => None,
        }
    }

    /// Whether this is one of the Windows platform types.
    pub fn is_windows(self) -> bool {
        matches!(
            self,
            PlatformType::Win32A | PlatformType::Win32W | PlatformType::Win64
        )
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signedness of plain `char` on the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultSign {
    Signed,
    Unsigned,
    /// The target ABI does not pin it down, or the platform is unspecified.
    #[default]
    Unknown,
}

impl DefaultSign {
    /// The label used in description files.
    pub fn as_str(self) -> &'static str {
        match self {
            DefaultSign::Signed => "signed",
            DefaultSign::Unsigned => "unsigned",
            DefaultSign::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DefaultSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Host sizes without a `std::ffi` alias.
#[cfg(windows)]
const NATIVE_SIZEOF_WCHAR_T: usize = 2;
#[cfg(not(windows))]
const NATIVE_SIZEOF_WCHAR_T: usize = 4;
#[cfg(windows)]
const NATIVE_SIZEOF_LONG_DOUBLE: usize = 8;
#[cfg(not(windows))]
const NATIVE_SIZEOF_LONG_DOUBLE: usize = 16;

/// Numeric type system of a target architecture.
///
/// Widths are in bits, `sizeof_*` fields in bytes; every field is strictly
/// positive in a populated descriptor. The type deliberately does not enforce
/// the C ordering guarantees between widths (`char ≤ short ≤ int ≤ …`), so
/// unusual or testing-only configurations can be described; callers that rely
/// on monotonicity must check it themselves.
///
/// Populate a descriptor exactly once — [`set_type`][Self::set_type],
/// [`set`][Self::set], or [`load_from_file`][Self::load_from_file] — before
/// sharing it; population fully overwrites the value and a failed load leaves
/// it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    /// How this descriptor was produced.
    pub ty: PlatformType,

    /// Bits in `char`.
    pub char_bit: u32,
    /// Bits in `short`.
    pub short_bit: u32,
    /// Bits in `int`.
    pub int_bit: u32,
    /// Bits in `long`.
    pub long_bit: u32,
    /// Bits in `long long`.
    pub long_long_bit: u32,

    /// Byte size of `bool`.
    pub sizeof_bool: usize,
    /// Byte size of `short`.
    pub sizeof_short: usize,
    /// Byte size of `int`.
    pub sizeof_int: usize,
    /// Byte size of `long`.
    pub sizeof_long: usize,
    /// Byte size of `long long`.
    pub sizeof_long_long: usize,
    /// Byte size of `float`.
    pub sizeof_float: usize,
    /// Byte size of `double`.
    pub sizeof_double: usize,
    /// Byte size of `long double`.
    pub sizeof_long_double: usize,
    /// Byte size of `wchar_t`.
    pub sizeof_wchar_t: usize,
    /// Byte size of `size_t`.
    pub sizeof_size_t: usize,
    /// Byte size of a data pointer.
    pub sizeof_pointer: usize,

    /// Signedness of plain `char`.
    pub default_sign: DefaultSign,
}

impl Default for Platform {
    fn default() -> Self {
        Self::native()
    }
}

impl Platform {
    /// The host configuration: every size taken from the C ABI this crate was
    /// compiled against.
    pub fn native() -> Self {
        let char_bit = 8u32;
        let sizeof_short = size_of::<c_short>();
        let sizeof_int = size_of::<c_int>();
        let sizeof_long = size_of::<c_long>();
        let sizeof_long_long = size_of::<c_longlong>();
        Platform {
            ty: PlatformType::Native,
            char_bit,
            short_bit: char_bit * sizeof_short as u32,
            int_bit: char_bit * sizeof_int as u32,
            long_bit: char_bit * sizeof_long as u32,
            long_long_bit: char_bit * sizeof_long_long as u32,
            sizeof_bool: size_of::<bool>(),
            sizeof_short,
            sizeof_int,
            sizeof_long,
            sizeof_long_long,
            sizeof_float: size_of::<c_float>(),
            sizeof_double: size_of::<c_double>(),
            sizeof_long_double: NATIVE_SIZEOF_LONG_DOUBLE,
            sizeof_wchar_t: NATIVE_SIZEOF_WCHAR_T,
            sizeof_size_t: size_of::<usize>(),
            sizeof_pointer: size_of::<*const ()>(),
            default_sign: if c_char::MIN == 0 {
                DefaultSign::Unsigned
            } else {
                DefaultSign::Signed
            },
        }
    }

    /// Native sizes with the signedness erased; the values are set but carry
    /// no meaning for analyses.
    pub fn unspecified() -> Self {
        Platform {
            ty: PlatformType::Unspecified,
            default_sign: DefaultSign::Unknown,
            ..Self::native()
        }
    }

    /// 32-bit Windows (ANSI).
    pub fn win32a() -> Self {
        Platform {
            ty: PlatformType::Win32A,
            char_bit: 8,
            short_bit: 16,
            int_bit: 32,
            long_bit: 32,
            long_long_bit: 64,
            sizeof_bool: 1,
            sizeof_short: 2,
            sizeof_int: 4,
            sizeof_long: 4,
            sizeof_long_long: 8,
            sizeof_float: 4,
            sizeof_double: 8,
            sizeof_long_double: 8,
            sizeof_wchar_t: 2,
            sizeof_size_t: 4,
            sizeof_pointer: 4,
            default_sign: DefaultSign::Unknown,
        }
    }

    /// 32-bit Windows (UNICODE). Identical to [`win32a`][Self::win32a] apart
    /// from the type tag.
    pub fn win32w() -> Self {
        Platform {
            ty: PlatformType::Win32W,
            ..Self::win32a()
        }
    }

    /// 64-bit Windows. LLP64: `long` remains 4 bytes, only pointers and
    /// `size_t` widen.
    pub fn win64() -> Self {
        Platform {
            ty: PlatformType::Win64,
            char_bit: 8,
            short_bit: 16,
            int_bit: 32,
            long_bit: 32,
            long_long_bit: 64,
            sizeof_bool: 1,
            sizeof_short: 2,
            sizeof_int: 4,
            sizeof_long: 4,
            sizeof_long_long: 8,
            sizeof_float: 4,
            sizeof_double: 8,
            sizeof_long_double: 8,
            sizeof_wchar_t: 2,
            sizeof_size_t: 8,
            sizeof_pointer: 8,
            default_sign: DefaultSign::Unknown,
        }
    }

    /// 32-bit Unix (ILP32).
    pub fn unix32() -> Self {
        Platform {
            ty: PlatformType::Unix32,
            char_bit: 8,
            short_bit: 16,
            int_bit: 32,
            long_bit: 32,
            long_long_bit: 64,
            sizeof_bool: 1,
            sizeof_short: 2,
            sizeof_int: 4,
            sizeof_long: 4,
            sizeof_long_long: 8,
            sizeof_float: 4,
            sizeof_double: 8,
            sizeof_long_double: 12,
            sizeof_wchar_t: 4,
            sizeof_size_t: 4,
            sizeof_pointer: 4,
            default_sign: DefaultSign::Unknown,
        }
    }

    /// 64-bit Unix (LP64: `long` is 8 bytes).
    pub fn unix64() -> Self {
        Platform {
            ty: PlatformType::Unix64,
            char_bit: 8,
            short_bit: 16,
            int_bit: 32,
            long_bit: 64,
            long_long_bit: 64,
            sizeof_bool: 1,
            sizeof_short: 2,
            sizeof_int: 4,
            sizeof_long: 8,
            sizeof_long_long: 8,
            sizeof_float: 4,
            sizeof_double: 8,
            sizeof_long_double: 16,
            sizeof_wchar_t: 4,
            sizeof_size_t: 8,
            sizeof_pointer: 8,
            default_sign: DefaultSign::Unknown,
        }
    }

    /// Apply a built-in configuration in place.
    ///
    /// Always succeeds for the named presets; [`PlatformType::File`] has no
    /// built-in configuration and fails without modifying the descriptor.
    pub fn set_type(&mut self, ty: PlatformType) -> Result<()> {
        match ty {
            PlatformType::Unspecified => *self = Self::unspecified(),
            PlatformType::Native => *self = Self::native(),
            PlatformType::Win32A => *self = Self::win32a(),
            PlatformType::Win32W => *self = Self::win32w(),
            PlatformType::Win64 => *self = Self::win64(),
            PlatformType::Unix32 => *self = Self::unix32(),
            PlatformType::Unix64 => *self = Self::unix64(),
            PlatformType::File => return Err(PlatformError::NotAPreset(ty)),
        }
        Ok(())
    }

    /// Whether `value` fits the target's `int`.
    pub fn is_int_value(&self, value: i64) -> bool {
        value >= min_signed(self.int_bit) && value <= max_signed(self.int_bit)
    }

    /// Whether the unsigned `value` fits the target's `int`.
    ///
    /// An unsigned value is only compared against the signed maximum; it can
    /// never lie below the signed minimum.
    pub fn is_int_value_unsigned(&self, value: u64) -> bool {
        value <= max_signed(self.int_bit) as u64
    }

    /// Whether `value` fits the target's `long`.
    pub fn is_long_value(&self, value: i64) -> bool {
        value >= min_signed(self.long_bit) && value <= max_signed(self.long_bit)
    }

    /// Whether the unsigned `value` fits the target's `long`.
    pub fn is_long_value_unsigned(&self, value: u64) -> bool {
        value <= max_signed(self.long_bit) as u64
    }

    /// Whether `value` fits the target's `long long`.
    pub fn is_long_long_value(&self, value: i64) -> bool {
        value >= min_signed(self.long_long_bit) && value <= max_signed(self.long_long_bit)
    }

    /// Whether the unsigned `value` fits the target's `long long`.
    pub fn is_long_long_value_unsigned(&self, value: u64) -> bool {
        value <= max_signed(self.long_long_bit) as u64
    }

    /// Smallest `signed char` value.
    pub fn signed_char_min(&self) -> i64 {
        min_signed(self.char_bit)
    }

    /// Largest `signed char` value.
    pub fn signed_char_max(&self) -> i64 {
        max_signed(self.char_bit)
    }

    /// Largest `unsigned char` value.
    ///
    /// Computed as the signed maximum one bit wider than `char_bit`, which
    /// equals `2^char_bit − 1`.
    pub fn unsigned_char_max(&self) -> i64 {
        max_signed(self.char_bit + 1)
    }

    /// Whether the descriptor names a Windows target.
    pub fn is_windows(&self) -> bool {
        self.ty.is_windows()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ty, f)
    }
}
