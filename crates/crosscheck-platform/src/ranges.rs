//! Two's-complement range arithmetic.
//!
//! Every range computed anywhere in this crate goes through these three
//! functions; nothing else re-derives representable-value bounds. Widths of
//! 64 bits and above saturate to the 64-bit limits instead of shifting by the
//! full word size, which is undefined.

/// Smallest value representable by a signed integer of width `bits`.
pub fn min_signed(bits: u32) -> i64 {
    debug_assert!(bits > 0);
    if bits >= 64 {
        return i64::MIN;
    }
    -(1i64 << (bits - 1))
}

/// Largest value representable by a signed integer of width `bits`.
pub fn max_signed(bits: u32) -> i64 {
    debug_assert!(bits > 0);
    if bits >= 64 {
        return i64::MAX;
    }
    (1i64 << (bits - 1)) - 1
}

/// Largest value representable by an unsigned integer of width `bits`.
pub fn max_unsigned(bits: u32) -> u64 {
    debug_assert!(bits > 0);
    if bits >= 64 {
        return u64::MAX;
    }
    (1u64 << bits) - 1
}
