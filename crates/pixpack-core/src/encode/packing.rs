//! MSB-first bit packing shared by the sub-byte encoders.

use crate::buffer::BitDepth;

/// Pack a stream of per-pixel levels into `out`, one group per byte.
///
/// The first level of each group lands in the most-significant bits. Every
/// byte of `out` consumes exactly `depth.pixels_per_byte()` levels; callers
/// guarantee the stream is long enough.
pub(crate) fn pack_levels<I>(levels: I, depth: BitDepth, out: &mut [u8])
where
    I: Iterator<Item = u8>,
{
    let bits = depth.bits();
    debug_assert!(bits < 8, "8-bit output is not packed");

    let per_byte = depth.pixels_per_byte();
    let mut levels = levels;
    for byte in out.iter_mut() {
        *byte = levels
            .by_ref()
            .take(per_byte)
            .fold(0u8, |acc, level| (acc << bits) | level);
    }
}

/// Split one packed byte back into its levels, first pixel first.
pub(crate) fn unpack_byte(byte: u8, depth: BitDepth) -> impl Iterator<Item = u8> {
    let bits = depth.bits();
    let per_byte = depth.pixels_per_byte() as u32;
    let mask = ((1u16 << bits) - 1) as u8;
    (0..per_byte).map(move |i| {
        let shift = bits * (per_byte - 1 - i);
        (byte >> shift) & mask
    })
}
