/// Compute the CRC32 (IEEE) of a byte slice.
///
/// Uses `crc32fast` which provides hardware-accelerated CRC32 using
/// SIMD/PCLMULQDQ instructions when available, falling back to a fast
/// software implementation otherwise. The result is the standard
/// reflected-polynomial (0xEDB88320) CRC with 0xFFFFFFFF init/final XOR,
/// which is what ZIP local and central headers record.
#[inline]
pub fn crc32(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}
