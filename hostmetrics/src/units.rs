//! Unit conversion for raw OS byte counts
//!
//! The API reports memory and network volumes in MiB-based "MB" and disk in
//! GiB-based "GB". Both divisors are powers of two, so the conversions are
//! exact for whole multiples.

/// Bytes per MB (1024²)
pub const BYTES_PER_MB: f64 = 1_048_576.0;

/// Bytes per GB (1024³)
pub const BYTES_PER_GB: f64 = 1_073_741_824.0;

/// Convert a byte count to MB
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Convert a byte count to GB
pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

/// Percentage of `part` in `whole`, or `None` when `whole` is zero
pub fn percent_of(part: u64, whole: u64) -> Option<f64> {
    if whole == 0 {
        None
    } else {
        Some(part as f64 / whole as f64 * 100.0)
    }
}
