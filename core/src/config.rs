use crate::error::SearchError;

/// Parses a size-ceiling spec of the form `<number><unit>`, where the unit
/// is one of `B`, `K`, `M`, `G` (multipliers 1, 2^10, 2^20, 2^30).
/// `"10K"` parses to 10240 bytes. Anything malformed is a fatal
/// configuration error; no indexing may start with a bad ceiling.
pub fn parse_size_spec(spec: &str) -> Result<u64, SearchError> {
    let invalid = || SearchError::InvalidSizeSpec {
        spec: spec.to_string(),
    };
    let (unit_at, unit) = spec.char_indices().last().ok_or_else(invalid)?;
    let multiplier: u64 = match unit {
        'B' => 1,
        'K' => 1 << 10,
        'M' => 1 << 20,
        'G' => 1 << 30,
        _ => return Err(invalid()),
    };
    let digits = &spec[..unit_at];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let count: u64 = digits.parse().map_err(|_| invalid())?;
    count.checked_mul(multiplier).ok_or_else(invalid)
}
