const MEBIBYTE: f64 = 1_024_f64 * 1_024_f64;

pub fn mebibytes(bytes: u64) -> f64 {
    bytes as f64 / MEBIBYTE
}

/// Two-decimal mebibyte figure used in the summary line.
pub fn format_mebibytes(bytes: u64) -> String {
    format!("{:.2}", mebibytes(bytes))
}
