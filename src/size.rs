//! Config files write the rotation threshold as "2M" or "512K" but the sink
//! compares raw byte counts. These two functions bridge that gap.

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;

/// Parses `"2M"`, `"512KB"`, `"1.5G"` or a bare byte count.
#[must_use]
pub fn parse_size(s: &str) -> Option<u64> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = strip_unit(&s, "GB", 'G') {
        (n, GIB)
    } else if let Some(n) = strip_unit(&s, "MB", 'M') {
        (n, MIB)
    } else if let Some(n) = strip_unit(&s, "KB", 'K') {
        (n, KIB)
    } else {
        (s.strip_suffix('B').unwrap_or(&s), 1.0)
    };

    let n = num_str.trim().parse::<f64>().ok()?;
    if !n.is_finite() || n < 0.0 {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bytes = (n * multiplier) as u64;
    Some(bytes)
}

fn strip_unit<'a>(s: &'a str, long: &str, short: char) -> Option<&'a str> {
    s.strip_suffix(long).or_else(|| s.strip_suffix(short))
}

/// Raw byte counts are unreadable in status output.
#[must_use]
pub fn format_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let bytes_f = bytes as f64;

    if bytes_f >= GIB {
        format!("{:.2} GB", bytes_f / GIB)
    } else if bytes_f >= MIB {
        format!("{:.2} MB", bytes_f / MIB)
    } else if bytes_f >= KIB {
        format!("{:.2} KB", bytes_f / KIB)
    } else {
        format!("{bytes} B")
    }
}
