//! Utility functions for UI components

const FILE_SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a USD amount the way en-US currency formatting does: `$1,200.00`
///
/// Rounds half-up on the shortest decimal form of the amount, so `1.005`
/// becomes `$1.01` even though its binary value sits just below it.
pub fn format_price(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }

    let (dollars, cents) = round_to_cents(amount.abs());
    let sign = if amount < 0.0 && (cents != "00" || dollars != "0") {
        "-"
    } else {
        ""
    };

    format!("{sign}${}.{cents}", group_thousands(&dollars))
}

/// Split a non-negative amount into whole-dollar digits and two cent digits.
fn round_to_cents(amount: f64) -> (String, String) {
    // `Display` for f64 is the shortest round-tripping form, never exponential
    let text = amount.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    let (dollars, cents) = text.split_at(text.len() - 2);
    (dollars.to_string(), cents.to_string())
}

/// Format file size in human-readable form
///
/// Picks the largest of Bytes/KB/MB/GB that keeps the value at or above 1 and
/// shows at most two decimals, dropping trailing zeros (`1536` -> `1.5 KB`).
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut scaled = bytes as f64;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < FILE_SIZE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    let fixed = format!("{scaled:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, FILE_SIZE_UNITS[unit])
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(19.5), "$19.50");
        assert_eq!(format_price(29.99), "$29.99");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(0.5), "$0.50");
    }

    #[test]
    fn test_format_price_rounds_half_cent_up() {
        assert_eq!(format_price(1.005), "$1.01");
        assert_eq!(format_price(1.045), "$1.05");
        assert_eq!(format_price(2.675), "$2.68");
        assert_eq!(format_price(10.235), "$10.24");
        assert_eq!(format_price(1.004), "$1.00");
        assert_eq!(format_price(0.995), "$1.00");
    }

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(1200.0), "$1,200.00");
        assert_eq!(format_price(999.999), "$1,000.00");
        assert_eq!(format_price(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn test_format_price_negative_and_non_finite() {
        assert_eq!(format_price(-5.0), "-$5.00");
        assert_eq!(format_price(-0.001), "$0.00");
        assert_eq!(format_price(f64::NAN), "$0.00");
    }

    #[test]
    fn test_format_file_size_zero() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn test_format_file_size_units() {
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5_242_880), "5 MB");
        assert_eq!(format_file_size(25_165_824), "24 MB");
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
    }

    #[test]
    fn test_format_file_size_caps_at_gb() {
        assert_eq!(format_file_size(2 * 1024 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn test_format_file_size_reconstructs_input() {
        for bytes in [1u64, 1000, 1023, 1025, 123_456, 9_876_543, 3_000_000_000] {
            let formatted = format_file_size(bytes);
            let (number, unit) = formatted.split_once(' ').unwrap();
            let index = FILE_SIZE_UNITS.iter().position(|u| *u == unit).unwrap();
            let scale = 1024f64.powi(index as i32);
            let rebuilt = number.parse::<f64>().unwrap() * scale;
            assert!(
                (rebuilt - bytes as f64).abs() <= 0.005 * scale + 1e-9,
                "{bytes} formatted as {formatted}"
            );
        }
    }
}
