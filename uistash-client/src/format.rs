/// Compact counter display for leaderboard stats: 1_200_000 -> "1.2M",
/// 3_000 -> "3K", small numbers verbatim.
pub fn compact_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.0}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_all_magnitudes() {
        assert_eq!(compact_number(0), "0");
        assert_eq!(compact_number(999), "999");
        assert_eq!(compact_number(1_000), "1K");
        assert_eq!(compact_number(2_400), "2K");
        assert_eq!(compact_number(3_600), "4K");
        assert_eq!(compact_number(999_999), "1000K");
        assert_eq!(compact_number(1_000_000), "1.0M");
        assert_eq!(compact_number(1_230_000), "1.2M");
    }
}
