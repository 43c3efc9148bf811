use std::cmp::Ordering;

/// One numeric segment of a version string.
///
/// Stored as its decimal digits without leading zeros so segments of any
/// width compare correctly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment(String);

impl Segment {
    pub fn zero() -> Self {
        Segment("0".to_string())
    }

    /// Parse a plain decimal segment. Anything else counts as zero.
    pub fn parse(segment: &str) -> Self {
        if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
            return Self::zero();
        }
        match segment.trim_start_matches('0') {
            "" => Self::zero(),
            digits => Segment(digits.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u64> for Segment {
    fn from(value: u64) -> Self {
        Segment(value.to_string())
    }
}

impl Ord for Segment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Split a dot-separated version string into segments.
///
/// Examples:
/// - "0.2" -> [0, 2]
/// - "1.0.0.0" -> [1, 0, 0, 0]
/// - "1.0-beta" -> [1, 0] ("0-beta" is not numeric)
/// - "next" -> [0]
pub fn parse_segments(version: &str) -> Vec<Segment> {
    version.split('.').map(Segment::parse).collect()
}

/// Compare two segment sequences left to right.
///
/// The shorter sequence is padded with zeros, so `[1]`, `[1, 0]` and
/// `[1, 0, 0]` are all equal.
pub fn compare_segments(a: &[Segment], b: &[Segment]) -> Ordering {
    let zero = Segment::zero();
    let len = a.len().max(b.len());
    for i in 0..len {
        let a_part = a.get(i).unwrap_or(&zero);
        let b_part = b.get(i).unwrap_or(&zero);
        match a_part.cmp(b_part) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn segments(values: &[u64]) -> Vec<Segment> {
        values.iter().copied().map(Segment::from).collect()
    }

    #[rstest]
    #[case("0.1", &[0, 1])]
    #[case("0.10", &[0, 10])]
    #[case("1.0.0.0", &[1, 0, 0, 0])]
    #[case("7", &[7])]
    #[case("01.2", &[1, 2])]
    #[case("1.x", &[1, 0])]
    #[case("1.0-beta", &[1, 0])]
    #[case("next", &[0])]
    #[case("1..2", &[1, 0, 2])]
    #[case("", &[0])]
    #[case("-1.0", &[0, 0])]
    fn parse_segments_returns_expected(#[case] version: &str, #[case] expected: &[u64]) {
        assert_eq!(parse_segments(version), segments(expected));
    }

    #[test]
    fn parse_segments_keeps_segments_wider_than_u64() {
        let parsed = parse_segments("99999999999999999999.0");

        assert_eq!(parsed[0].as_str(), "99999999999999999999");
        assert_eq!(
            compare_segments(&parsed, &segments(&[u64::MAX])),
            Ordering::Greater
        );
    }

    #[rstest]
    #[case(&[0, 10], &[0, 9], Ordering::Greater)] // numeric, not lexicographic
    #[case(&[1, 1], &[1, 0], Ordering::Greater)]
    #[case(&[0, 2, 1], &[0, 2, 0], Ordering::Greater)]
    #[case(&[1, 0, 0, 0], &[0, 2, 1], Ordering::Greater)]
    #[case(&[0, 2], &[0, 2, 1], Ordering::Less)]
    #[case(&[1], &[1, 0, 0], Ordering::Equal)] // missing segments count as zero
    #[case(&[0, 3], &[0, 3], Ordering::Equal)]
    #[case(&[], &[0], Ordering::Equal)]
    fn compare_segments_returns_expected(
        #[case] a: &[u64],
        #[case] b: &[u64],
        #[case] expected: Ordering,
    ) {
        let (a, b) = (segments(a), segments(b));
        assert_eq!(compare_segments(&a, &b), expected);
        assert_eq!(compare_segments(&b, &a), expected.reverse());
    }

    #[rstest]
    #[case("99999999999999999999.0", "0.1", Ordering::Greater)]
    #[case("18446744073709551616", "18446744073709551615", Ordering::Greater)] // u64::MAX + 1
    #[case("0010", "9", Ordering::Greater)]
    #[case("1.0-beta", "0.9", Ordering::Greater)]
    #[case("next", "0", Ordering::Equal)]
    fn compare_parsed_versions(#[case] a: &str, #[case] b: &str, #[case] expected: Ordering) {
        assert_eq!(
            compare_segments(&parse_segments(a), &parse_segments(b)),
            expected
        );
    }
}
