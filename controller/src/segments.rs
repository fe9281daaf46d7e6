use core::convert::Infallible;
use embedded_hal::digital::v2::OutputPin;

pub const SEGMENT_COUNT: usize = 7;

/// segment patterns for the digits 0-9, bit 0 is segment A and bit 6 is segment G
///
/// ```text
///    AAAAA
///   F     B
///   F     B
///    GGGGG
///   E     C
///   E     C
///    DDDDD
/// ```
pub const PATTERNS: [u8; 10] = [
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern(u8);

impl Pattern {
    /// Looks up the pattern for a digit, `None` outside 0-9.
    pub fn from_digit(digit: i32) -> Option<Self> {
        usize::try_from(digit)
            .ok()
            .and_then(|index| PATTERNS.get(index))
            .map(|bits| Pattern(*bits))
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn is_lit(self, segment: usize) -> bool {
        segment < SEGMENT_COUNT && self.0 & (1 << segment) != 0
    }
}

/// Anything that can show a segment pattern.
pub trait SegmentOutput {
    fn write(&mut self, pattern: Pattern);
}

/// The seven segment lines, in order A to G.
pub struct Segments<A, B, C, D, E, F, G>(
    pub A,
    pub B,
    pub C,
    pub D,
    pub E,
    pub F,
    pub G,
)
where
    A: OutputPin<Error = Infallible>,
    B: OutputPin<Error = Infallible>,
    C: OutputPin<Error = Infallible>,
    D: OutputPin<Error = Infallible>,
    E: OutputPin<Error = Infallible>,
    F: OutputPin<Error = Infallible>,
    G: OutputPin<Error = Infallible>;

impl<A, B, C, D, E, F, G> Segments<A, B, C, D, E, F, G>
where
    A: OutputPin<Error = Infallible>,
    B: OutputPin<Error = Infallible>,
    C: OutputPin<Error = Infallible>,
    D: OutputPin<Error = Infallible>,
    E: OutputPin<Error = Infallible>,
    F: OutputPin<Error = Infallible>,
    G: OutputPin<Error = Infallible>,
{
    pub fn get_segment(&mut self, index: usize) -> Option<&mut dyn OutputPin<Error = Infallible>> {
        match index {
            0 => Some(&mut self.0),
            1 => Some(&mut self.1),
            2 => Some(&mut self.2),
            3 => Some(&mut self.3),
            4 => Some(&mut self.4),
            5 => Some(&mut self.5),
            6 => Some(&mut self.6),
            _ => None,
        }
    }
}

impl<A, B, C, D, E, F, G> SegmentOutput for Segments<A, B, C, D, E, F, G>
where
    A: OutputPin<Error = Infallible>,
    B: OutputPin<Error = Infallible>,
    C: OutputPin<Error = Infallible>,
    D: OutputPin<Error = Infallible>,
    E: OutputPin<Error = Infallible>,
    F: OutputPin<Error = Infallible>,
    G: OutputPin<Error = Infallible>,
{
    fn write(&mut self, pattern: Pattern) {
        for index in 0..SEGMENT_COUNT {
            if let Some(segment) = self.get_segment(index) {
                if pattern.is_lit(index) {
                    segment.set_high().ok();
                } else {
                    segment.set_low().ok();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Bench;

    #[test]
    fn every_digit_has_a_pattern() {
        for (digit, bits) in PATTERNS.iter().enumerate() {
            assert_eq!(Pattern::from_digit(digit as i32).map(Pattern::bits), Some(*bits));
        }
    }

    #[test]
    fn out_of_range_digits_have_no_pattern() {
        assert_eq!(Pattern::from_digit(-1), None);
        assert_eq!(Pattern::from_digit(10), None);
        assert_eq!(Pattern::from_digit(i32::MIN), None);
        assert_eq!(Pattern::from_digit(i32::MAX), None);
    }

    #[test]
    fn one_lights_b_and_c() {
        let one = Pattern::from_digit(1).unwrap();

        assert!(!one.is_lit(0));
        assert!(one.is_lit(1));
        assert!(one.is_lit(2));
        assert!((3..SEGMENT_COUNT).all(|segment| !one.is_lit(segment)));
        assert!(!one.is_lit(SEGMENT_COUNT));
    }

    #[test]
    fn write_drives_one_line_per_bit() {
        let bench = Bench::new();
        let mut segments = bench.segments();

        segments.write(Pattern::from_digit(8).unwrap());
        assert_eq!(bench.lit(), 0b0111_1111);

        segments.write(Pattern::from_digit(7).unwrap());
        assert_eq!(bench.lit(), 0b0000_0111);
        assert!(bench.probes[0].is_high());
        assert!(!bench.probes[6].is_high());
    }
}
