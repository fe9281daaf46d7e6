use fugit::{ExtU32, TimerDurationU32, TimerInstantU32};

/// Lockout window after an accepted press, shared by every button.
///
/// Holds the press instant and the window length; elapsed time is measured
/// with wrapping tick arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debounce<const HZ: u32>(pub Option<(TimerInstantU32<HZ>, TimerDurationU32<HZ>)>);

impl<const HZ: u32> Debounce<HZ> {
    pub const fn new() -> Self {
        Self(None)
    }

    pub fn is_bouncing(&self, now: TimerInstantU32<HZ>) -> bool {
        if let Some((start, delay)) = self.0 {
            return now.ticks().wrapping_sub(start.ticks()) < delay.ticks();
        }

        false
    }

    pub fn update(&mut self, now: TimerInstantU32<HZ>, delay: u32) {
        self.0 = Some((now, delay.millis()));
    }

    pub fn reset(&mut self) {
        self.0 = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Instant = TimerInstantU32<1_000>;

    #[test]
    fn fresh_debounce_lets_presses_through() {
        let debounce = Debounce::<1_000>::new();

        assert!(!debounce.is_bouncing(Instant::from_ticks(0)));
    }

    #[test]
    fn lockout_ends_after_delay() {
        let mut debounce = Debounce::<1_000>::new();

        debounce.update(Instant::from_ticks(50), 200);

        assert!(debounce.is_bouncing(Instant::from_ticks(50)));
        assert!(debounce.is_bouncing(Instant::from_ticks(249)));
        assert!(!debounce.is_bouncing(Instant::from_ticks(250)));

        debounce.update(Instant::from_ticks(250), 200);
        debounce.reset();
        assert!(!debounce.is_bouncing(Instant::from_ticks(251)));
    }

    #[test]
    fn stale_lockout_stays_expired_past_half_range() {
        let mut debounce = Debounce::<8_000_000>::new();

        debounce.update(TimerInstantU32::from_ticks(0), 200);

        assert!(!debounce.is_bouncing(TimerInstantU32::from_ticks(300 * 8_000_000)));
        assert!(!debounce.is_bouncing(TimerInstantU32::from_ticks(u32::MAX)));
    }

    #[test]
    fn lockout_spans_counter_wrap() {
        let mut debounce = Debounce::<8_000_000>::new();
        let start = TimerInstantU32::from_ticks(u32::MAX - 1_000);

        debounce.update(start, 200);

        assert!(debounce.is_bouncing(TimerInstantU32::from_ticks(500)));
        assert!(!debounce.is_bouncing(TimerInstantU32::from_ticks(1_600_000)));
    }
}
