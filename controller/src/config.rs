/// lockout after an accepted button press (in milliseconds)
pub const DEBOUNCE_MS: u32 = 200;

/// how long each digit is shown while cycling (in milliseconds)
pub const CYCLE_MS: u32 = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub debounce_ms: u32,
    pub cycle_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            cycle_ms: CYCLE_MS,
        }
    }
}

impl Timing {
    /// Delay between a cycle button press and the first automatic step.
    pub fn first_step_ms(&self) -> u32 {
        self.debounce_ms.saturating_add(self.cycle_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_covers_debounce_and_cycle() {
        assert_eq!(Timing::default().first_step_ms(), 1_200);
    }

    #[test]
    fn first_step_saturates() {
        let timing = Timing {
            debounce_ms: u32::MAX,
            cycle_ms: CYCLE_MS,
        };

        assert_eq!(timing.first_step_ms(), u32::MAX);
    }
}
