use crate::buttons::Button;
use crate::config::Timing;
use crate::debounce::Debounce;
use crate::segments::{Pattern, SegmentOutput};
use crate::state::{DisplayState, Mode};
use derivative::Derivative;
use fugit::{ExtU32, TimerInstantU32};

pub use Cause::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cause {
    Pressed(Button),
    Advanced,
}

/// One transition applied to the display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Update {
    pub cause: Cause,
    pub value: u8,
    pub mode: Mode,
}

/// Owns the display state and the segment lines, and drives both from periodic ticks.
///
/// Every tick samples the buttons once. An accepted press is dispatched
/// immediately and locks out further presses for the debounce delay. While
/// a cycling mode is active the next digit is shown once its deadline has
/// passed; the first deadline after a press also covers the debounce delay.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct DigitDisplayController<O, const HZ: u32> {
    #[derivative(Debug = "ignore")]
    output: O,
    state: DisplayState,
    timing: Timing,
    debounce: Debounce<HZ>,
    next_step: Option<TimerInstantU32<HZ>>,
}

impl<O, const HZ: u32> DigitDisplayController<O, HZ>
where
    O: SegmentOutput,
{
    pub fn new(output: O, timing: Timing) -> Self {
        Self {
            output,
            state: DisplayState::default(),
            timing,
            debounce: Debounce::new(),
            next_step: None,
        }
    }

    /// Shows the initial digit.
    pub fn start(&mut self) {
        self.render_digit(i32::from(self.state.value()));
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn next_step(&self) -> Option<TimerInstantU32<HZ>> {
        self.next_step
    }

    /// Writes the pattern for `digit`, leaving the display alone outside 0-9.
    pub fn render_digit(&mut self, digit: i32) {
        if let Some(pattern) = Pattern::from_digit(digit) {
            self.output.write(pattern);
        }
    }

    pub fn increment(&mut self) -> u8 {
        let value = self.state.increment();

        self.next_step = None;
        self.render_digit(i32::from(value));

        value
    }

    pub fn decrement(&mut self) -> u8 {
        let value = self.state.decrement();

        self.next_step = None;
        self.render_digit(i32::from(value));

        value
    }

    pub fn cycle_even(&mut self) -> u8 {
        let value = self.state.cycle_even();

        self.render_digit(i32::from(value));

        value
    }

    pub fn cycle_odd(&mut self) -> u8 {
        let value = self.state.cycle_odd();

        self.render_digit(i32::from(value));

        value
    }

    /// Dispatches a press and starts the debounce lockout.
    pub fn press(&mut self, button: Button, now: TimerInstantU32<HZ>) -> Update {
        let value = self.state.apply(button);

        self.render_digit(i32::from(value));
        self.debounce.update(now, self.timing.debounce_ms);

        self.next_step = if self.state.is_cycling() {
            Some(now + self.timing.first_step_ms().millis())
        } else {
            None
        };

        Update {
            cause: Pressed(button),
            value,
            mode: self.state.mode(),
        }
    }

    pub fn tick(&mut self, now: TimerInstantU32<HZ>, pressed: Option<Button>) -> Option<Update> {
        if !self.debounce.is_bouncing(now) {
            self.debounce.reset();

            if let Some(button) = pressed {
                return Some(self.press(button, now));
            }
        }

        let deadline = self.next_step.filter(|deadline| *deadline <= now)?;
        let value = self.state.advance()?;

        self.render_digit(i32::from(value));
        self.next_step = Some(deadline + self.timing.cycle_ms.millis());

        Some(Update {
            cause: Advanced,
            value,
            mode: self.state.mode(),
        })
    }
}
