use crate::buttons::Button;

pub use Mode::*;

/// digits the display can show
pub const DIGITS: u8 = 10;

/// even or odd digits in one cycle
const CYCLE_LENGTH: u8 = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Idle,
    CyclingEven,
    CyclingOdd,
}

#[must_use]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisplayState {
    value: u8,
    mode: Mode,
    even_index: u8,
    odd_index: u8,
}

impl DisplayState {
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn even_index(&self) -> u8 {
        self.even_index
    }

    pub fn odd_index(&self) -> u8 {
        self.odd_index
    }

    pub fn is_cycling_even(&self) -> bool {
        self.mode == CyclingEven
    }

    pub fn is_cycling_odd(&self) -> bool {
        self.mode == CyclingOdd
    }

    pub fn is_cycling(&self) -> bool {
        self.mode != Idle
    }

    pub fn increment(&mut self) -> u8 {
        self.mode = Idle;
        self.value = (self.value + 1) % DIGITS;
        self.value
    }

    pub fn decrement(&mut self) -> u8 {
        self.mode = Idle;
        self.value = (self.value + DIGITS - 1) % DIGITS;
        self.value
    }

    pub fn cycle_even(&mut self) -> u8 {
        self.mode = CyclingEven;
        self.step_even()
    }

    pub fn cycle_odd(&mut self) -> u8 {
        self.mode = CyclingOdd;
        self.step_odd()
    }

    /// Moves to the next digit of the active cycle, `None` when idle.
    pub fn advance(&mut self) -> Option<u8> {
        match self.mode {
            Idle => None,
            CyclingEven => Some(self.step_even()),
            CyclingOdd => Some(self.step_odd()),
        }
    }

    pub fn apply(&mut self, button: Button) -> u8 {
        match button {
            Button::Increment => self.increment(),
            Button::Decrement => self.decrement(),
            Button::Even => self.cycle_even(),
            Button::Odd => self.cycle_odd(),
        }
    }

    fn step_even(&mut self) -> u8 {
        self.value = (self.even_index * 2) % DIGITS;
        self.even_index = (self.even_index + 1) % CYCLE_LENGTH;
        self.value
    }

    fn step_odd(&mut self) -> u8 {
        self.value = (self.odd_index * 2 + 1) % DIGITS;
        self.odd_index = (self.odd_index + 1) % CYCLE_LENGTH;
        self.value
    }
}
