//! Fake pins for driving the controller off-target.

use crate::buttons::Buttons;
use crate::segments::{Segments, SEGMENT_COUNT};
use alloc::rc::Rc;
use core::cell::Cell;
use core::convert::Infallible;
use embedded_hal::digital::v2::{InputPin, OutputPin};

/// Output line whose level can be read back.
#[derive(Clone, Debug, Default)]
pub struct Probe(Rc<Cell<bool>>);

impl Probe {
    pub fn is_high(&self) -> bool {
        self.0.get()
    }
}

impl OutputPin for Probe {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set(true);
        Ok(())
    }
}

/// Push-button on a pull-up input, reads low while pressed.
#[derive(Clone, Debug, Default)]
pub struct Switch(Rc<Cell<bool>>);

impl Switch {
    pub fn press(&self) {
        self.0.set(true);
    }

    pub fn release(&self) {
        self.0.set(false);
    }
}

impl InputPin for Switch {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }
}

pub type ProbeSegments = Segments<Probe, Probe, Probe, Probe, Probe, Probe, Probe>;

pub type SwitchButtons = Buttons<Switch, Switch, Switch, Switch>;

/// Seven probes and four switches, shared with the pin wrappers handed out.
#[derive(Clone, Debug, Default)]
pub struct Bench {
    pub probes: [Probe; SEGMENT_COUNT],
    pub switches: [Switch; 4],
}

impl Bench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> ProbeSegments {
        let [a, b, c, d, e, f, g] = self.probes.clone();

        Segments(a, b, c, d, e, f, g)
    }

    pub fn buttons(&self) -> SwitchButtons {
        let [increment, decrement, even, odd] = self.switches.clone();

        Buttons(increment, decrement, even, odd)
    }

    /// Reads the segment lines back as a pattern, bit 0 is segment A.
    pub fn lit(&self) -> u8 {
        self.probes
            .iter()
            .enumerate()
            .filter(|(_, probe)| probe.is_high())
            .fold(0, |bits, (index, _)| bits | 1 << index)
    }
}
