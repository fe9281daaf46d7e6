use core::convert::Infallible;
use embedded_hal::digital::v2::InputPin;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    Increment,
    Decrement,
    Even,
    Odd,
}

impl Button {
    /// Buttons are scanned in this order, so the first one wins when several are held.
    pub const SCAN_ORDER: [Button; 4] = [
        Button::Increment,
        Button::Decrement,
        Button::Even,
        Button::Odd,
    ];
}

pub trait ButtonInput {
    fn poll(&mut self) -> Option<Button>;
}

/// Four active-low buttons wired to pull-up inputs: increment, decrement, even, odd.
pub struct Buttons<P1, P2, P3, P4>(pub P1, pub P2, pub P3, pub P4)
where
    P1: InputPin<Error = Infallible>,
    P2: InputPin<Error = Infallible>,
    P3: InputPin<Error = Infallible>,
    P4: InputPin<Error = Infallible>;

impl<P1, P2, P3, P4> Buttons<P1, P2, P3, P4>
where
    P1: InputPin<Error = Infallible>,
    P2: InputPin<Error = Infallible>,
    P3: InputPin<Error = Infallible>,
    P4: InputPin<Error = Infallible>,
{
    pub fn get_button(&self, button: Button) -> &dyn InputPin<Error = Infallible> {
        match button {
            Button::Increment => &self.0,
            Button::Decrement => &self.1,
            Button::Even => &self.2,
            Button::Odd => &self.3,
        }
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.get_button(button).is_low().unwrap_or(false)
    }
}

impl<P1, P2, P3, P4> ButtonInput for Buttons<P1, P2, P3, P4>
where
    P1: InputPin<Error = Infallible>,
    P2: InputPin<Error = Infallible>,
    P3: InputPin<Error = Infallible>,
    P4: InputPin<Error = Infallible>,
{
    fn poll(&mut self) -> Option<Button> {
        Button::SCAN_ORDER
            .into_iter()
            .find(|button| self.is_pressed(*button))
    }
}
