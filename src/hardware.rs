use digit_controller::{Buttons, Segments};
use stm32f4xx_hal::gpio::{gpioa, gpiob, Input, Output, Pin, PullUp, PushPull};

pub type SegmentA = Pin<Output<PushPull>, 'B', 12>;
pub type SegmentB = Pin<Output<PushPull>, 'B', 13>;
pub type SegmentC = Pin<Output<PushPull>, 'B', 14>;
pub type SegmentD = Pin<Output<PushPull>, 'B', 15>;
pub type SegmentE = Pin<Output<PushPull>, 'A', 8>;
pub type SegmentF = Pin<Output<PushPull>, 'A', 9>;
pub type SegmentG = Pin<Output<PushPull>, 'A', 10>;

pub type IncrementButton = Pin<Input<PullUp>, 'A', 0>;
pub type DecrementButton = Pin<Input<PullUp>, 'A', 1>;
pub type EvenButton = Pin<Input<PullUp>, 'A', 2>;
pub type OddButton = Pin<Input<PullUp>, 'A', 3>;

pub type DisplaySegments =
    Segments<SegmentA, SegmentB, SegmentC, SegmentD, SegmentE, SegmentF, SegmentG>;

pub type DisplayButtons = Buttons<IncrementButton, DecrementButton, EvenButton, OddButton>;

/// Segment lines as push-pull outputs, buttons as pull-up inputs.
pub fn configure_pins(
    gpioa: gpioa::Parts,
    gpiob: gpiob::Parts,
) -> (DisplaySegments, DisplayButtons) {
    let segments = Segments(
        gpiob.pb12.into_push_pull_output(),
        gpiob.pb13.into_push_pull_output(),
        gpiob.pb14.into_push_pull_output(),
        gpiob.pb15.into_push_pull_output(),
        gpioa.pa8.into_push_pull_output(),
        gpioa.pa9.into_push_pull_output(),
        gpioa.pa10.into_push_pull_output(),
    );

    let buttons = Buttons(
        gpioa.pa0.into_pull_up_input(),
        gpioa.pa1.into_pull_up_input(),
        gpioa.pa2.into_pull_up_input(),
        gpioa.pa3.into_pull_up_input(),
    );

    (segments, buttons)
}
