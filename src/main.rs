#![no_main]
#![no_std]

mod bus;
mod hardware;
mod mono_timer;

use crate::bus::*;
use crate::hardware::*;
use crate::mono_timer::MonoTimer;
use core::panic::PanicInfo;
use digit_controller::{ButtonInput, DigitDisplayController, Timing};
use fugit::ExtU32;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{pac, prelude::*};

/// how often the buttons are sampled (in milliseconds)
const POLL_INTERVAL: u32 = 10;

/// rate of the monotonic timer (in hertz)
const TIMER_HZ: u32 = 8_000_000;

pub type Controller = DigitDisplayController<DisplaySegments, TIMER_HZ>;

#[inline(never)]
#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    rprintln!("{}", info);

    loop {
        cortex_m::asm::nop();
    }
}

#[rtic::app(device = stm32f4xx_hal::pac, dispatchers = [EXTI2, EXTI3])]
mod app {
    use super::*;

    #[monotonic(binds = TIM5, default = true)]
    type Timer = MonoTimer<pac::TIM5, 8_000_000>;

    #[shared]
    struct Shared {
        controller: Controller,
    }

    #[local]
    struct Local {
        buttons: DisplayButtons,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        rtt_init_print!();

        let rcc = cx.device.RCC.constrain();
        let clocks = rcc
            .cfgr
            .use_hse(25.mhz())
            .sysclk(84.mhz())
            .hclk(84.mhz())
            .pclk1(42.mhz())
            .pclk2(84.mhz())
            .freeze();

        let mono = Timer::new(cx.device.TIM5, &clocks);

        let (segments, buttons) =
            configure_pins(cx.device.GPIOA.split(), cx.device.GPIOB.split());

        let mut controller = Controller::new(segments, Timing::default());

        controller.start();

        Booted(controller.state().value()).send();

        tick::spawn().ok();

        (
            Shared { controller },
            Local { buttons },
            init::Monotonics(mono),
        )
    }

    #[idle]
    fn idle(_: idle::Context) -> ! {
        loop {
            if let Some(msg) = Q.dequeue() {
                msg.log();
            } else {
                cortex_m::asm::nop();
            }
        }
    }

    #[task(
        shared = [controller],
        local = [buttons],
        priority = 1
    )]
    fn tick(mut cx: tick::Context) {
        tick::spawn_after(POLL_INTERVAL.millis()).ok();

        let pressed = cx.local.buttons.poll();
        let now = monotonics::now();

        cx.shared.controller.lock(|controller| {
            if let Some(update) = controller.tick(now, pressed) {
                Applied(update).send();
            }
        });
    }
}
