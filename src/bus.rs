use digit_controller::{Cause, Update};
use heapless::mpmc::Q8;
use rtt_target::rprintln;

pub use Message::*;

pub static Q: Q8<Message> = Q8::new();

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Booted(u8),
    Applied(Update),
}

impl Message {
    pub fn send(self) {
        Q.enqueue(self).ok();
    }

    pub fn log(&self) {
        match self {
            Booted(value) => rprintln!("booted, showing {}", value),

            Applied(Update {
                cause: Cause::Pressed(button),
                value,
                mode,
            }) => rprintln!("{:?} pressed -> {} ({:?})", button, value, mode),

            Applied(Update {
                cause: Cause::Advanced,
                value,
                mode,
            }) => rprintln!("advanced -> {} ({:?})", value, mode),
        }
    }
}
