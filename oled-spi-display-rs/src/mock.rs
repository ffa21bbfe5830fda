//! Test doubles that record bus traffic instead of touching hardware.
//!
//! A single [`Recorder`] hands out a bus, D/C pin, reset pin and delay that
//! all append to one shared event log, so tests can assert on the exact
//! interleaving of commands, data, reset edges and waits.

use core::cell::RefCell;
use core::convert::Infallible;

use embedded_hal::digital::{ErrorType as PinErrorType, OutputPin};
use embedded_hal::spi::{Error as SpiErrorTrait, ErrorKind, ErrorType as SpiErrorType};
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::spi::SpiBus;
use heapless::Vec;

/// Enough for a full init (reset + 27 commands + 1048-byte clear) or a
/// fill test with one delay per column.
pub const LOG_CAPACITY: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Command(u8),
    Data(u8),
    ResetLow,
    ResetHigh,
    DelayNs(u32),
    DelayUs(u32),
    DelayMs(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockSpiError;

impl SpiErrorTrait for MockSpiError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

struct State {
    dc_high: bool,
    dc_writes: usize,
    flushes: usize,
    fail_after: Option<usize>,
    bytes_sent: usize,
    first_bus_call: Option<usize>,
    events: Vec<Event, LOG_CAPACITY>,
}

impl State {
    fn note_bus_call(&mut self) {
        if self.first_bus_call.is_none() {
            self.first_bus_call = Some(self.events.len());
        }
    }
}

pub struct Recorder {
    state: RefCell<State>,
}

impl Recorder {
    pub fn new() -> Self {
        Self {
            state: RefCell::new(State {
                dc_high: false,
                dc_writes: 0,
                flushes: 0,
                fail_after: None,
                bytes_sent: 0,
                first_bus_call: None,
                events: Vec::new(),
            }),
        }
    }

    pub fn bus(&self) -> MockBus<'_> {
        MockBus { recorder: self }
    }

    pub fn dc_pin(&self) -> MockDcPin<'_> {
        MockDcPin { recorder: self }
    }

    pub fn rst_pin(&self) -> MockResetPin<'_> {
        MockResetPin { recorder: self }
    }

    pub fn delay(&self) -> MockDelay<'_> {
        MockDelay { recorder: self }
    }

    /// Make every bus write after the first `bytes` fail.
    pub fn fail_after(&self, bytes: usize) {
        self.state.borrow_mut().fail_after = Some(bytes);
    }

    pub fn events(&self) -> Vec<Event, LOG_CAPACITY> {
        self.state.borrow().events.clone()
    }

    /// Only the bytes that crossed the bus, in order.
    pub fn bus_events(&self) -> Vec<Event, LOG_CAPACITY> {
        self.state
            .borrow()
            .events
            .iter()
            .copied()
            .filter(|e| matches!(e, Event::Command(_) | Event::Data(_)))
            .collect()
    }

    /// Log position at the first bus `write` or `flush`, if any.
    pub fn first_bus_call(&self) -> Option<usize> {
        self.state.borrow().first_bus_call
    }

    pub fn dc_writes(&self) -> usize {
        self.state.borrow().dc_writes
    }

    pub fn flushes(&self) -> usize {
        self.state.borrow().flushes
    }

    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        state.events.clear();
        state.dc_writes = 0;
        state.flushes = 0;
    }

    fn push(&self, event: Event) {
        self.state
            .borrow_mut()
            .events
            .push(event)
            .expect("recorder log full");
    }
}

pub struct MockBus<'a> {
    recorder: &'a Recorder,
}

impl SpiErrorType for MockBus<'_> {
    type Error = MockSpiError;
}

impl SpiBus for MockBus<'_> {
    async fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Err(MockSpiError)
    }

    async fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        self.recorder.state.borrow_mut().note_bus_call();
        for &byte in words {
            let event = {
                let mut state = self.recorder.state.borrow_mut();
                if state.fail_after.is_some_and(|limit| state.bytes_sent >= limit) {
                    return Err(MockSpiError);
                }
                state.bytes_sent += 1;
                if state.dc_high {
                    Event::Data(byte)
                } else {
                    Event::Command(byte)
                }
            };
            self.recorder.push(event);
        }
        Ok(())
    }

    async fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
        Err(MockSpiError)
    }

    async fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Err(MockSpiError)
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        let mut state = self.recorder.state.borrow_mut();
        state.note_bus_call();
        state.flushes += 1;
        Ok(())
    }
}

pub struct MockDcPin<'a> {
    recorder: &'a Recorder,
}

impl PinErrorType for MockDcPin<'_> {
    type Error = Infallible;
}

impl OutputPin for MockDcPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut state = self.recorder.state.borrow_mut();
        state.dc_high = false;
        state.dc_writes += 1;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut state = self.recorder.state.borrow_mut();
        state.dc_high = true;
        state.dc_writes += 1;
        Ok(())
    }
}

pub struct MockResetPin<'a> {
    recorder: &'a Recorder,
}

impl PinErrorType for MockResetPin<'_> {
    type Error = Infallible;
}

impl OutputPin for MockResetPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.recorder.push(Event::ResetLow);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.recorder.push(Event::ResetHigh);
        Ok(())
    }
}

pub struct MockDelay<'a> {
    recorder: &'a Recorder,
}

impl DelayNs for MockDelay<'_> {
    async fn delay_ns(&mut self, ns: u32) {
        self.recorder.push(Event::DelayNs(ns));
    }

    async fn delay_us(&mut self, us: u32) {
        self.recorder.push(Event::DelayUs(us));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.recorder.push(Event::DelayMs(ms));
    }
}
