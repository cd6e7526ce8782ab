//! Host-level tests for the status LED blinker and its two drive modes.

use core::convert::Infallible;

use digit_panel::Error;
use digit_panel::status_blinker::{
    DigitalStatus, DutyStatus, PWM_ON_LEVEL, PWM_TOP, Repeat, StatusBlinker, StatusDrive,
    StatusLed, StatusOutput,
};
use embedded_hal::digital::{self, ErrorKind, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};

#[derive(Default)]
struct RecordingPin {
    levels: Vec<bool>,
}

impl digital::ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.push(true);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingChannel {
    duties: Vec<u16>,
}

impl pwm::ErrorType for RecordingChannel {
    type Error = Infallible;
}

impl SetDutyCycle for RecordingChannel {
    fn max_duty_cycle(&self) -> u16 {
        PWM_TOP
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duties.push(duty);
        Ok(())
    }
}

#[derive(Debug)]
struct PinFault;

impl digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

struct BrokenPin;

impl digital::ErrorType for BrokenPin {
    type Error = PinFault;
}

impl OutputPin for BrokenPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(PinFault)
    }
}

type Led = StatusLed<RecordingPin, RecordingChannel>;

fn tick(blinker: &mut StatusBlinker<impl StatusOutput>, count: usize) {
    for _ in 0..count {
        assert_eq!(blinker.on_timer_tick(), Repeat::Continue);
    }
}

#[test]
fn starts_dark_and_untouched() {
    let blinker = StatusBlinker::new(DigitalStatus::new(RecordingPin::default()));
    assert!(!blinker.is_lit());
}

#[test]
fn digital_toggles_every_tick() {
    let mut pin = RecordingPin::default();
    let mut blinker = StatusBlinker::new(DigitalStatus::new(&mut pin));
    tick(&mut blinker, 5);
    assert!(blinker.is_lit());
    drop(blinker);
    assert_eq!(pin.levels, [true, false, true, false, true]);
}

#[test]
fn duty_alternates_between_on_level_and_zero() {
    let mut channel = RecordingChannel::default();
    let mut blinker = StatusBlinker::new(DutyStatus::new(&mut channel, PWM_ON_LEVEL));
    tick(&mut blinker, 4);
    drop(blinker);
    assert_eq!(channel.duties, [100, 0, 100, 0]);
}

#[test]
fn even_ticks_return_to_start_odd_ticks_toggle() {
    for count in 0..12 {
        let mut blinker = StatusBlinker::new(DigitalStatus::new(RecordingPin::default()));
        tick(&mut blinker, count);
        assert_eq!(blinker.is_lit(), count % 2 == 1, "after {count} ticks");
    }
}

#[test]
fn status_led_dispatches_to_either_variant() {
    let mut digital: StatusBlinker<Led> =
        StatusBlinker::new(StatusLed::Digital(DigitalStatus::new(RecordingPin::default())));
    tick(&mut digital, 3);
    assert!(matches!(digital.output(), StatusLed::Digital(_)));
    assert!(digital.is_lit());

    let mut duty: StatusBlinker<Led> = StatusBlinker::new(StatusLed::Duty(DutyStatus::new(
        RecordingChannel::default(),
        PWM_ON_LEVEL,
    )));
    tick(&mut duty, 2);
    let StatusLed::Duty(status) = duty.output() else {
        panic!("expected the duty variant");
    };
    assert_eq!(status.on_level(), PWM_ON_LEVEL);
    assert!(!duty.is_lit());
}

#[test]
fn into_inner_returns_the_driven_hardware() {
    let mut status = DigitalStatus::new(RecordingPin::default());
    status.set_lit(true).unwrap();
    status.set_lit(false).unwrap();
    assert_eq!(status.into_inner().levels, [true, false]);

    let mut status = DutyStatus::new(RecordingChannel::default(), 250);
    status.set_lit(true).unwrap();
    assert_eq!(status.into_inner().duties, [250]);
}

#[test]
fn output_failure_is_reported_but_blinking_continues() {
    let mut status = DigitalStatus::new(BrokenPin);
    assert!(matches!(status.set_lit(true), Err(Error::CannotSetOutputState)));

    let mut blinker = StatusBlinker::new(status);
    tick(&mut blinker, 3);
    assert!(blinker.is_lit());
}

#[test]
fn dimmed_drive_uses_stock_levels() {
    assert_eq!(
        StatusDrive::DIMMED,
        StatusDrive::Duty {
            top: 1000,
            on_level: 100,
        }
    );
}
