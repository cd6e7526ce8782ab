//! Firmware for the digit panel: button A counts up, button B counts down, the status LED blinks.
#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "Single-threaded")]

use core::convert::Infallible;

use defmt::info;
use defmt_rtt as _;
use digit_panel::debounce::{ButtonId, RawLevel};
use digit_panel::edge_queue::{EdgeNotifier, edge_notifier};
use digit_panel::millis::Milliseconds;
use digit_panel::pwm_channel::{Channel, PwmChannel};
use digit_panel::status_blinker::{
    DigitalStatus, DutyStatus, Repeat, StatusBlinker, StatusDrive, StatusLed,
};
use digit_panel::ws2812::{self, Ws2812Bus};
use digit_panel::{DigitPanel, PanelConfig, RawEdge, Result};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::PIO0;
use embassy_rp::pwm::{self, Pwm};
use embassy_time::{Duration, Ticker};
use panic_probe as _;

type MatrixBus = Ws2812Bus<'static, PIO0, 0>;
type StatusPin = StatusLed<Output<'static>, PwmChannel<'static>>;

const CONFIG: PanelConfig = PanelConfig::from_build_env();

static EDGES: EdgeNotifier = edge_notifier();

#[embassy_executor::main]
pub async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());
    info!(
        "digit panel: blink every {} ms, debounce {} ms",
        CONFIG.blink_period.as_u32(),
        CONFIG.debounce_window.as_u32()
    );

    // Buttons idle high and pull the line to ground while held.
    let button_a = Input::new(p.PIN_5, Pull::Up);
    let button_b = Input::new(p.PIN_6, Pull::Up);

    let mut panel = DigitPanel::new(ws2812::new_pio0(p.PIO0, p.PIN_7), &CONFIG);
    panel.show_current();

    let status = match CONFIG.status_drive {
        StatusDrive::Digital => {
            StatusLed::Digital(DigitalStatus::new(Output::new(p.PIN_13, Level::Low)))
        }
        StatusDrive::Duty { top, on_level } => {
            // GPIO13 is channel B of slice 6.
            let slice = Pwm::new_output_b(p.PWM_SLICE6, p.PIN_13, pwm::Config::default());
            StatusLed::Duty(DutyStatus::new(
                PwmChannel::new(slice, Channel::B, top),
                on_level,
            ))
        }
    };

    let token = blink_loop(StatusBlinker::new(status), CONFIG.blink_period)?;
    spawner.spawn(token);
    let token = panel_loop(panel, &EDGES)?;
    spawner.spawn(token);
    let token = button_watch(ButtonId::A, button_a, &EDGES)?;
    spawner.spawn(token);
    let token = button_watch(ButtonId::B, button_b, &EDGES)?;
    spawner.spawn(token);

    core::future::pending().await
}

/// Timestamps every level change on one button and queues it for the panel.
#[embassy_executor::task(pool_size = 2)]
async fn button_watch(
    button: ButtonId,
    mut input: Input<'static>,
    edges: &'static EdgeNotifier,
) -> ! {
    loop {
        input.wait_for_any_edge().await;
        let edge = RawEdge {
            button,
            level: RawLevel::from_is_low(input.is_low()),
            at: Milliseconds::now(),
        };
        edges.send(edge).await;
    }
}

#[embassy_executor::task]
async fn panel_loop(mut panel: DigitPanel<MatrixBus>, edges: &'static EdgeNotifier) -> ! {
    loop {
        // Accepted presses are logged by the panel.
        panel.handle_next(edges).await;
    }
}

#[embassy_executor::task]
async fn blink_loop(mut blinker: StatusBlinker<StatusPin>, period: Milliseconds) -> ! {
    let mut ticker = Ticker::every(Duration::from_millis(u64::from(period.as_u32())));
    loop {
        ticker.next().await;
        let Repeat::Continue = blinker.on_timer_tick();
    }
}
