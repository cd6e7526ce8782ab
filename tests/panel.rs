//! Host-level end-to-end tests: raw button edges in, digits and frames out.

use digit_panel::debounce::{ButtonId, RawLevel};
use digit_panel::digit_pattern::{LED_COUNT, SIDE, pattern_for};
use digit_panel::edge_queue::{EDGE_QUEUE_DEPTH, EdgeNotifier, edge_notifier};
use digit_panel::millis::Milliseconds;
use digit_panel::pixel_bus::PixelBus;
use digit_panel::{Activation, DigitPanel, PanelConfig, RawEdge};
use embassy_futures::block_on;

#[derive(Default)]
struct RecordingBus {
    pixels: Vec<u32>,
}

impl PixelBus for RecordingBus {
    fn send_pixel(&mut self, pixel_grb: u32) {
        self.pixels.push(pixel_grb);
    }
}

impl RecordingBus {
    fn last_frame(&self) -> &[u32] {
        &self.pixels[self.pixels.len() - LED_COUNT..]
    }
}

/// Drives one panel with a clock that starts well past the boot window.
struct Bench {
    panel: DigitPanel<RecordingBus>,
    now: u32,
}

impl Bench {
    fn new() -> Self {
        let mut panel = DigitPanel::new(RecordingBus::default(), &PanelConfig::DEFAULT);
        panel.show_current();
        Self { panel, now: 1000 }
    }

    fn edge(&mut self, button: ButtonId, level: RawLevel) -> Option<Activation> {
        self.panel.on_raw_edge(RawEdge {
            button,
            level,
            at: Milliseconds::from_millis(self.now),
        })
    }

    fn wait(&mut self, millis: u32) {
        self.now += millis;
    }

    /// A clean press and release, followed by a pause longer than the debounce window.
    fn click(&mut self, button: ButtonId) -> Option<Activation> {
        let activation = self.edge(button, RawLevel::Low);
        self.wait(30);
        assert_eq!(self.edge(button, RawLevel::High), None);
        self.wait(200);
        activation
    }

    fn frames_sent(&self) -> usize {
        self.panel.bus().pixels.len() / LED_COUNT
    }
}

/// The frame expected on the wire for `digit` in the stock color and brightness.
fn expected_frame(digit: u8) -> Vec<u32> {
    let pattern = pattern_for(digit).unwrap();
    (0..LED_COUNT)
        .map(|led| {
            let row = SIDE - 1 - led / SIDE;
            let col = led % SIDE;
            if pattern[row * SIDE + col] { 2 } else { 0 }
        })
        .collect()
}

#[test]
fn boots_showing_zero() {
    let bench = Bench::new();
    assert_eq!(bench.panel.digit(), 0);
    assert_eq!(bench.frames_sent(), 1);
    assert_eq!(bench.panel.bus().last_frame(), expected_frame(0));
}

#[test]
fn button_a_counts_up_and_rerenders() {
    let mut bench = Bench::new();
    assert_eq!(
        bench.click(ButtonId::A),
        Some(Activation {
            button: ButtonId::A,
            digit: 1,
        })
    );
    assert_eq!(bench.panel.digit(), 1);
    assert_eq!(bench.frames_sent(), 2);
    assert_eq!(bench.panel.bus().last_frame(), expected_frame(1));
}

#[test]
fn button_b_twice_from_zero_gives_nine_then_eight() {
    let mut bench = Bench::new();
    assert_eq!(bench.click(ButtonId::B).map(|a| a.digit), Some(9));
    assert_eq!(bench.panel.bus().last_frame(), expected_frame(9));
    assert_eq!(bench.click(ButtonId::B).map(|a| a.digit), Some(8));
    assert_eq!(bench.panel.bus().last_frame(), expected_frame(8));
}

#[test]
fn a_then_b_b_walks_one_zero_nine() {
    let mut bench = Bench::new();
    let digits: Vec<u8> = [ButtonId::A, ButtonId::B, ButtonId::B]
        .into_iter()
        .filter_map(|button| bench.click(button))
        .map(|activation| activation.digit)
        .collect();
    assert_eq!(digits, [1, 0, 9]);
}

#[test]
fn ten_a_presses_wrap_to_zero() {
    let mut bench = Bench::new();
    for expected in (1..10).chain([0]) {
        assert_eq!(bench.click(ButtonId::A).map(|a| a.digit), Some(expected));
    }
    assert_eq!(bench.panel.digit(), 0);
    assert_eq!(bench.panel.bus().last_frame(), expected_frame(0));
}

#[test]
fn a_then_b_returns_to_zero() {
    let mut bench = Bench::new();
    bench.click(ButtonId::A);
    bench.click(ButtonId::B);
    assert_eq!(bench.panel.digit(), 0);
}

#[test]
fn bouncy_press_counts_once() {
    let mut bench = Bench::new();
    assert!(bench.edge(ButtonId::A, RawLevel::Low).is_some());
    for _ in 0..4 {
        bench.wait(5);
        assert_eq!(bench.edge(ButtonId::A, RawLevel::High), None);
        bench.wait(5);
        assert_eq!(bench.edge(ButtonId::A, RawLevel::Low), None);
    }
    assert_eq!(bench.panel.digit(), 1);
    // One frame at boot, one for the accepted press.
    assert_eq!(bench.frames_sent(), 2);
}

#[test]
fn buttons_debounce_independently() {
    let mut bench = Bench::new();
    assert!(bench.edge(ButtonId::A, RawLevel::Low).is_some());
    bench.wait(10);
    // B has its own window, so a press right after A still counts.
    assert!(bench.edge(ButtonId::B, RawLevel::Low).is_some());
    assert_eq!(bench.panel.digit(), 0);
    assert!(bench.panel.button(ButtonId::A).state().pressed);
    assert!(bench.panel.button(ButtonId::B).state().pressed);
}

#[test]
fn releases_alone_change_nothing() {
    let mut bench = Bench::new();
    assert_eq!(bench.edge(ButtonId::A, RawLevel::High), None);
    assert_eq!(bench.edge(ButtonId::B, RawLevel::High), None);
    assert_eq!(bench.panel.digit(), 0);
    assert_eq!(bench.frames_sent(), 1);
}

#[test]
fn buffer_tracks_the_shown_digit() {
    let mut bench = Bench::new();
    bench.click(ButtonId::A);
    bench.click(ButtonId::A);
    let pattern = pattern_for(2).unwrap();
    let buffer = bench.panel.buffer();
    for led in 0..LED_COUNT {
        let row = SIDE - 1 - led / SIDE;
        assert_eq!(buffer[led], pattern[row * SIDE + led % SIDE], "LED {led}");
    }
}

#[test]
fn activation_line() {
    let mut bench = Bench::new();
    let activation = bench.click(ButtonId::A).unwrap();
    assert_eq!(activation.to_string(), "button A pressed, digit: 1");
    let activation = bench.click(ButtonId::B).unwrap();
    assert_eq!(activation.to_string(), "button B pressed, digit: 0");
}

const fn raw_edge(button: ButtonId, level: RawLevel, at: u32) -> RawEdge {
    RawEdge {
        button,
        level,
        at: Milliseconds::from_millis(at),
    }
}

#[test]
fn edges_queued_while_rendering_are_all_counted() {
    static EDGES: EdgeNotifier = edge_notifier();
    let mut bench = Bench::new();

    // A goes down, and B goes down and up again, before the panel gets to any of them.
    EDGES.try_send(raw_edge(ButtonId::A, RawLevel::Low, 1000)).unwrap();
    EDGES.try_send(raw_edge(ButtonId::B, RawLevel::Low, 1001)).unwrap();
    EDGES.try_send(raw_edge(ButtonId::B, RawLevel::High, 1040)).unwrap();

    assert_eq!(
        block_on(bench.panel.handle_next(&EDGES)),
        Some(Activation {
            button: ButtonId::A,
            digit: 1,
        })
    );
    assert_eq!(
        block_on(bench.panel.handle_next(&EDGES)),
        Some(Activation {
            button: ButtonId::B,
            digit: 0,
        })
    );
    assert_eq!(block_on(bench.panel.handle_next(&EDGES)), None);

    assert!(EDGES.try_receive().is_err());
    assert_eq!(bench.panel.digit(), 0);
    // Boot frame plus one per accepted press.
    assert_eq!(bench.frames_sent(), 3);
}

#[test]
fn edge_queue_holds_a_burst_in_order() {
    let edges = edge_notifier();
    let mut bench = Bench::new();
    let mut at = 1000;
    for _ in 0..EDGE_QUEUE_DEPTH / 2 {
        edges.try_send(raw_edge(ButtonId::A, RawLevel::Low, at)).unwrap();
        edges.try_send(raw_edge(ButtonId::A, RawLevel::High, at + 20)).unwrap();
        at += 150;
    }
    assert!(edges.try_send(raw_edge(ButtonId::B, RawLevel::Low, at)).is_err());

    let digits: Vec<u8> = (0..EDGE_QUEUE_DEPTH)
        .filter_map(|_| block_on(bench.panel.handle_next(&edges)))
        .map(|activation| activation.digit)
        .collect();
    assert_eq!(digits, [1, 2, 3, 4]);
}
