//! A blocking [`PixelBus`] for WS2812-style LEDs, fed by the CPU through a PIO state machine.
//!
//! The PIO program generates the 800 kHz one-wire timing; each pixel is one 24-bit GRB word
//! shifted out MSB first. [`Ws2812Bus::send_pixel`] spins while the TX FIFO is full, so a frame
//! is never dropped or truncated.

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::program::{Assembler, JmpCondition, OutDestination, SetDestination, SideSet};
use embassy_rp::pio::{
    Common, Config, FifoJoin, Instance, LoadedProgram, PioPin, ShiftConfig, ShiftDirection,
    StateMachine,
};
use embassy_time::{Duration, block_for};
use fixed::types::U24F8;

use crate::pio_irqs::Pio0Irqs;
use crate::pixel_bus::{Frame, PixelBus, pack_grb};

/// Bit rate of the LED data line, in kHz.
pub const BIT_RATE_KHZ: u32 = 800;

const T1: u8 = 2;
const T2: u8 = 5;
const T3: u8 = 3;
const CYCLES_PER_BIT: u32 = (T1 + T2 + T3) as u32;
// Line must idle low this long for the LEDs to latch a frame.
const RESET_DELAY_US: u64 = 55;

fn load_ws2812_program<'d, PIO: Instance>(common: &mut Common<'d, PIO>) -> LoadedProgram<'d, PIO> {
    let side_set = SideSet::new(false, 1, false);
    let mut assembler: Assembler<32> = Assembler::new_with_side_set(side_set);

    let mut wrap_target = assembler.label();
    let mut wrap_source = assembler.label();
    let mut do_zero = assembler.label();
    assembler.set_with_side_set(SetDestination::PINDIRS, 1, 0);
    assembler.bind(&mut wrap_target);
    assembler.out_with_delay_and_side_set(OutDestination::X, 1, T3 - 1, 0);
    assembler.jmp_with_delay_and_side_set(JmpCondition::XIsZero, &mut do_zero, T1 - 1, 1);
    assembler.jmp_with_delay_and_side_set(JmpCondition::Always, &mut wrap_target, T2 - 1, 1);
    assembler.bind(&mut do_zero);
    assembler.nop_with_delay_and_side_set(T2 - 1, 0);
    assembler.bind(&mut wrap_source);

    let program = assembler.assemble_with_wrap(wrap_source, wrap_target);
    common.load_program(&program)
}

/// CPU-fed WS2812 bus on one state machine.
pub struct Ws2812Bus<'d, P: Instance, const S: usize> {
    sm: StateMachine<'d, P, S>,
}

impl<'d, P: Instance, const S: usize> Ws2812Bus<'d, P, S> {
    /// Loads the program, configures the state machine for 800 kHz RGB (no white channel), and
    /// enables it.
    pub fn new(
        common: &mut Common<'d, P>,
        sm: StateMachine<'d, P, S>,
        pin: embassy_rp::Peri<'d, impl PioPin>,
    ) -> Self {
        let program = load_ws2812_program(common);
        let mut cfg = Config::default();

        let out_pin = common.make_pio_pin(pin);
        cfg.set_out_pins(&[&out_pin]);
        cfg.set_set_pins(&[&out_pin]);
        cfg.use_program(&program, &[&out_pin]);

        let clock_freq = U24F8::from_num(clk_sys_freq() / 1000);
        let ws2812_freq = U24F8::from_num(BIT_RATE_KHZ);
        let bit_freq = ws2812_freq * CYCLES_PER_BIT;
        cfg.clock_divider = clock_freq / bit_freq;

        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: 24,
            direction: ShiftDirection::Left,
        };

        let mut sm = sm;
        sm.set_config(&cfg);
        sm.set_enable(true);

        Self { sm }
    }
}

impl<P: Instance, const S: usize> PixelBus for Ws2812Bus<'_, P, S> {
    fn send_pixel(&mut self, pixel_grb: u32) {
        // Autopull takes the top 24 bits of each word.
        let word = pixel_grb << 8;
        let tx = self.sm.tx();
        while !tx.try_push(word) {
            core::hint::spin_loop();
        }
    }

    fn send_frame<const N: usize>(&mut self, frame: &Frame<N>) {
        for color in frame.iter() {
            self.send_pixel(pack_grb(*color));
        }
        block_for(Duration::from_micros(RESET_DELAY_US));
    }
}

/// Takes over PIO0 with its interrupt bound and returns a bus on SM0 driving `pin`.
pub fn new_pio0(
    pio: embassy_rp::Peri<'static, embassy_rp::peripherals::PIO0>,
    pin: embassy_rp::Peri<'static, impl PioPin>,
) -> Ws2812Bus<'static, embassy_rp::peripherals::PIO0, 0> {
    let embassy_rp::pio::Pio {
        mut common, sm0, ..
    } = embassy_rp::pio::Pio::new(pio, Pio0Irqs);
    Ws2812Bus::new(&mut common, sm0, pin)
}
