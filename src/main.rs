//! Badge firmware entry point (STM32F103RC).
//!
//! Brings up the OLED, keypad and IR timer, then runs the screen state
//! machine at a fixed frame rate: clear the frame buffer, tick the active
//! screen with this frame's keypad input, flush.

#![no_std]
#![no_main]

mod hw;

use badge::config::{FRAMES_PER_SECOND, SW_VERSION};
use badge::contacts::MemoryContactStore;
use badge::state::{Context, StateMachine};
use badge::ui::display::GraphicsDisplay;
use badge::ui::InputSource;
use badge::Millis;
use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, OutputType, Pull, Speed};
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::time::{khz, Hertz};
use embassy_stm32::timer::simple_pwm::{PwmPin, SimplePwm};
use embassy_time::{Duration, Instant, Ticker};
use static_cell::StaticCell;

use {defmt_rtt as _, panic_probe as _};

/// IR LED carrier frequency.
const IR_CARRIER_KHZ: u32 = 38;

static MACHINE: StaticCell<StateMachine> = StaticCell::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_stm32::init(Default::default());
    info!("badge {} starting", SW_VERSION);

    let i2c = I2c::new_blocking(p.I2C1, p.PB6, p.PB7, Hertz::khz(400), i2c::Config::default());
    let mut display = GraphicsDisplay::new(hw::oled::init(i2c));

    let ir_pin = PwmPin::new_ch2(p.PA1, OutputType::PushPull);
    let pwm = SimplePwm::new(
        p.TIM2,
        None,
        Some(ir_pin),
        None,
        None,
        khz(IR_CARRIER_KHZ),
        Default::default(),
    );
    let mut board = hw::board::BadgeBoard::new(pwm);

    let mut keypad = hw::keypad::MatrixKeypad::new(
        [
            Output::new(p.PC0, Level::High, Speed::Low),
            Output::new(p.PC1, Level::High, Speed::Low),
            Output::new(p.PC2, Level::High, Speed::Low),
            Output::new(p.PC3, Level::High, Speed::Low),
        ],
        [
            Input::new(p.PC4, Pull::Up),
            Input::new(p.PC5, Pull::Up),
            Input::new(p.PC6, Pull::Up),
        ],
    );

    let mut store = MemoryContactStore::new(hw::board::unique_id());
    let machine = MACHINE.init(StateMachine::boot());

    info!("Entering main loop at {} fps", FRAMES_PER_SECOND);
    let mut ticker = Ticker::every(Duration::from_hz(FRAMES_PER_SECOND));

    loop {
        display.target_mut().clear_buffer();

        let mut ctx = Context {
            // Truncation wraps after ~49 days; screens use wrapping math.
            now: Instant::now().as_millis() as Millis,
            input: keypad.poll(),
            display: &mut display,
            store: &mut store,
            board: &mut board,
        };
        machine.step(&mut ctx);

        if display.target_mut().flush().is_err() {
            warn!("Display flush failed");
        }

        ticker.next().await;
    }
}
