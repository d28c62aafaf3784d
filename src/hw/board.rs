//! IR carrier timer and chip identification.

use badge::board::Board;
use badge::Error;
use defmt::info;
use embassy_stm32::peripherals::TIM2;
use embassy_stm32::timer::simple_pwm::SimplePwm;

/// embassy-stm32 release the firmware is built against, encoded like the
/// vendor HAL version word (major, minor, patch, rc).
const HAL_VERSION: u32 = 0x0002_0000;

pub struct BadgeBoard<'d> {
    carrier: SimplePwm<'d, TIM2>,
}

impl<'d> BadgeBoard<'d> {
    /// `carrier` must have channel 2 configured at the IR carrier frequency.
    pub fn new(carrier: SimplePwm<'d, TIM2>) -> Self {
        Self { carrier }
    }
}

impl Board for BadgeBoard<'_> {
    fn start_ir_carrier(&mut self) -> Result<(), Error> {
        let mut ch = self.carrier.ch2();
        if ch.max_duty_cycle() == 0 {
            return Err(Error::hardware("Timer error"));
        }
        ch.set_duty_cycle_fraction(1, 2);
        ch.enable();
        info!("IR: carrier on");
        Ok(())
    }

    fn stop_ir_carrier(&mut self) -> Result<(), Error> {
        self.carrier.ch2().disable();
        info!("IR: carrier off");
        Ok(())
    }

    fn dev_id(&self) -> u32 {
        u32::from(embassy_stm32::pac::DBGMCU.idcode().read().dev_id())
    }

    fn rev_id(&self) -> u32 {
        u32::from(embassy_stm32::pac::DBGMCU.idcode().read().rev_id())
    }

    fn hal_version(&self) -> u32 {
        HAL_VERSION
    }
}

/// 16-bit badge id folded from the 96-bit factory UID.
pub fn unique_id() -> u16 {
    embassy_stm32::uid::uid()
        .chunks_exact(2)
        .fold(0u16, |acc, pair| acc ^ u16::from_le_bytes([pair[0], pair[1]]))
}
