//! Board-level peripherals the screens touch directly: the IR carrier
//! timer channel and the chip identification registers.

use crate::Error;

pub trait Board {
    /// Start the timer output channel that drives the IR LED carrier.
    fn start_ir_carrier(&mut self) -> Result<(), Error>;

    /// Stop the IR carrier.
    fn stop_ir_carrier(&mut self) -> Result<(), Error>;

    /// MCU device id (DBGMCU IDCODE).
    fn dev_id(&self) -> u32;

    /// MCU silicon revision.
    fn rev_id(&self) -> u32;

    /// Version of the HAL the firmware was built against.
    fn hal_version(&self) -> u32;
}
