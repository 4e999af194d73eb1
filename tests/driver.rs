//! Device protocol behavior: register traffic, init sequence, axis reads.

mod common;

use adxl362_tilt_logger::bus::spi::{BusConfig, SpiBus};
use adxl362_tilt_logger::drivers::adxl362::{
    Adxl362, RawSample, REG_DEVID, REG_FIFO_ENTRIES_H, REG_FIFO_ENTRIES_L, REG_FIFO_SAMPLES,
    REG_FILTER_CTL, REG_STATUS,
};
use common::{BusFault, EchoBus, RecordingBus, RecordingDelay, ScriptedBus};
use embedded_hal_mock::pin::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};
use embedded_hal_mock::spi::{Mock as SpiMock, Transaction as SpiTransaction};

#[test]
fn register_write_reads_back() {
    let mut driver = Adxl362::new(EchoBus::new());
    driver.write_register(REG_FILTER_CTL, 0xA5).unwrap();
    assert_eq!(driver.read_register(REG_FILTER_CTL).unwrap(), 0xA5);

    driver.set_fifo_samples(12).unwrap();
    assert_eq!(driver.read_register(REG_FIFO_SAMPLES).unwrap(), 12);
}

#[test]
fn reset_then_configure_writes_in_protocol_order() {
    let mut driver = Adxl362::new(RecordingBus::new());
    let mut delay = RecordingDelay::new();

    driver.reset(&mut delay).unwrap();
    driver.configure().unwrap();

    let bus = driver.free();
    assert_eq!(
        bus.transactions,
        vec![
            vec![0x0A, 0x1F, 0x52], // soft reset
            vec![0x0A, 0x28, 0x0A], // FIFO: stream mode
            vec![0x0A, 0x2C, 0x11], // filter: 2g, 25Hz
            vec![0x0A, 0x2A, 0x04], // intmap: watermark
            vec![0x0A, 0x2D, 0x22], // power: ULN measurement
        ]
    );
    // reset settling is bracketed, 200ms each side
    assert_eq!(delay.delays_ms, vec![200, 200]);
}

#[test]
fn read_axes_is_one_burst_transaction() {
    let mut spi = SpiMock::new(&[SpiTransaction::transfer(
        vec![0x0B, 0x08, 0x00, 0x00, 0x00],
        vec![0x00, 0x00, 0xFF, 0x20, 0x40],
    )]);
    let mut cs = PinMock::new(&[
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ]);

    let mut bus = SpiBus::new(spi.clone(), cs.clone());
    bus.configure(&BusConfig::default()).unwrap();
    let mut driver = Adxl362::new(bus);

    assert_eq!(
        driver.read_axes().unwrap(),
        RawSample {
            x: -1,
            y: 32,
            z: 64
        }
    );

    spi.done();
    cs.done();
}

#[test]
fn transport_failure_surfaces_unchanged() {
    // an exhausted script stands in for a device that stopped responding
    let mut driver = Adxl362::new(ScriptedBus::new(&[]));
    assert_eq!(driver.read_axes(), Err(BusFault));
}

#[test]
fn identity_and_fifo_accessors_decode_registers() {
    let mut bus = EchoBus::new();
    bus.regs[REG_DEVID as usize] = 0xAD;
    bus.regs[REG_STATUS as usize] = 0x41; // awake + data ready
    bus.regs[REG_FIFO_ENTRIES_L as usize] = 0x90;
    bus.regs[REG_FIFO_ENTRIES_H as usize] = 0xFF; // upper bits must be masked

    let mut driver = Adxl362::new(bus);
    assert_eq!(driver.device_id().unwrap(), 0xAD);
    assert_eq!(driver.status().unwrap(), 0x41);
    assert_eq!(driver.fifo_entries().unwrap(), 0x0390);
}
