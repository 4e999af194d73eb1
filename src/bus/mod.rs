//! Bus abstraction for the accelerometer link.

pub mod spi;

/// Abstraction over the byte-exchange transactions the driver needs.
///
/// A transaction is full duplex: every outgoing byte produces exactly one
/// reply byte, written back in place.
pub trait BusTransport {
    /// Error type produced by the concrete transport.
    type Error;

    /// Exchanges `words` with the device in a single transaction.
    ///
    /// There is no transaction timeout; a device that stops clocking blocks
    /// the caller. TODO: bound the exchange with a deadline once a monotonic
    /// time source is part of the transport seam.
    fn transact(&mut self, words: &mut [u8]) -> Result<(), Self::Error>;
}

/// Transport failures. No retries happen at this layer; the caller sees
/// every failure unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportError<SpiE, PinE> {
    /// `configure` has not been called yet.
    NotConfigured,
    /// Requested transfer parameters are outside what this transport speaks.
    UnsupportedConfig,
    /// The underlying SPI exchange failed.
    Spi(SpiE),
    /// The chip-select line could not be driven.
    Cs(PinE),
}
