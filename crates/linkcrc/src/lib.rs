//! CRC and LRC checksums for embedded serial and bus protocols.
//!
//! Every algorithm is available on two paths that always agree:
//!
//! - **reference** ("slow"): bit-by-bit division, `const fn`, the
//!   correctness oracle.
//! - **table** ("fast"): one 256-entry table lookup per byte. Each table is
//!   built lazily on first use and shared for the process lifetime.
//!
//! # Supported Algorithms
//!
//! | Type | Descriptor | Output | Protocols |
//! |------|------------|--------|-----------|
//! | [`Crc8Smbus`] | CRC-8/SMBUS (0x07) | `u8` | SMBus PEC, "CRC-8" |
//! | [`Crc8DvbS2`] | CRC-8/DVB-S2 (0xD5) | `u8` | RunCam, CRSF, MSP v2 |
//! | [`Crc16Arc`] | CRC-16/ARC (0x8005, reflected) | `u16` | SimpleBGC, LHA |
//! | [`Crc16Xmodem`] | CRC-16/XMODEM (0x1021) | `u16` | XMODEM, CCITT transports |
//! | [`Crc16CcittFalse`] | CRC-16/CCITT-FALSE (0x1021, init 0xFFFF) | `u16` | DroneCAN/UAVCAN v0 |
//! | [`Crc16Modbus`] | CRC-16/MODBUS (0x8005, reflected, init 0xFFFF) | `u16` | Modbus RTU |
//! | [`Crc16Umts`] | CRC-16/UMTS (0x8005) | `u16` | Robotis Dynamixel 2.0 |
//! | [`Crc32`] | CRC-32/ISO-HDLC | `u32` | Ethernet, receive hash filters |
//! | [`Lrc`] | two's-complement byte sum | `u8` | Modbus ASCII |
//!
//! Protocol-named free functions live in the per-protocol modules
//! ([`crc8`], [`dvb_s2`], [`arc`], [`ccitt`], [`modbus`], [`robotis`],
//! [`crc32`]); the runtime-selected generic engine lives in [`engine`].
//!
//! # Example
//!
//! ```rust
//! use linkcrc::{Checksum, Crc16Modbus};
//!
//! // One-shot computation
//! let pdu = [0x01, 0x03, 0x00, 0x00, 0x00, 0x0A];
//! let crc = Crc16Modbus::checksum(&pdu);
//! assert_eq!(crc, 0xCDC5);
//!
//! // Streaming computation
//! let mut hasher = Crc16Modbus::new();
//! hasher.update(&pdu[..2]);
//! hasher.update(&pdu[2..]);
//! assert_eq!(hasher.finalize(), crc);
//!
//! // Frame verification (trailer is sent low byte first)
//! let frame = [0x01, 0x03, 0x00, 0x00, 0x00, 0x0A, 0xC5, 0xCD];
//! assert!(linkcrc::modbus::verify_rtu_frame(&frame).is_ok());
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! linkcrc = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, tables are cached behind an atomic state machine. On
//! targets without atomics they are rebuilt on every table-path call.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod macros;

pub mod algorithm;
pub mod cache;
pub mod config;
pub mod introspect;
pub mod params;
pub mod reference;
pub mod table;

pub mod arc;
pub mod ccitt;
pub mod crc8;
pub mod crc32;
pub mod dvb_s2;
pub mod engine;
pub mod modbus;
pub mod robotis;

#[cfg(test)]
mod proptests;

pub use algorithm::Algorithm;
pub use arc::Crc16Arc;
pub use ccitt::{Crc16CcittFalse, Crc16Xmodem};
pub use crc8::Crc8Smbus;
pub use crc32::Crc32;
pub use dvb_s2::Crc8DvbS2;
pub use engine::{ChecksumEngine, Standard};
pub use modbus::{Crc16Modbus, Lrc};
pub use params::CrcParams;
pub use robotis::Crc16Umts;
pub use table::{CrcTable, Word};
// Re-export traits for convenience
#[cfg(feature = "std")]
pub use traits::io::{ChecksumReader, ChecksumWriter};
pub use traits::{Checksum, FrameError};
