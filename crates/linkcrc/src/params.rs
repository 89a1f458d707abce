//! CRC algorithm parameters.
//!
//! This module defines the polynomial descriptors for every supported CRC,
//! following the conventions from the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

/// CRC algorithm parameters (Rocksoft model).
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC (8..=32)
/// - `polynomial`: The generator polynomial (without the implicit high bit)
/// - `initial`: Initial value for the CRC register
/// - `reflect_in`: If true, reflect each input byte before processing
/// - `reflect_out`: If true, reflect the final CRC before XOR
/// - `xor_out`: Value to XOR with the final CRC
/// - `check`: The CRC of the ASCII string `"123456789"`
///
/// # Register domain
///
/// Table and streaming code keeps the running register bit-reversed when
/// `reflect_in` is set (LSB-first shifting with the reflected polynomial) and
/// in natural orientation otherwise. [`finalize`](Self::finalize) and
/// [`register_from`](Self::register_from) convert between that register and
/// the published checksum value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  /// Catalogue name, e.g. `"CRC-16/MODBUS"`.
  pub name: &'static str,
  /// Width in bits (8..=32).
  pub width: u8,
  /// Generator polynomial (without implicit high bit).
  pub polynomial: u32,
  /// Initial value for the CRC register.
  pub initial: u32,
  /// Reflect input bytes before processing.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
  /// XOR value applied to final CRC.
  pub xor_out: u32,
  /// CRC of `b"123456789"`.
  pub check: u32,
}

impl CrcParams {
  /// CRC-8/SMBUS - the plain "CRC-8" (ATM HEC polynomial without XOR).
  pub const CRC8_SMBUS: Self = Self {
    name: "CRC-8/SMBUS",
    width: 8,
    polynomial: 0x07,
    initial: 0x00,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x00,
    check: 0xF4,
  };

  /// CRC-8/DVB-S2 - RunCam device protocol, CRSF, MSP v2.
  pub const CRC8_DVB_S2: Self = Self {
    name: "CRC-8/DVB-S2",
    width: 8,
    polynomial: 0xD5,
    initial: 0x00,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x00,
    check: 0xBC,
  };

  /// CRC-16/ARC (aka CRC-16/IBM, "CRC-16") - SimpleBGC serial API v2.68+, LHA.
  pub const CRC16_ARC: Self = Self {
    name: "CRC-16/ARC",
    width: 16,
    polynomial: 0x8005,
    initial: 0x0000,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
    check: 0xBB3D,
  };

  /// CRC-16/XMODEM (CCITT polynomial, zero init) - XMODEM, ZMODEM, CrossFire.
  pub const CRC16_XMODEM: Self = Self {
    name: "CRC-16/XMODEM",
    width: 16,
    polynomial: 0x1021,
    initial: 0x0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
    check: 0x31C3,
  };

  /// CRC-16/IBM-3740 (aka CCITT-FALSE) - DroneCAN/UAVCAN v0 transfer CRC.
  pub const CRC16_CCITT_FALSE: Self = Self {
    name: "CRC-16/IBM-3740",
    width: 16,
    polynomial: 0x1021,
    initial: 0xFFFF,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
    check: 0x29B1,
  };

  /// CRC-16/MODBUS - Modbus RTU.
  pub const CRC16_MODBUS: Self = Self {
    name: "CRC-16/MODBUS",
    width: 16,
    polynomial: 0x8005,
    initial: 0xFFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0x0000,
    check: 0x4B37,
  };

  /// CRC-16/UMTS (aka BUYPASS) - Robotis Dynamixel protocol 2.0.
  pub const CRC16_UMTS: Self = Self {
    name: "CRC-16/UMTS",
    width: 16,
    polynomial: 0x8005,
    initial: 0x0000,
    reflect_in: false,
    reflect_out: false,
    xor_out: 0x0000,
    check: 0xFEE8,
  };

  /// CRC-32/ISO-HDLC - Ethernet FCS and receive hash filters, zip, PNG.
  pub const CRC32_ISO_HDLC: Self = Self {
    name: "CRC-32/ISO-HDLC",
    width: 32,
    polynomial: 0x04C1_1DB7,
    initial: 0xFFFF_FFFF,
    reflect_in: true,
    reflect_out: true,
    xor_out: 0xFFFF_FFFF,
    check: 0xCBF4_3926,
  };

  /// Every built-in descriptor.
  pub const ALL: [Self; 8] = [
    Self::CRC8_SMBUS,
    Self::CRC8_DVB_S2,
    Self::CRC16_ARC,
    Self::CRC16_XMODEM,
    Self::CRC16_CCITT_FALSE,
    Self::CRC16_MODBUS,
    Self::CRC16_UMTS,
    Self::CRC32_ISO_HDLC,
  ];

  /// Mask covering the low `width` bits.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u32 {
    if self.width >= 32 {
      u32::MAX
    } else {
      (1u32 << self.width) - 1
    }
  }

  /// Returns the reflected polynomial (bit-reversed).
  ///
  /// For reflected CRCs, the polynomial is processed in bit-reversed form.
  #[inline]
  #[must_use]
  pub const fn polynomial_reflected(&self) -> u32 {
    reflect_bits(self.polynomial, self.width)
  }

  /// Register value before any input has been processed.
  #[inline]
  #[must_use]
  pub const fn init_register(&self) -> u32 {
    if self.reflect_in {
      reflect_bits(self.initial, self.width)
    } else {
      self.initial & self.mask()
    }
  }

  /// Convert a running register into the published checksum value.
  #[inline]
  #[must_use]
  pub const fn finalize(&self, register: u32) -> u32 {
    let register = if self.reflect_in != self.reflect_out {
      reflect_bits(register, self.width)
    } else {
      register
    };
    (register ^ self.xor_out) & self.mask()
  }

  /// Inverse of [`finalize`](Self::finalize): recover the register from a
  /// previously published checksum so computation can resume.
  #[inline]
  #[must_use]
  pub const fn register_from(&self, value: u32) -> u32 {
    let register = (value ^ self.xor_out) & self.mask();
    if self.reflect_in != self.reflect_out {
      reflect_bits(register, self.width)
    } else {
      register
    }
  }

  /// Checksum of a zero-length message.
  #[inline]
  #[must_use]
  pub const fn empty_value(&self) -> u32 {
    self.finalize(self.init_register())
  }
}

/// Reflect (bit-reverse) the lower `width` bits of `value`.
#[inline]
#[must_use]
pub const fn reflect_bits(value: u32, width: u8) -> u32 {
  if width == 0 {
    return 0;
  }
  value.reverse_bits() >> (32 - width as u32)
}
