// src/common/crc.rs

use super::error::Am2320Error;
use crc::{Algorithm, Crc};

/// CRC algorithm used by the AM2320 family (CRC-16/MODBUS).
/// Polynomial: 0x8005 (0xA001 in the reflected form the wire uses)
/// Initial Value: 0xFFFF
/// Input Reflected: true
/// Output Reflected: true
/// Final XOR: 0x0000
/// Check Value: 0x4B37 (for "123456789") - standard for CRC-16/MODBUS
/// Residue: 0x0000
pub const AM2320_CRC: Algorithm<u16> = Algorithm {
    poly: 0x8005,
    init: 0xFFFF,
    refin: true,
    refout: true,
    xorout: 0x0000,
    check: 0x4B37,
    width: 16,
    residue: 0x0000,
};

// Create a Crc instance for the AM2320 algorithm for reuse.
const CRC_COMPUTER: Crc<u16> = Crc::<u16>::new(&AM2320_CRC);

/// Calculates the AM2320 CRC-16 (CRC-16/MODBUS) for the given data buffer.
///
/// Uses the `crc` crate configured for the standard CRC-16/MODBUS
/// algorithm, which matches the checksum computed by the sensor firmware:
/// seed `0xFFFF`, each byte XORed into the running value, then eight
/// shift-right iterations XORing `0xA001` whenever the low bit was set.
/// The calculation covers every frame byte up to, but not including, the
/// 2-byte CRC trailer.
///
/// # Arguments
///
/// * `data`: The bytes to checksum.
///
/// # Returns
///
/// The 16-bit CRC of `data`.
#[inline]
pub fn calculate_crc16(data: &[u8]) -> u16 {
    CRC_COMPUTER.checksum(data)
}

/// Encodes a 16-bit CRC value into the two trailer bytes (LSB first).
///
/// The sensor transmits the low byte second-to-last and the high byte
/// last, so the trailer is the little-endian encoding of the value.
///
/// # Arguments
///
/// * `crc_value`: The 16-bit CRC to encode.
///
/// # Returns
///
/// The two trailer bytes, low byte first.
pub fn encode_crc(crc_value: u16) -> [u8; 2] {
    crc_value.to_le_bytes()
}

/// Decodes the two trailer bytes (LSB first) into a 16-bit CRC value.
///
/// Reconstructs `high_byte << 8 | low_byte` from the last two bytes of a
/// response frame.
///
/// # Arguments
///
/// * `crc_bytes`: The two trailer bytes, low byte first.
///
/// # Returns
///
/// The CRC value carried by the trailer.
///
/// # Panics
///
/// Panics unless `crc_bytes` is exactly 2 bytes long.
pub fn decode_crc(crc_bytes: &[u8]) -> u16 {
    assert_eq!(crc_bytes.len(), 2, "CRC trailer must be 2 bytes long");
    u16::from_le_bytes([crc_bytes[0], crc_bytes[1]])
}

/// Verifies a complete AM2320 response frame including its CRC trailer.
///
/// The last two bytes of the buffer are taken as the trailer.
///
/// # Arguments
///
/// * `frame_with_crc`: The complete response frame including the 2-byte CRC.
///
/// # Returns
///
/// * `Ok(())` when the trailer agrees with the computed CRC.
/// * `Err(Am2320Error::TruncatedFrame)` if the buffer is too short.
/// * `Err(Am2320Error::CrcMismatch)` if the CRCs don't match.
pub fn verify_frame_crc<E>(frame_with_crc: &[u8]) -> Result<(), Am2320Error<E>>
where
    E: core::fmt::Debug,
{
    if frame_with_crc.len() < 2 {
        return Err(Am2320Error::TruncatedFrame {
            needed: 2,
            got: frame_with_crc.len(),
        });
    }
    let data_len = frame_with_crc.len() - 2;
    let data_part = &frame_with_crc[..data_len];
    let received_crc_bytes = &frame_with_crc[data_len..];

    let calculated_crc = calculate_crc16(data_part);
    let received_crc = decode_crc(received_crc_bytes);

    if calculated_crc == received_crc {
        Ok(())
    } else {
        Err(Am2320Error::CrcMismatch { expected: received_crc, calculated: calculated_crc })
    }
}
