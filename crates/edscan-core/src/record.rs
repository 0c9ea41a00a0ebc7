use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every EDID v1 block starts with this fixed 8-byte magic.
pub const EDID_V1_HEADER: [u8; 8] = [0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00];

/// Bytes needed to cover header, vendor id, product code and serial number.
pub const MIN_EDID_LEN: usize = 20;

/// Identity fields decoded from the first 20 bytes of an EDID block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdidRecord {
    /// Three-letter manufacturer code, e.g. "DEL" or "GSM".
    pub vendor: String,
    pub product: u16,
    pub serial: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("corrupt EDID v1 header")]
    BadHeader,
    #[error("EDID block too short: {0} bytes, need {MIN_EDID_LEN}")]
    TooShort(usize),
}

/// Decodes the identity fields of an EDID v1 block.
///
/// The header magic is the only correctness check: on mismatch no field is
/// decoded at all. The three 5-bit vendor groups are mapped to ASCII with
/// plain arithmetic (1 is 'A', 26 is 'Z'); groups outside that range pass
/// through to '@', '[' .. '_' unchecked, matching how X tooling has always
/// read this field.
pub fn decode(raw: &[u8]) -> Result<EdidRecord, DecodeError> {
    if raw.len() < MIN_EDID_LEN {
        return Err(DecodeError::TooShort(raw.len()));
    }
    if raw[..8] != EDID_V1_HEADER {
        return Err(DecodeError::BadHeader);
    }

    // Vendor id: 15 bits, big-endian word, 5 bits per letter.
    let h = u16::from_be_bytes([raw[8], raw[9]]);
    let vendor = [(h >> 10) & 0x1F, (h >> 5) & 0x1F, h & 0x1F]
        .iter()
        .map(|g| (*g as u8 + 0x40) as char)
        .collect();

    Ok(EdidRecord {
        vendor,
        product: u16::from_le_bytes([raw[10], raw[11]]),
        serial: u32::from_le_bytes([raw[12], raw[13], raw[14], raw[15]]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> Vec<u8> {
        let mut raw = EDID_V1_HEADER.to_vec();
        // "DEL" = 4, 5, 12 -> 0b00100_00101_01100 = 0x10AC, big-endian.
        raw.extend_from_slice(&[0x10, 0xAC]);
        raw.extend_from_slice(&[0x34, 0x12]); // product 0x1234, little-endian
        raw.extend_from_slice(&[0x78, 0x56, 0x34, 0x12]); // serial 0x12345678
        raw.extend_from_slice(&[0x00; 4]);
        raw
    }

    #[test]
    fn decodes_identity_fields() {
        let rec = decode(&block()).unwrap();
        assert_eq!(rec.vendor, "DEL");
        assert_eq!(format!("{:04x}", rec.product), "1234");
        assert_eq!(format!("{:08x}", rec.serial), "12345678");
    }

    #[test]
    fn header_mismatch_is_terminal() {
        for i in 0..8 {
            let mut raw = block();
            raw[i] ^= 0x01;
            assert_eq!(decode(&raw), Err(DecodeError::BadHeader), "byte {i}");
        }
    }

    #[test]
    fn short_block_is_rejected() {
        let raw = block();
        assert_eq!(decode(&raw[..19]), Err(DecodeError::TooShort(19)));
        assert_eq!(decode(&[]), Err(DecodeError::TooShort(0)));
        assert!(decode(&raw[..20]).is_ok());
    }

    #[test]
    fn vendor_round_trip_all_letters() {
        let mut raw = block();
        for a in 1u16..=26 {
            for b in 1u16..=26 {
                for c in 1u16..=26 {
                    let packed = (a << 10) | (b << 5) | c;
                    raw[8..10].copy_from_slice(&packed.to_be_bytes());
                    let want: String = [a, b, c]
                        .iter()
                        .map(|g| (*g as u8 + 0x40) as char)
                        .collect();
                    assert_eq!(decode(&raw).unwrap().vendor, want);
                }
            }
        }
    }

    #[test]
    fn out_of_range_vendor_groups_pass_through() {
        let mut raw = block();
        raw[8..10].copy_from_slice(&0u16.to_be_bytes());
        assert_eq!(decode(&raw).unwrap().vendor, "@@@");
        raw[8..10].copy_from_slice(&((31u16 << 10) | (27 << 5) | 1).to_be_bytes());
        assert_eq!(decode(&raw).unwrap().vendor, "_[A");
    }

    #[test]
    fn decode_is_pure() {
        let raw = block();
        assert_eq!(decode(&raw), decode(&raw));
    }
}
