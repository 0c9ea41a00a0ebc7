use crate::record::{DecodeError, EdidRecord};

/// Marker printed in place of the identity fields when decoding fails.
pub const CORRUPT_MARKER: &str = "<corrupt EDID v1 header>";

#[derive(Debug, Clone)]
pub struct PresentOptions {
    pub verbose: bool,
    /// First byte included in the hex dump. 8 skips the header magic;
    /// 0 reproduces the legacy full-block dump.
    pub dump_offset: usize,
}

impl Default for PresentOptions {
    fn default() -> Self {
        PresentOptions {
            verbose: false,
            dump_offset: 8,
        }
    }
}

/// Lowercase hex of `raw[start..]`, two digits per byte, no separators.
pub fn hex_dump(raw: &[u8], start: usize) -> String {
    raw.iter()
        .skip(start)
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Renders one output's record as a text block ending in a newline.
pub fn present(
    name: &str,
    raw: &[u8],
    decoded: &Result<EdidRecord, DecodeError>,
    opts: &PresentOptions,
) -> String {
    let mut out = format!("{}:{}", name, hex_dump(raw, opts.dump_offset));
    match decoded {
        Err(_) => {
            out.push_str(CORRUPT_MARKER);
            out.push('\n');
        }
        Ok(rec) if opts.verbose => {
            out.push('\n');
            out.push_str(&format!("  vendor : {}\n", rec.vendor));
            out.push_str(&format!("  product: {:04x}\n", rec.product));
            out.push_str(&format!("  serial : {:08x}\n", rec.serial));
        }
        Ok(rec) => {
            out.push_str(&format!(
                ":{}:{:04x}:{:08x}\n",
                rec.vendor, rec.product, rec.serial
            ));
        }
    }
    out
}
