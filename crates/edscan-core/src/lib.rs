pub mod present;
pub mod record;

pub use present::{hex_dump, present, PresentOptions};
pub use record::{decode, DecodeError, EdidRecord, EDID_V1_HEADER, MIN_EDID_LEN};
