use anyhow::{bail, Context, Result};
use tracing::debug;
use x11rb::connection::Connection;
use x11rb::protocol::randr::ConnectionExt as RandrConnectionExt;
use x11rb::protocol::xproto::{ConnectionExt as XprotoConnectionExt, Window};
use x11rb::rust_connection::RustConnection;

/// One display output and the raw bytes of its EDID property.
#[derive(Debug, Clone)]
pub struct OutputEdid {
    pub name: String,
    pub edid: Vec<u8>,
}

/// An open X session with RandR available.
pub struct X11Source {
    conn: RustConnection,
    root: Window,
}

impl X11Source {
    /// Connects to the display named by `$DISPLAY` and verifies that the
    /// server speaks RandR 1.3 or newer.
    pub fn connect() -> Result<Self> {
        let (conn, screen_num) =
            RustConnection::connect(None).context("could not open display")?;
        let root = conn.setup().roots[screen_num].root;

        let ver = conn
            .randr_query_version(1, 5)
            .context("RandR extension missing")?
            .reply()
            .context("RandR extension missing")?;
        if ver.major_version < 1 || (ver.major_version == 1 && ver.minor_version < 3) {
            bail!(
                "RandR version {}.{} too old",
                ver.major_version,
                ver.minor_version
            );
        }

        Ok(X11Source { conn, root })
    }

    /// Enumerates all outputs and returns those that expose an EDID
    /// property. Outputs without one are skipped silently.
    pub fn edid_outputs(&self) -> Result<Vec<OutputEdid>> {
        let resources = self
            .conn
            .randr_get_screen_resources_current(self.root)?
            .reply()
            .context("could not get screen resources")?;
        let edid_atom = self.conn.intern_atom(false, b"EDID")?.reply()?.atom;

        let mut list = Vec::new();
        for output in resources.outputs {
            let info = match self
                .conn
                .randr_get_output_info(output, resources.config_timestamp)?
                .reply()
            {
                Ok(info) => info,
                Err(err) => {
                    debug!(?output, %err, "skipping output without info");
                    continue;
                }
            };
            let name = String::from_utf8_lossy(&info.name).to_string();

            let prop = self
                .conn
                .randr_get_output_property(
                    output,
                    edid_atom,
                    x11rb::NONE,
                    0,
                    u32::MAX,
                    false,
                    false,
                )?
                .reply();
            match prop {
                Ok(prop) if prop.format == 8 && !prop.data.is_empty() => {
                    list.push(OutputEdid {
                        name,
                        edid: prop.data,
                    });
                }
                Ok(_) => debug!(name, "output has no EDID property"),
                Err(err) => debug!(name, %err, "could not read EDID property"),
            }
        }
        Ok(list)
    }
}
