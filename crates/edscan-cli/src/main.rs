use anyhow::Result;
use edscan_core::{decode, present, PresentOptions};
use edscan_x11::X11Source;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: edscan [-v|--verbose] [-h|--help]";

fn parse_args() -> PresentOptions {
    let mut opts = PresentOptions::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => opts.verbose = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => {
                eprintln!("edscan: unknown argument: {other}\n{USAGE}");
                std::process::exit(2);
            }
        }
    }
    opts
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let opts = parse_args();

    let source = X11Source::connect()?;
    for out in source.edid_outputs()? {
        print!("{}", present(&out.name, &out.edid, &decode(&out.edid), &opts));
    }
    Ok(())
}
