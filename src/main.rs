//! Shift every frame of a JSON sprite atlas.
//!
//! Run without arguments to pad `collectables.json` into
//! `collectables_padded.json` by 2 pixels, or pass paths and an offset:
//!
//! `atlaspad assets/ui.json -o assets/ui_padded.json --offset 1`

use std::error::Error as _;
use std::path::PathBuf;

use clap::Parser;

use atlaspad::{PadOptions, DEFAULT_INPUT_FILE, DEFAULT_OFFSET, DEFAULT_OUTPUT_FILE};

#[derive(Debug, Parser)]
#[command(name = "atlaspad", version)]
#[command(about = "Add a fixed offset to the origin of every frame in a JSON sprite atlas")]
struct Args {
    /// Atlas to read
    #[arg(default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Where to write the padded atlas
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Pixels added to every frame's x and y
    #[arg(long, default_value_t = DEFAULT_OFFSET, allow_negative_numbers = true)]
    offset: i64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let options = PadOptions::default().input(args.input).output(args.output).offset(args.offset);
    match atlaspad::pad_file(&options) {
        Ok(report) => {
            println!(
                "✅ padded {} frames by {}px, wrote {}",
                report.frames,
                report.offset,
                report.output.display()
            );
        }
        Err(e) => {
            eprintln!("Padding atlas failed: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            std::process::exit(1);
        }
    }
}
