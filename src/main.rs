use anyhow::Result;
use clap::Parser;
use glass_icon::{generate_icon_set, GenerateOptions, DEFAULT_OUTPUT_DIR};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "glass-icon",
    about = "Render the glassmorphism clipboard app icon set"
)]
struct Args {
    /// Output directory. Must already exist.
    #[clap(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Also write the asset catalog Contents.json
    #[clap(long)]
    contents_json: bool,

    /// Also pack every size into icon.icns
    #[clap(long)]
    icns: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let options = GenerateOptions {
        contents_json: args.contents_json,
        icns: args.icns,
    };
    generate_icon_set(&args.output, &options)
}
