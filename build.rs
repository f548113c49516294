use clap::CommandFactory;
use std::fs;
use std::path::Path;

// The CLI definition is self-contained, so it can be included directly here
// to render the man page without building the rest of the crate first.
#[allow(dead_code)]
#[path = "src/cli/args.rs"]
mod args;

use args::Cli;

fn main() -> std::io::Result<()> {
    generate_man_page()?;

    println!("cargo:rerun-if-changed=src/cli/args.rs");
    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}

fn generate_man_page() -> std::io::Result<()> {
    let out_dir = std::env::var("OUT_DIR").unwrap_or_else(|_| "target".to_string());
    let man_dir = Path::new(&out_dir).join("man1");
    fs::create_dir_all(&man_dir)?;

    let man = clap_mangen::Man::new(Cli::command());
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("hedera-walk.1"), buffer)
}
