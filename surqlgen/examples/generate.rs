//! Generates Effect Schema classes from a JSON table list.
//!
//! Run with: `cargo run --example generate -- [tables.json] [output.ts]`
//!
//! Without arguments the bundled `blog.json` is used and the module is printed
//! to stdout.

use std::path::PathBuf;
use surqlgen::prelude::*;

const BLOG_TABLES: &str = include_str!("blog.json");

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let tables = match args.next() {
        Some(input) => load_tables(&PathBuf::from(input))?,
        None => parse_tables_json(BLOG_TABLES)?,
    };

    match args.next() {
        Some(output) => write_schema_file(&tables, &PathBuf::from(output))?,
        None => print!("{}", generate_schema_document(&tables)?),
    }

    Ok(())
}
