//! `pwseal inspect` — show where each field of a blob sits.

use crate::cli::armor::{looks_armored, read_blob};
use crate::cli::output;
use crate::cli::{read_input, resolve_cipher, Cli};
use crate::crypto::BlobLayout;
use crate::errors::Result;

/// Execute the `inspect` command.
pub fn execute(cli: &Cli, input: &str) -> Result<()> {
    let format = resolve_cipher(cli)?.format();
    let raw = read_input(input)?;
    let armored = looks_armored(&raw);
    let blob = read_blob(raw)?;

    let layout = BlobLayout::parse(format, &blob)?;

    output::info(&format!(
        "{} bytes, {} layout{}",
        layout.total_len(),
        format.name(),
        if armored { ", base64 armored" } else { "" }
    ));
    output::print_layout_table(&layout);

    Ok(())
}
