//! Colored terminal output helpers.
//!
//! All user-facing status goes through these functions so we get
//! consistent styling across every command.  Status lines go to stderr
//! because stdout may be carrying ciphertext or plaintext.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::crypto::BlobLayout;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    eprintln!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    eprintln!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Build a table of blob fields (Field, Offset, Length).
pub fn layout_table(layout: &BlobLayout<'_>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Offset", "Length"]);

    let mut offset = 0;
    let mut fields: Vec<(&str, usize)> = Vec::with_capacity(4);
    if let Some(salt) = layout.salt() {
        fields.push(("salt", salt.len()));
    }
    fields.push(("nonce", layout.nonce().len()));
    fields.push(("ciphertext", layout.ciphertext().len()));
    fields.push(("tag", layout.tag().len()));

    for (name, len) in fields {
        table.add_row(vec![name.to_string(), offset.to_string(), len.to_string()]);
        offset += len;
    }

    table
}

/// Print the blob layout table to stdout.
pub fn print_layout_table(layout: &BlobLayout<'_>) {
    println!("{}", layout_table(layout));
}
