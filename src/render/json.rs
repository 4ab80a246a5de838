//! JSON rendering of the full checklist model

use std::io::{self, Write};

use crate::checklist::Checklist;

/// Write `checklist` as pretty-printed JSON followed by a newline.
///
/// Unlike the text report this includes every populated field.
pub fn render_json<W: Write>(checklist: &Checklist, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, checklist)?;
    writeln!(out)
}
