use std::io::{self, Write};

/// Write `text` to `out` exactly as given and flush.
///
/// No newline is appended; callers include one when they want it.
pub fn msg(out: &mut dyn Write, text: &str) -> io::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()
}
