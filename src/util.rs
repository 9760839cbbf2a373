//! Banner helpers shared by the driver.

/// Decorative line printed before and after each argument's processing block.
pub const BANNER: &str = "************************************************************";

/// Write [`BANNER`] followed by a newline to `out`.
pub fn print_banner(out: &mut dyn std::io::Write) -> std::io::Result<()> {
    writeln!(out, "{}", BANNER)
}
