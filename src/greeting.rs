//! Greeting output for an architecture class.

use std::io::Write;

use crate::arch::ArchitectureClass;
use crate::error::Result;

/// Render the greeting block for `arch` as a string.
///
/// The greeting line, then the architecture detail line when the class has
/// one. Every line is newline-terminated, so the block always ends with a
/// trailing newline.
pub fn render(arch: ArchitectureClass) -> String {
    let mut block = format!("Hello from macOS on {}!\n", arch);

    if let Some(detail) = arch.detail() {
        block.push_str(detail);
        block.push('\n');
    }

    block
}

/// Write the greeting block for `arch` to `out`.
pub fn write_greeting<W: Write>(out: &mut W, arch: ArchitectureClass) -> Result<()> {
    out.write_all(render(arch).as_bytes())?;
    Ok(())
}
