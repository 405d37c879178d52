//! Profile file I/O.
//!
//! A profile file is the interchange format for one slot: the slot's
//! protocol lines verbatim, one per row, no framing. The slot name is the
//! file stem.

use std::fs;
use std::path::Path;

use crate::error::SlotResult;
use crate::slot::Slot;

/// Read a profile file into a slot.
///
/// Blank lines are skipped; line terminators are stripped. The slot is
/// named after the file stem.
pub fn read_profile(path: impl AsRef<Path>) -> SlotResult<Slot> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "default".to_string());
    let contents = fs::read_to_string(path)?;
    let lines = contents
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect();
    Ok(Slot { name, lines })
}

/// Write a slot to a profile file, one protocol line per row.
pub fn write_profile(slot: &Slot, path: impl AsRef<Path>) -> SlotResult<()> {
    let mut contents = slot.lines.join("\n");
    contents.push('\n');
    fs::write(path, contents)?;
    Ok(())
}
