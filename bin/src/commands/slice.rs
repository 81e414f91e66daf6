use braid_rope::Rope;
use tracing::debug;

/// Print the `start..end` slice of the input.
pub fn handle(text: &str, start: usize, end: usize) -> Result<(), Box<dyn std::error::Error>> {
    let rope = Rope::from(text);
    let slice = rope.substring(start, end)?;
    debug!(start, end, len = slice.len(), "sliced");

    println!("{slice}");
    Ok(())
}
