use braid_rope::Rope;
use tracing::debug;

/// Print the byte at `index` in the input.
pub fn handle(text: &str, index: usize) -> Result<(), Box<dyn std::error::Error>> {
    let rope = Rope::from(text);
    let byte = rope.at(index)?;
    debug!(index, byte, "indexed");

    println!("{}", char::from(byte));
    Ok(())
}
