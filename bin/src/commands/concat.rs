use braid_rope::Rope;
use tracing::debug;

/// Build one rope by concatenating the parts in order, then print its
/// content and length.
pub fn handle(parts: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut rope = Rope::new();
    for part in parts {
        rope.concat(&Rope::from(part.as_str()));
    }
    debug!(parts = parts.len(), len = rope.len(), "concatenated");

    println!("{rope}");
    println!("length: {}", rope.len());
    Ok(())
}
