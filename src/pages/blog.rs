use std::io::{self, Write};

/// Published posts, indexed by post id.
const POSTS: &[&str] = &["Hello, world", "Framing input one read at a time"];

pub(super) fn render(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Posts (type 'blog' followed by the number in brackets to read one):")?;
    writeln!(out)?;
    for (id, title) in POSTS.iter().enumerate() {
        writeln!(out, "[{}] {}", id, title)?;
    }
    Ok(())
}

// Post bodies are not stored yet; only the resolved id is echoed.
pub(super) fn render_post(out: &mut dyn Write, post_id: u32) -> io::Result<()> {
    writeln!(out, "Displaying post {}", post_id)
}
