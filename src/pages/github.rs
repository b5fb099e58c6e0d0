use std::io::{self, Write};

pub(super) fn render(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Source code for my projects, this site included, lives on GitHub:")?;
    writeln!(out)?;
    writeln!(out, "    https://github.com/username")
}
