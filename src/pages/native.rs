use std::io::{self, Write};

pub(super) fn render(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Everything you see here is produced by a native binary.")?;
    writeln!(out)?;
    writeln!(
        out,
        "Each page is a function compiled into the program. There is no server-side templating,"
    )?;
    writeln!(
        out,
        "no database and no network access: the pages are part of the executable itself."
    )
}
