use std::io::{self, Write};

pub(super) fn render(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Hi, welcome to my corner of the internet.")?;
    writeln!(out)?;
    writeln!(
        out,
        "I'm a software developer who mostly works on systems: runtimes, storage and the"
    )?;
    writeln!(
        out,
        "plumbing underneath things. This site is a small program you talk to over a prompt,"
    )?;
    writeln!(out, "because a terminal felt more honest than a landing page.")
}
