//! The command loop.
//!
//! [`Pager`] prints the instructions once, then repeats prompt, read, classify, respond
//! until a command or the input stream ends it. It owns its input buffer and borrows a
//! read-only [`Catalog`]; nothing else survives between iterations.

use crate::command::Command;
use crate::error::Result;
use crate::input::LineReader;
use crate::pages::Catalog;
use bstr::ByteSlice;
use log::debug;
use std::io::{Read, Write};
use std::ops::ControlFlow;

/// Usage text printed at startup and whenever a line is not understood.
pub const INSTRUCTIONS: &str = "\
To display a specific page, write the name of the page and then hit ENTER.
To list the pages, write 'list' and then hit ENTER.
To stop running, write 'exit' and then hit ENTER. Or, you know, the good ole CTRL+C.
";

/// Printed (and flushed) before every blocking read.
pub const PROMPT: &str = "\n# ";

/// Non-fatal diagnostic for a `blog` id outside the integer range.
pub const INVALID_POST_ID: &str = "Invalid 'post id' given. Must be an integer.";

/// Header printed before a page body.
pub fn page_preamble(name: &str) -> String {
    format!("\n===> Page: {}\n\n", name)
}

/// Interactive pager over an input stream, an output stream and an error stream.
pub struct Pager<'c, R, W, E> {
    catalog: &'c Catalog,
    reader: LineReader<R>,
    out: W,
    err: E,
}

impl<'c, R: Read, W: Write, E: Write> Pager<'c, R, W, E> {
    pub fn new(catalog: &'c Catalog, input: R, out: W, err: E) -> Self {
        Self::with_reader(catalog, LineReader::new(input), out, err)
    }

    pub fn with_reader(catalog: &'c Catalog, reader: LineReader<R>, out: W, err: E) -> Self {
        Self {
            catalog,
            reader,
            out,
            err,
        }
    }

    /// Run until `exit` (returns `Ok`) or a fatal condition (returns the error).
    ///
    /// The caller prints the error's diagnostic and exits with failure status; this
    /// method does not write fatal diagnostics itself.
    pub fn run(&mut self) -> Result<()> {
        self.out.write_all(INSTRUCTIONS.as_bytes())?;

        loop {
            self.prompt()?;

            let payload = self.reader.next_line()?;
            let command = Command::parse(payload, self.catalog);
            debug!("{:?} -> {:?}", payload.as_bstr(), command);

            if self.execute(command)?.is_break() {
                return Ok(());
            }
        }
    }

    /// Consume the pager, handing back its output and error streams.
    pub fn into_streams(self) -> (W, E) {
        (self.out, self.err)
    }

    fn prompt(&mut self) -> Result<()> {
        self.out.write_all(PROMPT.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn execute(&mut self, command: Command<'_>) -> Result<ControlFlow<()>> {
        match command {
            Command::Exit => return Ok(ControlFlow::Break(())),
            Command::List => self.catalog.write_listing(&mut self.out)?,
            Command::ShowPage(page) => {
                self.out.write_all(page_preamble(page.name).as_bytes())?;
                page.render(&mut self.out)?;
            }
            Command::ShowBlogPost(post_id) => {
                if let Some(blog) = self.catalog.blog() {
                    blog.render_post(&mut self.out, post_id)?;
                }
            }
            Command::InvalidBlogId => {
                writeln!(self.err, "{}", INVALID_POST_ID)?;
            }
            Command::Unrecognized => self.out.write_all(INSTRUCTIONS.as_bytes())?,
        }
        Ok(ControlFlow::Continue(()))
    }
}
