//! Line-oriented terminal I/O.
//!
//! Every interactive flow talks to a [`Terminal`] rather than to stdin and
//! stdout directly, so the same code runs against a real console or against
//! in-memory buffers.

use std::io::{self, BufRead, Write};

use super::theme::{CLEAR_SCREEN, END_OF_TEXT};

/// Interactive text terminal.
pub trait Terminal {
    /// Print `prompt` without a newline and read one line of input.
    ///
    /// Returns `Ok(None)` at end of input. The line terminator is stripped.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Read free-form, possibly multi-line text until end of input.
    ///
    /// A line holding only the EOT control character also ends the block.
    fn read_block(&mut self) -> io::Result<String>;

    /// Print one line.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Clear the screen, if clearing is enabled.
    fn clear(&mut self) -> io::Result<()>;
}

/// Terminal over any buffered reader and writer.
pub struct IoTerminal<R, W> {
    reader: R,
    writer: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> IoTerminal<R, W> {
    pub fn new(reader: R, writer: W, clear_screen: bool) -> Self {
        Self {
            reader,
            writer,
            clear_screen,
        }
    }

    /// Consume the terminal, returning the writer.
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn next_raw_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        Ok(Some(buffer))
    }
}

impl IoTerminal<io::StdinLock<'static>, io::Stdout> {
    /// Terminal bound to the process's stdin and stdout.
    pub fn stdio(clear_screen: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), clear_screen)
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|rest| rest.strip_suffix('\r').unwrap_or(rest))
        .unwrap_or(line)
}

impl<R: BufRead, W: Write> Terminal for IoTerminal<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        Ok(self
            .next_raw_line()?
            .map(|line| strip_line_ending(&line).to_string()))
    }

    fn read_block(&mut self) -> io::Result<String> {
        let mut block = String::new();
        while let Some(line) = self.next_raw_line()? {
            if strip_line_ending(&line) == END_OF_TEXT {
                break;
            }
            block.push_str(&line);
        }
        Ok(block)
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", line)
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            write!(self.writer, "{}", CLEAR_SCREEN)?;
            self.writer.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn terminal(input: &str, clear: bool) -> IoTerminal<Cursor<Vec<u8>>, Vec<u8>> {
        IoTerminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), clear)
    }

    fn output(term: IoTerminal<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(term.into_writer()).unwrap()
    }

    #[test]
    fn test_read_line_strips_terminator_and_echoes_prompt() {
        let mut term = terminal("hello\r\nworld\n", false);

        assert_eq!(term.read_line("> ").unwrap().as_deref(), Some("hello"));
        assert_eq!(term.read_line("> ").unwrap().as_deref(), Some("world"));
        assert_eq!(term.read_line("> ").unwrap(), None);
        assert_eq!(output(term), "> > > ");
    }

    #[test]
    fn test_read_line_keeps_inner_whitespace() {
        let mut term = terminal("  two words  \n", false);
        assert_eq!(
            term.read_line("").unwrap().as_deref(),
            Some("  two words  ")
        );
    }

    #[test]
    fn test_read_block_until_eof() {
        let mut term = terminal("line one\nline two\n", false);
        assert_eq!(term.read_block().unwrap(), "line one\nline two\n");
        assert_eq!(term.read_line("").unwrap(), None);
    }

    #[test]
    fn test_read_block_stops_at_eot_line() {
        let mut term = terminal("first\nsecond\n\u{4}\nafter\n", false);

        assert_eq!(term.read_block().unwrap(), "first\nsecond\n");
        assert_eq!(term.read_line("").unwrap().as_deref(), Some("after"));
    }

    #[test]
    fn test_clear_respects_flag() {
        let mut enabled = terminal("", true);
        enabled.clear().unwrap();
        assert_eq!(output(enabled), CLEAR_SCREEN);

        let mut disabled = terminal("", false);
        disabled.clear().unwrap();
        assert_eq!(output(disabled), "");
    }
}
