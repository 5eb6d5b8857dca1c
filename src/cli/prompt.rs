//! Reading user input, either from the terminal or from a fixed script.
use std::{
    collections::VecDeque,
    io::{self, BufRead, IsTerminal, Write},
};

/// A source of user input. Both methods return [Ok<None>] once input has ended.
pub trait Prompt {
    /// Show `message` and read one line, without its line terminator.
    fn line(&mut self, message: &str) -> io::Result<Option<String>>;

    /// Show `message` and read one line without echoing it.
    fn secret(&mut self, message: &str) -> io::Result<Option<String>>;
}

/// Interactive input from stdin. Secrets are read with `rpassword` when stdin is a terminal and
/// as plain lines otherwise.
#[derive(Debug, Default)]
pub struct Terminal;
impl Prompt for Terminal {
    fn line(&mut self, message: &str) -> io::Result<Option<String>> {
        print!("{}", message);
        io::stdout().flush()?;
        read_line_lossy(&mut io::stdin().lock())
    }

    fn secret(&mut self, message: &str) -> io::Result<Option<String>> {
        if !io::stdin().is_terminal() {
            return self.line(message);
        }
        match rpassword::prompt_password(message) {
            Ok(secret) => Ok(Some(secret)),
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// Input replayed from a list of lines. Every message shown is kept in a transcript.
#[derive(Debug, Default)]
pub struct Scripted {
    lines: VecDeque<String>,
    transcript: String,
}
impl Scripted {
    /// Create a [Scripted] prompt answering with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            transcript: String::new(),
        }
    }

    /// Every prompt message shown so far.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Number of lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}
impl Prompt for Scripted {
    fn line(&mut self, message: &str) -> io::Result<Option<String>> {
        self.transcript.push_str(message);
        Ok(self.lines.pop_front())
    }

    fn secret(&mut self, message: &str) -> io::Result<Option<String>> {
        self.line(message)
    }
}

/// Read one line from `reader` without its line terminator. Bytes that are not valid UTF-8
/// become U+FFFD instead of an error.
///
/// Return [Ok<None>] at end of input.
pub(crate) fn read_line_lossy<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    Ok(Some(strip_line_ending(
        String::from_utf8_lossy(&bytes).into_owned(),
    )))
}

// Helper function to drop a trailing "\n" or "\r\n".
fn strip_line_ending(mut input: String) -> String {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    input
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn line_endings_are_stripped() {
        assert_eq!(strip_line_ending(String::from("1\n")), "1");
        assert_eq!(strip_line_ending(String::from("1\r\n")), "1");
        assert_eq!(strip_line_ending(String::from(" cash ")), " cash ");
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut input: &[u8] = b"\xff1\r\ncash\n\n";
        assert_eq!(
            read_line_lossy(&mut input).unwrap().as_deref(),
            Some("\u{fffd}1")
        );
        assert_eq!(read_line_lossy(&mut input).unwrap().as_deref(), Some("cash"));
        assert_eq!(read_line_lossy(&mut input).unwrap().as_deref(), Some(""));
        assert_eq!(read_line_lossy(&mut input).unwrap(), None);
    }

    #[test]
    fn last_line_without_terminator() {
        let mut input: &[u8] = b"4";
        assert_eq!(read_line_lossy(&mut input).unwrap().as_deref(), Some("4"));
        assert_eq!(read_line_lossy(&mut input).unwrap(), None);
    }

    #[test]
    fn scripted_runs_dry() {
        let mut prompt = Scripted::new(["admin"]);
        assert_eq!(prompt.line("Enter username: ").unwrap().as_deref(), Some("admin"));
        assert_eq!(prompt.secret("Enter password: ").unwrap(), None);
        assert_eq!(prompt.transcript(), "Enter username: Enter password: ");
        assert_eq!(prompt.remaining(), 0);
    }
}
