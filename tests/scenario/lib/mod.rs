use std::{
    io,
    string::FromUtf8Error,
    sync::{Arc, Mutex},
};

use multitest::formatter::color::SupportsColor;


mod sanitize;
pub use sanitize::*;

#[derive(Debug)]
#[allow(dead_code)]
pub enum Error {
    Poison,
    FromUtf8(FromUtf8Error),
}

/// Shared in-memory write target that can pretend to be a terminal.
#[derive(Debug, Default, Clone)]
pub struct Buffer {
    bytes: Arc<Mutex<Vec<u8>>>,
    terminal: bool,
}

impl Buffer {
    pub fn terminal() -> Self {
        Self {
            terminal: true,
            ..Self::default()
        }
    }

    pub fn try_to_string(&self) -> Result<String, Error> {
        let guard = self.bytes.lock().map_err(|_| Error::Poison)?;
        String::from_utf8(guard.to_vec()).map_err(Error::FromUtf8)
    }
}

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .bytes
            .lock()
            .map_err(|_| io::Error::other("poison error"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SupportsColor for Buffer {
    fn supports_color(&self) -> bool {
        self.terminal
    }
}
