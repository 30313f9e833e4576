//! Byte stream to hex array text.
//!
//! Every byte becomes a `0x..,` token in minimal-width lowercase form, and a
//! newline follows every [`WRAP`]th token. The result is meant to be
//! `#include`d between the braces of a C array initializer.
use std::{
    io::{self, BufWriter, Read, Write},
    path::Path,
};

use anyhow::{Context, Result};
use fs_err::File;


/// Tokens per line.
pub const WRAP: u64 = 20;

const CHUNK_SIZE: usize = 8 * 1024;

pub struct HexWriter<W: Write> {
    inner: W,
    // Position of the next token, 1-based.
    lineno: u64,
}
impl<W: Write> HexWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, lineno: 1 }
    }

    /// Number of bytes written so far.
    pub fn count(&self) -> u64 {
        self.lineno - 1
    }

    pub fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        write!(self.inner, "{:#x},", byte)?;
        if self.lineno % WRAP == 0 {
            self.inner.write_all(b"\n")?;
        }
        self.lineno += 1;
        Ok(())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        for &byte in bytes {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Streams `reader` to `writer` chunk by chunk. Returns the byte count.
pub fn convert<R: Read, W: Write>(mut reader: R, writer: W) -> io::Result<u64> {
    let mut hex = HexWriter::new(writer);
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hex.write_bytes(&buf[..n])?;
    }
    let count = hex.count();
    hex.finish()?;
    Ok(count)
}

pub fn convert_file(spirv: &Path, output: &Path) -> Result<u64> {
    let reader = File::open(spirv)?;
    let writer = BufWriter::new(File::create(output)?);
    convert(reader, writer)
        .with_context(|| format!("failed to convert `{}` into `{}`", spirv.display(), output.display()))
}
