//! Shared test helpers for `l2u_core` integration tests.

#![allow(unreachable_pub)]

use std::io::{self, BufReader, Read};

use l2u_core::{ConvertConfig, ConvertReport, SubstitutionTable, convert};

/// Convert with the built-in table and default settings.
#[allow(dead_code)]
pub fn conv(input: &str) -> String {
    l2u_core::convert_str(input).unwrap_or_else(|e| panic!("convert {input:?}: {e}"))
}

/// Convert raw bytes and return raw output plus the report.
#[allow(dead_code)]
pub fn conv_bytes(input: &[u8], config: &ConvertConfig) -> (Vec<u8>, ConvertReport) {
    let mut out = Vec::new();
    let report = convert(input, &mut out, SubstitutionTable::builtin(), config)
        .unwrap_or_else(|e| panic!("convert {input:?}: {e}"));
    (out, report)
}

/// Reader that hands out at most `chunk` bytes per `read` call.
#[allow(dead_code)]
pub struct Trickle<'a> {
    data: &'a [u8],
    chunk: usize,
}

impl<'a> Trickle<'a> {
    #[allow(dead_code)]
    pub fn new(data: &'a [u8], chunk: usize) -> Self {
        Self { data, chunk }
    }
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.chunk.min(buf.len()).min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

/// Convert through a reader that trickles `chunk` bytes at a time.
#[allow(dead_code)]
pub fn conv_trickled(input: &str, chunk: usize) -> String {
    let reader = BufReader::with_capacity(chunk, Trickle::new(input.as_bytes(), chunk));
    let mut out = Vec::new();
    convert(
        reader,
        &mut out,
        SubstitutionTable::builtin(),
        &ConvertConfig::default(),
    )
    .unwrap_or_else(|e| panic!("convert {input:?}: {e}"));
    String::from_utf8(out).expect("output of valid input is valid UTF-8")
}
