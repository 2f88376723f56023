//! The interpreter: dispatch, scoping and substitution.
//!
//! One step consumes one semantic unit under an active [`Mapping`]: a group,
//! a math span, a named symbol, a command (which makes the next unit run
//! under its own mapping) or a single character. Scopes nest, and each scope
//! restores the enclosing mapping when it closes.
//!
//! Nesting is kept on an explicit frame stack instead of the call stack, so
//! arbitrarily deep `{{{...` input only costs heap.

use std::io::Write;
use std::ops::ControlFlow;

use l2u_tables::{Mapping, SubstitutionTable};
use tracing::{trace, warn};

use crate::config::ConvertConfig;
use crate::diag::{ConvertReport, Diagnostic};
use crate::error::{Error, Result};
use crate::lookahead::LookaheadBuffer;
use crate::sink::OutputSink;
use crate::source::ByteSource;
use crate::utf8::Utf8Unit;

const GROUP_OPEN: &[u8] = b"{";
const GROUP_CLOSE: &[u8] = b"}";
const MATH_SHIFT: &[u8] = b"$";

/// Pending work, innermost last.
#[derive(Debug, Clone, Copy)]
enum Frame<'t> {
    /// One unit still to be processed under this mapping.
    Step(&'t Mapping),
    /// An open group or math span: keep stepping until `close` is consumed.
    Until {
        mapping: &'t Mapping,
        close: &'static [u8],
    },
}

/// Streams input through a substitution table into an output sink.
#[derive(Debug)]
pub struct Interpreter<'t, S, W> {
    table: &'t SubstitutionTable,
    math: &'t Mapping,
    error_markers: bool,
    input: LookaheadBuffer<S>,
    output: OutputSink<W>,
    frames: Vec<Frame<'t>>,
    diagnostics: Vec<Diagnostic>,
}

impl<'t, S: ByteSource, W: Write> Interpreter<'t, S, W> {
    /// Set up a conversion from `source` to `writer`.
    ///
    /// Fails only when `config.math_command` names a mapping the table lacks.
    pub fn new(
        table: &'t SubstitutionTable,
        config: &ConvertConfig,
        source: S,
        writer: W,
    ) -> Result<Self> {
        let math = match &config.math_command {
            Some(command) => table
                .find_mapping(command)
                .ok_or_else(|| Error::UnknownMathMapping(command.clone()))?,
            None => &table.math,
        };
        Ok(Self {
            table,
            math,
            error_markers: config.error_markers,
            input: LookaheadBuffer::new(source),
            output: OutputSink::new(writer),
            frames: Vec::with_capacity(16),
            diagnostics: Vec::new(),
        })
    }

    /// Convert until the input is exhausted.
    pub fn run(mut self) -> Result<ConvertReport> {
        while !self.input.at_end()? {
            if self.process_one(Mapping::identity())?.is_break() {
                break;
            }
        }
        self.output.flush()?;
        Ok(self.finish())
    }

    /// Consume one unit under `mapping`, including any scope it opens.
    ///
    /// Returns `Break` when the input ran out before the unit was complete;
    /// the `(error:...)` marker has been written and nothing more will be
    /// read.
    pub fn process_one(&mut self, mapping: &'t Mapping) -> Result<ControlFlow<()>> {
        self.frames.push(Frame::Step(mapping));
        while let Some(frame) = self.frames.pop() {
            let active = match frame {
                Frame::Step(m) | Frame::Until { mapping: m, .. } => m,
            };
            if self.input.at_end()? {
                self.frames.clear();
                self.incomplete(active)?;
                return Ok(ControlFlow::Break(()));
            }
            match frame {
                Frame::Until { mapping, close } => {
                    if !self.input.try_consume_literal(close)? {
                        self.frames.push(frame);
                        self.frames.push(Frame::Step(mapping));
                    }
                }
                Frame::Step(mapping) => self.step(mapping)?,
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    /// Dispatch on the next input under `mapping`. Input is known to be
    /// non-empty.
    fn step(&mut self, mapping: &'t Mapping) -> Result<()> {
        let table = self.table;

        if self.input.try_consume_literal(GROUP_OPEN)? {
            self.frames.push(Frame::Until {
                mapping,
                close: GROUP_CLOSE,
            });
            return Ok(());
        }

        // Math mode only starts from plain text. Under another mapping the
        // `$` stays in the input and ends up as an ordinary character.
        if mapping.is_identity() && self.input.try_consume_literal(MATH_SHIFT)? {
            trace!(offset = self.input.offset(), "math mode");
            self.frames.push(Frame::Until {
                mapping: self.math,
                close: MATH_SHIFT,
            });
            return Ok(());
        }

        for named in &table.named {
            if self.input.try_consume_literal(named.command().as_bytes())? {
                return self.emit_text(mapping, named.text());
            }
        }

        for next in &table.mappings {
            if self.input.try_consume_literal(next.command().as_bytes())? {
                trace!(command = next.command(), "mapping");
                self.frames.push(Frame::Step(next));
                return Ok(());
            }
        }

        match self.input.take_unit()? {
            Some(unit) => self.emit_unit(mapping, unit),
            None => Ok(()),
        }
    }

    /// Substitute a single input character, or pass it through.
    fn emit_unit(&mut self, mapping: &Mapping, unit: Utf8Unit) -> Result<()> {
        match unit.to_char().and_then(|ch| mapping.lookup(ch)) {
            Some(replacement) => self.output.write_char(replacement)?,
            None => self.output.write_unit(unit)?,
        }
        Ok(())
    }

    /// Named-symbol text goes through the same lookup as a typed character.
    /// Text longer than one character never matches and is written as is.
    fn emit_text(&mut self, mapping: &Mapping, text: &str) -> Result<()> {
        let mut chars = text.chars();
        let replacement = match (chars.next(), chars.next()) {
            (Some(ch), None) => mapping.lookup(ch),
            _ => None,
        };
        match replacement {
            Some(ch) => self.output.write_char(ch)?,
            None => self.output.write_str(text)?,
        }
        Ok(())
    }

    fn incomplete(&mut self, mapping: &Mapping) -> Result<()> {
        let offset = self.input.offset();
        warn!(
            command = mapping.command(),
            offset, "input ended inside an unfinished command"
        );
        self.diagnostics
            .push(Diagnostic::incomplete_command(mapping.command(), offset));
        if self.error_markers {
            self.output.write_str("(error:")?;
            self.output.write_str(mapping.command())?;
            self.output.write_str(")")?;
        }
        Ok(())
    }

    fn finish(self) -> ConvertReport {
        ConvertReport {
            bytes_in: self.input.offset(),
            bytes_out: self.output.written(),
            diagnostics: self.diagnostics,
        }
    }

    /// Bytes written so far.
    pub fn written(&self) -> usize {
        self.output.written()
    }

    /// Stop early and hand back the writer.
    pub fn into_writer(self) -> W {
        self.output.into_inner()
    }
}
