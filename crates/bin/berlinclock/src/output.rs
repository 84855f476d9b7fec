//! Writers for rendered clock faces.

use std::io::{self, Write};

use berlin_clock_domain::face::ClockFace;
use serde::{Deserialize, Serialize};

/// Output encoding for rendered faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Five lamp rows per time, blank line between faces.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    time: &'a str,
    #[serde(flatten)]
    face: &'a ClockFace,
}

/// Streams faces to `out` in the chosen format.
pub struct FaceWriter<W> {
    out: W,
    format: OutputFormat,
    written: usize,
}

impl<W: Write> FaceWriter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            written: 0,
        }
    }

    /// Write one face, labelled with the time it was derived from.
    ///
    /// # Errors
    ///
    /// Propagates IO errors from the underlying writer.
    pub fn write(&mut self, time: &str, face: &ClockFace) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                if self.written > 0 {
                    writeln!(self.out)?;
                }
                writeln!(self.out, "{face}")?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, &JsonRecord { time, face })?;
                writeln!(self.out)?;
            }
        }
        self.written += 1;
        Ok(())
    }

    /// Flush the underlying writer.
    ///
    /// # Errors
    ///
    /// Propagates IO errors from the final flush.
    pub fn finish(mut self) -> io::Result<()> {
        self.out.flush()
    }
}
