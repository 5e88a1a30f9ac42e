use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tiercode_base::prelude::*;

/// Outcome of a conversion pass. A fault stops the pass, so `converted` counts the lines
/// written before it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub fault:     Option<LineFault>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "converted {} lines", self.converted)?;
        if let Some(fault) = &self.fault {
            write!(f, " then halted: {fault}")?;
        }
        Ok(())
    }
}

impl Summary {
    pub fn is_complete(&self) -> bool {
        self.fault.is_none()
    }
}

/// Reads a file of endgame descriptors and writes one tier hash per line.
///
/// The first bad line is reported on the same writer as the tier hashes and ends the pass.
#[derive(Clone, Debug)]
pub struct Converter {
    input: PathBuf,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INPUT)
    }
}

impl Converter {
    pub const DEFAULT_INPUT: &'static str = "./endgames";

    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self { input: input.into() }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn run(&self, out: &mut impl Write) -> Result<Summary> {
        let text = read_file_to_string(&self.input)?;
        let summary = Self::convert_str(&text, out)
            .with_context(|| format!("writing tiers for {}", self.input.display()))?;
        info!("{file}: {summary}", file = self.input.display());
        Ok(summary)
    }

    pub fn convert_str(text: &str, out: &mut impl Write) -> Result<Summary> {
        let mut summary = Summary::default();
        for line in text.lines() {
            match Descriptor::parse(line) {
                Ok(descriptor) => {
                    if descriptor.material().overflows_digit() {
                        warn!("'{line}' has 10 or more of a piece, tier hash is wider than 12 digits");
                    }
                    writeln!(out, "{}", descriptor.to_tier())?;
                    summary.converted += 1;
                }
                Err(fault) => {
                    // reported on the writer, so kept off stderr at the default level
                    debug!(line = fault.line(), "halted: {fault}");
                    writeln!(out, "{fault}")?;
                    summary.fault = Some(fault);
                    break;
                }
            }
        }
        out.flush()?;
        Ok(summary)
    }
}
