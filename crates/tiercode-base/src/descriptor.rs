use std::fmt;

use crate::material::Material;
use crate::piece::{Piece, KING};
use crate::tier::Tier;

/// A line that cannot be read as an endgame descriptor. Each variant keeps the offending line
/// (without its terminator) so the message can quote it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineFault {
    MissingLeadingKing { line: String },
    MissingSecondKing { line: String },
    UnknownPiece { line: String, ch: char },
}

impl fmt::Display for LineFault {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LineFault::MissingLeadingKing { line } => write!(f, "Line {line} does not start with K!"),
            LineFault::MissingSecondKing { line } => write!(f, "Line {line} does not contain a second K!"),
            LineFault::UnknownPiece { line, ch } => write!(f, "Line {line} contains unknown piece '{ch}'!"),
        }
    }
}

impl std::error::Error for LineFault {}

impl LineFault {
    pub fn line(&self) -> &str {
        match self {
            LineFault::MissingLeadingKing { line }
            | LineFault::MissingSecondKing { line }
            | LineFault::UnknownPiece { line, .. } => line,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Part {
    BeforeDelimiter,
    AfterDelimiter,
}

/// An endgame descriptor such as `KAPKp`: red material between the leading king and the
/// second king, black material after it. Black material may be written in either case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Descriptor {
    material: Material,
}

impl Descriptor {
    pub fn parse(line: &str) -> Result<Descriptor, LineFault> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        let Some(rest) = line.strip_prefix(KING) else {
            return Err(LineFault::MissingLeadingKing { line: line.to_string() });
        };

        let (part, material) = rest.chars().try_fold(
            (Part::BeforeDelimiter, Material::new()),
            |(part, mut material), ch| -> Result<(Part, Material), LineFault> {
                let ch = match part {
                    Part::BeforeDelimiter if ch == KING => return Ok((Part::AfterDelimiter, material)),
                    Part::BeforeDelimiter => ch,
                    Part::AfterDelimiter => ch.to_ascii_lowercase(),
                };
                let p = Piece::from_char(ch).map_err(|_| LineFault::UnknownPiece {
                    line: line.to_string(),
                    ch,
                })?;
                material.add(p);
                Ok((part, material))
            },
        )?;

        if part == Part::BeforeDelimiter {
            return Err(LineFault::MissingSecondKing { line: line.to_string() });
        }
        trace!("parsed '{line}' into {material}");
        Ok(Descriptor { material })
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn to_tier(&self) -> Tier {
        Tier::initial(self.material)
    }
}
