use std::fmt;

use anyhow::{Context, Result};

use crate::piece::{Piece, Side};

/// Piece counts for both sides, one bucket per [`Piece`] index.
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Hash)]
pub struct Material {
    counts: [u32; Piece::LEN],
}

/// the counts as decimal digits in bucket order, eg "100011000000"
impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for count in &self.counts {
            write!(f, "{count}")?;
        }
        Ok(())
    }
}

impl Material {
    #[inline]
    pub fn new() -> Material {
        Self::default()
    }

    pub fn from_counts(counts: [u32; Piece::LEN]) -> Material {
        Material { counts }
    }

    /// Material::from_piece_str("APp")
    pub fn from_piece_str(s: &str) -> Result<Material> {
        let mut m = Material::new();
        for ch in s.chars() {
            let p = Piece::from_char(ch).with_context(|| format!("parsing material from '{s}'"))?;
            m.add(p);
        }
        Ok(m)
    }

    #[inline]
    pub fn add(&mut self, p: Piece) {
        self.counts[p] += 1;
    }

    #[inline]
    pub fn count(&self, p: Piece) -> u32 {
        self.counts[p]
    }

    #[inline]
    pub fn counts(&self) -> &[u32; Piece::LEN] {
        &self.counts
    }

    #[inline]
    pub fn pawns(&self, s: Side) -> u32 {
        self.count(Piece::pawn(s))
    }

    #[inline]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn side(&self, s: Side) -> Material {
        let mut m = Material::new();
        for &p in Piece::ALL.iter().filter(|p| p.side() == s) {
            m.counts[p] = self.counts[p];
        }
        m
    }

    /// true if any bucket needs more than a single digit
    pub fn overflows_digit(&self) -> bool {
        self.counts.iter().any(|&c| c > 9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceKind;
    use test_log::test;

    #[test]
    fn test_material() -> Result<()> {
        let m = Material::from_piece_str("APp")?;
        assert_eq!(m.to_string(), "100011000000");
        assert_eq!(m.total(), 3);
        assert_eq!(m.pawns(Side::Red), 1);
        assert_eq!(m.pawns(Side::Black), 1);
        assert_eq!(m.count(Piece::new(PieceKind::Advisor, Side::Red)), 1);
        assert_eq!(m.count(Piece::new(PieceKind::Advisor, Side::Black)), 0);
        assert_eq!(Material::new().to_string(), "000000000000");
        assert_eq!(Material::new(), Material::from_piece_str("")?);
        Ok(())
    }

    #[test]
    fn test_material_sides() -> Result<()> {
        let m = Material::from_piece_str("RRCpna")?;
        assert_eq!(m.side(Side::Red).to_string(), "000000001020");
        assert_eq!(m.side(Side::Black).to_string(), "010001010000");
        assert_eq!(m.side(Side::Red).total() + m.side(Side::Black).total(), m.total());
        Ok(())
    }

    #[test]
    fn test_material_errors() {
        let e = Material::from_piece_str("AQ").unwrap_err();
        assert_eq!(e.to_string(), "parsing material from 'AQ'");
        assert_eq!(e.root_cause().to_string(), "Unknown piece 'Q'");
    }

    #[test]
    fn test_overflow() -> Result<()> {
        let m = Material::from_piece_str(&"r".repeat(10))?;
        assert_eq!(m.overflows_digit(), true);
        // accepted limitation - the count is written as is
        assert_eq!(m.to_string(), "0000000000010");
        assert_eq!(Material::from_piece_str("ppppp")?.overflows_digit(), false);
        Ok(())
    }
}
