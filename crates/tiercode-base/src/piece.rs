use std::fmt;
use std::ops::{Index, IndexMut};

use anyhow::{anyhow, bail, Result};
use strum::EnumCount;
use strum_macros::{Display, EnumCount, EnumIter};

/// the king symbol, never a piece bucket - only separates the two sides of a descriptor
pub const KING: char = 'K';

#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, EnumCount, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    #[default]
    Red = 0,
    Black = 1,
} // red moves first, written upper case

impl<T> Index<Side> for [T; 2] {
    type Output = T;
    #[inline]
    fn index(&self, s: Side) -> &Self::Output {
        &self[s.index()]
    }
}

impl<T> IndexMut<Side> for [T; 2] {
    #[inline]
    fn index_mut(&mut self, s: Side) -> &mut Self::Output {
        &mut self[s.index()]
    }
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Red, Side::Black];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_piece_char(ch: char) -> Result<Side> {
        if ch.is_ascii_lowercase() {
            return Ok(Side::Black);
        } else if ch.is_ascii_uppercase() {
            return Ok(Side::Red);
        }
        Err(anyhow!("cannot get side for char '{}'", ch))
    }
}

#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, EnumCount, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PieceKind {
    #[default]
    Advisor,
    Bishop,
    Pawn,
    Knight,
    Cannon,
    Rook,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Advisor,
        PieceKind::Bishop,
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Cannon,
        PieceKind::Rook,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn to_upper_char(self) -> char {
        match self {
            PieceKind::Advisor => 'A',
            PieceKind::Bishop => 'B',
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Cannon => 'C',
            PieceKind::Rook => 'R',
        }
    }
}

/// One of the twelve piece buckets of a tier hash.
///
/// Buckets are ordered kind-major, side-minor, which gives the fixed symbol order
/// `A a B b P p N n C c R r`.
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
}

impl<T> Index<Piece> for [T; Piece::LEN] {
    type Output = T;
    #[inline]
    fn index(&self, p: Piece) -> &Self::Output {
        &self[p.index()]
    }
}

impl<T> IndexMut<Piece> for [T; Piece::LEN] {
    #[inline]
    fn index_mut(&mut self, p: Piece) -> &mut Self::Output {
        &mut self[p.index()]
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl Piece {
    pub const LEN: usize = PieceKind::COUNT * Side::COUNT;

    pub const ALL: [Piece; Piece::LEN] = {
        let mut all = [Piece::new(PieceKind::Advisor, Side::Red); Piece::LEN];
        let mut i = 0;
        while i < Piece::LEN {
            all[i] = Piece::from_index(i);
            i += 1;
        }
        all
    };

    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Piece {
        Piece { kind, side }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn side(self) -> Side {
        self.side
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.kind.index() * Side::COUNT + self.side.index()
    }

    /// panics if i >= 12
    #[inline]
    pub const fn from_index(i: usize) -> Piece {
        let side = Side::ALL[i % Side::COUNT];
        let kind = PieceKind::ALL[i / Side::COUNT];
        Piece { kind, side }
    }

    #[inline]
    pub const fn pawn(side: Side) -> Piece {
        Piece::new(PieceKind::Pawn, side)
    }

    #[inline]
    pub const fn to_char(self) -> char {
        match self.side {
            Side::Red => self.kind.to_upper_char(),
            Side::Black => self.kind.to_upper_char().to_ascii_lowercase(),
        }
    }

    /// case sensitive: 'P' is a red pawn and 'p' a black one
    #[inline]
    pub fn from_char(ch: char) -> Result<Piece> {
        let side = match Side::from_piece_char(ch) {
            Ok(side) => side,
            Err(_) => bail!("Unknown piece '{ch}'"),
        };
        let kind = match ch.to_ascii_uppercase() {
            'A' => PieceKind::Advisor,
            'B' => PieceKind::Bishop,
            'P' => PieceKind::Pawn,
            'N' => PieceKind::Knight,
            'C' => PieceKind::Cannon,
            'R' => PieceKind::Rook,
            _ => bail!("Unknown piece '{ch}'"),
        };
        Ok(Piece::new(kind, side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;
    use test_log::test;

    #[test]
    fn side() {
        assert_eq!(Side::from_piece_char('n').unwrap(), Side::Black);
        assert_eq!(Side::from_piece_char('N').unwrap(), Side::Red);
        assert_eq!(Side::from_piece_char('5').is_err(), true);
        assert_eq!(Side::Black.to_string(), "black");
        let array = [1, 2];
        assert_eq!(array[Side::Red], 1);
        assert_eq!(array[Side::Black], 2);
    }

    #[test]
    fn symbol_table() {
        let symbols: String = Piece::ALL.iter().map(|p| p.to_char()).collect();
        assert_eq!(symbols, "AaBbPpNnCcRr");
        for (i, p) in Piece::ALL.iter().enumerate() {
            assert_eq!(p.index(), i);
            assert_eq!(Piece::from_index(i), *p);
            assert_eq!(Piece::from_char(p.to_char()).unwrap(), *p);
        }
        assert_eq!(PieceKind::iter().count() * Side::iter().count(), Piece::LEN);
    }

    #[test]
    fn piece() {
        assert_eq!(Piece::from_char('A').unwrap().index(), 0);
        assert_eq!(Piece::from_char('p').unwrap().index(), 5);
        assert_eq!(Piece::from_char('r').unwrap().index(), 11);
        assert_eq!(Piece::pawn(Side::Red).index(), 4);
        assert_eq!(Piece::from_char('C').unwrap(), Piece::new(PieceKind::Cannon, Side::Red));
        assert_eq!(Piece::from_char('c').unwrap().side(), Side::Black);
        assert_eq!(Piece::from_char('c').unwrap().kind(), PieceKind::Cannon);
        assert_eq!(Piece::from_char('K').is_err(), true);
        assert_eq!(Piece::from_char('k').is_err(), true);
        assert_eq!(Piece::from_char('Q').unwrap_err().to_string(), "Unknown piece 'Q'");
        assert_eq!(Piece::from_char('é').is_err(), true);
        let mut buckets = [0; Piece::LEN];
        buckets[Piece::pawn(Side::Black)] += 1;
        assert_eq!(buckets[5], 1);
    }
}
