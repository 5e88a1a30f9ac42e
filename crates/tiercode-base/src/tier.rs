use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use itertools::Itertools;

use crate::material::Material;
use crate::piece::{Piece, Side};

/// Tier hash format:
///     [REMAINING_PIECES]_[RED_PAWN_ROWS]_[BLACK_PAWN_ROWS]
///
/// REMAINING_PIECES is one digit per piece bucket (see [`Piece`]). Each pawn rows field holds
/// one row digit per pawn of that side, non-increasing, counted from the far side of the
/// board. A pawn never gets beyond row 6, so every pawn of an initial tier sits on row 6.
#[derive(Clone, Default, Debug, Eq, PartialEq, Hash)]
pub struct Tier {
    material:  Material,
    pawn_rows: [String; 2],
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{material}_{red}_{black}",
            material = self.material,
            red = self.pawn_rows[Side::Red],
            black = self.pawn_rows[Side::Black]
        )
    }
}

impl FromStr for Tier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).with_context(|| format!("parsing tier '{s}'"))
    }
}

impl Tier {
    pub const INITIAL_PAWN_ROW: u8 = 6;

    pub fn initial(material: Material) -> Tier {
        let row = char::from(b'0' + Self::INITIAL_PAWN_ROW);
        let rows = |s: Side| row.to_string().repeat(material.pawns(s) as usize);
        Tier {
            material,
            pawn_rows: [rows(Side::Red), rows(Side::Black)],
        }
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn pawn_rows(&self, s: Side) -> &str {
        &self.pawn_rows[s]
    }

    fn parse(s: &str) -> Result<Tier> {
        let Some((digits, red, black)) = s.split('_').collect_tuple() else {
            bail!("expected <pieces>_<red pawn rows>_<black pawn rows>");
        };
        if digits.len() != Piece::LEN {
            bail!("expected {} piece digits but found '{digits}'", Piece::LEN);
        }
        let mut counts = [0; Piece::LEN];
        for (count, ch) in counts.iter_mut().zip(digits.chars()) {
            *count = ch.to_digit(10).ok_or_else(|| anyhow!("'{ch}' is not a piece count"))?;
        }
        let material = Material::from_counts(counts);
        for (side, rows) in Side::ALL.into_iter().zip([red, black]) {
            Self::check_pawn_rows(&material, side, rows)?;
        }
        Ok(Tier {
            material,
            pawn_rows: [red.to_string(), black.to_string()],
        })
    }

    fn check_pawn_rows(material: &Material, side: Side, rows: &str) -> Result<()> {
        let pawns = material.pawns(side) as usize;
        if rows.chars().count() != pawns {
            bail!("{side} has {pawns} pawns but pawn rows are '{rows}'");
        }
        let rows = rows
            .chars()
            .map(|ch| ch.to_digit(10).filter(|&r| r <= u32::from(Self::INITIAL_PAWN_ROW)))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| anyhow!("{side} pawn rows '{rows}' must be digits 0-6"))?;
        if rows.iter().tuple_windows().any(|(a, b)| a < b) {
            bail!("{side} pawn rows must be non-increasing");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_initial_tier() -> Result<()> {
        let t = Tier::initial(Material::from_piece_str("APp")?);
        assert_eq!(t.to_string(), "100011000000_6_6");
        assert_eq!(t.pawn_rows(Side::Red), "6");

        let t = Tier::initial(Material::from_piece_str("p")?);
        assert_eq!(t.to_string(), "000001000000__6");

        let t = Tier::initial(Material::from_piece_str("PPPpp")?);
        assert_eq!(t.to_string(), "000032000000_666_66");

        let t = Tier::initial(Material::new());
        assert_eq!(t.to_string(), "000000000000__");
        Ok(())
    }

    #[test]
    fn test_parse_tier() -> Result<()> {
        let t: Tier = "100011000000_6_6".parse()?;
        assert_eq!(t, Tier::initial(Material::from_piece_str("APp")?));
        let t: Tier = "000020000000_42_".parse()?;
        assert_eq!(t.material().pawns(Side::Red), 2);
        assert_eq!(t.pawn_rows(Side::Red), "42");
        assert_eq!(t.to_string(), "000020000000_42_");
        Ok(())
    }

    #[test]
    fn test_parse_tier_errors() {
        assert_eq!("".parse::<Tier>().is_err(), true);
        assert_eq!("100011000000_6".parse::<Tier>().is_err(), true);
        assert_eq!("10011000000_6_6".parse::<Tier>().is_err(), true);
        assert_eq!("1001100000x0_6_6".parse::<Tier>().is_err(), true);
        assert_eq!("100011000000_66_6".parse::<Tier>().is_err(), true);
        assert_eq!("100011000000_7_6".parse::<Tier>().is_err(), true);
        assert_eq!("000020000000_24_".parse::<Tier>().is_err(), true);
        assert_eq!("000001000000__6_".parse::<Tier>().is_err(), true);
        let e = "000020000000_24_".parse::<Tier>().unwrap_err();
        assert_eq!(e.to_string(), "parsing tier '000020000000_24_'");
        assert_eq!(e.root_cause().to_string(), "red pawn rows must be non-increasing");
    }
}
