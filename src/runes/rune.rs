//! Rune value types.
//!
//! A rune is either a normal color+symbol token, a wild (matches anything,
//! can never be skull-removed), or a skull (not a tile at all — an action
//! token that deletes an existing non-wild rune). Exactly one of the three
//! holds by construction.

use serde::{Deserialize, Serialize};

/// Rune colors, in palette order.
///
/// The board tier selects a prefix of this palette; tiers only ever widen
/// the prefix, so early colors stay in play for the whole game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Crimson,
    Azure,
    Emerald,
    Amber,
    Violet,
    Teal,
    Rose,
    Slate,
}

impl Color {
    /// Full ordered palette.
    pub const PALETTE: [Color; 8] = [
        Color::Crimson,
        Color::Azure,
        Color::Emerald,
        Color::Amber,
        Color::Violet,
        Color::Teal,
        Color::Rose,
        Color::Slate,
    ];
}

/// Rune symbols, in palette order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Symbol {
    /// Full ordered palette.
    pub const PALETTE: [Symbol; 12] = [
        Symbol::Aries,
        Symbol::Taurus,
        Symbol::Gemini,
        Symbol::Cancer,
        Symbol::Leo,
        Symbol::Virgo,
        Symbol::Libra,
        Symbol::Scorpio,
        Symbol::Sagittarius,
        Symbol::Capricorn,
        Symbol::Aquarius,
        Symbol::Pisces,
    ];
}

/// A rune token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rune {
    /// Ordinary placeable tile.
    Normal { color: Color, symbol: Symbol },
    /// Matches any neighbor; seeds the board at round start; never
    /// removable by a skull.
    Wild,
    /// Action token that deletes an existing non-wild rune. Never placed.
    Skull,
}

impl Rune {
    /// Create a normal rune.
    #[must_use]
    pub const fn normal(color: Color, symbol: Symbol) -> Self {
        Rune::Normal { color, symbol }
    }

    /// Is this a wild rune?
    #[must_use]
    pub const fn is_wild(&self) -> bool {
        matches!(self, Rune::Wild)
    }

    /// Is this a skull rune?
    #[must_use]
    pub const fn is_skull(&self) -> bool {
        matches!(self, Rune::Skull)
    }

    /// Do two runes share a property?
    ///
    /// Wild matches anything in either direction. Skulls never participate
    /// in matching. Normal runes match on color or symbol equality.
    #[must_use]
    pub fn matches(&self, other: &Rune) -> bool {
        match (self, other) {
            (Rune::Wild, _) | (_, Rune::Wild) => true,
            (Rune::Skull, _) | (_, Rune::Skull) => false,
            (
                Rune::Normal { color: ca, symbol: sa },
                Rune::Normal { color: cb, symbol: sb },
            ) => ca == cb || sa == sb,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wild_matches_everything() {
        let normal = Rune::normal(Color::Crimson, Symbol::Aries);
        assert!(Rune::Wild.matches(&normal));
        assert!(normal.matches(&Rune::Wild));
        assert!(Rune::Wild.matches(&Rune::Wild));
    }

    #[test]
    fn test_skull_matches_nothing() {
        let normal = Rune::normal(Color::Crimson, Symbol::Aries);
        assert!(!Rune::Skull.matches(&normal));
        assert!(!normal.matches(&Rune::Skull));
        assert!(!Rune::Skull.matches(&Rune::Skull));
    }

    #[test]
    fn test_wild_beats_skull() {
        // Wild is checked before skull, so the pair still matches.
        assert!(Rune::Wild.matches(&Rune::Skull));
        assert!(Rune::Skull.matches(&Rune::Wild));
    }

    #[test]
    fn test_normal_matches_on_color_or_symbol() {
        let a = Rune::normal(Color::Crimson, Symbol::Aries);
        let same_color = Rune::normal(Color::Crimson, Symbol::Leo);
        let same_symbol = Rune::normal(Color::Teal, Symbol::Aries);
        let neither = Rune::normal(Color::Teal, Symbol::Leo);

        assert!(a.matches(&same_color));
        assert!(a.matches(&same_symbol));
        assert!(a.matches(&a));
        assert!(!a.matches(&neither));
    }

    #[test]
    fn test_matching_is_symmetric() {
        let a = Rune::normal(Color::Azure, Symbol::Virgo);
        let b = Rune::normal(Color::Azure, Symbol::Pisces);
        assert_eq!(a.matches(&b), b.matches(&a));
    }

    #[test]
    fn test_exactly_one_variant() {
        let normal = Rune::normal(Color::Crimson, Symbol::Aries);
        assert!(!normal.is_wild() && !normal.is_skull());
        assert!(Rune::Wild.is_wild() && !Rune::Wild.is_skull());
        assert!(Rune::Skull.is_skull() && !Rune::Skull.is_wild());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Color::Crimson).unwrap();
        assert_eq!(json, "\"crimson\"");
        let json = serde_json::to_string(&Symbol::Aries).unwrap();
        assert_eq!(json, "\"aries\"");
    }
}
