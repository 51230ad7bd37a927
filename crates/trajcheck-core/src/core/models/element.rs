use phf::{Map, phf_map};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An element symbol accepted in the atom block of a trajectory.
///
/// The vocabulary is closed: a trajectory that names any other element is
/// rejected during validation. Symbols are matched exactly and case-sensitively, so `"Br"`
/// is an element while `"BR"` and `"br"` are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Element {
    /// Hydrogen.
    H,
    /// Carbon.
    C,
    /// Oxygen.
    O,
    /// Fluorine.
    F,
    /// Bromine.
    Br,
}

static ELEMENT_SYMBOLS: Map<&'static str, Element> = phf_map! {
    "H" => Element::H,
    "C" => Element::C,
    "O" => Element::O,
    "F" => Element::F,
    "Br" => Element::Br,
};

/// Error returned when a string is not one of the whitelisted element symbols.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a recognized element symbol")]
pub struct UnknownElement(pub String);

impl Element {
    /// Every element of the vocabulary, in declaration order.
    pub const ALL: [Element; 5] = [Element::H, Element::C, Element::O, Element::F, Element::Br];

    /// Returns the chemical symbol as it appears in trajectory files.
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::H => "H",
            Element::C => "C",
            Element::O => "O",
            Element::F => "F",
            Element::Br => "Br",
        }
    }

    /// Looks up an element by its exact symbol.
    ///
    /// # Return
    ///
    /// Returns `None` when `symbol` is not in the vocabulary. No trimming or case folding
    /// is applied.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        ELEMENT_SYMBOLS.get(symbol).copied()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl FromStr for Element {
    type Err = UnknownElement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| UnknownElement(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_symbol_accepts_every_whitelisted_symbol() {
        for element in Element::ALL {
            assert_eq!(Element::from_symbol(element.symbol()), Some(element));
        }
    }

    #[test]
    fn from_symbol_is_case_sensitive() {
        assert_eq!(Element::from_symbol("Br"), Some(Element::Br));
        assert_eq!(Element::from_symbol("BR"), None);
        assert_eq!(Element::from_symbol("br"), None);
        assert_eq!(Element::from_symbol("h"), None);
    }

    #[test]
    fn from_symbol_rejects_partial_and_padded_symbols() {
        assert_eq!(Element::from_symbol("B"), None);
        assert_eq!(Element::from_symbol(" H"), None);
        assert_eq!(Element::from_symbol("H "), None);
        assert_eq!(Element::from_symbol("Hg"), None);
        assert_eq!(Element::from_symbol(""), None);
    }

    #[test]
    fn from_str_reports_the_unknown_symbol() {
        assert_eq!("O".parse::<Element>(), Ok(Element::O));
        assert_eq!(
            "Xe".parse::<Element>(),
            Err(UnknownElement("Xe".to_string()))
        );
    }

    #[test]
    fn display_respects_width_and_alignment() {
        assert_eq!(format!("{}", Element::Br), "Br");
        assert_eq!(format!("[{:<2}]", Element::C), "[C ]");
        assert_eq!(format!("[{:>3}]", Element::F), "[  F]");
    }
}
