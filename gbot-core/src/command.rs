//! Command mode applied to the next ingested post(s).

use serde::{Deserialize, Serialize};

/// The operation semantics a merge applies: plain update, removal flag, highlight
/// set/unset, or the month/year award toggles. Defaults to [`Command::Update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Command {
    #[default]
    Update,
    Remove,
    Fav,
    Unfav,
    Month,
    Year,
}

impl Command {
    /// Parses a textual command token, accepting the short aliases
    /// (update/u/upd, delete/d/rm, fav/f, unfav/uf, month/m, year/y).
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "update" | "u" | "upd" => Some(Self::Update),
            "delete" | "d" | "rm" => Some(Self::Remove),
            "fav" | "f" => Some(Self::Fav),
            "unfav" | "uf" => Some(Self::Unfav),
            "month" | "m" => Some(Self::Month),
            "year" | "y" => Some(Self::Year),
            _ => None,
        }
    }

    /// Canonical token, used when persisting the active mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Update => "update",
            Self::Remove => "delete",
            Self::Fav => "fav",
            Self::Unfav => "unfav",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// True for the update family, which is subject to the unchanged-caption skip.
    pub fn is_update(self) -> bool {
        self == Self::Update
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_tokens() {
        assert_eq!(Command::parse("update"), Some(Command::Update));
        assert_eq!(Command::parse("delete"), Some(Command::Remove));
        assert_eq!(Command::parse("fav"), Some(Command::Fav));
        assert_eq!(Command::parse("unfav"), Some(Command::Unfav));
        assert_eq!(Command::parse("month"), Some(Command::Month));
        assert_eq!(Command::parse("year"), Some(Command::Year));
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Command::parse("u"), Some(Command::Update));
        assert_eq!(Command::parse("upd"), Some(Command::Update));
        assert_eq!(Command::parse("d"), Some(Command::Remove));
        assert_eq!(Command::parse("rm"), Some(Command::Remove));
        assert_eq!(Command::parse("f"), Some(Command::Fav));
        assert_eq!(Command::parse("uf"), Some(Command::Unfav));
        assert_eq!(Command::parse("m"), Some(Command::Month));
        assert_eq!(Command::parse("y"), Some(Command::Year));
    }

    #[test]
    fn test_parse_unknown_token() {
        assert_eq!(Command::parse("frobnicate"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_roundtrip_through_as_str() {
        for cmd in [
            Command::Update,
            Command::Remove,
            Command::Fav,
            Command::Unfav,
            Command::Month,
            Command::Year,
        ] {
            assert_eq!(Command::parse(cmd.as_str()), Some(cmd));
        }
    }

    #[test]
    fn test_default_is_update() {
        assert_eq!(Command::default(), Command::Update);
        assert!(Command::default().is_update());
        assert!(!Command::Month.is_update());
    }
}
