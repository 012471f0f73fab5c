//! Syntax kinds for the Rowan-based CST
//!
//! One enum covers every token any dialect can produce and every node the
//! field grammar builds. Dialects select a subset of the token kinds as
//! their vocabulary (see [`crate::dialect`]).

/// All syntax kinds (tokens and nodes) of a cron field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
#[allow(non_camel_case_types)]
pub enum SyntaxKind {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    WHITESPACE = 0,

    // =========================================================================
    // VALUES
    // =========================================================================
    INTEGER,         // 15
    MONTH_NAME,      // JAN
    DAY_NAME,        // MON

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    COMMA,           // ,
    MINUS,           // -
    SLASH,           // /
    STAR,            // *
    QUESTION,        // ?

    // =========================================================================
    // QUARTZ SPECIALS
    // =========================================================================
    LAST,            // L
    LAST_WEEKDAY,    // LW
    NEAREST_WEEKDAY, // 15W
    LAST_OF_WEEKDAY, // 5L, FRIL
    NTH_WEEKDAY,     // MON#4

    // =========================================================================
    // JENKINS SPECIALS
    // =========================================================================
    HASH,            // H
    HASH_RANGE,      // H(0-29)

    // =========================================================================
    // INVALID INPUT
    // =========================================================================
    UNKNOWN_WORD,    // any other run of letters
    ERROR,

    // =========================================================================
    // NODES
    // =========================================================================
    FIELD,
    UNION,
    WILDCARD_EXPR,
    NO_SPECIFIC_EXPR,
    VALUE_EXPR,
    SPECIAL_EXPR,
    RANGE_EXPR,
    INTERVAL_EXPR,

    #[doc(hidden)]
    __LAST,
}

impl SyntaxKind {
    /// Check if this is a trivia token
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::WHITESPACE)
    }

    /// Check if this is a plain value token
    pub fn is_value(self) -> bool {
        matches!(self, Self::INTEGER | Self::MONTH_NAME | Self::DAY_NAME)
    }

    /// Check if this is a dialect-specific alias token
    pub fn is_special(self) -> bool {
        matches!(
            self,
            Self::LAST
                | Self::LAST_WEEKDAY
                | Self::NEAREST_WEEKDAY
                | Self::LAST_OF_WEEKDAY
                | Self::NTH_WEEKDAY
                | Self::HASH
                | Self::HASH_RANGE
        )
    }

    /// Check if a token of this kind can start a term
    pub fn is_atomic(self) -> bool {
        matches!(self, Self::STAR | Self::QUESTION) || self.is_value() || self.is_special()
    }

    /// Check if this is a node kind rather than a token kind
    pub fn is_node(self) -> bool {
        (self as u16) >= (Self::FIELD as u16) && (self as u16) < (Self::__LAST as u16)
    }

    /// Human-readable name used in diagnostics
    pub fn display_name(self) -> &'static str {
        match self {
            Self::WHITESPACE => "whitespace",
            Self::INTEGER => "number",
            Self::MONTH_NAME => "month name",
            Self::DAY_NAME => "day name",
            Self::COMMA => "','",
            Self::MINUS => "'-'",
            Self::SLASH => "'/'",
            Self::STAR => "'*'",
            Self::QUESTION => "'?'",
            Self::LAST => "'L'",
            Self::LAST_WEEKDAY => "'LW'",
            Self::NEAREST_WEEKDAY => "nearest-weekday marker",
            Self::LAST_OF_WEEKDAY => "last-weekday-of-month marker",
            Self::NTH_WEEKDAY => "nth-weekday marker",
            Self::HASH => "'H'",
            Self::HASH_RANGE => "hashed range",
            Self::UNKNOWN_WORD => "unknown word",
            Self::ERROR => "invalid character",
            _ => "node",
        }
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

impl From<rowan::SyntaxKind> for SyntaxKind {
    fn from(raw: rowan::SyntaxKind) -> Self {
        assert!(raw.0 < SyntaxKind::__LAST as u16);
        // Safety: we control all syntax kinds and check bounds above
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }
}

/// Language definition for Rowan
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CronLanguage {}

impl rowan::Language for CronLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        raw.into()
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

/// Type aliases for convenience
pub type SyntaxNode = rowan::SyntaxNode<CronLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<CronLanguage>;
pub type SyntaxElement = rowan::SyntaxElement<CronLanguage>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rowan_kind_roundtrip() {
        for kind in [SyntaxKind::INTEGER, SyntaxKind::NTH_WEEKDAY, SyntaxKind::INTERVAL_EXPR] {
            let raw: rowan::SyntaxKind = kind.into();
            assert_eq!(SyntaxKind::from(raw), kind);
        }
    }

    #[test]
    fn test_kind_classes() {
        assert!(SyntaxKind::HASH.is_special());
        assert!(SyntaxKind::STAR.is_atomic());
        assert!(!SyntaxKind::COMMA.is_atomic());
        assert!(SyntaxKind::FIELD.is_node());
        assert!(!SyntaxKind::ERROR.is_node());
    }
}
