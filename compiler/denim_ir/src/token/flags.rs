//! Per-token metadata flags.

use bitflags::bitflags;

bitflags! {
    /// Kind-specific facts about a token, packed into one byte.
    ///
    /// Most tokens carry no flags. The lexer sets them; nothing downstream
    /// mutates them.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct TokenFlags: u8 {
        /// A line terminator appeared between the previous token and this one.
        const NEWLINE_BEFORE = 1 << 0;
        /// Line comment introduced by exactly three slashes.
        const DOC_COMMENT = 1 << 1;
        /// Block comment opened with `/*!`.
        const LEGAL_COMMENT = 1 << 2;
        /// Quoted literal contains escapes or non-ASCII text; its value is
        /// decoded on demand instead of at scan time.
        const NEEDS_SLOW_DECODE = 1 << 3;
        /// `"""` string.
        const MULTI_LINE = 1 << 4;
        /// `r"..."` / `r#"..."#` string; backslashes are literal.
        const RAW = 1 << 5;
    }
}
