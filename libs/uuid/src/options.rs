//! Rendering options for the textual UUID form.

use std::ops::{BitOr, BitOrAssign};

/// Flags controlling how a UUID is rendered as text.
///
/// Flags are independent and combine with `|`. They only affect rendering,
/// never the underlying bytes.
///
/// ```
/// use plfm_uuid::FormatOptions;
///
/// let opts = FormatOptions::WITH_BRACES | FormatOptions::UPPER_CASE;
/// assert!(opts.contains(FormatOptions::UPPER_CASE));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FormatOptions(u8);

impl FormatOptions {
    /// Lowercase, no braces.
    pub const NONE: Self = Self(0);

    /// Wrap the rendered string in `{` and `}`.
    pub const WITH_BRACES: Self = Self(1 << 0);

    /// Render hex digits as `A-F` instead of `a-f`.
    pub const UPPER_CASE: Self = Self(1 << 1);

    /// Returns true if every flag set in `other` is also set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn with_braces(self) -> bool {
        self.contains(Self::WITH_BRACES)
    }

    #[must_use]
    pub const fn upper_case(self) -> bool {
        self.contains(Self::UPPER_CASE)
    }

    /// Length of the string these options render to.
    #[must_use]
    pub const fn rendered_len(self) -> usize {
        if self.with_braces() {
            crate::codec::BRACED_LEN
        } else {
            crate::codec::CORE_LEN
        }
    }
}

impl BitOr for FormatOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for FormatOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
