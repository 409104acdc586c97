//! The `Uuid` value type.

use std::fmt;
use std::str::FromStr;

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::codec::{self, BRACED_LEN, CORE_LEN};
use crate::{FormatOptions, UuidError};

/// A 128-bit universally unique identifier.
///
/// Always exactly 16 bytes. Values are immutable and `Copy`; equality is
/// byte-for-byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Number of bytes in a UUID.
    pub const LEN: usize = 16;

    /// Generates a random version-4 UUID from the OS secure random source.
    ///
    /// Fails with [`UuidError::Entropy`] if the source cannot supply 16 bytes.
    /// The failure is not retried.
    pub fn new_v4() -> Result<Self, UuidError> {
        let mut bytes = [0u8; Self::LEN];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| UuidError::Entropy(e.to_string()))?;

        // Version 4 in the high nibble of time_hi_and_version.
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        // RFC 4122 variant (`10`) in the two high bits of clock_seq_hi.
        bytes[8] = (bytes[8] & 0x3f) | 0x80;

        let uuid = Self(bytes);
        tracing::trace!(%uuid, "generated v4 uuid");
        Ok(uuid)
    }

    /// The all-zero UUID.
    #[must_use]
    pub const fn nil() -> Self {
        Self([0; Self::LEN])
    }

    /// Creates a UUID from raw bytes. No version or variant bits are applied.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates a UUID by copying a slice that must be exactly 16 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, UuidError> {
        let bytes: [u8; 16] = bytes.try_into().map_err(|_| UuidError::InvalidLength {
            expected: "16 bytes",
            actual: bytes.len(),
        })?;
        Ok(Self(bytes))
    }

    /// Parses `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, optionally wrapped in
    /// `{` and `}`. Hex digits may be in either case.
    ///
    /// Any 128-bit value is accepted; version bits are not checked.
    pub fn parse(s: &str) -> Result<Self, UuidError> {
        let start = match s.len() {
            CORE_LEN => 0,
            BRACED_LEN => {
                let b = s.as_bytes();
                if b[0] != b'{' || b[BRACED_LEN - 1] != b'}' {
                    return Err(UuidError::InvalidFormat {
                        reason: "38-character form must be wrapped in '{' and '}'",
                    });
                }
                1
            }
            actual => {
                return Err(UuidError::InvalidLength {
                    expected: "36 or 38 characters",
                    actual,
                })
            }
        };

        codec::decode(s, start).map(Self)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Consumes the UUID, returning its raw bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns true if every byte is zero.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0 == [0; Self::LEN]
    }

    /// Returns the version number stored in the high nibble of byte 6.
    ///
    /// Informational only; raw and parsed UUIDs may carry any value here.
    #[must_use]
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Renders into `buf` and returns the written prefix as a `&str`.
    ///
    /// The result is exactly 36 characters, or 38 with braces.
    pub fn encode_into<'a>(
        &self,
        options: FormatOptions,
        buf: &'a mut [u8; BRACED_LEN],
    ) -> &'a str {
        let len = options.rendered_len();
        if options.with_braces() {
            buf[0] = b'{';
            codec::encode(&self.0, options.upper_case(), &mut buf[1..=CORE_LEN]);
            buf[BRACED_LEN - 1] = b'}';
        } else {
            codec::encode(&self.0, options.upper_case(), &mut buf[..CORE_LEN]);
        }

        match std::str::from_utf8(&buf[..len]) {
            Ok(s) => s,
            // The codec writes only ASCII hex digits, hyphens, and braces.
            Err(_) => unreachable!("uuid codec produced non-ASCII output"),
        }
    }

    /// Formats the UUID according to `options`.
    #[must_use]
    pub fn format(&self, options: FormatOptions) -> String {
        let mut buf = [0u8; BRACED_LEN];
        self.encode_into(options, &mut buf).to_owned()
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; BRACED_LEN];
        f.write_str(self.encode_into(FormatOptions::NONE, &mut buf))
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uuid({self})")
    }
}

impl FromStr for Uuid {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(uuid: Uuid) -> Self {
        uuid.0
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = UuidError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl serde::Serialize for Uuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut buf = [0u8; BRACED_LEN];
        serializer.serialize_str(self.encode_into(FormatOptions::NONE, &mut buf))
    }
}

impl<'de> serde::Deserialize<'de> for Uuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
