//! # plfm-uuid
//!
//! A 128-bit UUID value type with version-4 generation and a fixed-offset
//! codec for the canonical text form.
//!
//! ## Text Format
//!
//! `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, optionally wrapped in braces:
//!
//! - `6ba7b810-9dad-11d1-80b4-00c04fd430c8`
//! - `{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}`
//!
//! Parsing accepts either case and either form. Formatting is lowercase
//! without braces unless [`FormatOptions`] say otherwise.
//!
//! ```
//! use plfm_uuid::{FormatOptions, Uuid};
//!
//! let id: Uuid = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse()?;
//! assert_eq!(
//!     id.format(FormatOptions::WITH_BRACES | FormatOptions::UPPER_CASE),
//!     "{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}"
//! );
//!
//! let fresh = Uuid::new_v4()?;
//! assert_eq!(fresh.version(), 4);
//! # Ok::<(), plfm_uuid::UuidError>(())
//! ```

mod codec;
mod error;
mod options;
mod uuid;

pub use error::UuidError;
pub use options::FormatOptions;
pub use uuid::Uuid;
