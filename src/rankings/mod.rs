//! Rankings
//!
//! Top-N product derivations for the storefront's home sections: best
//! sellers by aggregate revenue and best current discounts. Both are pure
//! over their inputs and recompute from scratch on every call.

use smallvec::SmallVec;

pub mod promotions;
pub mod sales;

/// Number of entries a ranking keeps.
pub const TOP_N: usize = 3;

/// Minimum qualifying entries before a ranked section is shown at all.
///
/// A ranked list with fewer entries is suppressed entirely rather than
/// rendered as a partial top-N.
pub const RANKED_SECTION_MIN: usize = 3;

/// Apply the section suppression policy: `None` unless the ranking has at
/// least [`RANKED_SECTION_MIN`] entries.
pub fn visible_section<T>(entries: SmallVec<[T; TOP_N]>) -> Option<SmallVec<[T; TOP_N]>> {
    (entries.len() >= RANKED_SECTION_MIN).then_some(entries)
}
