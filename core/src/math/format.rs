//! Textual representation shared by vectors and matrices.

use core::fmt::{self, Display, Formatter};

/// Writes `items` as a parenthesized, comma-separated tuple: `(a, b, c)`.
///
/// The formatter's flags (precision, width…) apply to every item.
pub(crate) fn write_tuple<'a, T, I>(f: &mut Formatter<'_>, items: I) -> fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("(")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        Display::fmt(item, f)?;
    }
    f.write_str(")")
}
