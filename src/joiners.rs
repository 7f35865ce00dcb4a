//! Joiners configuration (Words only), per spec §3 / §4.3 / §6.

use alloc::collections::BTreeSet;

use crate::error::JoinersError;

const MAX_SCALAR: u32 = 0x10FFFF;
const SURROGATE_LOW: u32 = 0xD800;
const SURROGATE_HIGH: u32 = 0xDFFF;

fn validate(scalar: u32) -> Result<u32, JoinersError> {
    if scalar > MAX_SCALAR || (SURROGATE_LOW..=SURROGATE_HIGH).contains(&scalar) {
        Err(JoinersError::InvalidScalar(scalar))
    } else {
        Ok(scalar)
    }
}

/// User-configured scalars that override a would-be word boundary.
///
/// - **Middle** joiners bind across a boundary when they appear between two
///   letter/number runs (generalizing WB6/WB7 the way `MidLetter` and
///   `MidNumLetQ` already do for the built-in categories).
/// - **Leading** joiners bind when they begin a prospective word and are
///   immediately followed by a letter/number run (e.g. `#` in `#hashtag`).
///
/// Construction validates eagerly: every element must be a valid,
/// non-surrogate Unicode scalar value (spec §6). An absent `Joiners`
/// configuration and an empty one behave identically — both simply never
/// match, since [`Joiners::middle`]/[`Joiners::leading`] are consulted the
/// same way in either case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Joiners {
    middle: BTreeSet<u32>,
    leading: BTreeSet<u32>,
}

impl Joiners {
    /// An empty configuration: no scalars join anything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from iterables of scalar values, validating
    /// each one.
    pub fn try_from_scalars(
        middle: impl IntoIterator<Item = u32>,
        leading: impl IntoIterator<Item = u32>,
    ) -> Result<Self, JoinersError> {
        let middle = middle.into_iter().map(validate).collect::<Result<_, _>>()?;
        let leading = leading.into_iter().map(validate).collect::<Result<_, _>>()?;
        Ok(Self { middle, leading })
    }

    /// Adds a Middle joiner scalar, validating it.
    pub fn with_middle(mut self, scalar: u32) -> Result<Self, JoinersError> {
        self.middle.insert(validate(scalar)?);
        Ok(self)
    }

    /// Adds a Leading joiner scalar, validating it.
    pub fn with_leading(mut self, scalar: u32) -> Result<Self, JoinersError> {
        self.leading.insert(validate(scalar)?);
        Ok(self)
    }

    pub(crate) fn is_middle(&self, scalar: u32) -> bool {
        self.middle.contains(&scalar)
    }

    pub(crate) fn is_leading(&self, scalar: u32) -> bool {
        self.leading.contains(&scalar)
    }
}
