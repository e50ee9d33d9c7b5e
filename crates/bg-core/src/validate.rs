//! Range checks shared by the configuration types of every crate.

use std::fmt::Debug;
use std::ops::RangeBounds;

use crate::{BgError, BgResult};

/// Fail with [`BgError::Config`] unless `value` lies in `range`.
///
/// NaN is never contained in any range, so it is rejected too.
pub fn check_range<T, R>(name: &str, value: T, range: R) -> BgResult<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&value) {
        return Err(BgError::Config(format!(
            "{name} must be in the range {range:?}, but is {value:?}"
        )));
    }
    Ok(())
}
