//! Random parameter selection.

use rand::Rng;

use crate::domain::AppError;

/// The randomly chosen parameters for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub library: String,
    pub difficulty: String,
}

/// Pick one element uniformly at random.
///
/// An empty slice is a caller error, not an undefined value.
pub fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> Result<&'a T, AppError> {
    if items.is_empty() {
        return Err(AppError::InvalidInput("cannot pick from an empty list".into()));
    }
    Ok(&items[rng.gen_range(0..items.len())])
}

/// Random label color: six lowercase hex digits, no `#` prefix.
///
/// GitHub's create-label endpoint rejects `#`-prefixed colors.
pub fn label_color<R: Rng>(rng: &mut R) -> String {
    format!("{:06x}", rng.gen_range(0..=0xFF_FF_FFu32))
}
