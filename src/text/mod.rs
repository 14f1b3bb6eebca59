//! String utilities: word-boundary truncation and palindrome checks

mod palindrome;
mod truncate;

pub use palindrome::{Strategy, is_palindrome, is_palindrome_reversed};
pub use truncate::{ELLIPSIS, ELLIPSIS_SUFFIX, truncate};
