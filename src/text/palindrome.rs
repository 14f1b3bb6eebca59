use serde::Serialize;

/// Which algorithm to use when checking for a palindrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Scan inward from both ends, skipping non-alphanumerics
    #[default]
    TwoPointer,
    /// Filter to lowercase alphanumerics and compare with the reverse
    Reverse,
}

impl Strategy {
    pub fn check(self, s: &str) -> bool {
        match self {
            Strategy::TwoPointer => is_palindrome(s),
            Strategy::Reverse => is_palindrome_reversed(s),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::TwoPointer => write!(f, "two-pointer"),
            Strategy::Reverse => write!(f, "reverse"),
        }
    }
}

/// Returns true if `s` reads the same in both directions, considering only
/// ASCII letters and digits and ignoring letter case.
///
/// Works on bytes: every byte of a multi-byte UTF-8 sequence is outside the
/// ASCII range, so non-ASCII characters are skipped as a whole.
pub fn is_palindrome(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return true;
    }

    let (mut l, mut r) = (0, bytes.len() - 1);

    while l < r {
        while l < r && !bytes[l].is_ascii_alphanumeric() {
            l += 1;
        }
        while r > l && !bytes[r].is_ascii_alphanumeric() {
            r -= 1;
        }
        if !bytes[l].eq_ignore_ascii_case(&bytes[r]) {
            return false;
        }
        l += 1;
        r = r.saturating_sub(1);
    }

    true
}

/// Same result as [`is_palindrome`], built by filtering then reversing.
pub fn is_palindrome_reversed(s: &str) -> bool {
    let filtered: Vec<u8> = s
        .bytes()
        .filter(u8::is_ascii_alphanumeric)
        .map(|b| b.to_ascii_lowercase())
        .collect();

    filtered.iter().eq(filtered.iter().rev())
}
