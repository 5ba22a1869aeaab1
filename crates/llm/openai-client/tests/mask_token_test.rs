//! Unit tests for [`openai_client::mask_token`].
//!
//! Keys are masked for logging as first 7 chars + `***` + last 4 chars; keys of length ≤ 11 are
//! fully masked.

use openai_client::mask_token;

/// **Test: Short or empty tokens are fully masked.**
///
/// **Expected:** Any token of length ≤ 11 returns `"***"` (no prefix/suffix shown).
#[test]
fn mask_token_short_returns_all_star() {
    assert_eq!(mask_token(""), "***");
    assert_eq!(mask_token("sk-12345"), "***");
    assert_eq!(mask_token("sk-proj-123"), "***");
}

/// **Test: Long tokens show first 7 and last 4 characters.**
///
/// **Expected:** For length > 11, result is `head(7) + "***" + tail(4)`.
#[test]
fn mask_token_long_shows_head_and_tail() {
    assert_eq!(mask_token("sk-proj-abcdefghijklmnop"), "sk-proj***mnop");
    assert_eq!(mask_token("sk-proj-xyzw"), "sk-proj***xyzw");
}

/// **Test: Multi-byte characters at the cut points.**
///
/// **Expected:** No panic; the key is fully masked as `"***"`.
#[test]
fn mask_token_non_ascii_is_fully_masked() {
    assert_eq!(mask_token("密钥密钥密钥密钥"), "***");
}
