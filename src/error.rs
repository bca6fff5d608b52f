/// Configuration errors raised while building a [`crate::Unidecode`].
///
/// Table loading never fails: missing or unreadable tables degrade to absent
/// entries and are only logged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unsupported charset: {0:?} (expected ASCII or ISO-8859-2)")]
    UnsupportedCharset(String),

    #[error("unsupported unknown-character policy: {0:?} (expected `sentinel` or `drop`)")]
    UnsupportedPolicy(String),
}
