use serde::{Deserialize, Serialize};

/// Keeps a secret value in memory without letting it leak through the
/// console or logs.
///
/// Handlers record page models in their spans with `Debug`, so fields
/// like reset tokens wear this wrapper and print as `<hidden>` there.
/// Serialization stays transparent because the renderer must still
/// receive the raw value under the page's field name.
#[derive(
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Deserialize,
  Serialize,
)]
#[serde(transparent)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(value)
  }

  #[must_use]
  pub fn into_inner(self) -> T {
    self.0
  }
}

impl<T: AsRef<str>> Sensitive<T> {
  #[must_use]
  pub fn as_str(&self) -> &str {
    self.0.as_ref()
  }
}

impl<T> std::fmt::Debug for Sensitive<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_tuple("<hidden>").finish()
  }
}

impl<T> std::fmt::Display for Sensitive<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_tuple("<hidden>").finish()
  }
}

impl<T> AsRef<T> for Sensitive<T> {
  fn as_ref(&self) -> &T {
    &self.0
  }
}

impl<T> From<T> for Sensitive<T> {
  fn from(value: T) -> Self {
    Self(value)
  }
}
