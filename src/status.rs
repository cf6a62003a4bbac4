use serde::{Deserialize, Serialize};

/// One-shot status messages shared by every server-rendered page.
///
/// A page usually shows at most one of the two, but the carrier does
/// not enforce that: both slots survive independently and the template
/// decides what to render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatusMessages {
  #[serde(rename = "Success")]
  #[serde(default, skip_serializing_if = "Option::is_none")]
  success: Option<String>,
  #[serde(rename = "Error")]
  #[serde(default, skip_serializing_if = "Option::is_none")]
  error: Option<String>,
}

impl StatusMessages {
  /// Stores a success message. Calling it again overwrites the
  /// previous one and leaves the error slot alone.
  pub fn set_success(&mut self, message: impl Into<String>) {
    self.success = Some(message.into());
  }

  /// Stores an error message. Same overwrite rules as
  /// [`StatusMessages::set_success`].
  pub fn set_error(&mut self, message: impl Into<String>) {
    self.error = Some(message.into());
  }

  /// Routes a drained session message into the matching slot.
  pub fn set(&mut self, kind: StatusKind, message: impl Into<String>) {
    match kind {
      StatusKind::Success => self.set_success(message),
      StatusKind::Error => self.set_error(message),
    }
  }

  #[must_use]
  pub fn success(&self) -> Option<&str> {
    self.success.as_deref()
  }

  #[must_use]
  pub fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }
}

/// Which slot a one-shot message lands in.
///
/// Serialized spelling matches the keys the session store files flash
/// messages under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
  Success,
  Error,
}

/// Lets handler helpers attach status messages to any page model
/// without naming the concrete page.
pub trait StatusCarrier {
  fn status(&self) -> &StatusMessages;

  fn status_mut(&mut self) -> &mut StatusMessages;

  fn set_success(&mut self, message: impl Into<String>) {
    self.status_mut().set_success(message);
  }

  fn set_error(&mut self, message: impl Into<String>) {
    self.status_mut().set_error(message);
  }
}

#[cfg(test)]
mod tests {
  use super::{StatusKind, StatusMessages};
  use serde_test::Token;

  #[test]
  fn last_write_wins() {
    let mut status = StatusMessages::default();
    status.set_success("first");
    status.set_success("second");
    assert_eq!(status.success(), Some("second"));
  }

  #[test]
  fn slots_do_not_clear_each_other() {
    let mut status = StatusMessages::default();
    status.set_success("profile saved");
    status.set_error("but this failed");
    assert_eq!(status.success(), Some("profile saved"));
    assert_eq!(status.error(), Some("but this failed"));
  }

  #[test]
  fn kind_dispatch() {
    let mut status = StatusMessages::default();
    status.set(StatusKind::Success, "done");
    status.set(StatusKind::Error, "failed");
    assert_eq!(status.success(), Some("done"));
    assert_eq!(status.error(), Some("failed"));
  }

  #[test]
  fn unset_slots_are_absent_when_rendered() {
    let status = StatusMessages::default();
    assert_eq!(
      serde_json::to_value(&status).unwrap(),
      serde_json::json!({})
    );

    let mut status = StatusMessages::default();
    status.set_error("nope");
    assert_eq!(
      serde_json::to_value(&status).unwrap(),
      serde_json::json!({ "Error": "nope" })
    );
  }

  #[test]
  fn kind_spelling_matches_session_keys() {
    serde_test::assert_tokens(
      &StatusKind::Success,
      &[Token::UnitVariant {
        name: "StatusKind",
        variant: "success",
      }],
    );
    serde_test::assert_tokens(
      &StatusKind::Error,
      &[Token::UnitVariant {
        name: "StatusKind",
        variant: "error",
      }],
    );
  }
}
