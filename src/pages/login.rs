use serde::{Deserialize, Serialize};

use crate::status::{StatusCarrier, StatusMessages};
use crate::Sensitive;

/// Everything the login/signup page template binds to.
///
/// The handler fills these from its own collaborators (user count
/// query, signup policy, CAPTCHA service, invite lookup, SSO config);
/// this type only carries the results to the renderer. Serialized
/// field names are the template contract and must not change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoginViewModel {
  #[serde(flatten)]
  pub status: StatusMessages,
  #[serde(rename = "TotalUsers")]
  pub total_users: u64,
  #[serde(rename = "AllowSignup")]
  pub allow_signup: bool,
  /// Challenge id issued by the CAPTCHA service, echoed back so the
  /// solution attempt can be correlated server-side.
  #[serde(rename = "CaptchaId")]
  pub captcha_id: String,
  /// Opaque signup gate, may be empty. Validated elsewhere.
  #[serde(rename = "InviteCode")]
  pub invite_code: String,
  #[serde(rename = "SlackEnabled")]
  pub slack_enabled: bool,
}

impl LoginViewModel {
  /// Attaches a success message and hands the model back for
  /// construction-site chaining.
  #[must_use]
  pub fn with_success(mut self, message: impl Into<String>) -> Self {
    self.status.set_success(message);
    self
  }

  /// Attaches an error message, same chaining contract as
  /// [`LoginViewModel::with_success`].
  #[must_use]
  pub fn with_error(mut self, message: impl Into<String>) -> Self {
    self.status.set_error(message);
    self
  }
}

impl StatusCarrier for LoginViewModel {
  fn status(&self) -> &StatusMessages {
    &self.status
  }

  fn status_mut(&mut self) -> &mut StatusMessages {
    &mut self.status
  }
}

/// Login page model plus the reset token the set-password form posts
/// back. The token is opaque here; the reset flow checks it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SetPasswordViewModel {
  #[serde(flatten)]
  pub login: LoginViewModel,
  #[serde(rename = "Token")]
  pub token: Sensitive<String>,
}

impl SetPasswordViewModel {
  #[must_use]
  pub fn new(token: impl Into<String>) -> Self {
    Self {
      login: LoginViewModel::default(),
      token: Sensitive::new(token.into()),
    }
  }

  #[must_use]
  pub fn with_success(mut self, message: impl Into<String>) -> Self {
    self.login.status.set_success(message);
    self
  }

  #[must_use]
  pub fn with_error(mut self, message: impl Into<String>) -> Self {
    self.login.status.set_error(message);
    self
  }
}

impl StatusCarrier for SetPasswordViewModel {
  fn status(&self) -> &StatusMessages {
    &self.login.status
  }

  fn status_mut(&mut self) -> &mut StatusMessages {
    &mut self.login.status
  }
}
