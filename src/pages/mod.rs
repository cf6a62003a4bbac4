pub mod login;

pub use login::{LoginViewModel, SetPasswordViewModel};
