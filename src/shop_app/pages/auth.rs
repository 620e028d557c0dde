// shop_app/pages/auth.rs - Login and registration forms
//
// Only field validation happens here. There is no authentication backend;
// a valid login goes to Home and a valid registration goes to Login.

use crate::shop_app::error::FormError;
use crate::shop_app::model::{Notice, Route};
use crate::shop_app::notify::Notifier;

const LOGIN_MISSING: &str = "Por favor, ingresa tu correo y contraseña.";
const REGISTER_MISSING: &str = "Por favor, completa todos los campos.";
const PASSWORD_MISMATCH: &str = "Las contraseñas no coinciden.";

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if is_blank(&self.email) || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(())
    }

    pub fn submit<N: Notifier>(&self, notifier: &N) -> Result<Route, FormError> {
        if let Err(e) = self.validate() {
            notifier.notify(&Notice::FormInvalid {
                message: LOGIN_MISSING.to_string(),
            });
            return Err(e);
        }

        tracing::info!("Signing in {}", self.email.trim());
        notifier.notify(&Notice::LoggedIn);
        Ok(Route::Home)
    }
}

#[derive(Clone, Debug, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<(), FormError> {
        if is_blank(&self.name)
            || is_blank(&self.email)
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(FormError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }

    pub fn submit<N: Notifier>(&self, notifier: &N) -> Result<Route, FormError> {
        if let Err(e) = self.validate() {
            let message = match e {
                FormError::MissingFields => REGISTER_MISSING,
                FormError::PasswordMismatch => PASSWORD_MISMATCH,
            };
            notifier.notify(&Notice::FormInvalid {
                message: message.to_string(),
            });
            return Err(e);
        }

        tracing::info!("Registering {} <{}>", self.name.trim(), self.email.trim());
        notifier.notify(&Notice::Registered);
        Ok(Route::Login)
    }
}
