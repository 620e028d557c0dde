// shop_app/pages/splash.rs - Startup routing
//
// The splash screen decides where the app starts: straight to Home when a
// user was stored by a previous launch, otherwise to the Welcome screen.

use tracing::{error, info};

use crate::shop_app::model::Route;
use crate::shop_app::session::{SessionContext, SessionStore};

/// Restore a stored user into `session` and pick the first screen.
///
/// A store failure is logged and leaves the app on the splash screen.
pub fn check_session<S: SessionStore + ?Sized>(store: &S, session: &mut SessionContext) -> Route {
    match store.load() {
        Ok(Some(user)) => {
            session.sign_in(user);
            Route::Home
        }
        Ok(None) => {
            info!("No stored session, showing welcome screen");
            Route::Welcome
        }
        Err(e) => {
            error!("Failed to check session: {}", e);
            Route::Splash
        }
    }
}

/// Buttons on the Welcome screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WelcomeAction {
    Login,
    Register,
    ContinueAsGuest,
}

impl WelcomeAction {
    pub fn route(&self) -> Route {
        match self {
            WelcomeAction::Login => Route::Login,
            WelcomeAction::Register => Route::Register,
            WelcomeAction::ContinueAsGuest => Route::Home,
        }
    }
}
