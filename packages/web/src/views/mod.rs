use dioxus::prelude::*;
use ui::{use_session, Guarded};

use crate::Route;

mod welcome;
pub use welcome::{NotFound, Welcome};

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod reset_password;
pub use reset_password::ResetPassword;

mod main_layout;
pub use main_layout::MainLayout;

mod dashboard;
pub use dashboard::Dashboard;

mod ingredients;
pub use ingredients::Ingredients;

mod recipes;
pub use recipes::Recipes;

/// Public pages skip straight to the dashboard when a credential is stored.
/// The server is not contacted.
pub(crate) fn use_redirect_if_signed_in() {
    let session = use_session();
    let nav = use_navigator();
    use_effect(move || {
        if let Some(target) = signed_in_target(session.is_signed_in()) {
            tracing::debug!("Credential present, skipping to dashboard");
            nav.replace(target);
        }
    });
}

/// Leave for `/login` once a guarded call asks for it.
pub(crate) fn use_login_redirect<R: 'static>(outcome: Resource<Guarded<R>>) {
    let nav = use_navigator();
    use_effect(move || {
        if let Some(target) = login_target((*outcome.read()).as_ref()) {
            nav.replace(target);
        }
    });
}

fn signed_in_target(signed_in: bool) -> Option<Route> {
    signed_in.then_some(Route::Dashboard {})
}

/// Where a settled guarded call sends the page, if anywhere.
fn login_target<R>(outcome: Option<&Guarded<R>>) -> Option<Route> {
    outcome
        .filter(|outcome| outcome.needs_login())
        .map(|_| Route::Login {})
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ApiError, UserProfile};

    #[test]
    fn test_redirect_and_failure_go_to_login() {
        assert_eq!(
            login_target::<UserProfile>(Some(&Guarded::Redirect)),
            Some(Route::Login {})
        );
        let failed: Guarded<UserProfile> = Guarded::Failed(ApiError::Network("offline".into()));
        assert_eq!(login_target(Some(&failed)), Some(Route::Login {}));
    }

    #[test]
    fn test_pending_or_ready_stays() {
        assert_eq!(login_target::<UserProfile>(None), None);
        assert_eq!(login_target(Some(&Guarded::Ready(UserProfile::default()))), None);
    }

    #[test]
    fn test_signed_in_skips_to_dashboard() {
        assert_eq!(signed_in_target(true), Some(Route::Dashboard {}));
        assert_eq!(signed_in_target(false), None);
    }
}
