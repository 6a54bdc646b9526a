use crate::models::user::UserRole;
use crate::session::SessionStore;

pub const LOGIN_ROUTE: &str = "/login";

/// Outcome of the post-job access gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAccess {
    /// Session may post jobs; render the form.
    Render,
    /// Session may not; send the user to the given route.
    Redirect(&'static str),
}

/// Only employers and admins reach the posting form; everyone else,
/// including unauthenticated visitors, is redirected to the login route.
pub fn resolve(session: &SessionStore) -> PageAccess {
    if !session.is_authenticated() {
        return PageAccess::Redirect(LOGIN_ROUTE);
    }
    match session.role() {
        UserRole::Employer | UserRole::Admin => PageAccess::Render,
        UserRole::Guest => PageAccess::Redirect(LOGIN_ROUTE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::User;
    use crate::session::Session;

    fn session_with_role(role: UserRole) -> SessionStore {
        let store = SessionStore::new();
        store.set(Session {
            token: "tok".into(),
            user: User {
                id: "u-1".into(),
                email: "u@example.com".into(),
                first_name: "U".into(),
                last_name: "Ser".into(),
                role,
                profile_image: None,
                created_at: None,
                updated_at: None,
            },
        });
        store
    }

    #[test]
    fn unauthenticated_redirects_to_login() {
        let store = SessionStore::new();
        assert_eq!(resolve(&store), PageAccess::Redirect("/login"));
    }

    #[test]
    fn guest_session_redirects_to_login() {
        let store = session_with_role(UserRole::Guest);
        assert_eq!(resolve(&store), PageAccess::Redirect("/login"));
    }

    #[test]
    fn employer_and_admin_render_the_form() {
        assert_eq!(resolve(&session_with_role(UserRole::Employer)), PageAccess::Render);
        assert_eq!(resolve(&session_with_role(UserRole::Admin)), PageAccess::Render);
    }
}
