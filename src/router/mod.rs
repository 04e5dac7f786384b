//! In-memory page router
//!
//! The portal is a single screen whose content is picked by the current
//! [`Page`]. There is no history and no URL; pages change only through
//! [`Router::navigate`]. Whether a page may be shown is decided when it is
//! rendered, from the session, so a signed-out visitor who navigates to
//! the dashboard sees a sign-in prompt instead.

use crate::core::session::{AccessPolicy, Session};
use crate::core::error::AccessError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every screen of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Login,
    Register,
    Directory,
    Memories,
    Events,
    Jobs,
    Mentorship,
    Stories,
    Dashboard,
    Admin,
    VideoGallery,
}

impl Page {
    pub const ALL: [Page; 12] = [
        Page::Home,
        Page::Login,
        Page::Register,
        Page::Directory,
        Page::Memories,
        Page::Events,
        Page::Jobs,
        Page::Mentorship,
        Page::Stories,
        Page::Dashboard,
        Page::Admin,
        Page::VideoGallery,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Login => "login",
            Page::Register => "register",
            Page::Directory => "directory",
            Page::Memories => "memories",
            Page::Events => "events",
            Page::Jobs => "jobs",
            Page::Mentorship => "mentorship",
            Page::Stories => "stories",
            Page::Dashboard => "dashboard",
            Page::Admin => "admin",
            Page::VideoGallery => "video-gallery",
        }
    }

    /// Resolve a page name; unknown names land on the home page
    pub fn from_name(name: &str) -> Self {
        Page::ALL
            .into_iter()
            .find(|p| p.name() == name)
            .unwrap_or_else(|| {
                tracing::debug!(name, "Unknown page, falling back to home");
                Page::Home
            })
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Login => "Login",
            Page::Register => "Register",
            Page::Directory => "Directory",
            Page::Memories => "Memories",
            Page::Events => "Events",
            Page::Jobs => "Jobs",
            Page::Mentorship => "Mentorship",
            Page::Stories => "Stories",
            Page::Dashboard => "Dashboard",
            Page::Admin => "Admin",
            Page::VideoGallery => "Video Gallery",
        }
    }

    pub fn policy(&self) -> AccessPolicy {
        match self {
            Page::Dashboard => AccessPolicy::Authenticated,
            Page::Admin => AccessPolicy::AdminOnly,
            _ => AccessPolicy::Public,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What to render for the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Page(Page),

    /// The page needs a signed-in member
    LoginRequired(Page),

    /// The page needs an administrator
    AccessDenied(Page),
}

/// A navigation bar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub page: Page,
    pub label: &'static str,
    pub active: bool,
}

const BASE_NAV: [Page; 4] = [Page::Home, Page::Directory, Page::Memories, Page::Events];
const MEMBER_NAV: [Page; 4] = [Page::Jobs, Page::Mentorship, Page::Stories, Page::Dashboard];

#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Page,
}

impl Router {
    /// A router on the home page
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(from = %self.current, to = %page, "Navigate");
        self.current = page;
    }

    /// Navigate by page name; unknown names go home
    pub fn navigate_to(&mut self, name: &str) {
        self.navigate(Page::from_name(name));
    }

    pub fn view(&self, session: &Session) -> View {
        match self.current.policy().check(session) {
            Ok(()) => View::Page(self.current),
            Err(AccessError::NotSignedIn) => View::LoginRequired(self.current),
            Err(AccessError::AdminRequired) => View::AccessDenied(self.current),
        }
    }

    /// Navigation bar entries visible to the session
    pub fn nav_items(&self, session: &Session) -> Vec<NavItem> {
        let mut pages: Vec<Page> = BASE_NAV.to_vec();
        if session.is_authenticated() {
            pages.extend(MEMBER_NAV);
        }
        if session.is_admin() {
            pages.push(Page::Admin);
        }

        pages
            .into_iter()
            .map(|page| NavItem {
                page,
                label: page.label(),
                active: page == self.current,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Profile;
    use uuid::Uuid;

    fn member(role: Option<&str>) -> Session {
        Session::signed_in(Profile {
            id: Uuid::new_v4(),
            role: role.map(str::to_string),
            ..Default::default()
        })
    }

    #[test]
    fn test_initial_and_unknown() {
        let mut router = Router::new();
        assert_eq!(router.current(), Page::Home);

        router.navigate_to("events");
        assert_eq!(router.current(), Page::Events);

        router.navigate_to("no-such-page");
        assert_eq!(router.current(), Page::Home);
    }

    #[test]
    fn test_names_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_name(page.name()), page);
        }
    }

    #[test]
    fn test_guarded_views() {
        let mut router = Router::new();
        router.navigate(Page::Dashboard);
        assert_eq!(router.view(&Session::anonymous()), View::LoginRequired(Page::Dashboard));
        assert_eq!(router.view(&member(None)), View::Page(Page::Dashboard));

        router.navigate(Page::Admin);
        assert_eq!(router.view(&member(None)), View::AccessDenied(Page::Admin));
        assert_eq!(router.view(&member(Some("admin"))), View::Page(Page::Admin));
    }

    #[test]
    fn test_nav_items_by_session() {
        let router = Router::new();
        let pages = |s: &Session| router.nav_items(s).into_iter().map(|i| i.page).collect::<Vec<_>>();

        assert_eq!(pages(&Session::anonymous()), BASE_NAV.to_vec());
        assert_eq!(pages(&member(None)).len(), 8);

        let admin = pages(&member(Some("admin")));
        assert_eq!(admin.len(), 9);
        assert_eq!(admin.last(), Some(&Page::Admin));

        assert!(router.nav_items(&Session::anonymous())[0].active);
    }
}
