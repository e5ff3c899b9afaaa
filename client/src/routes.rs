//! Route table for the onboarding portal.
//!
//! DESIGN
//! ======
//! Every navigable screen is an [`AppRoute`] variant so the router, the route
//! guard, and the navigation shell agree on paths, labels, and which screens
//! require a signed-in session.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Login,
    Dashboard,
    KycProfile,
    UboDeclaration,
    PepDeclaration,
    Documents,
}

/// Links shown to anonymous visitors.
pub const PUBLIC_NAV: [AppRoute; 2] = [AppRoute::Home, AppRoute::Login];

/// Links shown once signed in.
pub const MEMBER_NAV: [AppRoute; 5] = [
    AppRoute::Dashboard,
    AppRoute::KycProfile,
    AppRoute::UboDeclaration,
    AppRoute::PepDeclaration,
    AppRoute::Documents,
];

impl AppRoute {
    pub const ALL: [AppRoute; 7] = [
        AppRoute::Home,
        AppRoute::Login,
        AppRoute::Dashboard,
        AppRoute::KycProfile,
        AppRoute::UboDeclaration,
        AppRoute::PepDeclaration,
        AppRoute::Documents,
    ];

    /// Router segment, without the leading slash.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Login => "login",
            Self::Dashboard => "dashboard",
            Self::KycProfile => "kyc-profile",
            Self::UboDeclaration => "ubo-declaration",
            Self::PepDeclaration => "pep-declaration",
            Self::Documents => "documents",
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::KycProfile => "/kyc-profile",
            Self::UboDeclaration => "/ubo-declaration",
            Self::PepDeclaration => "/pep-declaration",
            Self::Documents => "/documents",
        }
    }

    /// Navigation link text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::Dashboard => "Dashboard",
            Self::KycProfile => "KYC Profile",
            Self::UboDeclaration => "UBO Declaration",
            Self::PepDeclaration => "PEP Declaration",
            Self::Documents => "Documents",
        }
    }

    #[must_use]
    pub const fn is_protected(self) -> bool {
        !matches!(self, Self::Home | Self::Login)
    }

    /// Resolve a pathname, tolerating one trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }
}

/// Navigation links for the current session state.
#[must_use]
pub fn nav_links(authenticated: bool) -> &'static [AppRoute] {
    if authenticated { &MEMBER_NAV } else { &PUBLIC_NAV }
}

/// Whether `path` names a screen that requires a session.
#[must_use]
pub fn is_protected_path(path: &str) -> bool {
    AppRoute::from_path(path).is_some_and(AppRoute::is_protected)
}
