//! Process-wide application state and the role policy around it.

use chrono::NaiveDate;
use tracing::info;

use crate::auth::{
    self, AuthError, AuthMode, CredentialStore, RegistrationRequest, Role, SessionIdentity,
};
use crate::catalog::{ListingDraft, ListingFilter, ListingStore, MapMarker, PropertyListing};
use crate::error::AppError;
use crate::favorites::FavoritesTracker;
use crate::mortgage;
use crate::reporting::{self, DashboardSummary};
use crate::tabs::{self, Tab};

/// Session/role gating failures, distinct from the validation errors the
/// individual operations report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("log in or register to use the app")]
    NotAuthenticated,
    #[error("your role does not permit {0}")]
    Forbidden(&'static str),
}

/// The whole application state: credential store, catalog, favorites, the
/// zero-or-one active session, and the UI pointers (auth mode, active tab,
/// selected property). One instance per process run; every operation takes it
/// by reference.
pub struct BrokerageApp {
    credentials: CredentialStore,
    catalog: ListingStore,
    favorites: FavoritesTracker,
    session: Option<SessionIdentity>,
    auth_mode: AuthMode,
    active_tab: Tab,
    selected_property: usize,
}

impl Default for BrokerageApp {
    fn default() -> Self {
        Self::new()
    }
}

impl BrokerageApp {
    /// Fresh state with the two demo accounts installed and nobody logged in.
    pub fn new() -> Self {
        Self {
            credentials: CredentialStore::seeded(),
            catalog: ListingStore::new(),
            favorites: FavoritesTracker::new(),
            session: None,
            auth_mode: AuthMode::default(),
            active_tab: Tab::Listings,
            selected_property: 0,
        }
    }

    pub fn session(&self) -> Option<&SessionIdentity> {
        self.session.as_ref()
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    pub fn set_auth_mode(&mut self, mode: AuthMode) {
        self.auth_mode = mode;
    }

    fn identity(&self) -> Result<&SessionIdentity, AccessError> {
        self.session.as_ref().ok_or(AccessError::NotAuthenticated)
    }

    fn require_admin(&self) -> Result<(), AccessError> {
        let identity = self.identity()?;
        if identity.role != Role::Admin {
            return Err(AccessError::Forbidden("the admin dashboard"));
        }
        Ok(())
    }

    // --- auth ---

    pub fn register(&mut self, request: RegistrationRequest) -> Result<(), AuthError> {
        auth::register(&mut self.credentials, request)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<SessionIdentity, AuthError> {
        let identity = auth::login(&self.credentials, email, password)?;
        info!(email = %identity.email, role = identity.role.label(), "session opened");
        self.session = Some(identity.clone());
        Ok(identity)
    }

    pub fn logout(&mut self) {
        if let Some(identity) = self.session.take() {
            info!(email = %identity.email, "session closed");
        }
        self.active_tab = Tab::Listings;
        self.selected_property = 0;
    }

    pub fn reset_password(
        &mut self,
        email: &str,
        food_answer: &str,
        pet_answer: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        auth::reset_password(
            &mut self.credentials,
            email,
            food_answer,
            pet_answer,
            new_password,
        )
    }

    // --- tabs ---

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn visible_tabs(&self) -> Result<Vec<Tab>, AccessError> {
        let identity = self.identity()?;
        Ok(tabs::tab_order(identity.role, self.active_tab))
    }

    pub fn select_tab(&mut self, tab: Tab) -> Result<(), AccessError> {
        let identity = self.identity()?;
        if !tab.permitted(identity.role) {
            return Err(AccessError::Forbidden(tab.label()));
        }
        self.active_tab = tab;
        Ok(())
    }

    // --- catalog ---

    pub fn listings(&self) -> Result<&[PropertyListing], AccessError> {
        self.identity()?;
        Ok(self.catalog.listings())
    }

    pub fn filtered_listings(
        &self,
        filter: &ListingFilter,
    ) -> Result<Vec<&PropertyListing>, AccessError> {
        self.identity()?;
        Ok(filter.apply(self.catalog.listings()))
    }

    pub fn map_markers(&self) -> Result<Vec<MapMarker>, AccessError> {
        self.identity()?;
        Ok(self.catalog.map_markers())
    }

    pub fn listing_image(&self, index: usize) -> Result<Option<&[u8]>, AccessError> {
        self.identity()?;
        Ok(self
            .catalog
            .get(index)
            .and_then(|listing| listing.image.as_deref()))
    }

    pub fn add_listing(&mut self, draft: ListingDraft, today: NaiveDate) -> Result<(), AppError> {
        let identity = self.identity()?;
        if !matches!(identity.role, Role::Agent | Role::Admin) {
            return Err(AccessError::Forbidden("adding properties").into());
        }
        self.catalog.add(draft, today)?;
        info!(total = self.catalog.len(), "listing added");
        Ok(())
    }

    // --- favorites ---

    pub fn save_favorite(&mut self, title: &str) -> Result<(), AppError> {
        let identity = self.identity()?;
        if identity.role == Role::Admin {
            return Err(AccessError::Forbidden("saving favorites").into());
        }
        self.favorites.add(title);
        Ok(())
    }

    pub fn favorites_tally(&self) -> Result<Vec<(String, usize)>, AccessError> {
        self.identity()?;
        Ok(self.favorites.tally())
    }

    // --- contact ---

    /// Record interest in a listing and focus the Contact tab.
    pub fn contact_seller(&mut self, index: usize) -> Result<(), AccessError> {
        self.identity()?;
        self.selected_property = index;
        self.active_tab = Tab::Contact;
        Ok(())
    }

    pub fn selected_property(&self) -> usize {
        self.selected_property
    }

    /// No mail is sent; the confirmation text is the whole feature.
    pub fn send_inquiry(&self, title: &str, _message: &str) -> Result<String, AccessError> {
        self.identity()?;
        Ok(format!("Inquiry sent regarding '{title}' (simulated)."))
    }

    // --- mortgage ---

    pub fn mortgage_quote(
        &self,
        principal: f64,
        annual_rate_percent: f64,
        term_years: u32,
    ) -> Result<f64, AppError> {
        self.identity()?;
        let payment = mortgage::monthly_payment(principal, annual_rate_percent, term_years)?;
        Ok(payment)
    }

    // --- admin ---

    pub fn dashboard_summary(&self) -> Result<DashboardSummary, AccessError> {
        self.require_admin()?;
        Ok(reporting::dashboard_summary(&self.catalog, &self.favorites))
    }

    pub fn export_csv(&self) -> Result<Vec<u8>, AppError> {
        self.require_admin()?;
        let bytes = reporting::export_csv(&self.catalog)?;
        Ok(bytes)
    }

    pub fn delete_listing(&mut self, title: &str) -> Result<usize, AccessError> {
        self.require_admin()?;
        let removed = self.catalog.remove_by_title(title);
        info!(%title, removed, "listings deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mortgage::MortgageError;

    #[test]
    fn operations_require_a_session() {
        let app = BrokerageApp::new();
        assert_eq!(
            app.listings().expect_err("gated"),
            AccessError::NotAuthenticated
        );
        assert_eq!(app.visible_tabs(), Err(AccessError::NotAuthenticated));
        assert_eq!(
            app.dashboard_summary().expect_err("gated"),
            AccessError::NotAuthenticated
        );
    }

    #[test]
    fn logout_resets_the_ui_pointers() {
        let mut app = BrokerageApp::new();
        app.login("agent@broker.com", "password").expect("seeded");
        app.contact_seller(3).expect("selects");
        assert_eq!(app.active_tab(), Tab::Contact);

        app.logout();
        assert!(app.session().is_none());
        assert_eq!(app.active_tab(), Tab::Listings);
        assert_eq!(app.selected_property(), 0);
    }

    #[test]
    fn select_tab_honors_the_role_filter() {
        let mut app = BrokerageApp::new();
        app.login("agent@broker.com", "password").expect("seeded");
        assert_eq!(
            app.select_tab(Tab::Dashboard),
            Err(AccessError::Forbidden("Dashboard"))
        );
        app.select_tab(Tab::Mortgage).expect("permitted");
        assert_eq!(app.visible_tabs().expect("session")[0], Tab::Mortgage);
    }

    #[test]
    fn mortgage_quote_propagates_the_rate_guard() {
        let mut app = BrokerageApp::new();
        app.login("agent@broker.com", "password").expect("seeded");
        match app.mortgage_quote(100_000.0, 0.0, 20) {
            Err(AppError::Mortgage(MortgageError::InvalidRate)) => {}
            other => panic!("expected InvalidRate, got {other:?}"),
        }
    }
}
