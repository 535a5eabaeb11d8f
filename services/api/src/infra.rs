use brokerage::app::BrokerageApp;
use brokerage::catalog::{ListingDraft, ListingKind};
use brokerage::error::AppError;
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

/// Process-wide brokerage state. One mutex over the whole app keeps the
/// one-session-at-a-time model intact under axum's threaded runtime.
pub(crate) type SharedApp = Arc<Mutex<BrokerageApp>>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn sample_listings() -> Vec<ListingDraft> {
    vec![
        ListingDraft {
            title: "Lakeview Villa".to_string(),
            location: "Udaipur".to_string(),
            price: 450_000,
            kind: ListingKind::Sale,
            bedrooms: 4,
            bathrooms: 3,
            size_sqft: 2_600,
            latitude: 24.5854,
            longitude: 73.7125,
            image: None,
        },
        ListingDraft {
            title: "Downtown Loft".to_string(),
            location: "Bengaluru".to_string(),
            price: 1_800,
            kind: ListingKind::Rent,
            bedrooms: 1,
            bathrooms: 1,
            size_sqft: 750,
            latitude: 12.9716,
            longitude: 77.5946,
            image: None,
        },
        ListingDraft {
            title: "Hilltop Cottage".to_string(),
            location: "Shimla".to_string(),
            price: 220_000,
            kind: ListingKind::Sale,
            bedrooms: 2,
            bathrooms: 1,
            size_sqft: 1_100,
            latitude: 31.1048,
            longitude: 77.1734,
            image: None,
        },
    ]
}

/// Seed the catalog through the public API: open the demo agent session, add
/// the samples, close the session again.
pub(crate) fn seed_demo_catalog(app: &mut BrokerageApp, today: NaiveDate) -> Result<(), AppError> {
    app.login("agent@broker.com", "password")?;
    for draft in sample_listings() {
        app.add_listing(draft, today)?;
    }
    app.logout();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn seeding_leaves_no_session_behind() {
        let mut app = BrokerageApp::new();
        let day = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
        seed_demo_catalog(&mut app, day).expect("seeds");
        assert!(app.session().is_none());

        app.login("agent@broker.com", "password").expect("agent");
        assert_eq!(app.listings().expect("session").len(), 3);
    }

    #[test]
    fn parse_date_accepts_iso_and_rejects_noise() {
        assert!(parse_date("2025-06-01").is_ok());
        assert!(parse_date("01/06/2025").is_err());
    }
}
