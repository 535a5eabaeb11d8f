use crate::infra::{parse_date, seed_demo_catalog};
use brokerage::app::BrokerageApp;
use brokerage::auth::{RegistrationRequest, Role};
use brokerage::catalog::{KindFilter, ListingFilter};
use brokerage::error::AppError;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Listing date for the seeded catalog (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Price ceiling used in the filter walk-through
    #[arg(long, default_value_t = 300_000)]
    pub(crate) max_price: u64,
}

/// Scripted walk-through: the agent lists, a freshly registered buyer browses
/// and favorites, the admin reports. Exercises every tab's backing operation.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let mut app = BrokerageApp::new();

    println!("House brokerage demo ({today})");
    println!();

    seed_demo_catalog(&mut app, today)?;
    println!("Agent seeded the catalog with sample listings.");

    app.register(RegistrationRequest {
        name: "Casey Buyer".to_string(),
        email: "casey@example.com".to_string(),
        password: "Tr0ub4dor".to_string(),
        confirm_password: "Tr0ub4dor".to_string(),
        role: Role::Buyer,
        date_of_birth: None,
        favorite_food: "dosa".to_string(),
        pet_name: "biscuit".to_string(),
    })?;
    let buyer = app.login("casey@example.com", "Tr0ub4dor")?;
    println!("Registered and logged in {} ({}).", buyer.name, buyer.role.label());

    let tabs: Vec<&str> = app.visible_tabs()?.iter().map(|tab| tab.label()).collect();
    println!("Visible tabs: {}", tabs.join(", "));
    println!();

    let filter = ListingFilter {
        kind: KindFilter::Sale,
        max_price: args.max_price,
        keyword: String::new(),
    };
    println!("Sale listings up to ${}:", args.max_price);
    for listing in app.filtered_listings(&filter)? {
        println!(
            "  {} — {} • {} • ${} • {} beds / {} baths / {} sqft",
            listing.title,
            listing.location,
            listing.kind.label(),
            listing.price,
            listing.bedrooms,
            listing.bathrooms,
            listing.size_sqft,
        );
    }
    println!();

    app.save_favorite("Hilltop Cottage")?;
    app.save_favorite("Hilltop Cottage")?;
    app.save_favorite("Downtown Loft")?;
    app.contact_seller(2)?;
    let confirmation = app.send_inquiry("Hilltop Cottage", "Is it still available?")?;
    println!("{confirmation}");

    let payment = app.mortgage_quote(100_000.0, 7.0, 20)?;
    println!("Monthly payment on $100,000 at 7% over 20 years: ${payment:.2}");
    println!();
    app.logout();

    app.login("admin@broker.com", "admin123")?;
    let summary = app.dashboard_summary()?;
    println!("Admin dashboard");
    println!("  Total listings: {}", summary.total_listings);
    if let Some(most_saved) = &summary.most_saved {
        println!(
            "  Most saved property: {} ({} saves)",
            most_saved.title, most_saved.saves
        );
    }

    let csv = app.export_csv()?;
    println!();
    println!("listings.csv");
    print!("{}", String::from_utf8_lossy(&csv));

    let removed = app.delete_listing("Downtown Loft")?;
    println!();
    println!(
        "Deleted {removed} listing(s) titled 'Downtown Loft'; {} remain.",
        app.dashboard_summary()?.total_listings
    );

    Ok(())
}
