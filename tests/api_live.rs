//! Live API tests. Run with: `cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use wbc_rs::Client;

#[test]
fn fetch_country_list() {
    let cli = Client::default();
    let countries = cli.country_list();
    assert!(countries.is_complete());
    assert!(countries.items.len() > 200);
    // Sorted ascending by name.
    assert!(
        countries
            .items
            .windows(2)
            .all(|w| w[0].name <= w[1].name)
    );
    assert!(countries.items.iter().any(|c| c.iso2_code == "DE"));
}

#[test]
fn fetch_population_small_range() {
    let cli = Client::default();
    let pop = cli.population_by_country("US", Some(2007), Some(2017));
    assert!(pop.is_complete());
    assert!(!pop.items.is_empty());
    assert!(pop.items.iter().all(|p| p.country_id == "US"));
    assert!(pop.items.iter().any(|p| p.value > 0));
}
