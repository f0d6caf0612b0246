//! End-to-end configurator sessions through the public API.
//!
//! Run with `RUST_LOG=brew_core=debug` to see the builder's events.

use brew_core::catalog::{menu, ICED_SURCHARGE, MAX_SYRUPS};
use brew_core::{Base, Milk, OrderBuilder, OrderError, Size};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[test]
fn test_kiosk_session_builds_independent_orders() {
    init_tracing();
    let mut builder = OrderBuilder::new();

    let first = builder
        .set_base("latte")
        .unwrap()
        .set_size("medium")
        .unwrap()
        .set_milk("oat")
        .unwrap()
        .add_syrup("vanilla")
        .set_sugar(2)
        .unwrap()
        .make_iced()
        .finalize()
        .unwrap();

    // Same drink for a second customer, minus the extras
    let second = builder.clear_extras().finalize().unwrap();

    // Brand new drink
    let third = builder
        .reset()
        .set_base("espresso")
        .unwrap()
        .set_size("small")
        .unwrap()
        .finalize()
        .unwrap();

    assert_eq!(first.price().amount(), 480.0);
    assert_eq!(first.to_string(), "medium latte with oat milk + vanilla (iced) 2 tsp sugar");

    assert_eq!(second.base(), Base::Latte);
    assert_eq!(second.size(), Size::Medium);
    assert_eq!(second.milk(), Milk::None);
    assert!(second.syrups().is_empty());
    assert_eq!(second.price().amount(), 360.0);

    assert_eq!(third.price().amount(), 200.0);
    assert_eq!(third.to_string(), "small espresso");
}

#[test]
fn test_errors_do_not_poison_the_builder() {
    init_tracing();
    let mut builder = OrderBuilder::new();

    assert!(matches!(
        builder.finalize(),
        Err(OrderError::MissingRequiredField { .. })
    ));
    assert!(builder.set_base("frappuccino").is_err());
    assert!(builder.set_sugar(-3).is_err());

    let order = builder
        .set_base("cappuccino")
        .unwrap()
        .set_size("small")
        .unwrap()
        .finalize()
        .unwrap();
    assert_eq!(order.price().amount(), 320.0);
    assert_eq!(order.sugar(), 0);
}

#[test]
fn test_menu_drives_a_valid_order_for_every_entry() {
    init_tracing();
    let menu = menu();
    let mut builder = OrderBuilder::new();

    for base in &menu.bases {
        for size in &menu.sizes {
            for milk in &menu.milks {
                let order = builder
                    .set_base(&base.name)
                    .unwrap()
                    .set_size(&size.name)
                    .unwrap()
                    .set_milk(&milk.name)
                    .unwrap()
                    .finalize()
                    .unwrap();
                assert_eq!(order.price().amount(), base.value * size.value + milk.value);
            }
        }
    }
}

#[test]
fn test_syrup_capacity_and_iced_surcharge() {
    init_tracing();
    let mut builder = OrderBuilder::new();
    builder.set_base("americano").unwrap().set_size("small").unwrap();

    for syrup in ["vanilla", "caramel", "hazelnut", "mint", "chocolate", "lavender"] {
        builder.add_syrup(syrup);
    }
    assert_eq!(builder.syrup_count(), MAX_SYRUPS);

    let warm = builder.set_iced(false).finalize().unwrap();
    let cold = builder.set_iced(true).finalize().unwrap();

    // 250 + 4 × 40
    assert_eq!(warm.price().amount(), 410.0);
    assert_eq!(cold.price().amount() - warm.price().amount(), ICED_SURCHARGE.amount());
    assert_eq!(
        warm.syrups(),
        ["caramel", "hazelnut", "mint", "vanilla"].map(String::from)
    );
}

#[test]
fn test_order_json_for_host() {
    let order = OrderBuilder::new()
        .set_base("latte")
        .unwrap()
        .set_size("small")
        .unwrap()
        .add_syrup("vanilla")
        .finalize()
        .unwrap();

    let json = serde_json::to_value(&order).unwrap();
    assert_eq!(json["base"], "latte");
    assert_eq!(json["size"], "small");
    assert_eq!(json["syrups"][0], "vanilla");
    assert_eq!(json["price"], 340.0);
    assert_eq!(json["description"], "small latte + vanilla");
}
