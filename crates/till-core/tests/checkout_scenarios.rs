//! Shopping scenarios run end to end through the public API.

use till_core::{Checkout, ProductDefinition, Receipt, ReceiptLineItem};

fn line<'a>(receipt: &'a Receipt, name: &str) -> &'a ReceiptLineItem {
    receipt
        .item(name)
        .unwrap_or_else(|| panic!("receipt does not contain a {name:?} item"))
}

fn scan_times(checkout: &mut Checkout, product: &ProductDefinition, times: usize) {
    for _ in 0..times {
        checkout.scan(product);
    }
}

#[test]
fn nothing_scanned() {
    let receipt = Checkout::new().generate_receipt();

    assert!(receipt.items().is_empty());
    assert_eq!(receipt.total_major_units(), 0.0);
}

#[test]
fn single_apple_without_offer() {
    let mut checkout = Checkout::new();
    checkout.scan(&ProductDefinition::standard("Apple", 30).unwrap());
    let receipt = checkout.generate_receipt();

    assert_eq!(receipt.items().len(), 1);
    assert_eq!(line(&receipt, "Apple").quantity, 1);
    assert_eq!(receipt.total_major_units(), 0.30);
}

#[test]
fn apples_and_oranges_without_offer() {
    let apple = ProductDefinition::standard("Apple", 30).unwrap();
    let orange = ProductDefinition::standard("Orange", 40).unwrap();

    let mut checkout = Checkout::new();
    scan_times(&mut checkout, &apple, 3);
    scan_times(&mut checkout, &orange, 2);
    let receipt = checkout.generate_receipt();

    assert_eq!(receipt.items().len(), 2);
    assert_eq!(line(&receipt, "Apple").quantity, 3);
    assert_eq!(line(&receipt, "Orange").quantity, 2);
    assert_eq!(receipt.total_price().cents(), 3 * 30 + 2 * 40);
    assert_eq!(receipt.total_major_units(), 1.70);
}

#[test]
fn toothbrush_buy_two_get_one_free() {
    let toothbrush = ProductDefinition::buy_multiple_get_free("Toothbrush", 30, 2, 1).unwrap();

    let mut checkout = Checkout::new();
    scan_times(&mut checkout, &toothbrush, 6);
    let receipt = checkout.generate_receipt();

    assert_eq!(receipt.items().len(), 1);
    assert_eq!(line(&receipt, "Toothbrush").quantity, 6);
    assert_eq!(receipt.total_price().cents(), 120);
    assert_eq!(receipt.total_major_units(), 1.20);
}

#[test]
fn toothbrush_buy_four_get_one_free() {
    let toothbrush = ProductDefinition::buy_multiple_get_free("Toothbrush", 30, 4, 1).unwrap();

    let mut checkout = Checkout::new();
    scan_times(&mut checkout, &toothbrush, 5);
    let receipt = checkout.generate_receipt();

    assert_eq!(line(&receipt, "Toothbrush").quantity, 5);
    assert_eq!(receipt.total_price().cents(), 120);
}

#[test]
fn offer_items_mixed_with_standard_items() {
    let toothbrush = ProductDefinition::buy_multiple_get_free("Toothbrush", 30, 2, 1).unwrap();
    let apple = ProductDefinition::standard("Apple", 30).unwrap();
    let orange = ProductDefinition::standard("Orange", 40).unwrap();

    let mut checkout = Checkout::new();
    scan_times(&mut checkout, &toothbrush, 3);
    checkout.scan(&apple);
    checkout.scan(&orange);
    let receipt = checkout.generate_receipt();

    let names: Vec<&str> = receipt.items().iter().map(|i| i.product.name()).collect();
    assert_eq!(names, ["Toothbrush", "Apple", "Orange"]);
    assert_eq!(line(&receipt, "Toothbrush").quantity, 3);
    assert_eq!(line(&receipt, "Apple").quantity, 1);
    assert_eq!(line(&receipt, "Orange").quantity, 1);
    assert_eq!(receipt.total_price().cents(), 130);
    assert_eq!(receipt.total_major_units(), 1.30);
}

#[test]
fn two_different_multibuy_offers() {
    let toothbrush = ProductDefinition::buy_multiple_get_free("Toothbrush", 30, 4, 1).unwrap();
    let toothpaste = ProductDefinition::buy_multiple_get_free("Toothpaste", 30, 2, 1).unwrap();

    let mut checkout = Checkout::new();
    scan_times(&mut checkout, &toothbrush, 5);
    scan_times(&mut checkout, &toothpaste, 3);
    let receipt = checkout.generate_receipt();

    assert_eq!(receipt.items().len(), 2);
    assert_eq!(line(&receipt, "Toothbrush").quantity, 5);
    assert_eq!(line(&receipt, "Toothpaste").quantity, 3);
    assert_eq!(receipt.total_major_units(), 1.80);
}

#[test]
fn single_rice_with_ten_percent_off() {
    let mut checkout = Checkout::new();
    checkout.scan(&ProductDefinition::percentage_discount("Rice", 100, 1, 10).unwrap());
    let receipt = checkout.generate_receipt();

    assert_eq!(line(&receipt, "Rice").quantity, 1);
    assert_eq!(receipt.total_price().cents(), 90);
    assert_eq!(receipt.total_major_units(), 0.90);
}

#[test]
fn twenty_percent_off_above_threshold() {
    let apple = ProductDefinition::percentage_discount("Apple", 100, 11, 20).unwrap();

    let mut checkout = Checkout::new();
    scan_times(&mut checkout, &apple, 12);
    let receipt = checkout.generate_receipt();

    assert_eq!(line(&receipt, "Apple").quantity, 12);
    assert_eq!(receipt.total_major_units(), 9.60);
}

#[test]
fn no_discount_below_threshold() {
    let apple = ProductDefinition::percentage_discount("Apple", 100, 11, 20).unwrap();

    let mut checkout = Checkout::new();
    scan_times(&mut checkout, &apple, 9);
    let receipt = checkout.generate_receipt();

    assert_eq!(line(&receipt, "Apple").quantity, 9);
    assert_eq!(receipt.total_price().cents(), 900);
    assert!(receipt.total_savings().is_zero());
}

#[test]
fn two_different_percentage_offers() {
    let apple = ProductDefinition::percentage_discount("Apple", 100, 4, 20).unwrap();
    let orange = ProductDefinition::percentage_discount("Orange", 100, 3, 10).unwrap();

    let mut checkout = Checkout::new();
    scan_times(&mut checkout, &apple, 5);
    scan_times(&mut checkout, &orange, 4);
    let receipt = checkout.generate_receipt();

    assert_eq!(receipt.items().len(), 2);
    assert_eq!(line(&receipt, "Apple").quantity, 5);
    assert_eq!(line(&receipt, "Orange").quantity, 4);
    assert_eq!(receipt.total_major_units(), 7.60);
    assert_eq!(receipt.total_savings().cents(), 100 + 40);
}

#[test]
fn interleaved_scans_keep_first_seen_order() {
    let apple = ProductDefinition::standard("Apple", 30).unwrap();
    let orange = ProductDefinition::standard("Orange", 40).unwrap();
    let rice = ProductDefinition::percentage_discount("Rice", 100, 2, 50).unwrap();

    let mut checkout = Checkout::new();
    checkout.scan(&rice);
    checkout.scan(&apple);
    checkout.scan(&rice);
    checkout.scan(&orange);
    checkout.scan(&apple);
    let receipt = checkout.generate_receipt();

    let names: Vec<&str> = receipt.items().iter().map(|i| i.product.name()).collect();
    assert_eq!(names, ["Rice", "Apple", "Orange"]);
    assert_eq!(receipt.total_price().cents(), 100 + 60 + 40);
}
