//! End-to-end receipts for the canonical shopping baskets, built both by
//! hand and from order text.

use salestax_core::{parse_order_text, Money, Product, ShoppingCart};

fn product(name: &str, price: &str, imported: bool, exempt: bool) -> Product {
    Product::new(name, 1, price.parse::<Money>().unwrap(), imported, exempt).unwrap()
}

#[test]
fn basket_one_manual_entry() {
    let mut cart = ShoppingCart::new();
    cart.add_product(product("book", "12.49", false, true));
    cart.add_product(product("music CD", "14.99", false, false));
    cart.add_product(product("chocolate bar", "0.85", false, true));

    assert_eq!(
        cart.generate_receipt().lines(),
        vec![
            "1 book: 12.49",
            "1 music CD: 16.49",
            "1 chocolate bar: 0.85",
            "Sales Taxes: 1.50",
            "Total: 29.83",
        ]
    );
}

#[test]
fn basket_two_manual_entry() {
    let mut cart = ShoppingCart::new();
    cart.add_products(vec![
        product("imported box of chocolates", "10.00", true, true),
        product("imported bottle of perfume", "47.50", true, false),
    ]);

    assert_eq!(
        cart.generate_receipt().lines(),
        vec![
            "1 imported box of chocolates: 10.50",
            "1 imported bottle of perfume: 54.65",
            "Sales Taxes: 7.65",
            "Total: 65.15",
        ]
    );
}

#[test]
fn basket_three_manual_entry() {
    let mut cart = ShoppingCart::new();
    cart.add_product(product("imported bottle of perfume", "27.99", true, false));
    cart.add_product(product("bottle of perfume", "18.99", false, false));
    cart.add_product(product("packet of headache pills", "9.75", false, true));
    cart.add_product(product("box of imported chocolates", "11.25", true, true));

    assert_eq!(
        cart.generate_receipt().lines(),
        vec![
            "1 imported bottle of perfume: 32.19",
            "1 bottle of perfume: 20.89",
            "1 packet of headache pills: 9.75",
            "1 box of imported chocolates: 11.85",
            "Sales Taxes: 6.70",
            "Total: 74.68",
        ]
    );
}

#[test]
fn parsed_baskets_match_manual_entry() {
    let inputs = [
        "1 book at 12.49\n1 music CD at 14.99\n1 chocolate bar at 0.85",
        "1 imported box of chocolates at 10.00\n1 imported bottle of perfume at 47.50",
        "1 imported bottle of perfume at 27.99\n1 bottle of perfume at 18.99\n\
         1 packet of headache pills at 9.75\n1 box of imported chocolates at 11.25",
    ];
    let expected_totals = [("1.50", "29.83"), ("7.65", "65.15"), ("6.70", "74.68")];

    for (input, (taxes, total)) in inputs.iter().zip(expected_totals) {
        let receipt = parse_order_text(input)
            .into_cart_strict()
            .unwrap()
            .generate_receipt();

        assert_eq!(receipt.total_taxes().to_string(), taxes, "input: {input}");
        assert_eq!(receipt.total_price().to_string(), total, "input: {input}");
    }
}

#[test]
fn parsed_single_imported_perfume() {
    let report = parse_order_text("1 imported bottle of perfume at 27.99");
    let products: Vec<&Product> = report.products().collect();

    assert_eq!(products.len(), 1);
    assert!(products[0].is_imported());
    assert!(!products[0].is_exempt());
    assert_eq!(products[0].quantity(), 1);
    assert_eq!(products[0].price(), Money::from_cents(2799));
}

#[test]
fn empty_input_gives_zero_receipt() {
    let report = parse_order_text("");
    assert!(report.is_empty());

    let receipt = report.into_cart().generate_receipt();
    assert!(receipt.is_empty());
    assert_eq!(receipt.lines(), vec!["Sales Taxes: 0.00", "Total: 0.00"]);
}

#[test]
fn quantities_multiply_into_totals() {
    let receipt = parse_order_text("2 music CD at 14.99, 3 imported box of chocolates at 10.00")
        .into_cart()
        .generate_receipt();

    // 2 × 1.50 + 3 × 0.50
    assert_eq!(receipt.total_taxes().to_string(), "4.50");
    // 2 × 16.49 + 3 × 10.50
    assert_eq!(receipt.total_price().to_string(), "64.48");
    assert_eq!(receipt.lines()[0], "2 music CD: 32.98");
}

#[test]
fn oversized_order_lines_never_reach_the_cart() {
    let report = parse_order_text("9999999999 book at 9999999999.99");
    assert!(report.has_failures());

    let cart = report.into_cart();
    assert!(cart.is_empty());
    assert_eq!(cart.generate_receipt().to_string(), "Sales Taxes: 0.00\nTotal: 0.00");

    assert!(parse_order_text("9999999999 book at 9999999999.99")
        .into_cart_strict()
        .is_err());
}

#[test]
fn oversized_prices_are_rejected_before_the_cart() {
    assert!(Product::new("perfume", 1, Money::from_cents(i64::MAX - 10), false, false).is_err());
}

#[test]
fn sub_cent_prices_are_taxed_exactly() {
    let receipt = parse_order_text("1 widget at 0.125\n2 book at 0.995")
        .into_cart_strict()
        .unwrap()
        .generate_receipt();

    // widget: 0.125 + 0.05 = 0.175; books: 2 × 0.995 = 1.99
    assert_eq!(
        receipt.lines(),
        vec!["1 widget: 0.18", "2 book: 1.99", "Sales Taxes: 0.05", "Total: 2.17"]
    );
}
