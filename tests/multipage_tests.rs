mod common;

use common::{TestResult, render_quote, seed_quote};
use proforma::{Database, PriceVisibility, VisibilityStore};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn many_items(count: u32) -> Vec<(String, u32, Decimal)> {
    (1..=count)
        .map(|i| (format!("Service {i:02}"), 1, dec!(10.00)))
        .collect()
}

#[test]
fn test_forty_items_overflow_to_a_second_page() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut db = Database::open_in_memory()?;
    let items = many_items(40);
    let items_ref: Vec<(&str, u32, Decimal)> =
        items.iter().map(|(d, q, p)| (d.as_str(), *q, *p)).collect();
    let number = seed_quote(&mut db, &items_ref, "Valid for thirty days")?;
    let mut session = VisibilityStore::new();

    let pdf = render_quote(&db, number, PriceVisibility::Unspecified, &mut session)?;
    assert_pdf_page_count!(pdf, 2);

    // column headers reappear identically on every page
    for page in 1..=2 {
        let text = pdf.page_text(page);
        assert!(text.contains("Description"), "page {page} lost its headers");
        assert!(text.contains("Qty"), "page {page} lost its headers");
        assert!(text.contains("Unit Price"), "page {page} lost its headers");
        assert!(text.contains("Subtotal"), "page {page} lost its headers");
    }

    // items split across the break without repetition
    assert!(pdf.page_text(1).contains("Service 20"));
    assert!(!pdf.page_text(1).contains("Service 21"));
    assert!(pdf.page_text(2).contains("Service 21"));

    // header block, totals and footer each appear exactly once
    assert!(pdf.page_text(1).contains("Proforma"));
    assert!(!pdf.page_text(2).contains("Proforma"));
    assert!(!pdf.page_text(1).contains("Total:"));
    assert!(pdf.page_text(2).contains("Total:"));
    assert!(pdf.page_text(2).contains("400.00"));
    assert!(!pdf.page_text(1).contains("Valid for thirty days"));
    assert!(pdf.page_text(2).contains("Valid for thirty days"));
    Ok(())
}

#[test]
fn test_page_capacity_boundaries() -> TestResult {
    let mut db = Database::open_in_memory()?;
    let mut session = VisibilityStore::new();

    // 20 rows fit on page one exactly
    let items = many_items(20);
    let items_ref: Vec<(&str, u32, Decimal)> =
        items.iter().map(|(d, q, p)| (d.as_str(), *q, *p)).collect();
    let number = seed_quote(&mut db, &items_ref, "")?;
    let pdf = render_quote(&db, number, PriceVisibility::Unspecified, &mut session)?;
    assert_pdf_page_count!(pdf, 1);

    // the 21st row forces the break
    let items = many_items(21);
    let items_ref: Vec<(&str, u32, Decimal)> =
        items.iter().map(|(d, q, p)| (d.as_str(), *q, *p)).collect();
    let number = seed_quote(&mut db, &items_ref, "")?;
    let pdf = render_quote(&db, number, PriceVisibility::Unspecified, &mut session)?;
    assert_pdf_page_count!(pdf, 2);
    assert!(pdf.page_text(2).contains("Service 21"));
    Ok(())
}

#[test]
fn test_long_quotes_keep_paginating() -> TestResult {
    let mut db = Database::open_in_memory()?;
    let items = many_items(75);
    let items_ref: Vec<(&str, u32, Decimal)> =
        items.iter().map(|(d, q, p)| (d.as_str(), *q, *p)).collect();
    let number = seed_quote(&mut db, &items_ref, "")?;
    let mut session = VisibilityStore::new();

    // 20 rows on page one, then 30 per continuation page
    let pdf = render_quote(&db, number, PriceVisibility::Unspecified, &mut session)?;
    assert_pdf_page_count!(pdf, 3);
    assert!(pdf.page_text(2).contains("Service 50"));
    assert!(pdf.page_text(3).contains("Service 51"));
    assert!(pdf.page_text(3).contains("Service 75"));
    assert!(pdf.page_text(3).contains("Total:"));
    Ok(())
}
