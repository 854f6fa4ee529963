//! Tests for the reconciler

use crate::app::models::{NormalizedRecord, QuantitySide};
use crate::app::services::reconciler::reconcile;

fn record(product: &str, article: &str, name: &str, category: &str, quantity: i64) -> NormalizedRecord {
    NormalizedRecord {
        product_code: product.to_string(),
        article_code: article.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        quantity,
    }
}

#[test]
fn test_equal_quantities_produce_no_discrepancies() {
    let erp = vec![record("100", "A1", "Widget", "Норма", 10)];
    let wms = vec![record("100", "A1", "Widget", "Норма", 10)];

    assert!(reconcile(erp, wms).is_empty());
}

#[test]
fn test_quantity_mismatch_yields_signed_delta() {
    let erp = vec![record("100", "A1", "Widget", "Норма", 10)];
    let wms = vec![record("100", "A1", "Widget", "Норма", 7)];

    let report = reconcile(erp, wms);
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].delta, 3);
    assert_eq!(report[0].erp_quantity, QuantitySide::Value(10));
    assert_eq!(report[0].wms_quantity, QuantitySide::Value(7));
}

#[test]
fn test_erp_only_key_gets_wms_sentinel() {
    let erp = vec![record("100", "A1", "Widget", "Норма", 10)];

    let report = reconcile(erp, vec![]);
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].wms_quantity, QuantitySide::NoData);
    // Delta computed against 0 for the absent side
    assert_eq!(report[0].delta, 10);
}

#[test]
fn test_wms_only_key_gets_erp_sentinel() {
    let wms = vec![record("100", "A1", "Widget", "Норма", 4)];

    let report = reconcile(vec![], wms);
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].erp_quantity, QuantitySide::NoData);
    assert_eq!(report[0].delta, -4);
}

#[test]
fn test_absent_side_with_zero_quantity_still_reported() {
    // Existence mismatch, not just numeric mismatch: one side reporting
    // zero is different from the other side not knowing the key at all
    let erp = vec![record("100", "A1", "Widget", "Норма", 0)];

    let report = reconcile(erp, vec![]);
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].delta, 0);
    assert_eq!(report[0].wms_quantity, QuantitySide::NoData);
}

#[test]
fn test_join_completeness_every_key_appears_once() {
    let erp = vec![
        record("100", "A1", "Widget", "Норма", 1),
        record("200", "B2", "Gadget", "Норма", 2),
    ];
    let wms = vec![
        record("200", "B2", "Gadget", "Норма", 5),
        record("300", "C3", "Gizmo", "Норма", 3),
    ];

    let report = reconcile(erp, wms);
    let mut products: Vec<&str> = report.iter().map(|r| r.product_code.as_str()).collect();
    products.dedup();
    assert_eq!(products.len(), report.len());
    assert_eq!(report.len(), 3);
}

#[test]
fn test_name_resolved_from_whichever_side_has_it() {
    let erp = vec![record("100", "A1", "", "Норма", 10)];
    let wms = vec![record("100", "A1", "Widget", "Норма", 7)];

    let report = reconcile(erp, wms);
    assert_eq!(report[0].name, "Widget");
}

#[test]
fn test_same_key_different_category_joins_separately() {
    let erp = vec![record("100", "A1", "Widget", "Норма", 10)];
    let wms = vec![record("100", "A1", "Widget", "Карантин", 10)];

    let report = reconcile(erp, wms);
    assert_eq!(report.len(), 2);
}

#[test]
fn test_duplicate_erp_keys_accumulate_before_diff() {
    let erp = vec![
        record("100", "A1", "Widget", "Норма", 6),
        record("100", "A1", "Widget", "Норма", 4),
    ];
    let wms = vec![record("100", "A1", "Widget", "Норма", 10)];

    assert!(reconcile(erp, wms).is_empty());
}

#[test]
fn test_output_ordered_by_key() {
    let erp = vec![
        record("300", "C3", "Gizmo", "Норма", 1),
        record("100", "A1", "Widget", "Норма", 1),
    ];

    let report = reconcile(erp, vec![]);
    assert_eq!(report[0].product_code, "100");
    assert_eq!(report[1].product_code, "300");
}
