//! Application constants for the stock reconciler
//!
//! This module contains the export framing parameters, canonical column
//! names, the category-rename table, and the counterparty exclusion list
//! used throughout the reconciliation pipeline.
//!
//! The category table and the exclusion list are fixed lookup data agreed
//! with the warehouse; they are materialized once at first use and never
//! mutated afterwards.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

// =============================================================================
// Export Framing
// =============================================================================

/// Leading data rows of the ERP export that carry report headers, not products
pub const ERP_LEADING_ROWS: usize = 8;

/// Leading data rows of the WMS export that carry report headers, not products
pub const WMS_LEADING_ROWS: usize = 2;

/// Trailing footer rows of the WMS export (totals and signature lines)
pub const WMS_TRAILING_ROWS: usize = 3;

/// Display names used in error messages and log lines
pub const ERP_SOURCE_NAME: &str = "1C";
pub const WMS_SOURCE_NAME: &str = "SOLVO";

// =============================================================================
// Column Name Constants
// =============================================================================

/// Canonical column labels shared by both adapted tables and the report
pub mod columns {
    /// Article code (SKU), part of the join key
    pub const ARTICLE: &str = "Артикул";
    /// Product code, part of the join key
    pub const PRODUCT_CODE: &str = "Код товара";
    /// Product name
    pub const NAME: &str = "Номенклатура";
    /// Storage category, part of the join key
    pub const CATEGORY: &str = "Категория";
    /// Quantity on hand
    pub const QUANTITY: &str = "Остаток";

    // ERP-only columns, dropped before reconciliation
    pub const RESERVE: &str = "Резерв";
    pub const PENDING: &str = "Ожидается";

    // Report-only columns
    pub const ERP_QUANTITY: &str = "Остаток_1C";
    pub const WMS_QUANTITY: &str = "Остаток_SLV";
    pub const DELTA: &str = "Разница Остаток";
}

/// Positional "unnamed" labels of the ERP export mapped to canonical names
pub const ERP_COLUMN_RENAMES: &[(&str, &str)] = &[
    ("Unnamed: 0", columns::ARTICLE),
    ("Unnamed: 3", columns::PRODUCT_CODE),
    ("Unnamed: 4", columns::NAME),
    ("Unnamed: 6", columns::CATEGORY),
    ("Unnamed: 7", columns::QUANTITY),
    ("Unnamed: 8", columns::RESERVE),
    ("Unnamed: 9", columns::PENDING),
];

/// ERP columns discarded after renaming (filler columns and reserved stock)
pub const ERP_DROPPED_COLUMNS: &[&str] = &[
    "Unnamed: 1",
    "Unnamed: 2",
    "Unnamed: 5",
    columns::RESERVE,
    columns::PENDING,
];

/// Columns that must be present in the ERP export after renaming
pub const ERP_MANDATORY_COLUMNS: &[&str] = &[
    columns::ARTICLE,
    columns::PRODUCT_CODE,
    columns::NAME,
    columns::QUANTITY,
];

/// Canonical labels assigned positionally to the WMS export
pub const WMS_COLUMN_ORDER: &[&str] = &[
    columns::PRODUCT_CODE,
    columns::ARTICLE,
    columns::NAME,
    columns::CATEGORY,
    columns::QUANTITY,
];

/// Output column order of the discrepancy report
pub const REPORT_COLUMN_ORDER: &[&str] = &[
    columns::PRODUCT_CODE,
    columns::ARTICLE,
    columns::NAME,
    columns::CATEGORY,
    columns::ERP_QUANTITY,
    columns::WMS_QUANTITY,
    columns::DELTA,
];

// =============================================================================
// Report Rendering
// =============================================================================

/// Sentinel rendered when the ERP side contributed no matching key
pub const NO_DATA_ERP: &str = "Нет данных в 1С";

/// Sentinel rendered when the WMS side contributed no matching key
pub const NO_DATA_WMS: &str = "Нет данных в Солво";

/// Default filename of the generated discrepancy report
pub const REPORT_FILENAME: &str = "Сравнение остатков.csv";

/// Guidance shown when the category gate rejects an ERP export
pub const REPORT_VARIANT_HINT: &str = "no expected category found after mapping; \
    check that the 1C report was exported with the 'Для сверки БД' variant";

// =============================================================================
// Category Rename Table
// =============================================================================

/// Source-specific category labels mapped to the canonical vocabulary
///
/// The first block renames 1C storage categories to the WMS wording; the
/// facility-zone codes below it are identity-mapped and double as the
/// "expected categories" set for the sanity gate.
pub const CATEGORY_MAP: &[(&str, &str)] = &[
    ("Хранение 45", "Норма"),
    ("Хранение НЕКОНДИЦИЯ 45", "Некондиция"),
    ("Транзитный ХРАНЕНИЕ 45", "Норма"),
    ("Хранение КАРАНТИН 45", "Карантин"),
    ("Склад 404", "404"),
    ("2 категория", "2 категория"),
    ("3 категория", "3 категория"),
    ("4 категория", "4 категория"),
    ("Брак", "Брак"),
    ("2780.W006", "2780.W006"),
    ("2780.T002", "2780.T002"),
    ("2780.T888", "2780.T888"),
    ("2780.T000", "2780.T000"),
    ("2780.T0E0", "2780.T0E0"),
    ("2780.T0W0", "2780.T0W0"),
    ("2780.T0S0", "2780.T0S0"),
    ("2780.W500", "2780.W500"),
    ("2780.T0N0", "2780.T0N0"),
    ("2780.T001", "2780.T001"),
    ("2780.TP01", "2780.TP01"),
    ("2780.T0W1", "2780.T0W1"),
    ("2780.T0N1", "2780.T0N1"),
    ("2780.TNEK", "2780.TNEK"),
    ("2780.T0E1", "2780.T0E1"),
    ("2780.TDR1", "2780.TDR1"),
    ("2780.Z71E", "2780.Z71E"),
    ("2780.Z71N", "2780.Z71N"),
    ("2780.Z71S", "2780.Z71S"),
    ("2780.Z71W", "2780.Z71W"),
    ("2780.TC51", "2780.TC51"),
    ("2780.TDRN", "2780.TDRN"),
    ("2780.T0S2", "2780.T0S2"),
    ("2780.T0S1", "2780.T0S1"),
    ("2780.T51S", "2780.T51S"),
    ("2780.T51W", "2780.T51W"),
    ("2780.T51N", "2780.T51N"),
    ("2780.W090", "2780.W090"),
    ("2780.Z710", "2780.Z710"),
    ("2780.T51E", "2780.T51E"),
    ("2780.TADS", "2780.TADS"),
    ("2780.T0W2", "2780.T0W2"),
    ("2780.T0E2", "2780.T0E2"),
    ("2780.T0N2", "2780.T0N2"),
    ("2780.TDRS", "2780.TDRS"),
    ("2780.TDRE", "2780.TDRE"),
    ("2780.TDRW", "2780.TDRW"),
    ("KZRN", "KZRN"),
    ("C3PL", "C3PL"),
    ("C508", "C508"),
    ("EMR1", "EMR1"),
    ("ESM1", "ESM1"),
    ("T781", "T781"),
    ("B781.T780", "B781.T780"),
    ("2780.Z731", "2780.Z731"),
    ("2780.TA01", "2780.TA01"),
    ("2780.TN01", "2780.TN01"),
    ("2780.TW01", "2780.TW01"),
    ("2780.TREE", "2780.TREE"),
    ("2780.TRER", "2780.TRER"),
    ("2780.TRES", "2780.TRES"),
    ("2780.TRET", "2780.TRET"),
    ("2780.BUCN", "2780.BUCN"),
    ("C509", "C509"),
    ("A780.T780", "A780.T780"),
    ("2780.TU01", "2780.TU01"),
    ("A780.T788", "A780.T788"),
    ("2780.TCOD", "2780.TCOD"),
    ("2780.T0RF", "2780.T0RF"),
    ("B781.TN01", "B781.TN01"),
    ("C510", "C510"),
    ("ERR1", "ERR1"),
    ("С00К", "С00К"),
    ("2780.TEN1", "2780.TEN1"),
    ("2780.D888", "2780.D888"),
    ("2780.W600", "2780.W600"),
];

// =============================================================================
// Counterparty Exclusion List
// =============================================================================

/// Known non-inventory counterparty names that leak into the ERP key column
///
/// Rows keyed by any of these values are accounting noise, not products,
/// and are dropped before reconciliation.
pub const EXCLUDED_COUNTERPARTIES: &[&str] = &[
    "Юнилевер ООО",
    "ЭЛИТНЫЕ КАМИНЫ ООО",
    "ТЕХИНТЕГРА ООО",
    "Терра-Строй ООО",
    "Т2 Мобайл Коммерция Маркетинг",
    "Т2 Мобайл",
    "Стройметиз ООО",
    "Статио Проджект ООО",
    "Соловьёв Д.Ю ИП",
    "СКЛ ООО",
    "СИРИУС ООО",
    "СЕРВИС ЛОГИСТИКА ООО",
    "Сен-Гобен, ООО",
    "С.С.В.",
    "Пуролат ООО",
    "ПРОТЕИН ПЛЮС",
    "Полисан НТФФ ООО",
    "Поликом-Сервис ООО",
    "Пилар ООО",
    "Паровые системы ООО",
    "ПАО Сбербанк",
    "ОЛСО ООО",
    "Мултон Партнерс ООО",
    "МС АГРО ООО",
    "Милликом НТК АО",
    "Мелстон Инжиниринг ООО",
    "МАПЕД РУС ООО",
    "Магна ООО",
    "Комплекс Парадная №КП-24/09000/00020/Р",
    "Комплекс Парадная (820)",
    "Комплекс Парадная (814)",
    "КОЛЕР РУС ООО",
    "Клинкманн СПб АО",
    "Инженерные технологии ООО",
    "Дрогери ритейл",
    "Доминанта Групп",
    "Вирс ООО",
    "Велес Трейд ООО",
    "Велес ООО",
    "Бакальдрин",
    "Аэро-Трейд",
    "АС Групп Плюс ООО",
    "Арт Фэшен ООО",
    "Амтел ООО",
    "Альфа Омега Трейд ООО",
    "Аквафор ООО",
    "Айнхелль ООО",
    "Август ООО",
];

// =============================================================================
// Materialized Lookups
// =============================================================================

/// Category rename table as a hash map, built once
pub fn category_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| CATEGORY_MAP.iter().copied().collect())
}

/// The full canonical category vocabulary (the rename table's value set)
pub fn expected_categories() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| CATEGORY_MAP.iter().map(|(_, canonical)| *canonical).collect())
}

/// Counterparty exclusion list as a hash set, built once
pub fn excluded_counterparties() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| EXCLUDED_COUNTERPARTIES.iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_map_has_no_duplicate_keys() {
        assert_eq!(category_map().len(), CATEGORY_MAP.len());
    }

    #[test]
    fn test_renamed_categories_map_to_canonical_names() {
        assert_eq!(category_map().get("Хранение 45"), Some(&"Норма"));
        assert_eq!(category_map().get("Транзитный ХРАНЕНИЕ 45"), Some(&"Норма"));
        assert_eq!(category_map().get("Склад 404"), Some(&"404"));
        assert_eq!(category_map().get("Хранение КАРАНТИН 45"), Some(&"Карантин"));
    }

    #[test]
    fn test_zone_codes_are_identity_mapped() {
        assert_eq!(category_map().get("2780.W006"), Some(&"2780.W006"));
        assert_eq!(category_map().get("KZRN"), Some(&"KZRN"));
    }

    #[test]
    fn test_expected_categories_cover_renames() {
        let expected = expected_categories();
        assert!(expected.contains("Норма"));
        assert!(expected.contains("Некондиция"));
        assert!(expected.contains("Карантин"));
        assert!(expected.contains("404"));
        // "Хранение 45" is a source label, not a canonical category
        assert!(!expected.contains("Хранение 45"));
    }

    #[test]
    fn test_exclusion_list_membership() {
        assert!(excluded_counterparties().contains("ПАО Сбербанк"));
        assert!(excluded_counterparties().contains("Август ООО"));
        assert!(!excluded_counterparties().contains("Widget"));
    }

    #[test]
    fn test_report_column_order_matches_schema() {
        assert_eq!(REPORT_COLUMN_ORDER.len(), 7);
        assert_eq!(REPORT_COLUMN_ORDER[0], columns::PRODUCT_CODE);
        assert_eq!(REPORT_COLUMN_ORDER[6], columns::DELTA);
    }
}
