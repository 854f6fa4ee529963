//! Configuration for the reconciliation pipeline.
//!
//! Framing parameters describe how many non-data rows each export carries;
//! defaults match the report variants the warehouse currently produces.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Framing parameters for one export format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FramingConfig {
    /// Data rows to strip from the top (report headers, not products)
    pub leading_rows: usize,
    /// Data rows to strip from the bottom (totals and signature lines)
    pub trailing_rows: usize,
}

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Framing of the ERP export
    pub erp: FramingConfig,
    /// Framing of the WMS export
    pub wms: FramingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            erp: FramingConfig {
                leading_rows: constants::ERP_LEADING_ROWS,
                trailing_rows: 0,
            },
            wms: FramingConfig {
                leading_rows: constants::WMS_LEADING_ROWS,
                trailing_rows: constants::WMS_TRAILING_ROWS,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_framing_matches_constants() {
        let config = Config::default();
        assert_eq!(config.erp.leading_rows, constants::ERP_LEADING_ROWS);
        assert_eq!(config.erp.trailing_rows, 0);
        assert_eq!(config.wms.leading_rows, constants::WMS_LEADING_ROWS);
        assert_eq!(config.wms.trailing_rows, constants::WMS_TRAILING_ROWS);
    }
}
