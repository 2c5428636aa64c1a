//! Fixed column schema of the Telco customer-churn dataset.
//!
//! The pipeline does not infer schemas; these names are the contract with the
//! source CSV and are checked up front before any stage runs.

/// Per-row identifier. Unique but carries no predictive information; dropped
/// by the first pipeline stage when present.
pub const IDENTIFIER_COLUMN: &str = "customerID";

/// Binary categorical target, label-encoded to integer codes.
pub const TARGET_COLUMN: &str = "Churn";

/// Months of service held by the customer.
pub const TENURE_COLUMN: &str = "tenure";

/// Monthly charge amount. Always numeric in the source data.
pub const MONTHLY_CHARGES_COLUMN: &str = "MonthlyCharges";

/// Lifetime charge amount. Textual in the source data and may contain
/// non-numeric placeholders, so it goes through coercion.
pub const TOTAL_CHARGES_COLUMN: &str = "TotalCharges";

/// Derived categorical column produced by binning [`TENURE_COLUMN`].
pub const TENURE_GROUP_COLUMN: &str = "TenureGroup";

/// Columns that must be present in the raw table. Their absence is a schema
/// error reported before processing starts.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    TARGET_COLUMN,
    TENURE_COLUMN,
    MONTHLY_CHARGES_COLUMN,
    TOTAL_CHARGES_COLUMN,
];

/// Columns standardized to zero mean and unit variance.
pub const NUMERIC_COLUMNS: [&str; 3] = [
    TENURE_COLUMN,
    MONTHLY_CHARGES_COLUMN,
    TOTAL_CHARGES_COLUMN,
];
