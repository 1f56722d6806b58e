//! # Error Types
//!
//! Domain-specific error types for fiskal-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fiskal-core errors (this file)                                        │
//! │  └── CouponViolation  - One violated fiscal invariant                  │
//! │                                                                         │
//! │  fiskal-pki errors (separate crate)                                    │
//! │  └── PkiError         - Key/CSR/PEM failures                           │
//! │                                                                         │
//! │  A validator NEVER returns the first violation it finds: it collects   │
//! │  every CouponViolation so the caller sees the whole reconciliation     │
//! │  problem at once, then decides whether to recompute or escalate.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (tax rate, item index, amounts)
//! 3. Errors are enum variants, never String
//! 4. Validation failures are data, not control flow - no panics, no aborts

use thiserror::Error;

use crate::money::Money;
use crate::types::TaxRate;

// =============================================================================
// Coupon Violation
// =============================================================================

/// A single violated fiscal invariant, tagged with the entity involved.
///
/// Violations are collected - never thrown mid-validation - so a coupon
/// with three inconsistent fields reports all three.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CouponViolation {
    /// A tax-rate class appears in more than one tax group.
    #[error("tax rate {tax_rate} appears in more than one tax group")]
    DuplicateTaxGroup { tax_rate: TaxRate },

    /// A line item references a tax-rate class with no tax group on the
    /// same coupon.
    #[error("item {index} ({name}) references tax rate {tax_rate} with no matching tax group")]
    DanglingItemTaxRate {
        index: usize,
        name: String,
        tax_rate: TaxRate,
    },

    /// A line total does not equal price × quantity under the
    /// round-half-up rule.
    #[error(
        "item {index} ({name}): total {declared} does not equal price × quantity ({expected})"
    )]
    ItemTotalMismatch {
        index: usize,
        name: String,
        declared: Money,
        expected: Money,
    },

    /// A tax group does not reconcile with its items: the gross item sum
    /// for the class must equal the group's base plus its tax.
    #[error(
        "tax group {tax_rate}: items total {items_total} does not equal base {total_for_tax} + tax {total_tax}"
    )]
    TaxGroupMismatch {
        tax_rate: TaxRate,
        items_total: Money,
        total_for_tax: Money,
        total_tax: Money,
    },

    /// The coupon's total tax does not equal the sum of its groups' taxes.
    #[error("coupon total_tax {declared} does not equal sum of tax group taxes ({computed})")]
    TotalTaxMismatch { declared: Money, computed: Money },

    /// The coupon's net total does not equal total − total_tax.
    #[error("coupon total_no_tax {declared} does not equal total − total_tax ({expected})")]
    TotalNoTaxMismatch { declared: Money, expected: Money },

    /// The tax-group bases plus taxes do not reconstruct the coupon total.
    #[error(
        "tax group bases + taxes ({reconstructed}) do not reconstruct coupon total {declared}"
    )]
    TotalMismatch {
        declared: Money,
        reconstructed: Money,
    },

    /// Payments do not cover the coupon total minus discount.
    #[error("payments sum to {paid}, expected {due} (total − discount)")]
    PaymentMismatch { paid: Money, due: Money },

    /// A citizen coupon disagrees with the pos coupon it summarizes.
    #[error("citizen coupon field {field} disagrees with its pos coupon")]
    ProjectionMismatch { field: &'static str },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Outcome of coupon validation: `Ok(())` when every invariant holds,
/// otherwise the non-empty, ordered list of violations.
pub type ValidationResult = Result<(), Vec<CouponViolation>>;

// =============================================================================
// Unit Tests
// =============================================================================
