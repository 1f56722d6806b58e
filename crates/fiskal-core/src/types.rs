//! # Domain Types
//!
//! Core domain types for fiscal coupons.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Coupon Entities                                 │
//! │                                                                         │
//! │  ┌─────────────────┐       ┌─────────────────┐                         │
//! │  │   PosCoupon     │──────►│  CitizenCoupon  │  (derived projection)   │
//! │  │  ─────────────  │       │  ─────────────  │                         │
//! │  │  items[]        │       │  totals only    │                         │
//! │  │  payments[]     │       │  tax_groups[]   │                         │
//! │  │  tax_groups[]   │       │  verification   │                         │
//! │  │  totals         │       └─────────────────┘                         │
//! │  └───────┬─────────┘                                                   │
//! │          │ owns exclusively (no sharing, no back-references)           │
//! │          ▼                                                              │
//! │  ┌────────────┐  ┌────────────┐  ┌────────────┐                        │
//! │  │ CouponItem │  │  Payment   │  │  TaxGroup  │                        │
//! │  │ name,price │  │ type,amount│  │ rate,base, │                        │
//! │  │ qty,total  │  │            │  │ tax        │                        │
//! │  └────────────┘  └────────────┘  └────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! Coupons are created once at sale time and never mutated after
//! validation. A correction is a new coupon of type `Refund`, never an
//! edit of an already-reported one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::{Money, Quantity};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax-rate class assigned to a line item and its aggregating group.
///
/// ## Why a Class, Not a Percentage?
/// The fiscalization scheme groups items by lettered category; the
/// authority owns the mapping from category to percentage and may change
/// it without redeploying devices. Coupons therefore carry the letter,
/// never the rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaxRate {
    /// Zero-rated goods.
    C,
    /// Reduced rate.
    D,
    /// Standard rate.
    E,
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            TaxRate::C => "C",
            TaxRate::D => "D",
            TaxRate::E => "E",
        };
        write!(f, "{}", code)
    }
}

// =============================================================================
// Coupon Type
// =============================================================================

/// The fiscal type of a coupon.
///
/// All variants are legal inputs to validation and projection; nothing in
/// this crate special-cases one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponType {
    /// A completed sale.
    Sale,
    /// A correction of a previously reported sale.
    Refund,
}

// =============================================================================
// Payment Type
// =============================================================================

/// How a payment towards a coupon was tendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    /// Physical cash payment.
    Cash,
    /// Card payment on an external terminal.
    CreditCard,
    /// Prepaid voucher.
    Voucher,
}

// =============================================================================
// Tax Group
// =============================================================================

/// Aggregation of a coupon's line items by tax-rate class.
///
/// `total_for_tax` is the **net taxable base** for the class;
/// `total_tax` the tax computed on that base. Line items carry gross
/// totals, so per class: `Σ item.total == total_for_tax + total_tax`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxGroup {
    /// Tax-rate class this group aggregates.
    pub tax_rate: TaxRate,

    /// Net taxable base in minor currency units.
    pub total_for_tax: Money,

    /// Tax amount for this class in minor currency units.
    pub total_tax: Money,
}

// =============================================================================
// Coupon Item
// =============================================================================

/// A line item on a merchant coupon.
/// Carries a snapshot of the product data at sale time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponItem {
    /// Display name printed on the receipt.
    pub name: String,

    /// Sales unit (piece, kg, litre).
    pub unit: String,

    /// Unit price in minor currency units (gross).
    pub price: Money,

    /// Quantity sold, in milli-units (3000 = 3 pieces).
    pub quantity: Quantity,

    /// Gross line total: price × quantity, rounded half-up.
    pub total: Money,

    /// Tax-rate class; must reference a TaxGroup on the same coupon.
    pub tax_rate: TaxRate,

    /// Line classification code (e.g. "TT" for a taxed trade line).
    #[serde(rename = "type")]
    pub item_type: String,
}

impl CouponItem {
    /// Recomputes the line total under the crate-wide rounding rule.
    #[inline]
    pub fn expected_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Payment
// =============================================================================

/// A payment towards a coupon.
/// A coupon can carry several payments for split tender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// How the amount was tendered.
    #[serde(rename = "type")]
    pub payment_type: PaymentType,

    /// Amount paid in minor currency units.
    pub amount: Money,
}

// =============================================================================
// Pos Coupon
// =============================================================================

/// The merchant copy of a fiscal coupon - the full record reported to the
/// tax authority.
///
/// ## Ownership
/// Items, payments and tax groups are owned exclusively by their coupon;
/// there is no sharing between coupons and no back-references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosCoupon {
    /// NUI of the registered business.
    pub business_id: u64,

    /// Branch within the business.
    pub branch_id: u64,

    /// POS device within the branch.
    pub pos_id: u64,

    /// Branch location name.
    pub location: String,

    /// Operator who rang up the sale.
    pub operator_id: String,

    /// Coupon sequence number assigned by the device.
    pub coupon_id: u64,

    /// Identifier of the issuing application.
    pub application_id: u64,

    /// Reference to the corrected coupon (0 for plain sales).
    pub reference_no: u64,

    /// Fixed-width numeric verification code printed on the receipt.
    pub verification_no: u64,

    /// Sale or refund.
    #[serde(rename = "type")]
    pub coupon_type: CouponType,

    /// When the coupon was issued (serialized as Unix epoch seconds, UTC).
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,

    /// Ordered line items.
    pub items: Vec<CouponItem>,

    /// Ordered payments (split tender keeps tender order).
    pub payments: Vec<Payment>,

    /// Ordered tax-group breakdown.
    pub tax_groups: Vec<TaxGroup>,

    /// Gross coupon total in minor currency units.
    pub total: Money,

    /// Total tax across all groups.
    pub total_tax: Money,

    /// Net total: total − total_tax.
    pub total_no_tax: Money,

    /// Discount already applied to the total.
    pub total_discount: Money,
}

impl PosCoupon {
    /// Derives the consumer-facing summary of this coupon.
    ///
    /// The projection drops line items and payments but must agree with
    /// its source on totals, verification code and tax-group breakdown -
    /// which it does by construction here, and which
    /// [`crate::validation::validate_projection`] re-checks for coupons
    /// arriving from outside.
    pub fn to_citizen_coupon(&self) -> CitizenCoupon {
        CitizenCoupon {
            business_id: self.business_id,
            branch_id: self.branch_id,
            pos_id: self.pos_id,
            coupon_id: self.coupon_id,
            coupon_type: self.coupon_type,
            time: self.time,
            total: self.total,
            verification_no: self.verification_no,
            tax_groups: self.tax_groups.clone(),
            total_tax: self.total_tax,
            total_no_tax: self.total_no_tax,
        }
    }
}

// =============================================================================
// Citizen Coupon
// =============================================================================

/// The consumer-facing summary of a coupon - what the citizen's receipt
/// verification app sees.
///
/// A reduced projection of [`PosCoupon`]: no line items, no payments,
/// same totals and tax breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitizenCoupon {
    /// NUI of the registered business.
    pub business_id: u64,

    /// Branch within the business.
    pub branch_id: u64,

    /// POS device within the branch.
    pub pos_id: u64,

    /// Coupon sequence number assigned by the device.
    pub coupon_id: u64,

    /// Sale or refund.
    #[serde(rename = "type")]
    pub coupon_type: CouponType,

    /// When the coupon was issued (serialized as Unix epoch seconds, UTC).
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,

    /// Gross coupon total in minor currency units.
    pub total: Money,

    /// Fixed-width numeric verification code printed on the receipt.
    pub verification_no: u64,

    /// Ordered tax-group breakdown, identical to the source coupon's.
    pub tax_groups: Vec<TaxGroup>,

    /// Total tax across all groups.
    pub total_tax: Money,

    /// Net total: total − total_tax.
    pub total_no_tax: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
