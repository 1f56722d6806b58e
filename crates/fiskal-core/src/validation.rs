//! # Validation Module
//!
//! Fiscal invariant validation for coupons.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Invariants Checked                                 │
//! │                                                                         │
//! │  Structure                                                              │
//! │  ├── tax-group classes are distinct                                     │
//! │  └── every item's tax rate references a group on the coupon             │
//! │                                                                         │
//! │  Arithmetic (per entity)                                                │
//! │  ├── item:   total == price × quantity        (round half-up)          │
//! │  └── group:  Σ item.total == base + tax       (gross reconciliation)   │
//! │                                                                         │
//! │  Arithmetic (coupon header)                                             │
//! │  ├── Σ group.tax           == total_tax                                │
//! │  ├── total_no_tax          == total − total_tax                        │
//! │  ├── Σ group.base + Σ tax  == total                                    │
//! │  └── Σ payments            == total − discount     (pos coupon only)   │
//! │                                                                         │
//! │  Projection                                                             │
//! │  └── citizen coupon agrees with its pos coupon on every shared field   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cascade Policy
//! Each invariant is evaluated independently against the fields it names,
//! and ALL violations are collected before returning. Consequences:
//! - editing one group's `total_tax` trips that group's reconciliation,
//!   the total-tax sum, and the total reconstruction (three violations);
//! - editing the header `total_tax` trips the total-tax sum and the
//!   net-total check (two violations);
//! - an invariant whose inputs were not touched never fires.
//!
//! Validation is pure: it never mutates the coupon and holds no state, so
//! it is safe to call from any number of threads.

use crate::error::{CouponViolation, ValidationResult};
use crate::money::Money;
use crate::types::{CitizenCoupon, CouponItem, PosCoupon, TaxGroup, TaxRate};

// =============================================================================
// Pos Coupon
// =============================================================================

/// Validates a merchant coupon against every fiscal invariant.
///
/// Returns `Ok(())` only when the coupon is safe to hand to the signing
/// and submission transport. On failure the ordered violation list names
/// every inconsistency at once; this function never auto-corrects.
///
/// ## Example
/// ```rust
/// use fiskal_core::validation::validate_pos_coupon;
/// # use fiskal_core::money::{Money, Quantity};
/// # use fiskal_core::types::*;
/// # use chrono::{TimeZone, Utc};
/// # let coupon = PosCoupon {
/// #     business_id: 1, branch_id: 1, pos_id: 1,
/// #     location: "Prishtine".into(), operator_id: "op".into(),
/// #     coupon_id: 1, application_id: 1, reference_no: 0,
/// #     verification_no: 1, coupon_type: CouponType::Sale,
/// #     time: Utc.with_ymd_and_hms(2024, 10, 1, 15, 30, 20).unwrap(),
/// #     items: vec![], payments: vec![], tax_groups: vec![],
/// #     total: Money::zero(), total_tax: Money::zero(),
/// #     total_no_tax: Money::zero(), total_discount: Money::zero(),
/// # };
/// assert!(validate_pos_coupon(&coupon).is_ok());
/// ```
pub fn validate_pos_coupon(coupon: &PosCoupon) -> ValidationResult {
    let mut violations = Vec::new();

    check_distinct_tax_groups(&coupon.tax_groups, &mut violations);
    check_item_references(&coupon.items, &coupon.tax_groups, &mut violations);
    check_item_totals(&coupon.items, &mut violations);
    check_group_reconciliation(&coupon.items, &coupon.tax_groups, &mut violations);
    check_header_totals(
        &coupon.tax_groups,
        coupon.total,
        coupon.total_tax,
        coupon.total_no_tax,
        &mut violations,
    );
    check_payments(coupon, &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

// =============================================================================
// Citizen Coupon
// =============================================================================

/// Validates a consumer summary coupon.
///
/// A citizen coupon has no line items or payments, so only the tax-group
/// structure and the header arithmetic apply.
pub fn validate_citizen_coupon(coupon: &CitizenCoupon) -> ValidationResult {
    let mut violations = Vec::new();

    check_distinct_tax_groups(&coupon.tax_groups, &mut violations);
    check_header_totals(
        &coupon.tax_groups,
        coupon.total,
        coupon.total_tax,
        coupon.total_no_tax,
        &mut violations,
    );

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

// =============================================================================
// Projection
// =============================================================================

/// Checks that a citizen coupon agrees with the pos coupon it summarizes.
///
/// [`PosCoupon::to_citizen_coupon`] satisfies this by construction; the
/// check exists for coupon pairs arriving from an external order source,
/// where the two forms were built independently.
pub fn validate_projection(citizen: &CitizenCoupon, pos: &PosCoupon) -> ValidationResult {
    let mut violations = Vec::new();

    let mut check = |field: &'static str, agrees: bool| {
        if !agrees {
            violations.push(CouponViolation::ProjectionMismatch { field });
        }
    };

    check("business_id", citizen.business_id == pos.business_id);
    check("branch_id", citizen.branch_id == pos.branch_id);
    check("pos_id", citizen.pos_id == pos.pos_id);
    check("coupon_id", citizen.coupon_id == pos.coupon_id);
    check("type", citizen.coupon_type == pos.coupon_type);
    check("time", citizen.time == pos.time);
    check("total", citizen.total == pos.total);
    check(
        "verification_no",
        citizen.verification_no == pos.verification_no,
    );
    check("total_tax", citizen.total_tax == pos.total_tax);
    check("total_no_tax", citizen.total_no_tax == pos.total_no_tax);
    check("tax_groups", citizen.tax_groups == pos.tax_groups);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

// =============================================================================
// Structural Checks
// =============================================================================

/// Each tax-rate class may appear at most once in the breakdown.
fn check_distinct_tax_groups(groups: &[TaxGroup], violations: &mut Vec<CouponViolation>) {
    for (index, group) in groups.iter().enumerate() {
        let first = groups
            .iter()
            .position(|g| g.tax_rate == group.tax_rate)
            .unwrap_or(index);
        if first < index {
            violations.push(CouponViolation::DuplicateTaxGroup {
                tax_rate: group.tax_rate,
            });
        }
    }
}

/// Every item must reference a tax group present on the same coupon.
fn check_item_references(
    items: &[CouponItem],
    groups: &[TaxGroup],
    violations: &mut Vec<CouponViolation>,
) {
    for (index, item) in items.iter().enumerate() {
        if !groups.iter().any(|g| g.tax_rate == item.tax_rate) {
            violations.push(CouponViolation::DanglingItemTaxRate {
                index,
                name: item.name.clone(),
                tax_rate: item.tax_rate,
            });
        }
    }
}

// =============================================================================
// Arithmetic Checks
// =============================================================================

/// Invariant 1: every line total is price × quantity under round-half-up.
fn check_item_totals(items: &[CouponItem], violations: &mut Vec<CouponViolation>) {
    for (index, item) in items.iter().enumerate() {
        let expected = item.expected_total();
        if item.total != expected {
            violations.push(CouponViolation::ItemTotalMismatch {
                index,
                name: item.name.clone(),
                declared: item.total,
                expected,
            });
        }
    }
}

/// Invariant 2: per class, the gross item sum equals base + tax.
///
/// Items carry gross totals while groups carry the net base, so the
/// reconciliation is `Σ item.total == total_for_tax + total_tax`. A group
/// with no matching items must therefore be all-zero to pass.
fn check_group_reconciliation(
    items: &[CouponItem],
    groups: &[TaxGroup],
    violations: &mut Vec<CouponViolation>,
) {
    for group in groups {
        let items_total = Money::sum(
            items
                .iter()
                .filter(|item| item.tax_rate == group.tax_rate)
                .map(|item| item.total),
        );
        if items_total != group.total_for_tax + group.total_tax {
            violations.push(CouponViolation::TaxGroupMismatch {
                tax_rate: group.tax_rate,
                items_total,
                total_for_tax: group.total_for_tax,
                total_tax: group.total_tax,
            });
        }
    }
}

/// Invariants 3-5: the coupon header agrees with its tax-group breakdown.
fn check_header_totals(
    groups: &[TaxGroup],
    total: Money,
    total_tax: Money,
    total_no_tax: Money,
    violations: &mut Vec<CouponViolation>,
) {
    let groups_tax = Money::sum(groups.iter().map(|g| g.total_tax));
    let groups_base = Money::sum(groups.iter().map(|g| g.total_for_tax));

    // Invariant 3: Σ group.tax == total_tax
    if groups_tax != total_tax {
        violations.push(CouponViolation::TotalTaxMismatch {
            declared: total_tax,
            computed: groups_tax,
        });
    }

    // Invariant 4: total_no_tax == total − total_tax
    let expected_no_tax = total - total_tax;
    if total_no_tax != expected_no_tax {
        violations.push(CouponViolation::TotalNoTaxMismatch {
            declared: total_no_tax,
            expected: expected_no_tax,
        });
    }

    // Invariant 5: Σ base + Σ tax reconstructs the total
    let reconstructed = groups_base + groups_tax;
    if reconstructed != total {
        violations.push(CouponViolation::TotalMismatch {
            declared: total,
            reconstructed,
        });
    }
}

/// Invariant 6: payments cover the total minus the discount, exactly.
fn check_payments(coupon: &PosCoupon, violations: &mut Vec<CouponViolation>) {
    let paid = Money::sum(coupon.payments.iter().map(|p| p.amount));
    let due = coupon.total - coupon.total_discount;
    if paid != due {
        violations.push(CouponViolation::PaymentMismatch { paid, due });
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
