//! End-to-end validation scenarios for the coupon model.
//!
//! The fixture is a realistic four-line sale with a mixed tax breakdown
//! and split tender, exercised once as-is and then under targeted field
//! mutations to pin down which invariants fire and which cascade.

use chrono::{TimeZone, Utc};
use fiskal_core::money::{Money, Quantity};
use fiskal_core::types::{
    CitizenCoupon, CouponItem, CouponType, Payment, PaymentType, PosCoupon, TaxGroup, TaxRate,
};
use fiskal_core::validation::{
    validate_citizen_coupon, validate_pos_coupon, validate_projection,
};
use fiskal_core::CouponViolation;

// =============================================================================
// Fixtures
// =============================================================================

fn sample_tax_groups() -> Vec<TaxGroup> {
    vec![
        TaxGroup {
            tax_rate: TaxRate::C,
            total_for_tax: Money::from_minor(450),
            total_tax: Money::zero(),
        },
        TaxGroup {
            tax_rate: TaxRate::D,
            total_for_tax: Money::from_minor(296),
            total_tax: Money::from_minor(24),
        },
        TaxGroup {
            tax_rate: TaxRate::E,
            total_for_tax: Money::from_minor(889),
            total_tax: Money::from_minor(161),
        },
    ]
}

/// Four-line sale: 450 gross zero-rated, 320 gross reduced-rate (24 tax),
/// 600 + 450 gross standard-rate (161 tax). Split across three tenders.
fn sample_pos_coupon() -> PosCoupon {
    PosCoupon {
        business_id: 60100,
        branch_id: 1,
        pos_id: 1,
        location: "Prishtine".to_string(),
        operator_id: "op-17".to_string(),
        coupon_id: 10,
        application_id: 1234,
        reference_no: 0,
        verification_no: 1234567890123456,
        coupon_type: CouponType::Sale,
        time: Utc.with_ymd_and_hms(2024, 10, 1, 15, 30, 20).unwrap(),
        items: vec![
            CouponItem {
                name: "bottled water".to_string(),
                unit: "piece".to_string(),
                price: Money::from_minor(150),
                quantity: Quantity::from_units(3),
                total: Money::from_minor(450),
                tax_rate: TaxRate::C,
                item_type: "TT".to_string(),
            },
            CouponItem {
                name: "sandwich".to_string(),
                unit: "piece".to_string(),
                price: Money::from_minor(300),
                quantity: Quantity::from_units(2),
                total: Money::from_minor(600),
                tax_rate: TaxRate::E,
                item_type: "TT".to_string(),
            },
            CouponItem {
                name: "bread".to_string(),
                unit: "piece".to_string(),
                price: Money::from_minor(80),
                quantity: Quantity::from_units(4),
                total: Money::from_minor(320),
                tax_rate: TaxRate::D,
                item_type: "TT".to_string(),
            },
            CouponItem {
                name: "large macchiato".to_string(),
                unit: "piece".to_string(),
                price: Money::from_minor(150),
                quantity: Quantity::from_units(3),
                total: Money::from_minor(450),
                tax_rate: TaxRate::E,
                item_type: "TT".to_string(),
            },
        ],
        payments: vec![
            Payment {
                payment_type: PaymentType::Cash,
                amount: Money::from_minor(500),
            },
            Payment {
                payment_type: PaymentType::CreditCard,
                amount: Money::from_minor(1000),
            },
            Payment {
                payment_type: PaymentType::Voucher,
                amount: Money::from_minor(320),
            },
        ],
        tax_groups: sample_tax_groups(),
        total: Money::from_minor(1820),
        total_tax: Money::from_minor(185),
        total_no_tax: Money::from_minor(1635),
        total_discount: Money::zero(),
    }
}

fn sample_citizen_coupon() -> CitizenCoupon {
    CitizenCoupon {
        business_id: 60100,
        branch_id: 1,
        pos_id: 1,
        coupon_id: 10,
        coupon_type: CouponType::Sale,
        time: Utc.with_ymd_and_hms(2024, 10, 1, 15, 30, 20).unwrap(),
        total: Money::from_minor(1820),
        verification_no: 1234567890123456,
        tax_groups: sample_tax_groups(),
        total_tax: Money::from_minor(185),
        total_no_tax: Money::from_minor(1635),
    }
}

// =============================================================================
// Happy Path
// =============================================================================

#[test]
fn sample_sale_validates_clean() {
    assert_eq!(validate_pos_coupon(&sample_pos_coupon()), Ok(()));
}

#[test]
fn sample_citizen_summary_validates_clean() {
    assert_eq!(validate_citizen_coupon(&sample_citizen_coupon()), Ok(()));
}

#[test]
fn projection_of_sample_sale_is_valid_and_identical() {
    let pos = sample_pos_coupon();
    let citizen = pos.to_citizen_coupon();

    assert_eq!(validate_citizen_coupon(&citizen), Ok(()));
    assert_eq!(validate_projection(&citizen, &pos), Ok(()));

    assert_eq!(citizen.total, pos.total);
    assert_eq!(citizen.total_tax, pos.total_tax);
    assert_eq!(citizen.total_no_tax, pos.total_no_tax);
    assert_eq!(citizen.verification_no, pos.verification_no);
    assert_eq!(citizen.tax_groups, pos.tax_groups);
}

#[test]
fn independently_built_citizen_summary_agrees_with_pos_coupon() {
    assert_eq!(
        validate_projection(&sample_citizen_coupon(), &sample_pos_coupon()),
        Ok(())
    );
}

// =============================================================================
// Header Mutations
// =============================================================================

#[test]
fn header_total_tax_off_by_one_trips_sum_and_net_total() {
    let mut coupon = sample_pos_coupon();
    coupon.total_tax = Money::from_minor(186);

    let violations = validate_pos_coupon(&coupon).unwrap_err();
    // Documented cascade for a header edit: the group-tax sum no longer
    // matches (invariant 3) and the net total derived from the edited
    // field no longer matches (invariant 4). Nothing else fires.
    assert_eq!(
        violations,
        vec![
            CouponViolation::TotalTaxMismatch {
                declared: Money::from_minor(186),
                computed: Money::from_minor(185),
            },
            CouponViolation::TotalNoTaxMismatch {
                declared: Money::from_minor(1635),
                expected: Money::from_minor(1634),
            },
        ]
    );
}

#[test]
fn citizen_header_total_tax_cascades_the_same_way() {
    let mut citizen = sample_citizen_coupon();
    citizen.total_tax = Money::from_minor(186);

    let violations = validate_citizen_coupon(&citizen).unwrap_err();
    assert_eq!(violations.len(), 2);
    assert!(matches!(
        violations[0],
        CouponViolation::TotalTaxMismatch { .. }
    ));
    assert!(matches!(
        violations[1],
        CouponViolation::TotalNoTaxMismatch { .. }
    ));
}

// =============================================================================
// Group Mutations
// =============================================================================

#[test]
fn group_total_tax_edit_trips_reconciliation_sum_and_total() {
    let mut coupon = sample_pos_coupon();
    // Reduced-rate group: 24 → 25
    coupon.tax_groups[1].total_tax = Money::from_minor(25);

    let violations = validate_pos_coupon(&coupon).unwrap_err();
    // Documented cascade for a group edit: that group's gross
    // reconciliation (invariant 2), the group-tax sum (invariant 3) and
    // the total reconstruction (invariant 5). The header-only invariants
    // 4 and 6 stay quiet.
    assert_eq!(
        violations,
        vec![
            CouponViolation::TaxGroupMismatch {
                tax_rate: TaxRate::D,
                items_total: Money::from_minor(320),
                total_for_tax: Money::from_minor(296),
                total_tax: Money::from_minor(25),
            },
            CouponViolation::TotalTaxMismatch {
                declared: Money::from_minor(185),
                computed: Money::from_minor(186),
            },
            CouponViolation::TotalMismatch {
                declared: Money::from_minor(1820),
                reconstructed: Money::from_minor(1821),
            },
        ]
    );
}

#[test]
fn group_base_edit_stays_local_to_group_invariants() {
    let mut coupon = sample_pos_coupon();
    // Standard-rate base: 889 → 890
    coupon.tax_groups[2].total_for_tax = Money::from_minor(890);

    let violations = validate_pos_coupon(&coupon).unwrap_err();
    assert_eq!(
        violations,
        vec![
            CouponViolation::TaxGroupMismatch {
                tax_rate: TaxRate::E,
                items_total: Money::from_minor(1050),
                total_for_tax: Money::from_minor(890),
                total_tax: Money::from_minor(161),
            },
            CouponViolation::TotalMismatch {
                declared: Money::from_minor(1820),
                reconstructed: Money::from_minor(1821),
            },
        ]
    );
}

// =============================================================================
// Payments and Refunds
// =============================================================================

#[test]
fn short_payment_is_reported() {
    let mut coupon = sample_pos_coupon();
    coupon.payments.pop();

    let violations = validate_pos_coupon(&coupon).unwrap_err();
    assert_eq!(
        violations,
        vec![CouponViolation::PaymentMismatch {
            paid: Money::from_minor(1500),
            due: Money::from_minor(1820),
        }]
    );
}

#[test]
fn refund_mirror_of_sample_sale_validates_clean() {
    // A correction is a new coupon of type Refund with negated amounts,
    // referencing the original coupon - never an edit
    let mut refund = sample_pos_coupon();
    refund.coupon_type = CouponType::Refund;
    refund.reference_no = refund.coupon_id;
    refund.coupon_id = 11;
    for item in &mut refund.items {
        item.price = Money::zero() - item.price;
        item.total = Money::zero() - item.total;
    }
    for payment in &mut refund.payments {
        payment.amount = Money::zero() - payment.amount;
    }
    for group in &mut refund.tax_groups {
        group.total_for_tax = Money::zero() - group.total_for_tax;
        group.total_tax = Money::zero() - group.total_tax;
    }
    refund.total = Money::from_minor(-1820);
    refund.total_tax = Money::from_minor(-185);
    refund.total_no_tax = Money::from_minor(-1635);

    assert_eq!(validate_pos_coupon(&refund), Ok(()));
}

// =============================================================================
// Drifted Projections
// =============================================================================

#[test]
fn drifted_projection_names_every_disagreeing_field() {
    let pos = sample_pos_coupon();
    let mut citizen = pos.to_citizen_coupon();
    citizen.total = Money::from_minor(1821);
    citizen.tax_groups[0].total_for_tax = Money::from_minor(451);

    let violations = validate_projection(&citizen, &pos).unwrap_err();
    assert_eq!(
        violations,
        vec![
            CouponViolation::ProjectionMismatch { field: "total" },
            CouponViolation::ProjectionMismatch { field: "tax_groups" },
        ]
    );
}
