//! # fiskal-core: Pure Business Logic for Fiskal POS
//!
//! This crate is the **heart** of the fiscal coupon pipeline. It contains
//! the coupon data model and its validation rules as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Fiskal POS Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               Order / Sales Source (external)                   │   │
//! │  │        builds fully-populated PosCoupon / CitizenCoupon        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fiskal-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌────────────────────────────┐ │   │
//! │  │   │   types   │  │   money   │  │        validation          │ │   │
//! │  │   │ PosCoupon │  │   Money   │  │  7 fiscal invariants +     │ │   │
//! │  │   │ TaxGroup  │  │ Quantity  │  │  structural checks,        │ │   │
//! │  │   │ CouponItem│  │ rounding  │  │  collected not thrown      │ │   │
//! │  │   └───────────┘  └───────────┘  └────────────────────────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          Signing & Submission Transport (external)              │   │
//! │  │        receives only coupons that validated cleanly             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Coupon entities (PosCoupon, CitizenCoupon, TaxGroup, ...)
//! - [`money`] - Money and Quantity types with integer arithmetic (no floats!)
//! - [`error`] - Invariant-violation types
//! - [`validation`] - Fiscal invariant validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All amounts are minor currency units (i64), never floats
//! 4. **Collected Errors**: Validation reports every violation at once, typed
//!
//! ## Example Usage
//!
//! ```rust
//! use fiskal_core::money::{Money, Quantity};
//!
//! // Amounts are minor currency units (never floats!)
//! let price = Money::from_minor(150);
//!
//! // Line totals round half-up at the minor unit
//! let total = price.multiply_quantity(Quantity::from_units(3));
//! assert_eq!(total.minor(), 450);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fiskal_core::Money` instead of
// `use fiskal_core::money::Money`

pub use error::{CouponViolation, ValidationResult};
pub use money::{Money, Quantity};
pub use types::*;
pub use validation::{validate_citizen_coupon, validate_pos_coupon, validate_projection};
