//! # Enrollment Error Types
//!
//! Error types for device enrollment operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Enrollment Error Categories                          │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────────┐  ┌─────────────────────┐ │
//! │  │  Key Material   │  │   CSR Assembly      │  │     Encoding        │ │
//! │  │                 │  │                     │  │                     │ │
//! │  │  KeyGeneration  │  │  CsrConstruction    │  │  PemEncoding        │ │
//! │  │  (retryable     │  │  MissingIdentity-   │  │  (caller bug,       │ │
//! │  │   with a fresh  │  │  Field (fix the     │  │   always            │ │
//! │  │   key pair)     │  │   input, not key)   │  │   surfaced)         │ │
//! │  └─────────────────┘  └─────────────────────┘  └─────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is terminal for the failing operation: there is no local
//! recovery, because each indicates either an environment failure or
//! caller misuse. Error messages never contain key material.

use thiserror::Error;

/// Result type alias for enrollment operations.
pub type PkiResult<T> = Result<T, PkiError>;

/// Enrollment error type covering key, CSR and encoding failures.
///
/// ## Design Principles
/// - Each variant includes enough context for debugging
/// - Variants are categorized by the caller's correct reaction:
///   retry with a fresh key, correct the identity input, or fix the call
#[derive(Debug, Error)]
pub enum PkiError {
    /// Key pair generation or key-material encoding failed.
    ///
    /// Fatal to the current enrollment attempt; the caller may retry
    /// with a fresh key pair (the failure is typically transient
    /// entropy or environment trouble).
    #[error("key generation failed: {reason}")]
    KeyGeneration { reason: String },

    /// CSR signing or assembly failed.
    ///
    /// Not retryable with the same inputs; a transient signing failure
    /// may be retried with a fresh key pair.
    #[error("CSR construction failed: {reason}")]
    CsrConstruction { reason: String },

    /// A required identity field is empty.
    ///
    /// The non-retryable CSR-construction case: only a corrected
    /// [`crate::csr::DeviceIdentity`] can fix it - retrying with a fresh
    /// key changes nothing.
    #[error("device identity field '{field}' is required")]
    MissingIdentityField { field: &'static str },

    /// PEM encoding was asked to do something impossible.
    ///
    /// Indicates a caller bug (an empty block label); always surfaced,
    /// never silently recovered.
    #[error("PEM encoding failed: {reason}")]
    PemEncoding { reason: String },
}

// =============================================================================
// Unit Tests
// =============================================================================
