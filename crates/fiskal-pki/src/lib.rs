//! # fiskal-pki: Device Enrollment for Fiskal POS
//!
//! Everything a POS device needs to prove its identity to the tax
//! authority: a P-256 key pair, a PKCS#10 certificate signing request
//! bound to the device's business/branch/POS identity, and the PEM
//! codec that frames the artifacts for transport.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Fiskal POS Enrollment Flow                          │
//! │                                                                         │
//! │   DeviceKeyPair::generate()                                             │
//! │        │  fresh P-256 pair from the OS random source                    │
//! │        ▼                                                                │
//! │   create_csr(&key, &identity)                                           │
//! │        │  subject C=…, O=…, OU=…, L=…, CN=… + ECDSA/SHA-256            │
//! │        ▼                                                                │
//! │   CsrArtifact ──► der() or to_pem()                                     │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   External CA / enrollment transport (NOT this crate)                   │
//! │                                                                         │
//! │   The key pair drops at the end of the flow, wiping the private        │
//! │   scalar. Enrollment stops at CSR issuance - certificate storage       │
//! │   and rotation belong to the host environment.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`key`] - P-256 device key pairs with guaranteed zeroization
//! - [`csr`] - device identity, subject encoding, CSR construction
//! - [`pem`] - BEGIN/END framing with 64-character base64 lines
//! - [`error`] - enrollment error taxonomy
//!
//! ## Concurrency
//!
//! All operations are synchronous, CPU-bound and stateless; any number
//! of enrollments can run in parallel as long as each one owns its own
//! [`key::DeviceKeyPair`].
//!
//! ## Example Usage
//!
//! ```rust
//! use fiskal_pki::{create_csr, DeviceIdentity, DeviceKeyPair};
//!
//! # fn main() -> Result<(), fiskal_pki::PkiError> {
//! let key = DeviceKeyPair::generate()?;
//! let identity = DeviceIdentity {
//!     country: "RKS".to_string(),
//!     business_name: "Kafe Mali".to_string(),
//!     nui: 60100,
//!     branch_id: 1,
//!     pos_id: 1,
//! };
//!
//! let csr = create_csr(&key, &identity)?;
//! let pem = csr.to_pem()?;
//! assert!(pem.starts_with("-----BEGIN CERTIFICATE REQUEST-----"));
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod csr;
pub mod error;
pub mod key;
pub mod pem;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fiskal_pki::DeviceKeyPair` instead of
// `use fiskal_pki::key::DeviceKeyPair`

pub use csr::{create_csr, CsrArtifact, DeviceIdentity};
pub use error::{PkiError, PkiResult};
pub use key::DeviceKeyPair;
pub use pem::export_to_pem;
