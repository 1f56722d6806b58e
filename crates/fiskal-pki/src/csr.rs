//! # CSR Builder
//!
//! Builds the PKCS#10 certificate signing request that binds a device's
//! P-256 key to its business/branch/POS identity.
//!
//! ## Subject Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  C=<Country>, O=<Nui>, OU=<PosId>, L=<BranchId>, CN=<BusinessName>      │
//! │                                                                         │
//! │  Attribute codes AND their order are fixed - the authority-side        │
//! │  parser matches them literally. The numeric identity fields ride in    │
//! │  the organisation attributes; the human-readable business name is     │
//! │  the common name.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The request is self-signed with ECDSA/SHA-256 as proof of possession
//! of the private key. No extensions (SAN, key usage) are attached - the
//! enrollment protocol does not ask for any.

use rcgen::{
    Certificate, CertificateParams, DistinguishedName, DnType, KeyPair, PKCS_ECDSA_P256_SHA256,
};
use tracing::debug;

use crate::error::{PkiError, PkiResult};
use crate::key::DeviceKeyPair;
use crate::pem::export_to_pem;

// =============================================================================
// Device Identity
// =============================================================================

/// The identity a device asserts towards the tax authority.
///
/// An immutable value, used once per CSR request. The numeric fields are
/// the authority-assigned registration identifiers; the strings come
/// from the business registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    /// Country code of the fiscalization regime (e.g. "RKS").
    pub country: String,

    /// Registered business name.
    pub business_name: String,

    /// National unique business identifier.
    pub nui: u64,

    /// Branch within the business.
    pub branch_id: u64,

    /// POS device within the branch.
    pub pos_id: u64,
}

impl DeviceIdentity {
    /// Renders the subject distinguished name, bit-exact as the
    /// authority parses it.
    ///
    /// ## Example
    /// ```rust
    /// use fiskal_pki::csr::DeviceIdentity;
    ///
    /// let identity = DeviceIdentity {
    ///     country: "RKS".to_string(),
    ///     business_name: "Kafe Mali".to_string(),
    ///     nui: 60100,
    ///     branch_id: 1,
    ///     pos_id: 1,
    /// };
    /// assert_eq!(identity.subject_dn(), "C=RKS, O=60100, OU=1, L=1, CN=Kafe Mali");
    /// ```
    pub fn subject_dn(&self) -> String {
        format!(
            "C={}, O={}, OU={}, L={}, CN={}",
            self.country, self.nui, self.pos_id, self.branch_id, self.business_name
        )
    }

    /// Checks the CSR preconditions: both string fields must be
    /// non-empty (the numeric fields are valid by construction).
    fn validate(&self) -> PkiResult<()> {
        if self.country.trim().is_empty() {
            return Err(PkiError::MissingIdentityField { field: "country" });
        }
        if self.business_name.trim().is_empty() {
            return Err(PkiError::MissingIdentityField {
                field: "business_name",
            });
        }
        Ok(())
    }
}

// =============================================================================
// CSR Artifact
// =============================================================================

/// A signed certificate signing request, immutable once created.
///
/// Both output forms encode the identical signed structure; the DER
/// bytes are the canonical artifact and the PEM form wraps them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrArtifact {
    der: Vec<u8>,
}

impl CsrArtifact {
    /// The raw DER bytes of the request.
    #[inline]
    pub fn der(&self) -> &[u8] {
        &self.der
    }

    /// Consumes the artifact, returning the DER bytes.
    #[inline]
    pub fn into_der(self) -> Vec<u8> {
        self.der
    }

    /// The PEM form, framed as a `CERTIFICATE REQUEST` block.
    pub fn to_pem(&self) -> PkiResult<String> {
        export_to_pem("CERTIFICATE REQUEST", &self.der)
    }
}

// =============================================================================
// CSR Construction
// =============================================================================

/// Builds and self-signs the enrollment CSR for `identity` with `key`.
///
/// ## Failure
/// - [`PkiError::MissingIdentityField`]: a precondition on `identity`
///   failed; retrying with a fresh key cannot help, only a corrected
///   identity can.
/// - [`PkiError::CsrConstruction`] / [`PkiError::KeyGeneration`]: the
///   signer rejected the key or signing itself failed; may be retried
///   with a fresh key pair if the cause was transient.
pub fn create_csr(key: &DeviceKeyPair, identity: &DeviceIdentity) -> PkiResult<CsrArtifact> {
    identity.validate()?;

    debug!(
        country = %identity.country,
        nui = identity.nui,
        branch_id = identity.branch_id,
        pos_id = identity.pos_id,
        "building enrollment CSR"
    );

    // Bridge the device key into the CSR signer. The PKCS#8 copy wipes
    // itself when this function returns, on every path.
    let pkcs8 = key.to_pkcs8_der()?;
    let signer = KeyPair::from_der(pkcs8.as_bytes()).map_err(|e| PkiError::CsrConstruction {
        reason: format!("signer rejected device key: {e}"),
    })?;

    // Subject attributes in the authority's fixed order:
    // C, O (nui), OU (pos), L (branch), CN (business name)
    let mut dn = DistinguishedName::new();
    dn.push(DnType::CountryName, identity.country.as_str());
    dn.push(DnType::OrganizationName, identity.nui.to_string());
    dn.push(DnType::OrganizationalUnitName, identity.pos_id.to_string());
    dn.push(DnType::LocalityName, identity.branch_id.to_string());
    dn.push(DnType::CommonName, identity.business_name.as_str());

    let mut params = CertificateParams::default();
    params.alg = &PKCS_ECDSA_P256_SHA256;
    params.distinguished_name = dn;
    params.key_pair = Some(signer);

    let request = Certificate::from_params(params).map_err(|e| PkiError::CsrConstruction {
        reason: format!("request assembly failed: {e}"),
    })?;

    let der = request
        .serialize_request_der()
        .map_err(|e| PkiError::CsrConstruction {
            reason: format!("request signing failed: {e}"),
        })?;

    debug!(der_len = der.len(), "enrollment CSR signed");

    Ok(CsrArtifact { der })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_identity() -> DeviceIdentity {
        DeviceIdentity {
            country: "RKS".to_string(),
            business_name: "Kafe Mali".to_string(),
            nui: 60100,
            branch_id: 1,
            pos_id: 1,
        }
    }

    #[test]
    fn test_subject_dn_order_and_tags() {
        assert_eq!(
            sample_identity().subject_dn(),
            "C=RKS, O=60100, OU=1, L=1, CN=Kafe Mali"
        );
    }

    #[test]
    fn test_empty_country_is_rejected() {
        let key = DeviceKeyPair::generate().unwrap();
        let mut identity = sample_identity();
        identity.country = "  ".to_string();

        let err = create_csr(&key, &identity).unwrap_err();
        assert!(matches!(
            err,
            PkiError::MissingIdentityField { field: "country" }
        ));
    }

    #[test]
    fn test_empty_business_name_is_rejected() {
        let key = DeviceKeyPair::generate().unwrap();
        let mut identity = sample_identity();
        identity.business_name = String::new();

        let err = create_csr(&key, &identity).unwrap_err();
        assert!(matches!(
            err,
            PkiError::MissingIdentityField {
                field: "business_name"
            }
        ));
    }

    #[test]
    fn test_csr_der_and_pem_encode_the_same_structure() {
        let key = DeviceKeyPair::generate().unwrap();
        let csr = create_csr(&key, &sample_identity()).unwrap();

        let pem = csr.to_pem().unwrap();
        assert!(pem.starts_with("-----BEGIN CERTIFICATE REQUEST-----\n"));

        let body: String = pem
            .lines()
            .filter(|line| !line.starts_with("-----"))
            .collect();
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        let decoded = STANDARD.decode(body).unwrap();
        assert_eq!(decoded, csr.der());
    }

    #[test]
    fn test_csr_is_der_sequence() {
        let key = DeviceKeyPair::generate().unwrap();
        let csr = create_csr(&key, &sample_identity()).unwrap();
        // Outer PKCS#10 structure is a DER SEQUENCE
        assert_eq!(csr.der()[0], 0x30);
    }
}
