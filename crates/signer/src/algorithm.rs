// Copyright (C) Microsoft Corporation. All rights reserved.

//! Algorithm metadata keyed by XML-DSig algorithm URI.

use lazy_static::lazy_static;
use signservice_crypto::HashAlgo;
use signservice_crypto::KeyFamily;

/// Well-known algorithm URIs (RFC 3275, RFC 6931).
pub mod uri {
    /// RSA PKCS#1 v1.5 with SHA-1
    pub const RSA_SHA1: &str = "http://www.w3.org/2000/09/xmldsig#rsa-sha1";
    /// RSA PKCS#1 v1.5 with SHA-256
    pub const RSA_SHA256: &str = "http://www.w3.org/2001/04/xmldsig-more#rsa-sha256";
    /// RSA PKCS#1 v1.5 with SHA-384
    pub const RSA_SHA384: &str = "http://www.w3.org/2001/04/xmldsig-more#rsa-sha384";
    /// RSA PKCS#1 v1.5 with SHA-512
    pub const RSA_SHA512: &str = "http://www.w3.org/2001/04/xmldsig-more#rsa-sha512";

    /// RSASSA-PSS with SHA-1 and MGF1
    pub const RSA_PSS_SHA1_MGF1: &str = "http://www.w3.org/2007/05/xmldsig-more#sha1-rsa-MGF1";
    /// RSASSA-PSS with SHA-256 and MGF1
    pub const RSA_PSS_SHA256_MGF1: &str =
        "http://www.w3.org/2007/05/xmldsig-more#sha256-rsa-MGF1";
    /// RSASSA-PSS with SHA-384 and MGF1
    pub const RSA_PSS_SHA384_MGF1: &str =
        "http://www.w3.org/2007/05/xmldsig-more#sha384-rsa-MGF1";
    /// RSASSA-PSS with SHA-512 and MGF1
    pub const RSA_PSS_SHA512_MGF1: &str =
        "http://www.w3.org/2007/05/xmldsig-more#sha512-rsa-MGF1";

    /// ECDSA with SHA-1
    pub const ECDSA_SHA1: &str = "http://www.w3.org/2001/04/xmldsig-more#ecdsa-sha1";
    /// ECDSA with SHA-256
    pub const ECDSA_SHA256: &str = "http://www.w3.org/2001/04/xmldsig-more#ecdsa-sha256";
    /// ECDSA with SHA-384
    pub const ECDSA_SHA384: &str = "http://www.w3.org/2001/04/xmldsig-more#ecdsa-sha384";
    /// ECDSA with SHA-512
    pub const ECDSA_SHA512: &str = "http://www.w3.org/2001/04/xmldsig-more#ecdsa-sha512";

    /// SHA-1 digest
    pub const SHA1: &str = "http://www.w3.org/2000/09/xmldsig#sha1";
    /// SHA-256 digest
    pub const SHA256: &str = "http://www.w3.org/2001/04/xmlenc#sha256";
    /// SHA-384 digest
    pub const SHA384: &str = "http://www.w3.org/2001/04/xmldsig-more#sha384";
    /// SHA-512 digest
    pub const SHA512: &str = "http://www.w3.org/2001/04/xmlenc#sha512";
}

/// What an algorithm URI denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    /// A signature algorithm.
    Signature {
        /// Key family the algorithm signs with
        key_family: KeyFamily,
        /// RSASSA-PSS rather than PKCS#1 v1.5
        pss: bool,
    },

    /// A plain message digest.
    MessageDigest,
}

/// Immutable description of one algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmDescriptor {
    uri: String,
    kind: AlgorithmKind,
    digest: HashAlgo,
}

impl AlgorithmDescriptor {
    /// A non-PSS signature algorithm.
    pub fn signature(uri: impl Into<String>, key_family: KeyFamily, digest: HashAlgo) -> Self {
        Self {
            uri: uri.into(),
            kind: AlgorithmKind::Signature {
                key_family,
                pss: false,
            },
            digest,
        }
    }

    /// An RSASSA-PSS algorithm using `digest` for content and MGF1.
    pub fn rsa_pss(uri: impl Into<String>, digest: HashAlgo) -> Self {
        Self {
            uri: uri.into(),
            kind: AlgorithmKind::Signature {
                key_family: KeyFamily::Rsa,
                pss: true,
            },
            digest,
        }
    }

    /// A message digest algorithm.
    pub fn message_digest(uri: impl Into<String>, digest: HashAlgo) -> Self {
        Self {
            uri: uri.into(),
            kind: AlgorithmKind::MessageDigest,
            digest,
        }
    }

    /// Algorithm URI.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// What the URI denotes.
    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    /// Message digest of the algorithm.
    pub fn digest(&self) -> HashAlgo {
        self.digest
    }

    /// Key family of a signature algorithm.
    pub fn key_family(&self) -> Option<KeyFamily> {
        match self.kind {
            AlgorithmKind::Signature { key_family, .. } => Some(key_family),
            AlgorithmKind::MessageDigest => None,
        }
    }

    /// Whether this is an RSASSA-PSS algorithm.
    pub fn is_pss(&self) -> bool {
        matches!(self.kind, AlgorithmKind::Signature { pss: true, .. })
    }

    /// Whether this is a signature algorithm.
    pub fn is_signature(&self) -> bool {
        matches!(self.kind, AlgorithmKind::Signature { .. })
    }
}

/// Lookup of algorithm metadata by URI.
pub trait AlgorithmRegistry: Send + Sync {
    /// Descriptor registered for `uri`, if any.
    fn get(&self, uri: &str) -> Option<&AlgorithmDescriptor>;
}

/// Registry pre-populated with the XML-DSig RSA, RSA-PSS, ECDSA and digest
/// algorithms.
#[derive(Debug, Clone)]
pub struct DefaultAlgorithmRegistry {
    algorithms: Vec<AlgorithmDescriptor>,
}

impl Default for DefaultAlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultAlgorithmRegistry {
    /// Registry holding the built-in algorithms.
    pub fn new() -> Self {
        use self::uri::*;

        let algorithms = vec![
            AlgorithmDescriptor::signature(RSA_SHA1, KeyFamily::Rsa, HashAlgo::Sha1),
            AlgorithmDescriptor::signature(RSA_SHA256, KeyFamily::Rsa, HashAlgo::Sha256),
            AlgorithmDescriptor::signature(RSA_SHA384, KeyFamily::Rsa, HashAlgo::Sha384),
            AlgorithmDescriptor::signature(RSA_SHA512, KeyFamily::Rsa, HashAlgo::Sha512),
            AlgorithmDescriptor::rsa_pss(RSA_PSS_SHA1_MGF1, HashAlgo::Sha1),
            AlgorithmDescriptor::rsa_pss(RSA_PSS_SHA256_MGF1, HashAlgo::Sha256),
            AlgorithmDescriptor::rsa_pss(RSA_PSS_SHA384_MGF1, HashAlgo::Sha384),
            AlgorithmDescriptor::rsa_pss(RSA_PSS_SHA512_MGF1, HashAlgo::Sha512),
            AlgorithmDescriptor::signature(ECDSA_SHA1, KeyFamily::Ec, HashAlgo::Sha1),
            AlgorithmDescriptor::signature(ECDSA_SHA256, KeyFamily::Ec, HashAlgo::Sha256),
            AlgorithmDescriptor::signature(ECDSA_SHA384, KeyFamily::Ec, HashAlgo::Sha384),
            AlgorithmDescriptor::signature(ECDSA_SHA512, KeyFamily::Ec, HashAlgo::Sha512),
            AlgorithmDescriptor::message_digest(SHA1, HashAlgo::Sha1),
            AlgorithmDescriptor::message_digest(SHA256, HashAlgo::Sha256),
            AlgorithmDescriptor::message_digest(SHA384, HashAlgo::Sha384),
            AlgorithmDescriptor::message_digest(SHA512, HashAlgo::Sha512),
        ];

        Self { algorithms }
    }

    /// Adds `descriptor`, replacing any existing entry with the same URI.
    pub fn register(&mut self, descriptor: AlgorithmDescriptor) {
        match self
            .algorithms
            .iter_mut()
            .find(|existing| existing.uri == descriptor.uri)
        {
            Some(existing) => *existing = descriptor,
            None => self.algorithms.push(descriptor),
        }
    }

    /// All registered descriptors in registration order.
    pub fn algorithms(&self) -> impl Iterator<Item = &AlgorithmDescriptor> {
        self.algorithms.iter()
    }

    /// First signature algorithm matching a key family, digest and PSS flag.
    pub fn find_signature_algorithm(
        &self,
        key_family: KeyFamily,
        digest: HashAlgo,
        pss: bool,
    ) -> Option<&AlgorithmDescriptor> {
        self.algorithms.iter().find(|descriptor| {
            descriptor.kind
                == AlgorithmKind::Signature { key_family, pss }
                && descriptor.digest == digest
        })
    }
}

impl AlgorithmRegistry for DefaultAlgorithmRegistry {
    fn get(&self, uri: &str) -> Option<&AlgorithmDescriptor> {
        self.algorithms.iter().find(|descriptor| descriptor.uri == uri)
    }
}

lazy_static! {
    static ref DEFAULT_REGISTRY: DefaultAlgorithmRegistry = DefaultAlgorithmRegistry::new();
}

/// Process-wide registry with the built-in algorithms.
pub fn default_registry() -> &'static DefaultAlgorithmRegistry {
    &DEFAULT_REGISTRY
}
