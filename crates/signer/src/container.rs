// Copyright (C) Microsoft Corporation. All rights reserved.

use std::fmt;
use std::str::FromStr;

/// Format of the signature that will carry the signature value.
///
/// Only the ECDSA signer looks at this; RSA signature values have a single
/// encoding in every container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureContainerType {
    /// XML digital signature
    Xml,
    /// PDF signature
    Pdf,
    /// JSON signature
    Json,
    /// CMS signed data
    Cms,
}

impl SignatureContainerType {
    /// Upper-case name of the container type.
    pub fn name(&self) -> &'static str {
        match self {
            SignatureContainerType::Xml => "XML",
            SignatureContainerType::Pdf => "PDF",
            SignatureContainerType::Json => "JSON",
            SignatureContainerType::Cms => "CMS",
        }
    }
}

impl fmt::Display for SignatureContainerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignatureContainerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            SignatureContainerType::Xml,
            SignatureContainerType::Pdf,
            SignatureContainerType::Json,
            SignatureContainerType::Cms,
        ]
        .into_iter()
        .find(|container| container.name().eq_ignore_ascii_case(s))
        .ok_or_else(|| s.to_string())
    }
}
