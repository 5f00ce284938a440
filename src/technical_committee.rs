//! Technical committees responsible for GB standards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BibError;

/// Kind of committee that drafted a standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitteeType {
    /// National technical committee (TC)
    Technical,
    /// Provincial standardization body
    Provincial,
    /// Industry standardization body
    Industry,
}

impl CommitteeType {
    /// Keyword used in configuration and XML.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Provincial => "provincial",
            Self::Industry => "industry",
        }
    }
}

impl fmt::Display for CommitteeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitteeType {
    type Err = BibError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "technical" => Ok(Self::Technical),
            "provincial" => Ok(Self::Provincial),
            "industry" => Ok(Self::Industry),
            other => Err(BibError::InvalidCommitteeType(other.to_string())),
        }
    }
}

/// Raw committee input as it appears in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitteeArgs {
    /// Committee type keyword.
    #[serde(rename = "type")]
    pub committee_type: String,
    /// Committee name.
    pub name: String,
}

impl CommitteeArgs {
    /// Create committee input.
    #[must_use]
    pub fn new(committee_type: impl Into<String>, name: impl Into<String>) -> Self {
        CommitteeArgs {
            committee_type: committee_type.into(),
            name: name.into(),
        }
    }
}

/// Committee that drafted a GB standard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GbTechnicalCommittee {
    committee_type: CommitteeType,
    name: String,
}

impl GbTechnicalCommittee {
    /// Committee type.
    #[must_use]
    pub fn committee_type(&self) -> CommitteeType {
        self.committee_type
    }

    /// Committee name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<CommitteeArgs> for GbTechnicalCommittee {
    type Error = BibError;

    fn try_from(args: CommitteeArgs) -> Result<Self, Self::Error> {
        Ok(GbTechnicalCommittee {
            committee_type: args.committee_type.parse()?,
            name: args.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_committee_from_args() {
        let tc = GbTechnicalCommittee::try_from(CommitteeArgs::new("technical", "SAC/TC 28"))
            .unwrap();
        assert_eq!(tc.committee_type(), CommitteeType::Technical);
        assert_eq!(tc.name(), "SAC/TC 28");
    }

    #[test]
    fn test_invalid_committee_type() {
        let err = GbTechnicalCommittee::try_from(CommitteeArgs::new("national", "X")).unwrap_err();
        assert_eq!(err.to_string(), "invalid committee type: national");
    }

    #[test]
    fn test_committee_type_roundtrip_keyword() {
        for kind in [
            CommitteeType::Technical,
            CommitteeType::Provincial,
            CommitteeType::Industry,
        ] {
            assert_eq!(kind.as_str().parse::<CommitteeType>().unwrap(), kind);
        }
    }
}
