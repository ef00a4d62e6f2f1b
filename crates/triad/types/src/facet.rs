//! Facets and facet pairs.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TriadError;

/// One of the three independent sub-profiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Facet {
    /// What the respondent is driven by (values, core motivation).
    DominantDrive,
    /// How the respondent presents in social settings.
    SocialPresentation,
    /// How the respondent reacts under stress.
    StressResponse,
}

impl Facet {
    /// All facets in pipeline order.
    pub const ALL: [Facet; 3] = [
        Facet::DominantDrive,
        Facet::SocialPresentation,
        Facet::StressResponse,
    ];

    /// Position in `ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kebab-case label, used as the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::DominantDrive => "dominant-drive",
            Self::SocialPresentation => "social-presentation",
            Self::StressResponse => "stress-response",
        }
    }

    /// Whether the facet's dimensions are already the canonical categories.
    pub fn is_canonical_basis(self) -> bool {
        matches!(self, Self::DominantDrive)
    }
}

impl std::fmt::Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Facet {
    type Err = TriadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dominant-drive" | "engine" => Ok(Self::DominantDrive),
            "social-presentation" | "interface" => Ok(Self::SocialPresentation),
            "stress-response" | "safe-mode" => Ok(Self::StressResponse),
            other => Err(TriadError::ConfigParse(format!("unknown facet `{other}`"))),
        }
    }
}

impl Serialize for Facet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Facet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// An unordered pair of distinct facets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FacetPair {
    DriveSocial,
    DriveStress,
    SocialStress,
}

impl FacetPair {
    /// All three pairs.
    pub const ALL: [FacetPair; 3] = [
        FacetPair::DriveSocial,
        FacetPair::DriveStress,
        FacetPair::SocialStress,
    ];

    /// The two facets, in `Facet::ALL` order.
    pub fn facets(self) -> (Facet, Facet) {
        match self {
            Self::DriveSocial => (Facet::DominantDrive, Facet::SocialPresentation),
            Self::DriveStress => (Facet::DominantDrive, Facet::StressResponse),
            Self::SocialStress => (Facet::SocialPresentation, Facet::StressResponse),
        }
    }

    /// Pair identifier, used as the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::DriveSocial => "dominant-drive/social-presentation",
            Self::DriveStress => "dominant-drive/stress-response",
            Self::SocialStress => "social-presentation/stress-response",
        }
    }
}

impl std::fmt::Display for FacetPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for FacetPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for FacetPair {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::ALL
            .into_iter()
            .find(|p| p.label() == raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown facet pair `{raw}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_aliases_parse() {
        assert_eq!("engine".parse::<Facet>().unwrap(), Facet::DominantDrive);
        assert_eq!("interface".parse::<Facet>().unwrap(), Facet::SocialPresentation);
        assert_eq!("safe-mode".parse::<Facet>().unwrap(), Facet::StressResponse);
        assert!("shadow".parse::<Facet>().is_err());
    }

    #[test]
    fn pairs_cover_every_unordered_combination() {
        let mut seen = std::collections::HashSet::new();
        for pair in FacetPair::ALL {
            let (a, b) = pair.facets();
            assert!(a < b);
            seen.insert((a, b));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn facet_map_keys_serialize_as_labels() {
        let mut map = std::collections::BTreeMap::new();
        map.insert(Facet::StressResponse, 1);
        map.insert(FacetPair::DriveSocial.facets().0, 2);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"dominant-drive":2,"stress-response":1}"#);
        let back: std::collections::BTreeMap<Facet, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
