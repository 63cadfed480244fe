//! The closed set of known runtime packages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RtpError;

/// A specific release of a runtime package.
///
/// Declaration order is the stable ordinal: detection results and lookup
/// sets are reported in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RtpType {
    Rpg2000OfficialJapanese,
    Rpg2000OfficialEnglish,
    Rpg2000DonMiguelEnglish,
    Rpg2000DonMiguelAddon,
    Rpg2003OfficialJapanese,
    Rpg2003OfficialEnglish,
    Rpg2003RpgAdvocateEnglish,
    Rpg2003VladRussian,
    Rpg2003RpgUniverseSpanishPortuguese,
    Rpg2003Korean,
}

impl RtpType {
    /// Every known variant in declaration order.
    pub const ALL: [RtpType; 10] = [
        RtpType::Rpg2000OfficialJapanese,
        RtpType::Rpg2000OfficialEnglish,
        RtpType::Rpg2000DonMiguelEnglish,
        RtpType::Rpg2000DonMiguelAddon,
        RtpType::Rpg2003OfficialJapanese,
        RtpType::Rpg2003OfficialEnglish,
        RtpType::Rpg2003RpgAdvocateEnglish,
        RtpType::Rpg2003VladRussian,
        RtpType::Rpg2003RpgUniverseSpanishPortuguese,
        RtpType::Rpg2003Korean,
    ];

    /// Stable identifier used in authoring data, config files and the CLI.
    pub fn id(&self) -> &'static str {
        match self {
            RtpType::Rpg2000OfficialJapanese => "rpg2000_official_japanese",
            RtpType::Rpg2000OfficialEnglish => "rpg2000_official_english",
            RtpType::Rpg2000DonMiguelEnglish => "rpg2000_don_miguel_english",
            RtpType::Rpg2000DonMiguelAddon => "rpg2000_don_miguel_addon",
            RtpType::Rpg2003OfficialJapanese => "rpg2003_official_japanese",
            RtpType::Rpg2003OfficialEnglish => "rpg2003_official_english",
            RtpType::Rpg2003RpgAdvocateEnglish => "rpg2003_rpg_advocate_english",
            RtpType::Rpg2003VladRussian => "rpg2003_vlad_russian",
            RtpType::Rpg2003RpgUniverseSpanishPortuguese => {
                "rpg2003_rpg_universe_spanish_portuguese"
            }
            RtpType::Rpg2003Korean => "rpg2003_korean",
        }
    }

    /// Human-readable release name.
    pub fn display_name(&self) -> &'static str {
        match self {
            RtpType::Rpg2000OfficialJapanese | RtpType::Rpg2003OfficialJapanese => {
                "Official Japanese"
            }
            RtpType::Rpg2000OfficialEnglish | RtpType::Rpg2003OfficialEnglish => {
                "Official English"
            }
            RtpType::Rpg2000DonMiguelEnglish => "Don Miguel English Translation",
            RtpType::Rpg2000DonMiguelAddon => "Don Miguel RTP Addon",
            RtpType::Rpg2003RpgAdvocateEnglish => "RPG Advocate English Translation",
            RtpType::Rpg2003VladRussian => "Vlad Russian Translation",
            RtpType::Rpg2003RpgUniverseSpanishPortuguese => {
                "RPG Universe Spanish/Portuguese Translation"
            }
            RtpType::Rpg2003Korean => "Korean Translation",
        }
    }

    /// The engine generation this package was released for.
    pub fn generation(&self) -> Generation {
        match self {
            RtpType::Rpg2000OfficialJapanese
            | RtpType::Rpg2000OfficialEnglish
            | RtpType::Rpg2000DonMiguelEnglish
            | RtpType::Rpg2000DonMiguelAddon => Generation::Rpg2000,
            _ => Generation::Rpg2003,
        }
    }

    /// Variants of one generation, in declaration order.
    pub fn of_generation(generation: Generation) -> impl Iterator<Item = RtpType> {
        Self::ALL
            .into_iter()
            .filter(move |rtp| rtp.generation() == generation)
    }
}

impl fmt::Display for RtpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for RtpType {
    type Err = RtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|rtp| rtp.id().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| RtpError::UnknownVariant {
                name: s.to_string(),
            })
    }
}

/// Engine generation a runtime package belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Generation {
    Rpg2000,
    Rpg2003,
}

impl Generation {
    /// The release year used to name the generation.
    pub fn year(&self) -> u16 {
        match self {
            Generation::Rpg2000 => 2000,
            Generation::Rpg2003 => 2003,
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.year())
    }
}

impl TryFrom<u16> for Generation {
    type Error = RtpError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2000 => Ok(Generation::Rpg2000),
            2003 => Ok(Generation::Rpg2003),
            other => Err(RtpError::UnknownGeneration {
                value: other.to_string(),
            }),
        }
    }
}

impl From<Generation> for u16 {
    fn from(generation: Generation) -> Self {
        generation.year()
    }
}

impl FromStr for Generation {
    type Err = RtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "2000" | "2k" => Ok(Generation::Rpg2000),
            "2003" | "2k3" => Ok(Generation::Rpg2003),
            _ => Err(RtpError::UnknownGeneration {
                value: s.to_string(),
            }),
        }
    }
}

/// Restricts which variants an operation considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionFilter {
    /// Every known generation.
    #[default]
    Any,
    /// Only variants released for this generation.
    Generation(Generation),
}

impl VersionFilter {
    /// Whether `rtp` passes this filter.
    pub fn matches(&self, rtp: RtpType) -> bool {
        match self {
            VersionFilter::Any => true,
            VersionFilter::Generation(generation) => rtp.generation() == *generation,
        }
    }

    /// The variants passing this filter, in declaration order.
    pub fn variants(self) -> impl Iterator<Item = RtpType> {
        RtpType::ALL.into_iter().filter(move |rtp| self.matches(*rtp))
    }
}

impl From<Option<Generation>> for VersionFilter {
    fn from(generation: Option<Generation>) -> Self {
        generation.map_or(VersionFilter::Any, VersionFilter::Generation)
    }
}

impl From<Generation> for VersionFilter {
    fn from(generation: Generation) -> Self {
        VersionFilter::Generation(generation)
    }
}
