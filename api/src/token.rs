//! Defines the networks/tokens supported by the staking hub.

use serde::Deserialize;
use serde::Serialize;

/// A stakeable token together with the network it lives on.
///
/// Each variant carries its indexer endpoint and block-explorer base, since
/// the two networks are served by distinct deployments of the same services.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Token {
    /// UNQ on Unique Network.
    #[default]
    UNQ,
    /// QTZ on Quartz Network.
    QTZ,
}

impl Token {
    /// The ticker symbol (e.g. "UNQ").
    /// Handled by the `strum::IntoStaticStr` derive.
    pub fn symbol(&self) -> &'static str {
        self.into()
    }

    /// The full network name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::UNQ => "Unique Network",
            Self::QTZ => "Quartz Network",
        }
    }

    /// Power-of-ten scale between raw on-chain units and display units.
    /// Both networks use 18.
    pub fn decimals(&self) -> u32 {
        match self {
            Self::UNQ | Self::QTZ => 18,
        }
    }

    /// Base URL of the extrinsics indexer for this network.
    pub fn indexer_base_url(&self) -> &'static str {
        match self {
            Self::UNQ => "https://api-unique.uniquescan.io/v2",
            Self::QTZ => "https://api-quartz.uniquescan.io/v2",
        }
    }

    fn subscan_base_url(&self) -> &'static str {
        match self {
            Self::UNQ => "https://unique.subscan.io",
            Self::QTZ => "https://quartz.subscan.io",
        }
    }

    /// Block-explorer page for a submitted extrinsic.
    pub fn subscan_extrinsic_url(&self, hash: &str) -> String {
        format!("{}/extrinsic/{}?tab=event", self.subscan_base_url(), hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn indexer_urls_differ_per_network() {
        assert_eq!(
            Token::UNQ.indexer_base_url(),
            "https://api-unique.uniquescan.io/v2"
        );
        assert_eq!(
            Token::QTZ.indexer_base_url(),
            "https://api-quartz.uniquescan.io/v2"
        );
    }

    #[test]
    fn subscan_urls_embed_the_hash() {
        assert_eq!(
            Token::UNQ.subscan_extrinsic_url("0xabc"),
            "https://unique.subscan.io/extrinsic/0xabc?tab=event"
        );
        assert_eq!(
            Token::QTZ.subscan_extrinsic_url("0xdef"),
            "https://quartz.subscan.io/extrinsic/0xdef?tab=event"
        );
    }

    #[test]
    fn symbol_parsing_is_case_insensitive() {
        assert_eq!(Token::from_str("unq").unwrap(), Token::UNQ);
        assert_eq!(Token::from_str("QTZ").unwrap(), Token::QTZ);
        assert_eq!(Token::UNQ.symbol(), "UNQ");
    }
}
