//! Tier prefixes and the destination-key convention: a processed object
//! lands in the same bucket under the next tier's prefix, keeping the final
//! path segment of the source key.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
}

impl Tier {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Bronze => "bronze/",
            Self::Silver => "silver/",
            Self::Gold => "gold/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    BronzeToSilver,
    SilverToGold,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Self::BronzeToSilver => "bronze_to_silver",
            Self::SilverToGold => "silver_to_gold",
        }
    }

    pub fn source_tier(self) -> Tier {
        match self {
            Self::BronzeToSilver => Tier::Bronze,
            Self::SilverToGold => Tier::Silver,
        }
    }

    pub fn destination_tier(self) -> Tier {
        match self {
            Self::BronzeToSilver => Tier::Silver,
            Self::SilverToGold => Tier::Gold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMismatch {
    message: String,
}

impl PrefixMismatch {
    fn new(stage: Stage, key: &str) -> Self {
        Self {
            message: format!(
                "object key '{key}' is not under the '{}' prefix required by the {} stage",
                stage.source_tier().prefix(),
                stage.name(),
            ),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for PrefixMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for PrefixMismatch {}

/// Validates that `source_key` sits under the stage's source prefix and
/// returns the destination key: the destination prefix plus the source
/// key's filename. Must be called before any fetch so a misplaced object
/// never touches storage.
pub fn destination_key(stage: Stage, source_key: &str) -> Result<String, PrefixMismatch> {
    if !source_key.starts_with(stage.source_tier().prefix()) {
        return Err(PrefixMismatch::new(stage, source_key));
    }

    let filename = match source_key.rsplit_once('/') {
        Some((_, name)) => name,
        None => source_key,
    };
    Ok(format!("{}{filename}", stage.destination_tier().prefix()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bronze_stage_moves_objects_to_silver() {
        let key = destination_key(Stage::BronzeToSilver, "bronze/input_data.csv")
            .expect("key should pass validation");
        assert_eq!(key, "silver/input_data.csv");
    }

    #[test]
    fn silver_stage_moves_objects_to_gold() {
        let key = destination_key(Stage::SilverToGold, "silver/input_data.csv")
            .expect("key should pass validation");
        assert_eq!(key, "gold/input_data.csv");
    }

    #[test]
    fn nested_source_keys_keep_only_the_filename() {
        let key = destination_key(Stage::BronzeToSilver, "bronze/2026/02/customers.csv")
            .expect("key should pass validation");
        assert_eq!(key, "silver/customers.csv");
    }

    #[test]
    fn rejects_keys_outside_the_source_prefix() {
        let error = destination_key(Stage::BronzeToSilver, "gold/foo.csv")
            .expect_err("key should fail validation");
        assert_eq!(
            error.message(),
            "object key 'gold/foo.csv' is not under the 'bronze/' prefix required by the bronze_to_silver stage"
        );
    }

    #[test]
    fn prefix_match_is_anchored_at_the_key_start() {
        destination_key(Stage::SilverToGold, "backup/silver/foo.csv")
            .expect_err("key should fail validation");
    }

    #[test]
    fn stage_tiers_line_up_with_prefixes() {
        assert_eq!(Stage::BronzeToSilver.source_tier().prefix(), "bronze/");
        assert_eq!(Stage::BronzeToSilver.destination_tier().prefix(), "silver/");
        assert_eq!(Stage::SilverToGold.source_tier().prefix(), "silver/");
        assert_eq!(Stage::SilverToGold.destination_tier().prefix(), "gold/");
    }
}
