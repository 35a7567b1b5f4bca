//! Rules module - merge-value and spawn policy as immutable configuration
//!
//! The turn engine never computes a merged value itself; it asks this table
//! which value a pair combines into. The table is loaded once (JSON or the
//! classic defaults), validated up front, and never mutated afterward.

use std::collections::HashMap;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::types::{TileValue, DEFAULT_ALTERNATE_PERCENT};

/// Spawn policy: which values appear after a move, and how often
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SpawnPolicy {
    pub base: TileValue,
    pub alternate: TileValue,
    /// Probability of the alternate value, in percent (0-100)
    #[serde(default = "default_alternate_percent")]
    pub alternate_percent: u8,
}

fn default_alternate_percent() -> u8 {
    DEFAULT_ALTERNATE_PERCENT
}

/// Immutable game rules: the merge-value table plus the spawn policy
#[derive(Debug, Clone, Deserialize)]
pub struct Rules {
    /// Which value a merged pair combines into (e.g. 2 -> 4, 4 -> 8)
    merges: HashMap<TileValue, TileValue>,
    spawn: SpawnPolicy,
}

impl Rules {
    /// Standard doubling rules: 2 -> 4 -> ... -> 2048, spawning 2 (90%) or 4 (10%)
    pub fn classic() -> Self {
        let mut merges = HashMap::new();
        let mut value = 2u32;
        while value < 2048 {
            merges.insert(TileValue::new(value), TileValue::new(value * 2));
            value *= 2;
        }

        let rules = Self {
            merges,
            spawn: SpawnPolicy {
                base: TileValue::new(2),
                alternate: TileValue::new(4),
                alternate_percent: DEFAULT_ALTERNATE_PERCENT,
            },
        };
        debug_assert!(rules.validate().is_ok());
        rules
    }

    /// Parse and validate rules from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Rules = serde_json::from_str(json).context("failed to parse rules JSON")?;
        rules.validate().context("invalid rules configuration")?;
        Ok(rules)
    }

    /// Check the table and spawn policy for internal consistency
    ///
    /// Guarantees that after load, every next-value lookup the engine can make
    /// succeeds, except for the single cap value (which simply never merges).
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.merges.is_empty(), "merge table is empty");
        ensure!(
            self.spawn.alternate_percent <= 100,
            "alternate_percent {} exceeds 100",
            self.spawn.alternate_percent
        );
        ensure!(
            self.merges.contains_key(&self.spawn.base),
            "spawn base value {} is not in the merge table",
            self.spawn.base
        );
        ensure!(
            self.merges.contains_key(&self.spawn.alternate),
            "spawn alternate value {} is not in the merge table",
            self.spawn.alternate
        );

        let mut caps = Vec::new();
        for (&value, &next) in &self.merges {
            ensure!(value != next, "value {} maps to itself", value);
            if !self.merges.contains_key(&next) {
                caps.push(next);
            }
        }
        caps.sort();
        caps.dedup();
        ensure!(
            caps.len() <= 1,
            "merge table has {} dead-end values ({}); at most one cap is allowed",
            caps.len(),
            caps.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(())
    }

    /// The value a merged pair of `value` tiles combines into
    ///
    /// None only for the cap value; equal cap tiles do not merge.
    pub fn next_value(&self, value: TileValue) -> Option<TileValue> {
        self.merges.get(&value).copied()
    }

    pub fn spawn(&self) -> SpawnPolicy {
        self.spawn
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::classic()
    }
}
