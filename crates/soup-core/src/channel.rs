//! Channel definitions, the standard channel table, and the [`ChannelSet`] bitset.

use crate::id::ChannelId;
use smallvec::SmallVec;

/// Free water.
pub const WATER: ChannelId = ChannelId(0);
/// Soil density.
pub const SOIL: ChannelId = ChannelId(1);
/// Water bound inside soil.
pub const MOISTURE: ChannelId = ChannelId(2);
/// Downward-moving light signal.
pub const LIGHT: ChannelId = ChannelId(3);
/// Heat produced by intercepted light.
pub const HEAT: ChannelId = ChannelId(4);
/// Tree structure bits (reserved).
pub const TREE: ChannelId = ChannelId(5);
/// Leaf density (reserved).
pub const LEAF: ChannelId = ChannelId(6);
/// Tree identifier (reserved).
pub const ID: ChannelId = ChannelId(7);
/// Structural support map (reserved).
pub const SUPPORT: ChannelId = ChannelId(8);
/// Mineral content (reserved).
pub const MINERAL: ChannelId = ChannelId(9);
/// Sugar content (reserved).
pub const SUGAR: ChannelId = ChannelId(10);
/// Water pull, x component (reserved).
pub const PULL_WATER_X: ChannelId = ChannelId(11);
/// Water pull, y component (reserved).
pub const PULL_WATER_Y: ChannelId = ChannelId(12);
/// Mineral pull, x component (reserved).
pub const PULL_MINERAL_X: ChannelId = ChannelId(13);
/// Mineral pull, y component (reserved).
pub const PULL_MINERAL_Y: ChannelId = ChannelId(14);
/// Sugar pull, x component (reserved).
pub const PULL_SUGAR_X: ChannelId = ChannelId(15);
/// Sugar pull, y component (reserved).
pub const PULL_SUGAR_Y: ChannelId = ChannelId(16);
/// Branch suppressor (reserved).
pub const SUPPRESSOR: ChannelId = ChannelId(17);
/// Seed quantity.
pub const SEED: ChannelId = ChannelId(18);
/// Number of channels in the standard table.
pub const N_CHANNELS: usize = 19;

/// Whether a channel is advanced by the step pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelRole {
    /// Read and written by at least one transition rule.
    Driven,
    /// Allocated and accessible, but never mutated by the step pipeline.
    Reserved,
}

/// Definition of a channel registered in a tile grid.
///
/// The position of a definition in the grid's channel table is its
/// [`ChannelId`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelDef {
    /// Human-readable name, also used by the renderer and for logging.
    pub name: String,
    /// Whether the step pipeline advances this channel.
    pub role: ChannelRole,
}

impl ChannelDef {
    /// A channel advanced by the step pipeline.
    pub fn driven(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: ChannelRole::Driven,
        }
    }

    /// A channel that is allocated but left untouched by the step pipeline.
    pub fn reserved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            role: ChannelRole::Reserved,
        }
    }
}

/// Returns the 19 standard channel definitions, indexed by the constants in
/// this module.
pub fn standard_channels() -> Vec<ChannelDef> {
    vec![
        ChannelDef::driven("water"),
        ChannelDef::driven("soil"),
        ChannelDef::driven("moisture"),
        ChannelDef::driven("light"),
        ChannelDef::driven("heat"),
        ChannelDef::reserved("tree"),
        ChannelDef::reserved("leaf"),
        ChannelDef::reserved("id"),
        ChannelDef::reserved("support"),
        ChannelDef::reserved("mineral"),
        ChannelDef::reserved("sugar"),
        ChannelDef::reserved("pull_water_x"),
        ChannelDef::reserved("pull_water_y"),
        ChannelDef::reserved("pull_mineral_x"),
        ChannelDef::reserved("pull_mineral_y"),
        ChannelDef::reserved("pull_sugar_x"),
        ChannelDef::reserved("pull_sugar_y"),
        ChannelDef::reserved("suppressor"),
        ChannelDef::driven("seed"),
    ]
}

/// A set of channel IDs, stored as bits of 64-bit words.
///
/// Rules declare the channels they read and write with a `ChannelSet`, and
/// the pipeline checks the union against the grid's channel table. Trailing
/// zero words are never stored, so two sets with the same members compare
/// equal and the standard table stays in one inline word.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelSet {
    words: SmallVec<[u64; 1]>,
}

impl ChannelSet {
    /// The empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    fn locate(channel: ChannelId) -> (usize, u64) {
        let i = channel.0 as usize;
        (i / 64, 1u64 << (i % 64))
    }

    fn trimmed(mut words: SmallVec<[u64; 1]>) -> Self {
        while words.last() == Some(&0) {
            words.pop();
        }
        Self { words }
    }

    /// Add a channel.
    pub fn insert(&mut self, channel: ChannelId) {
        let (word, mask) = Self::locate(channel);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        self.words[word] |= mask;
    }

    /// Whether `channel` is a member.
    pub fn contains(&self, channel: ChannelId) -> bool {
        let (word, mask) = Self::locate(channel);
        self.words.get(word).is_some_and(|w| w & mask != 0)
    }

    /// Channels in either set.
    pub fn union(&self, other: &Self) -> Self {
        let (long, short) = if self.words.len() >= other.words.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut words = long.words.clone();
        for (w, s) in words.iter_mut().zip(&short.words) {
            *w |= s;
        }
        Self { words }
    }

    /// Channels in `self` but not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        let mut words = self.words.clone();
        for (w, o) in words.iter_mut().zip(&other.words) {
            *w &= !o;
        }
        Self::trimmed(words)
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = ChannelId> + '_ {
        self.words.iter().enumerate().flat_map(|(i, &word)| {
            let base = (i * 64) as u32;
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros();
                rest &= rest - 1;
                Some(ChannelId(base + bit))
            })
        })
    }
}

impl FromIterator<ChannelId> for ChannelSet {
    fn from_iter<I: IntoIterator<Item = ChannelId>>(iter: I) -> Self {
        let mut set = Self::empty();
        for channel in iter {
            set.insert(channel);
        }
        set
    }
}
