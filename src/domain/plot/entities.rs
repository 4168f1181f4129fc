use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::domain::errors::PlotResult;

/// One needle as served by the data source: `{pos, value, category}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerRecord {
    pub pos: f64,
    pub value: f64,
    #[serde(default)]
    pub category: String,
}

/// A positional region: `{start, end, type}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub start: f64,
    pub end: f64,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl Site {
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// `site <type>`, or `site multi_ptm` when several types are listed.
    pub fn css_class(&self) -> String {
        if self.kind.contains(',') {
            "site multi_ptm".to_string()
        } else {
            format!("site {}", self.kind)
        }
    }
}

/// Resolved data payload `{mutations: [...], sites: [...]}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotData {
    #[serde(default)]
    pub mutations: Vec<MarkerRecord>,
    #[serde(default)]
    pub sites: Vec<Site>,
}

impl PlotData {
    pub fn from_json(json: &str) -> PlotResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rightmost coordinate mentioned by any record.
    pub fn extent(&self) -> f64 {
        let markers = self.mutations.iter().map(|m| m.pos);
        let sites = self.sites.iter().map(|s| s.end);
        markers.chain(sites).fold(0.0, f64::max)
    }
}

/// Either inline data or a location the caller still has to fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlotDataSource {
    Remote(String),
    Inline(PlotData),
}

impl Default for PlotDataSource {
    fn default() -> Self {
        PlotDataSource::Inline(PlotData::default())
    }
}

/// A loaded needle. Ids follow draw order: tallest first.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: usize,
    pub position: f64,
    pub value: f64,
    pub category: String,
}

impl Marker {
    pub fn head_key(&self) -> HeadKey {
        HeadKey::new(self.position, self.value)
    }
}

/// Sort value-descending (stable) and number the needles in that order.
pub fn load_markers(records: &[MarkerRecord]) -> Vec<Marker> {
    let mut sorted: Vec<&MarkerRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.value.total_cmp(&a.value));
    sorted
        .into_iter()
        .enumerate()
        .map(|(id, record)| Marker {
            id,
            position: record.pos,
            value: record.value,
            category: record.category.clone(),
        })
        .collect()
}

/// Exact `(position, value)` coordinate shared by overlapping heads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeadKey {
    position: u64,
    value: u64,
}

impl HeadKey {
    pub fn new(position: f64, value: f64) -> Self {
        // -0.0 and 0.0 land in the same group
        let bits = |v: f64| if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() };
        Self { position: bits(position), value: bits(value) }
    }

    pub fn position(&self) -> f64 {
        f64::from_bits(self.position)
    }

    pub fn value(&self) -> f64 {
        f64::from_bits(self.value)
    }
}

impl fmt::Display for HeadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.position(), self.value())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadGroup {
    pub key: HeadKey,
    /// Marker ids in draw order.
    pub members: Vec<usize>,
}

impl HeadGroup {
    pub fn is_cluster(&self) -> bool {
        self.members.len() > 1
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Index of `marker_id` inside the group.
    pub fn slot_of(&self, marker_id: usize) -> Option<usize> {
        self.members.iter().position(|&id| id == marker_id)
    }
}

/// Markers grouped by exact head coordinate, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadGroups {
    groups: Vec<HeadGroup>,
    index: HashMap<HeadKey, usize>,
    by_marker: Vec<usize>,
}

impl HeadGroups {
    pub fn build(markers: &[Marker]) -> Self {
        let mut groups: Vec<HeadGroup> = Vec::new();
        let mut index = HashMap::new();
        let mut by_marker = vec![0; markers.len()];
        for marker in markers {
            let key = marker.head_key();
            let slot = *index.entry(key).or_insert_with(|| {
                groups.push(HeadGroup { key, members: Vec::new() });
                groups.len() - 1
            });
            groups[slot].members.push(marker.id);
            if let Some(entry) = by_marker.get_mut(marker.id) {
                *entry = slot;
            }
        }
        Self { groups, index, by_marker }
    }

    pub fn groups(&self) -> &[HeadGroup] {
        &self.groups
    }

    pub fn get(&self, key: &HeadKey) -> Option<&HeadGroup> {
        self.index.get(key).map(|&slot| &self.groups[slot])
    }

    pub fn group_index_of(&self, marker_id: usize) -> Option<usize> {
        self.by_marker.get(marker_id).copied()
    }

    pub fn group_of(&self, marker_id: usize) -> Option<&HeadGroup> {
        self.group_index_of(marker_id).map(|slot| &self.groups[slot])
    }

    pub fn group_at(&self, slot: usize) -> Option<&HeadGroup> {
        self.groups.get(slot)
    }
}

/// Horizontal offsets that fan `count` heads out around their shared
/// coordinate, `width_per_head` apart and centered on zero.
pub fn fan_out_offsets(count: usize, width_per_head: f64) -> Vec<f64> {
    let total = count as f64 * width_per_head;
    (0..count)
        .map(|slot| slot as f64 * width_per_head + width_per_head / 2.0 - total / 2.0)
        .collect()
}
