//! Structural statistics for a trie.
//!
//! Useful for checking how densely the child slots are used for a given key set and
//! digitizer, and for confirming that removal prunes emptied branches.

use crate::node::NodeId;
use crate::trie::Trie;

pub trait TrieStatsTrait {
    fn get_trie_stats(&self) -> TrieStats;
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TrieStats {
    /// Child slots per inner node, i.e. the digitizer base.
    pub width: usize,
    pub num_inner_nodes: usize,
    pub num_leaves: usize,
    pub num_values: usize,
    pub total_children: usize,
    /// Occupied slots over available slots, across all inner nodes.
    pub total_density: f64,
    /// Levels from the root down to the deepest leaf, the root counting as 1.
    pub max_height: usize,
}

impl<V, D> TrieStatsTrait for Trie<V, D> {
    fn get_trie_stats(&self) -> TrieStats {
        let mut stats = TrieStats::default();
        let Some(root) = self.root else {
            return stats;
        };

        stats.width = self.arena.get(root).capacity();
        self.get_trie_stats_recurse(root, &mut stats, 1);

        let total_width = stats.width * stats.num_inner_nodes;
        if total_width > 0 {
            stats.total_density = stats.total_children as f64 / total_width as f64;
        }
        stats
    }
}

impl<V, D> Trie<V, D> {
    fn get_trie_stats_recurse(&self, node: NodeId, stats: &mut TrieStats, height: usize) {
        if height > stats.max_height {
            stats.max_height = height;
        }
        let n = self.arena.get(node);
        if n.is_leaf() {
            stats.num_leaves += 1;
            if n.value().is_some() {
                stats.num_values += 1;
            }
            return;
        }

        stats.num_inner_nodes += 1;
        stats.total_children += n.num_children();
        for (_, child) in n.iter() {
            self.get_trie_stats_recurse(child, stats, height + 1);
        }
    }
}
