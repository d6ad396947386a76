//! Rooted tree to DOT (Graphviz) conversion.
//!
//! The generated DOT output follows these conventions:
//! - **Vertices** are rendered as circles labeled with their index
//! - **The root** uses its own shape at the top (source rank)
//! - **Edges** point from parent to child
//!
//! # Examples
//!
//! ```
//! use combalg::tree::RootedTree;
//!
//! let tree = RootedTree::from_parents(vec![None, Some(0), Some(0)]).unwrap();
//! let dot = tree.to_dot().unwrap();
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! assert!(dot.contains("0 -> 1 [style=solid];"));
//! ```

use std::collections::BTreeMap;

use crate::tree::RootedTree;

/// Configuration options for DOT output generation.
///
/// Use `DotConfig::default()` for standard settings, and struct update syntax to change a few:
///
/// ```
/// use combalg::dot::DotConfig;
/// use combalg::tree::RootedTree;
///
/// let tree = RootedTree::from_parents(vec![None, Some(0)]).unwrap();
/// let config = DotConfig {
///     node_shape: "point",
///     ..DotConfig::default()
/// };
/// let dot = tree.to_dot_with_config(&config).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for ordinary vertices (default: "circle")
    pub node_shape: &'static str,
    /// Shape for the root (default: "doublecircle")
    pub root_shape: &'static str,
    /// Style for edges (default: "solid")
    pub edge_style: &'static str,
    /// Graph rank direction (default: "TB", top to bottom)
    pub rank_dir: &'static str,
    /// Whether vertices at equal depth share a rank (default: true)
    pub rank_by_depth: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "circle",
            root_shape: "doublecircle",
            edge_style: "solid",
            rank_dir: "TB",
            rank_by_depth: true,
        }
    }
}

impl RootedTree {
    /// Converts the tree to DOT format with the default configuration.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the tree to DOT format with a custom configuration.
    ///
    /// # Panics
    ///
    /// Panics if the tree is not valid.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        use std::fmt::Write as _;

        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;
        writeln!(dot, "rankdir={};", config.rank_dir)?;
        writeln!(dot, "node [shape={}];", config.node_shape)?;

        if let Some(root) = self.root() {
            writeln!(dot, "{{ rank=source")?;
            writeln!(dot, "{} [shape={}];", root, config.root_shape)?;
            writeln!(dot, "}}")?;
        }

        if config.rank_by_depth {
            let mut levels = BTreeMap::<usize, Vec<usize>>::new();
            for (v, d) in self.depths().into_iter().enumerate() {
                if d > 0 {
                    levels.entry(d).or_default().push(v);
                }
            }
            for level in levels.values() {
                writeln!(dot, "{{ rank=same")?;
                for &v in level.iter() {
                    writeln!(dot, "{};", v)?;
                }
                writeln!(dot, "}}")?;
            }
        } else {
            for v in (0..self.len()).filter(|&v| Some(v) != self.root()) {
                writeln!(dot, "{};", v)?;
            }
        }

        for (p, c) in self.edges() {
            writeln!(dot, "{} -> {} [style={}];", p, c, config.edge_style)?;
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}
