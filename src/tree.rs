//! Rooted trees as parent-pointer arrays.
//!
//! A [`RootedTree`] on `n` vertices `0..n` stores, for every vertex, its parent
//! (`None` for the root). Trees produced by
//! [`random_rooted_tree`][crate::random::random_rooted_tree] are always rooted at vertex 0.

use std::collections::VecDeque;
use std::fmt;

use crate::error::{CombError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RootedTree {
    parents: Vec<Option<usize>>,
}

impl RootedTree {
    /// Builds a tree from a parent array, checking that it really is one rooted tree.
    ///
    /// ```
    /// use combalg::tree::RootedTree;
    ///
    /// let tree = RootedTree::from_parents(vec![None, Some(0), Some(0), Some(1)]).unwrap();
    /// assert_eq!(tree.root(), Some(0));
    /// assert_eq!(tree.children()[0], vec![1, 2]);
    ///
    /// assert!(RootedTree::from_parents(vec![Some(1), Some(0)]).is_err());
    /// ```
    pub fn from_parents(parents: Vec<Option<usize>>) -> Result<Self> {
        let tree = Self { parents };
        tree.check()?;
        Ok(tree)
    }

    /// Builds a tree without validation. Callers guarantee the invariants.
    pub(crate) fn from_parents_unchecked(parents: Vec<Option<usize>>) -> Self {
        let tree = Self { parents };
        debug_assert!(tree.is_valid(), "not a rooted tree: {:?}", tree.parents);
        tree
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    pub fn parent(&self, v: usize) -> Option<usize> {
        self.parents[v]
    }

    /// The unique vertex without a parent, or `None` for the empty tree.
    pub fn root(&self) -> Option<usize> {
        self.parents.iter().position(|p| p.is_none())
    }

    /// Children of every vertex, in increasing order.
    pub fn children(&self) -> Vec<Vec<usize>> {
        let mut children = vec![Vec::new(); self.len()];
        for (v, p) in self.parents.iter().enumerate() {
            if let Some(p) = *p {
                children[p].push(v);
            }
        }
        children
    }

    /// All `(parent, child)` edges.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(v, p)| p.map(|p| (p, v)))
            .collect()
    }

    /// Distance of every vertex from the root.
    ///
    /// # Panics
    ///
    /// Panics if the tree is invalid.
    pub fn depths(&self) -> Vec<usize> {
        let mut depth = vec![usize::MAX; self.len()];
        let children = self.children();
        let mut queue = VecDeque::new();
        if let Some(root) = self.root() {
            depth[root] = 0;
            queue.push_back(root);
        }
        while let Some(v) = queue.pop_front() {
            for &c in children[v].iter() {
                depth[c] = depth[v] + 1;
                queue.push_back(c);
            }
        }
        assert!(depth.iter().all(|&d| d != usize::MAX), "tree is not connected");
        depth
    }

    /// Height of the tree: the largest depth, or zero for an empty tree.
    pub fn height(&self) -> usize {
        self.depths().into_iter().max().unwrap_or(0)
    }

    fn check(&self) -> Result<()> {
        let n = self.len();
        if n == 0 {
            return Ok(());
        }

        let roots = self.parents.iter().filter(|p| p.is_none()).count();
        if roots != 1 {
            return Err(CombError::InvalidTree(format!("expected exactly one root, found {}", roots)));
        }

        // Undirected adjacency, independent of the parent direction.
        let mut adjacency = vec![Vec::new(); n];
        let mut edges = 0;
        for (v, p) in self.parents.iter().enumerate() {
            if let Some(p) = *p {
                if p >= n {
                    return Err(CombError::InvalidTree(format!("parent {} of vertex {} out of range", p, v)));
                }
                if p == v {
                    return Err(CombError::InvalidTree(format!("vertex {} is its own parent", v)));
                }
                adjacency[p].push(v);
                adjacency[v].push(p);
                edges += 1;
            }
        }
        if edges != n - 1 {
            return Err(CombError::InvalidTree(format!("expected {} edges, found {}", n - 1, edges)));
        }

        // n - 1 edges and spanning => acyclic.
        let mut visited = vec![false; n];
        let mut stack = vec![self.root().unwrap_or(0)];
        let mut reached = 0;
        while let Some(v) = stack.pop() {
            if visited[v] {
                continue;
            }
            visited[v] = true;
            reached += 1;
            stack.extend(adjacency[v].iter().copied().filter(|&u| !visited[u]));
        }
        if reached != n {
            return Err(CombError::InvalidTree(format!("only {} of {} vertices reachable from the root", reached, n)));
        }
        Ok(())
    }

    /// Checks that this is a single rooted tree: one root, `n - 1` edges, all vertices connected.
    pub fn is_valid(&self) -> bool {
        self.check().is_ok()
    }

    /// Canonical encoding of the unlabeled shape.
    ///
    /// Two trees have equal shapes iff they are isomorphic as rooted trees.
    /// Every subtree is encoded as `(` + sorted encodings of its child subtrees + `)`.
    ///
    /// ```
    /// use combalg::tree::RootedTree;
    ///
    /// let a = RootedTree::from_parents(vec![None, Some(0), Some(1), Some(0)]).unwrap();
    /// let b = RootedTree::from_parents(vec![None, Some(0), Some(0), Some(2)]).unwrap();
    /// assert_eq!(a.canonical_shape(), b.canonical_shape());
    /// assert_eq!(a.canonical_shape(), "((())())");
    /// ```
    pub fn canonical_shape(&self) -> String {
        let Some(root) = self.root() else {
            return String::new();
        };
        let children = self.children();

        // Post-order without recursion: children are encoded before their parent.
        let mut order = Vec::with_capacity(self.len());
        let mut stack = vec![root];
        while let Some(v) = stack.pop() {
            order.push(v);
            stack.extend(children[v].iter().copied());
        }
        let mut codes: Vec<String> = vec![String::new(); self.len()];
        for &v in order.iter().rev() {
            let mut subs: Vec<String> = children[v].iter().map(|&c| std::mem::take(&mut codes[c])).collect();
            subs.sort();
            codes[v] = format!("({})", subs.concat());
        }
        std::mem::take(&mut codes[root])
    }
}

impl fmt::Display for RootedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.parents.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match p {
                Some(p) => write!(f, "{}", p)?,
                None => write!(f, "-")?,
            }
        }
        write!(f, "]")
    }
}
