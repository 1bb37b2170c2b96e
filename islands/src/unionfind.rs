/// Quick-union disjoint-set forest without path compression or ranking.
///
/// Roots are found by walking parent links; trees can grow as tall as the
/// number of elements.
#[derive(Debug, Clone)]
pub struct QuickUnion {
    parent: Vec<usize>,
}

impl QuickUnion {
    /// Create a forest of `n` singleton trees (`make_set` for every index).
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Reset `k` to a singleton tree.
    pub fn make_set(&mut self, k: usize) {
        self.parent[k] = k;
    }

    /// Follow parent links from `k` until a self-referential index is reached.
    pub fn find_root(&self, mut k: usize) -> usize {
        while self.parent[k] != k {
            k = self.parent[k];
        }
        k
    }

    /// Merge the trees containing `keep` and `absorb`. Returns the surviving root.
    ///
    /// The root of `absorb` is attached directly under the root of `keep`.
    pub fn union(&mut self, keep: usize, absorb: usize) -> usize {
        let rk = self.find_root(keep);
        let ra = self.find_root(absorb);
        if rk != ra {
            self.parent[ra] = rk;
        }
        rk
    }

    #[inline]
    pub fn parent(&self, k: usize) -> usize {
        self.parent[k]
    }

    #[inline]
    pub fn is_root(&self, k: usize) -> bool {
        self.parent[k] == k
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
