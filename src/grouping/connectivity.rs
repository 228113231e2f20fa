use std::collections::BTreeSet;

/// Explicit assignment state shared by both grouping phases.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsedSet {
    flags: Vec<bool>,
}

impl UsedSet {
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.flags.get(idx).copied().unwrap_or(false)
    }

    pub fn mark_all<'a>(&mut self, indices: impl IntoIterator<Item = &'a usize>) {
        for &idx in indices {
            self.flags[idx] = true;
        }
    }

    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    pub fn is_complete(&self) -> bool {
        self.flags.iter().all(|&f| f)
    }
}

/// Segments reachable from `start` through parallel edges, visiting only
/// indices accepted by `allow`. `start` itself is always included.
///
/// Iterative worklist; the pairwise predicate need not be transitive for the
/// component to be.
pub fn connected_component(
    start: usize,
    parallel: &[BTreeSet<usize>],
    allow: impl Fn(usize) -> bool,
) -> BTreeSet<usize> {
    let mut connected = BTreeSet::new();
    let mut worklist = vec![start];
    while let Some(current) = worklist.pop() {
        if !connected.insert(current) {
            continue;
        }
        for &next in &parallel[current] {
            if !connected.contains(&next) && allow(next) {
                worklist.push(next);
            }
        }
    }
    connected
}

/// Union of the parallel components of every seed in `seeds`.
pub fn expand_through_parallels(
    seeds: &BTreeSet<usize>,
    parallel: &[BTreeSet<usize>],
    allow: impl Fn(usize) -> bool,
) -> BTreeSet<usize> {
    let mut out = BTreeSet::new();
    for &seed in seeds {
        if out.contains(&seed) {
            continue;
        }
        out.extend(connected_component(seed, parallel, &allow));
    }
    out
}
