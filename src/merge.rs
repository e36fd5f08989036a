use crate::label::Skin;
use crate::region::Region;
use log::*;

/// Two provisional regions that touch and need to end up in the same region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeInstruction {
    pub from: usize,
    pub to: usize,
}

impl MergeInstruction {
    #[inline]
    pub fn new(from: usize, to: usize) -> MergeInstruction {
        MergeInstruction { from, to }
    }

    /// Both instructions name the same pair, in either order
    #[inline]
    pub fn same_pair(&self, other: &MergeInstruction) -> bool {
        (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from)
    }
}

/// Disjoint-set forest over provisional region ids
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    pub fn new(len: usize) -> DisjointSet {
        DisjointSet {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // path compression
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }

        root
    }

    /// Join the sets of `a` and `b`, returns false if they already were one set
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut root_a = self.find(a);
        let mut root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        if self.size[root_a] < self.size[root_b] {
            std::mem::swap(&mut root_a, &mut root_b);
        }
        self.parent[root_b] = root_a;
        self.size[root_a] += self.size[root_b];
        true
    }
}

/// Resolve the merge instructions and combine the provisional regions.
///
/// Regions connected through any chain of instructions end up in one
/// region, every other region is passed through unchanged. Output order
/// follows the lowest provisional id of each group.
pub fn merge(detected_regions: Vec<Vec<Skin>>, merges: &[MergeInstruction]) -> Vec<Region> {
    let mut sets = DisjointSet::new(detected_regions.len());

    let mut unions = 0;
    for instruction in merges {
        if sets.union(instruction.from, instruction.to) {
            unions += 1;
        }
    }
    debug!(
        "merging {} provisional regions with {} instructions ({} unions)",
        detected_regions.len(),
        merges.len(),
        unions
    );

    let mut slots: Vec<Option<usize>> = vec![None; sets.len()];
    let mut new_detected_regions: Vec<Region> = Vec::new();

    for (id, pixels) in detected_regions.into_iter().enumerate() {
        if pixels.is_empty() {
            continue;
        }

        let root = sets.find(id);
        match slots[root] {
            Some(slot) => new_detected_regions[slot].append(pixels),
            None => {
                slots[root] = Some(new_detected_regions.len());
                new_detected_regions.push(Region::new(pixels));
            }
        }
    }

    debug!("merged into {} regions", new_detected_regions.len());
    new_detected_regions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provisional(sizes: &[usize]) -> Vec<Vec<Skin>> {
        let mut y = 0;
        sizes
            .iter()
            .map(|len| {
                y += 1;
                (0..*len as u32)
                    .map(|x| Skin::new(true, x, y, 100))
                    .collect()
            })
            .collect()
    }

    fn lens(regions: &[Region]) -> Vec<usize> {
        regions.iter().map(Region::len).collect()
    }

    #[test]
    fn test_disjoint_set() {
        let mut sets = DisjointSet::new(6);
        assert!(sets.union(0, 1));
        assert!(sets.union(2, 3));
        assert!(!sets.union(1, 0));
        assert_ne!(sets.find(0), sets.find(2));
        assert!(sets.union(1, 3));
        assert_eq!(sets.find(0), sets.find(2));
        assert_eq!(sets.find(3), sets.find(1));
        assert_ne!(sets.find(4), sets.find(5));
        assert_ne!(sets.find(4), sets.find(0));
    }

    #[test]
    fn test_same_pair() {
        let a = MergeInstruction::new(1, 2);
        assert!(a.same_pair(&MergeInstruction::new(1, 2)));
        assert!(a.same_pair(&MergeInstruction::new(2, 1)));
        assert!(!a.same_pair(&MergeInstruction::new(1, 3)));
    }

    #[test]
    fn test_merge_without_instructions() {
        let regions = merge(provisional(&[3, 5, 2]), &[]);
        assert_eq!(lens(&regions), vec![3, 5, 2]);
    }

    #[test]
    fn test_merge_transitive() {
        // 0-1 and 2-3 start as separate groups, 1-3 links them
        let merges = [
            MergeInstruction::new(0, 1),
            MergeInstruction::new(2, 3),
            MergeInstruction::new(3, 1),
        ];
        let regions = merge(provisional(&[1, 2, 3, 4, 5]), &merges);
        assert_eq!(lens(&regions), vec![10, 5]);
    }

    #[test]
    fn test_merge_one_tracked() {
        let merges = [MergeInstruction::new(0, 2), MergeInstruction::new(2, 4)];
        let regions = merge(provisional(&[1, 2, 3, 4, 5]), &merges);
        assert_eq!(lens(&regions), vec![9, 2, 4]);
    }

    #[test]
    fn test_merge_order_independent() {
        let merges = [
            MergeInstruction::new(4, 1),
            MergeInstruction::new(0, 3),
            MergeInstruction::new(1, 3),
        ];
        let mut reversed = merges;
        reversed.reverse();

        let a = merge(provisional(&[1, 2, 3, 4, 5]), &merges);
        let b = merge(provisional(&[1, 2, 3, 4, 5]), &reversed);
        assert_eq!(lens(&a), vec![12, 3]);
        assert_eq!(lens(&a), lens(&b));
    }

    #[test]
    fn test_merge_keeps_every_pixel() {
        let merges = [MergeInstruction::new(1, 2), MergeInstruction::new(2, 1)];
        let regions = merge(provisional(&[7, 11, 13]), &merges);
        let total: usize = regions.iter().map(Region::len).sum();
        assert_eq!(total, 31);
    }

    #[test]
    fn test_merge_idempotent() {
        let merges = [MergeInstruction::new(0, 2), MergeInstruction::new(3, 4)];
        let first = merge(provisional(&[1, 2, 3, 4, 5]), &merges);

        let again = merge(
            first.iter().map(|r| r.pixels().to_vec()).collect(),
            &[],
        );
        assert_eq!(first, again);
    }
}
