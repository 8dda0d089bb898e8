use crate::Set;

/// `A ∪ B`
pub fn union(a: &Set, b: &Set) -> Set {
    a.as_btree_set().union(b.as_btree_set()).cloned().collect()
}

/// `A ∩ B`
pub fn intersection(a: &Set, b: &Set) -> Set {
    a.as_btree_set()
        .intersection(b.as_btree_set())
        .cloned()
        .collect()
}

/// `A - B`: the elements of `a` that are not in `b`
pub fn difference(a: &Set, b: &Set) -> Set {
    a.as_btree_set()
        .difference(b.as_btree_set())
        .cloned()
        .collect()
}

/// `A Δ B = (A ∪ B) - (A ∩ B)`
pub fn symmetric_difference(a: &Set, b: &Set) -> Set {
    a.as_btree_set()
        .symmetric_difference(b.as_btree_set())
        .cloned()
        .collect()
}

/// `A'` relative to `universe`, i.e. `universe - A`
///
/// `a` is not required to be a subset of `universe`; elements of `a` outside
/// the universe simply have no effect.
pub fn complement(a: &Set, universe: &Set) -> Set {
    difference(universe, a)
}
