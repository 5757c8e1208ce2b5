use std::collections::HashSet;

/// Jaccard similarity of two tag collections (0-1)
///
/// Duplicates collapse and order is ignored. Two empty collections score 0.
#[inline]
pub fn jaccard_similarity<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(|tag| tag.as_ref()).collect();
    let set_b: HashSet<&str> = b.iter().map(|tag| tag.as_ref()).collect();

    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }

    let intersection = set_a.intersection(&set_b).count();
    intersection as f64 / union as f64
}
