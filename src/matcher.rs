use strsim::normalized_levenshtein;

/// Configured weight vector for the similarity score.
///
/// `offset` is carried through configuration and counted by [`Weights::sum`],
/// which the menu uses as its strong-match cutoff, but it takes no part in
/// [`score`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub lcs: f64,
    pub edit: f64,
    pub offset: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.lcs + self.edit + self.offset
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            lcs: 1.0,
            edit: 1.0,
            offset: 0.0,
        }
    }
}

/// Length of the longest contiguous run of characters shared by `a` and `b`.
pub fn lcs_len(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    let mut longest = 0;

    for x in 1..=a.len() {
        for y in 1..=b.len() {
            if a[x - 1] == b[y - 1] {
                table[x][y] = table[x - 1][y - 1] + 1;
                longest = longest.max(table[x][y]);
            }
        }
    }
    longest
}

/// 1 minus the Levenshtein distance normalized by the longer length.
/// Two empty strings are identical, so their ratio is 1.0.
pub fn edit_ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// Case-insensitive similarity of `candidate` to `query`. Empty input scores 0.
pub fn score(candidate: &str, query: &str, weights: &Weights) -> f64 {
    if candidate.is_empty() || query.is_empty() {
        return 0.0;
    }
    let candidate = candidate.to_lowercase();
    let query = query.to_lowercase();
    weights.lcs * lcs_len(&candidate, &query) as f64 + weights.edit * edit_ratio(&candidate, &query)
}
