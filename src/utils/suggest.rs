fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }
    if a.is_empty() || b.is_empty() {
        return a.len().max(b.len());
    }
    let b_len = b.chars().count();
    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0usize; b_len + 1];
    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.chars().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.copy_from_slice(&curr);
    }
    prev[b_len]
}

fn score(input: &str, candidate: &str) -> usize {
    if input == candidate {
        return 0;
    }
    if input.contains(candidate) || candidate.contains(input) {
        return 1;
    }
    levenshtein(input, candidate)
}

fn max_distance(input: &str) -> usize {
    match input.len() {
        0 => 0,
        1..=4 => 1,
        5..=8 => 2,
        n => (n / 3).max(3),
    }
}

/// Closest candidates to a mistyped name, best first. Empty when nothing is
/// close enough to be worth proposing.
pub fn suggest(input: &str, candidates: &[String], limit: usize) -> Vec<String> {
    let input = input.trim().to_lowercase();
    if input.is_empty() || candidates.is_empty() {
        return Vec::new();
    }
    let allowed = max_distance(&input);
    let mut scored: Vec<(usize, &String)> = candidates
        .iter()
        .filter_map(|candidate| {
            let s = score(&input, &candidate.to_lowercase());
            (s <= allowed).then_some((s, candidate))
        })
        .collect();
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    scored.dedup_by(|a, b| a.1 == b.1);
    scored
        .into_iter()
        .take(limit.max(1))
        .map(|(_, candidate)| candidate.clone())
        .collect()
}
