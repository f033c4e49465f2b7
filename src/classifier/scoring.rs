use crate::classifier::keywords::KeywordTable;

/// Number of distinct keywords found in `text`.
///
/// Plain substring containment: repeated occurrences of one keyword count
/// once, and there is no word-boundary check.
pub fn count_matches(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|kw| text.contains(**kw)).count()
}

/// Match count for every category of a table, in declaration order.
pub fn score_table<K: Copy>(text: &str, table: KeywordTable<K>) -> Vec<(K, usize)> {
    table
        .iter()
        .map(|(key, keywords)| (*key, count_matches(text, keywords)))
        .collect()
}

/// Category with the highest match count.
///
/// Ties go to the earliest declared category. Returns `None` when nothing
/// matched at all.
pub fn resolve_single_winner<K: Copy>(text: &str, table: KeywordTable<K>) -> Option<K> {
    let mut best: Option<(K, usize)> = None;
    for (key, count) in score_table(text, table) {
        if count == 0 {
            continue;
        }
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((key, count)),
        }
    }
    best.map(|(key, _)| key)
}

/// Bucket whose score strictly exceeds every other bucket, else `default`.
pub fn resolve_strict<K: Copy>(scores: &[(K, usize)], default: K) -> K {
    let max = scores.iter().map(|(_, c)| *c).max().unwrap_or(0);
    if max == 0 {
        return default;
    }

    let mut leaders = scores.iter().filter(|(_, c)| *c == max);
    match (leaders.next(), leaders.next()) {
        (Some((key, _)), None) => *key,
        _ => default,
    }
}

/// Every category with at least one match, in declaration order.
pub fn resolve_multi<K: Copy>(text: &str, table: KeywordTable<K>) -> Vec<K> {
    score_table(text, table)
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(key, _)| key)
        .collect()
}
