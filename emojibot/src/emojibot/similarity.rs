/// Edit distance between two strings, counted in `char`s.
///
/// Two inputs deliberately step outside the classical Levenshtein definition:
/// a missing or empty side yields `0`, and identical strings yield their own
/// length. Everything else runs the usual unit-cost dynamic program.
pub fn distance<'a>(a: impl Into<Option<&'a str>>, b: impl Into<Option<&'a str>>) -> usize {
    let (Some(a), Some(b)) = (a.into(), b.into()) else {
        return 0;
    };

    if a.is_empty() || b.is_empty() {
        return 0;
    }

    if a == b {
        return a.chars().count();
    }

    let source: Vec<char> = a.chars().collect();
    let target: Vec<char> = b.chars().collect();
    levenshtein(&source, &target)
}

/// Likeness in `[0.0, 1.0]`: `1 - distance / longest`.
/// Missing or empty input scores `0.0`; equal strings score `1.0`.
pub fn similarity<'a>(a: impl Into<Option<&'a str>>, b: impl Into<Option<&'a str>>) -> f64 {
    let (Some(a), Some(b)) = (a.into(), b.into()) else {
        return 0.0;
    };

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    if a == b {
        return 1.0;
    }

    let longest = a.chars().count().max(b.chars().count());
    1.0 - distance(a, b) as f64 / longest as f64
}

// Rolling two rows of the (len(a)+1) x (len(b)+1) cost matrix.
fn levenshtein(source: &[char], target: &[char]) -> usize {
    let mut previous: Vec<usize> = (0..=target.len()).collect();
    let mut current = vec![0; target.len() + 1];

    for (i, s) in source.iter().enumerate() {
        current[0] = i + 1;
        for (j, t) in target.iter().enumerate() {
            let cost = usize::from(s != t);
            current[j + 1] = (previous[j + 1] + 1)
                .min(current[j] + 1)
                .min(previous[j] + cost);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[target.len()]
}
