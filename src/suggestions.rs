//! Did-you-mean hints for mistyped project names.
//!
//! When a `run` target does not exist, the error carries the closest
//! registry name by edit distance so the operator can correct the typo
//! without consulting `run --list` first.

/// Find the closest candidate to `input` (edit distance <= 2).
///
/// A match must also be closer than the input's own length, so very short
/// inputs do not "match" unrelated names.
pub fn find_similar<'a, I>(input: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0usize; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a_len {
        for j in 1..=b_len {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }

    matrix[a_len][b_len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("lingbo-web", "lingbo-web"), 0);
        assert_eq!(edit_distance("lingbo-wb", "lingbo-web"), 1);
        assert_eq!(edit_distance("lingob-web", "lingbo-web"), 2);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn test_find_similar_picks_closest() {
        let names = ["lingbo-web", "lingbo-desktop", "inspirai-user"];
        assert_eq!(find_similar("lingbo-wb", names), Some("lingbo-web"));
        assert_eq!(find_similar("inspirai-usr", names), Some("inspirai-user"));
    }

    #[test]
    fn test_find_similar_rejects_distant_names() {
        let names = ["lingbo-web", "inspirai-user"];
        assert_eq!(find_similar("magicbook-h5", names), None);
    }
}
