//! Candidate generation rules.

use crate::candidates::CandidateSet;
use crate::name::NameParts;

/// Generates username candidates for a full name.
///
/// The name is lowercased and split on whitespace runs; an empty or
/// whitespace-only name yields an empty set. See [`generate_from_parts`]
/// for the combination rules.
pub fn generate(full_name: &str) -> CandidateSet {
    generate_from_parts(&NameParts::parse(full_name))
}

/// Generates username candidates from already-normalized name parts.
///
/// Rules, applied to the parts in their original order:
///
/// 1. every single part
/// 2. every pair of distinct positions, concatenated in both orders
/// 3. every combination of three positions in increasing index order
/// 4. first initial + last part, and first part + last initial
/// 5. first part + second-part initial + last part (three or more parts)
/// 6. all parts concatenated
pub fn generate_from_parts(parts: &NameParts) -> CandidateSet {
    let mut candidates = CandidateSet::new();
    let tokens = parts.as_slice();
    let count = tokens.len();
    if count == 0 {
        return candidates;
    }

    for token in tokens {
        candidates.insert(token.as_str());
    }

    for (i, left) in tokens.iter().enumerate() {
        for right in &tokens[i + 1..] {
            candidates.insert(concat(&[left, right]));
            candidates.insert(concat(&[right, left]));
        }
    }

    if count >= 3 {
        for i in 0..count {
            for j in i + 1..count {
                for k in j + 1..count {
                    candidates.insert(concat(&[&tokens[i], &tokens[j], &tokens[k]]));
                }
            }
        }
    }

    if count >= 2
        && let (Some(first), Some(last)) = (parts.first(), parts.last())
    {
        if let Some(initial) = parts.initial(0) {
            candidates.insert(format!("{initial}{last}"));
        }
        if let Some(initial) = parts.initial(count - 1) {
            candidates.insert(format!("{first}{initial}"));
        }
        if count >= 3
            && let Some(middle) = parts.initial(1)
        {
            candidates.insert(format!("{first}{middle}{last}"));
        }
    }

    candidates.insert(parts.joined());

    tracing::trace!(
        parts = count,
        candidates = candidates.len(),
        "generated candidates"
    );
    candidates
}

fn concat(tokens: &[&String]) -> String {
    let capacity = tokens.iter().map(|token| token.len()).sum();
    let mut out = String::with_capacity(capacity);
    for token in tokens {
        out.push_str(token);
    }
    out
}
