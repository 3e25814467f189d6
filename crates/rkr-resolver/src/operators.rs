//! Operator spellings and the dispatch table.
//!
//! Every operator accepts several alias spellings; all of them forward to
//! the same semantics. Matching is closed: a name either maps to an
//! operator tag here or the expression is left to other resolvers.

/// A recognized record type operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorKind {
    /// Variadic merge; `expected` pins the arity for the `merge<N>`
    /// spellings.
    Merge { expected: Option<usize> },
    AddKey,
    RemoveKey,
}

impl OperatorKind {
    /// Match a generic type name against the operator spellings.
    ///
    /// Names are case-insensitive and may carry a leading `\`. Returns
    /// `None` for anything that is not one of the operators.
    pub fn parse(name: &str) -> Option<OperatorKind> {
        let name = name.trim_start_matches('\\').to_ascii_lowercase();
        match name.as_str() {
            "rkr\\merge" | "rkrmerge" | "rkr-merge" => {
                return Some(OperatorKind::Merge { expected: None });
            }
            "rkr\\addkey" | "rkraddkey" => return Some(OperatorKind::AddKey),
            "rkr\\removekey" | "rkrremovekey" | "rkr-remove-key" => {
                return Some(OperatorKind::RemoveKey);
            }
            _ => {}
        }
        for stem in ["rkr\\merge", "rkrmerge"] {
            if let Some(suffix) = name.strip_prefix(stem) {
                if let Some(expected) = parse_arity_suffix(suffix) {
                    return Some(OperatorKind::Merge {
                        expected: Some(expected),
                    });
                }
            }
        }
        None
    }
}

/// Parse the `N` suffix of a `merge<N>` spelling: decimal digits denoting a
/// positive count.
fn parse_arity_suffix(suffix: &str) -> Option<usize> {
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match suffix.parse::<usize>() {
        Ok(expected) if expected > 0 => Some(expected),
        _ => None,
    }
}
