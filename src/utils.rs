use crate::error::{LinkError, Result};

/// Derives the Asana task gid from a branch reference.
/// The gid is the segment after the last `/`, so a branch named
/// `feature/123456` yields `123456`. No assumption is made about what the
/// earlier segments contain.
pub fn task_gid_from_ref(ref_name: &str) -> Result<&str> {
    match ref_name.rfind('/') {
        Some(idx) => Ok(&ref_name[idx + 1..]),
        None => Err(LinkError::MalformedRef(ref_name.to_string())),
    }
}

/// A trigger field value, as pulled out of the event payload.
#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(u64),
}

impl FieldValue<'_> {
    /// An empty string or a zero number counts as missing.
    fn is_missing(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Number(n) => *n == 0,
        }
    }
}

/// Checks that every named value is present.
/// Collects all missing names into a single error, in input order, rather
/// than stopping at the first one.
pub fn validate_fields(fields: &[(&str, FieldValue<'_>)]) -> Result<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_missing())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(LinkError::MissingFields(missing.join(", ")))
    }
}

/// Splits a repository full name into (owner, repo).
/// Exactly one `/` is accepted; anything else is rejected rather than
/// guessing which segment is the owner.
pub fn split_full_name(full_name: &str) -> Result<(&str, &str)> {
    let mut parts = full_name.split('/');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner, repo))
        }
        _ => Err(LinkError::MalformedRepoName(full_name.to_string())),
    }
}
