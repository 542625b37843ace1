use std::fmt::{self, Debug, Formatter};
use std::path::Path;

/// Decides whether an existing file may be replaced.
///
/// Prompting the user is up to the implementor, the core only asks.
pub trait OverwritePolicy {
    fn allow_overwrite(&mut self, existing: &Path) -> bool;
}

/// Fixed answers, without asking anybody
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    #[default]
    Never,
    Always,
}

impl OverwritePolicy for Overwrite {
    fn allow_overwrite(&mut self, _existing: &Path) -> bool {
        matches!(self, Overwrite::Always)
    }
}

impl<F> OverwritePolicy for F
where
    F: FnMut(&Path) -> bool,
{
    fn allow_overwrite(&mut self, existing: &Path) -> bool {
        self(existing)
    }
}

/// Holds the policy inside the api builders
pub(crate) struct BoxedPolicy(pub(crate) Box<dyn OverwritePolicy>);

impl Default for BoxedPolicy {
    fn default() -> Self {
        Self(Box::new(Overwrite::default()))
    }
}

impl Debug for BoxedPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "OverwritePolicy(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_answer_fixed() {
        let p = Path::new("exists.png");
        assert!(!Overwrite::Never.allow_overwrite(p));
        assert!(Overwrite::Always.allow_overwrite(p));
        assert!(!Overwrite::default().allow_overwrite(p));
    }

    #[test]
    fn should_ask_the_closure() {
        let mut asked = Vec::new();
        let mut policy = |p: &Path| {
            asked.push(p.to_path_buf());
            p.ends_with("yes.txt")
        };

        assert!(policy.allow_overwrite(Path::new("yes.txt")));
        assert!(!policy.allow_overwrite(Path::new("no.txt")));
        drop(policy);
        assert_eq!(asked.len(), 2);
    }
}
