// Output composition seam
// The injected joiner turns ordered fragment groups into the final output

use crate::model::Fragments;

/// Serializes an ordered sequence of fragment groups into the final output.
///
/// Groups arrive in final order (base first when present). Implementations
/// must preserve the relative order of fragments across groups; what "empty
/// output" means is up to the implementation.
pub trait Joiner {
    type Output;

    fn join(&self, groups: &[Fragments]) -> Self::Output;
}

/// Any plain function over fragment groups is a joiner.
impl<F, O> Joiner for F
where
    F: Fn(&[Fragments]) -> O,
{
    type Output = O;

    fn join(&self, groups: &[Fragments]) -> O {
        self(groups)
    }
}

/// Reference joiner: concatenates fragments with a single space and returns
/// `None` when nothing remains.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceJoiner;

impl Joiner for SpaceJoiner {
    type Output = Option<String>;

    fn join(&self, groups: &[Fragments]) -> Option<String> {
        let joined = groups
            .iter()
            .flat_map(|group| group.iter())
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if joined.is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}
