// Fragment groups contributed by axis values and combination rules

use serde::{Deserialize, Serialize};

/// One contribution to the output: a single fragment or an ordered group.
///
/// The single-vs-multiple shape is preserved all the way to the joiner; a
/// value registered as `["medium"]` arrives as a one-element group, never
/// collapsed into a bare fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fragments {
    One(String),
    Many(Vec<String>),
}

impl Fragments {
    /// Iterate fragments in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            Fragments::One(fragment) => std::slice::from_ref(fragment).iter(),
            Fragments::Many(fragments) => fragments.iter(),
        }
        .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        match self {
            Fragments::One(_) => 1,
            Fragments::Many(fragments) => fragments.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Fragments::One(_) => false,
            Fragments::Many(fragments) => fragments.is_empty(),
        }
    }
}

impl From<&str> for Fragments {
    fn from(fragment: &str) -> Self {
        Fragments::One(fragment.to_string())
    }
}

impl From<String> for Fragments {
    fn from(fragment: String) -> Self {
        Fragments::One(fragment)
    }
}

impl From<Vec<String>> for Fragments {
    fn from(fragments: Vec<String>) -> Self {
        Fragments::Many(fragments)
    }
}

impl From<Vec<&str>> for Fragments {
    fn from(fragments: Vec<&str>) -> Self {
        Fragments::Many(fragments.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_shapes() {
        assert_eq!(
            serde_yaml::from_str::<Fragments>("small").unwrap(),
            Fragments::from("small")
        );
        assert_eq!(
            serde_yaml::from_str::<Fragments>("[medium]").unwrap(),
            Fragments::from(vec!["medium"])
        );
    }

    #[test]
    fn test_iteration_preserves_order() {
        let fragments = Fragments::from(vec!["a", "b", "c"]);
        let collected: Vec<&str> = fragments.iter().collect();
        assert_eq!(collected, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_single_fragment_is_never_empty() {
        assert!(!Fragments::from("x").is_empty());
        assert!(Fragments::Many(vec![]).is_empty());
        assert_eq!(Fragments::from("x").len(), 1);
    }
}
