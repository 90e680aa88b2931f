use crate::*;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;

/// A policy stored as an explicit table, one row per information state.
///
/// Rows are kept sorted by information state so that iteration, display
/// and serialization are deterministic. With serde the table is a plain
/// JSON object from information state to `[action, probability]` pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabularPolicy(BTreeMap<String, Distribution>);

impl TabularPolicy {
    /// Uniform play over legal actions at every acting-player information state.
    pub fn uniform<S>(root: &S) -> Self
    where
        S: GameState,
    {
        Self::enumerate(root, |actions| {
            let p = 1. / actions.len() as Probability;
            actions.iter().map(|a| (*a, p)).collect()
        })
    }
    /// Always the first legal action, with every other legal action listed at zero.
    pub fn first_action<S>(root: &S) -> Self
    where
        S: GameState,
    {
        Self::enumerate(root, |actions| {
            actions
                .iter()
                .enumerate()
                .map(|(i, a)| (*a, if i == 0 { 1. } else { 0. }))
                .collect()
        })
    }

    /// walk the whole game once, filling in a row the first time
    /// each acting-player information state is seen
    fn enumerate<S, F>(root: &S, rule: F) -> Self
    where
        S: GameState,
        F: Fn(&[Action]) -> Distribution,
    {
        let mut table = BTreeMap::new();
        let mut todo = vec![root.clone()];
        while let Some(state) = todo.pop() {
            let actions = state.legal_actions();
            if let Some(info) = state.current_information_state_string() {
                table.entry(info).or_insert_with(|| rule(&actions));
            }
            todo.extend(actions.into_iter().map(|a| state.apply(a)));
        }
        log::debug!(
            "enumerated {} information states of {}",
            table.len(),
            root.name()
        );
        Self(table)
    }

    pub fn insert(&mut self, info: impl Into<String>, distribution: Distribution) -> Option<Distribution> {
        self.0.insert(info.into(), distribution)
    }
    pub fn get(&self, info: &str) -> Option<&[(Action, Probability)]> {
        self.0.get(info).map(|d| d.as_slice())
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[(Action, Probability)])> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Every row must be a probability distribution: no negative or
    /// non-finite weights, total mass within `tolerance` of one.
    pub fn validate(&self, tolerance: Probability) -> anyhow::Result<()> {
        for (info, distribution) in self.iter() {
            if let Some((action, p)) = distribution.iter().find(|(_, p)| !p.is_finite() || *p < 0.) {
                anyhow::bail!("policy at {:?} gives action {} weight {}", info, action, p);
            }
            let mass = distribution.iter().map(|(_, p)| p).sum::<Probability>();
            if (mass - 1.).abs() > tolerance {
                anyhow::bail!("policy at {:?} sums to {}", info, mass);
            }
        }
        Ok(())
    }

    /// One line per information state: `info<delimiter>action=prob,action=prob`.
    pub fn serialize(&self, precision: usize, delimiter: &str) -> anyhow::Result<String> {
        Self::check(delimiter)?;
        let mut lines = Vec::with_capacity(self.len());
        for (info, distribution) in self.iter() {
            if info.contains('\n') {
                anyhow::bail!("information state {:?} spans lines", info);
            }
            let row = distribution
                .iter()
                .map(|(a, p)| format!("{}={:.*}", a, precision, p))
                .collect::<Vec<_>>()
                .join(",");
            lines.push(format!("{}{}{}", info, delimiter, row));
        }
        Ok(lines.join("\n"))
    }
    /// Inverse of [`TabularPolicy::serialize`].
    pub fn deserialize(text: &str, delimiter: &str) -> anyhow::Result<Self> {
        Self::check(delimiter)?;
        let mut policy = Self::default();
        for line in text.lines().filter(|line| !line.is_empty()) {
            let (info, row) = line
                .rsplit_once(delimiter)
                .ok_or_else(|| anyhow::anyhow!("missing delimiter in policy line {:?}", line))?;
            let distribution = row
                .split(',')
                .filter(|pair| !pair.is_empty())
                .map(|pair| -> anyhow::Result<(Action, Probability)> {
                    let (a, p) = pair
                        .split_once('=')
                        .ok_or_else(|| anyhow::anyhow!("malformed entry {:?} at {:?}", pair, info))?;
                    Ok((a.trim().parse()?, p.trim().parse()?))
                })
                .collect::<anyhow::Result<Distribution>>()?;
            if policy.insert(info, distribution).is_some() {
                anyhow::bail!("duplicate information state {:?}", info);
            }
        }
        Ok(policy)
    }
    /// the delimiter may not share a character with a formatted row,
    /// or `rsplit_once` would cut through a number
    fn check(delimiter: &str) -> anyhow::Result<()> {
        let row = |c: char| c.is_ascii_digit() || ",=.-+eEinfNa\n".contains(c);
        if delimiter.is_empty() || delimiter.contains(row) {
            anyhow::bail!("invalid policy delimiter {:?}", delimiter);
        }
        Ok(())
    }
}

impl Policy for TabularPolicy {
    fn distribution(&self, info: &str) -> Option<Distribution> {
        self.0.get(info).cloned()
    }
}

impl std::fmt::Display for TabularPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (info, distribution) in self.iter() {
            write!(f, "{:>24} │", format!("{:?}", info))?;
            for (action, p) in distribution {
                write!(f, " {}:{:.3}", action, p)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::KuhnPoker;
    use crate::games::LeducPoker;

    #[test]
    fn uniform_covers_kuhn() {
        let policy = TabularPolicy::uniform(&KuhnPoker::default());
        assert_eq!(policy.len(), 12);
        assert!(policy.validate(PROBABILITY_TOLERANCE).is_ok());
        assert_eq!(policy.get("1pb"), Some([(0, 0.5), (1, 0.5)].as_slice()));
        assert_eq!(policy.distribution(""), None);
    }

    #[test]
    fn first_action_lists_zeros() {
        let policy = TabularPolicy::first_action(&KuhnPoker::default());
        assert_eq!(policy.distribution("0b"), Some(vec![(0, 1.), (1, 0.)]));
        assert_eq!(policy.probability("0b", 1), Some(0.));
        assert_eq!(policy.probability("nowhere", 1), None);
    }

    #[test]
    fn uniform_respects_leduc_legality() {
        let root = LeducPoker::default();
        let policy = TabularPolicy::uniform(&root);
        assert!(policy.validate(PROBABILITY_TOLERANCE).is_ok());
        let state = [3, 0, 2]
            .into_iter()
            .fold(root, |state, a| state.apply(a));
        let distribution = policy.state_distribution(&state).unwrap();
        assert_eq!(distribution.len(), 3);
        assert!((distribution[0].1 - 1. / 3.).abs() < 1e-12);
    }

    #[test]
    fn query_shapes_agree() {
        let policy = KuhnPoker::optimal(0.1).unwrap();
        let (actions, probs) = policy.parallel_vectors("2").unwrap();
        let map = policy.distribution_map("2").unwrap();
        assert_eq!(actions, vec![0, 1]);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), actions);
        assert_eq!(map.values().copied().collect::<Vec<_>>(), probs);
    }

    #[test]
    fn serialized_text_survives_parsing() {
        let policy = KuhnPoker::optimal(0.25).unwrap();
        let text = policy.serialize(17, "|").unwrap();
        assert_eq!(text.lines().count(), 12);
        assert!(text.contains("2pb|0=0.00000000000000000,1=1.00000000000000000"));
        let parsed = TabularPolicy::deserialize(&text, "|").unwrap();
        for (info, distribution) in policy.iter() {
            let other = parsed.get(info).unwrap();
            for ((a, p), (b, q)) in distribution.iter().zip(other) {
                assert_eq!(a, b);
                assert!((p - q).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn rejects_bad_delimiters_and_lines() {
        let policy = TabularPolicy::uniform(&KuhnPoker::default());
        assert!(policy.serialize(3, ",").is_err());
        assert!(policy.serialize(3, "=").is_err());
        assert!(policy.serialize(3, "").is_err());
        for delimiter in [".", "0", "7", "-", "+", "e", "E", "inf", "NaN", " | 1"] {
            assert!(policy.serialize(3, delimiter).is_err(), "{:?}", delimiter);
            assert!(TabularPolicy::deserialize("0p|0=1", delimiter).is_err(), "{:?}", delimiter);
        }
        assert!(TabularPolicy::deserialize("0p 0=1", "|").is_err());
        assert!(TabularPolicy::deserialize("0p|0:1", "|").is_err());
        assert!(TabularPolicy::deserialize("0p|0=1\n0p|1=1", "|").is_err());
    }

    #[test]
    fn spaced_delimiters_survive_parsing() {
        let policy = KuhnPoker::optimal(0.2).unwrap();
        for delimiter in [";", " : ", "\t", "|"] {
            let text = policy.serialize(3, delimiter).unwrap();
            let parsed = TabularPolicy::deserialize(&text, delimiter).unwrap();
            assert_eq!(parsed.len(), policy.len());
            assert_eq!(parsed.get("0"), Some([(0, 0.8), (1, 0.2)].as_slice()));
        }
    }

    #[test]
    fn validation_catches_bad_rows() {
        let mut policy = TabularPolicy::default();
        policy.insert("a", vec![(0, 0.5), (1, 0.4)]);
        assert!(policy.validate(PROBABILITY_TOLERANCE).is_err());
        let mut policy = TabularPolicy::default();
        policy.insert("a", vec![(0, 1.5), (1, -0.5)]);
        assert!(policy.validate(PROBABILITY_TOLERANCE).is_err());
    }

    #[test]
    fn json_shape() {
        let mut policy = TabularPolicy::default();
        policy.insert("1p", vec![(0, 1.), (1, 0.)]);
        let json = serde_json::to_string(&policy).unwrap();
        assert_eq!(json, r#"{"1p":[[0,1.0],[1,0.0]]}"#);
        assert_eq!(serde_json::from_str::<TabularPolicy>(&json).unwrap(), policy);
    }
}
