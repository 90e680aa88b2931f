use crate::*;
use std::collections::BTreeMap;

/// Action weights at one information state.
pub type Distribution = Vec<(Action, Probability)>;

/// Read-only mapping from information state to action distribution.
///
/// Distributions may be sparse: an action that is legal but missing from
/// the distribution is played with probability zero.
pub trait Policy {
    /// The distribution at `info`, or `None` if the policy does not cover it.
    fn distribution(&self, info: &str) -> Option<Distribution>;

    /// The distribution at the acting player's information state.
    fn state_distribution<S>(&self, state: &S) -> Option<Distribution>
    where
        S: GameState,
        Self: Sized,
    {
        state
            .current_information_state_string()
            .and_then(|info| self.distribution(&info))
    }
    /// Weight of one action; zero when covered but unlisted.
    fn probability(&self, info: &str, action: Action) -> Option<Probability> {
        self.distribution(info).map(|distribution| {
            distribution
                .into_iter()
                .find(|(a, _)| *a == action)
                .map(|(_, p)| p)
                .unwrap_or_default()
        })
    }
    fn distribution_map(&self, info: &str) -> Option<BTreeMap<Action, Probability>> {
        self.distribution(info)
            .map(|distribution| distribution.into_iter().collect())
    }
    /// Actions and weights as two aligned vectors.
    fn parallel_vectors(&self, info: &str) -> Option<(Vec<Action>, Vec<Probability>)> {
        self.distribution(info)
            .map(|distribution| distribution.into_iter().unzip())
    }
}

impl<P> Policy for &P
where
    P: Policy + ?Sized,
{
    fn distribution(&self, info: &str) -> Option<Distribution> {
        (**self).distribution(info)
    }
}
