use maplit::hashmap;
use std::collections::HashMap;

pub const DEVELOPMENT: &str = "development";
pub const KOVAN: &str = "kovan";

/// How the deploying account is picked for a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenderRule {
    /// Use the registry entry at this position.
    AccountAt(usize),
}

/// Sender chosen for a single deployment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SenderOverride<A> {
    Account(A),
    /// The rule pointed past the end of the registry. Left for the runner to reject.
    Unavailable { index: usize, registry_len: usize },
}

impl SenderRule {
    fn select<A: Clone>(&self, accounts: &[A]) -> SenderOverride<A> {
        match *self {
            SenderRule::AccountAt(index) => match accounts.get(index) {
                Some(account) => SenderOverride::Account(account.clone()),
                None => SenderOverride::Unavailable {
                    index,
                    registry_len: accounts.len(),
                },
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct NetworkPolicy {
    rules: HashMap<String, SenderRule>,
}

impl Default for NetworkPolicy {
    fn default() -> Self {
        NetworkPolicy {
            rules: hashmap! {
                DEVELOPMENT.to_string() => SenderRule::AccountAt(0),
                KOVAN.to_string() => SenderRule::AccountAt(0),
            },
        }
    }
}

impl NetworkPolicy {
    /// Adds or replaces the rule for `network`.
    pub fn with_rule(mut self, network: impl Into<String>, rule: SenderRule) -> Self {
        self.rules.insert(network.into(), rule);
        self
    }

    pub fn rule_for(&self, network: &str) -> Option<SenderRule> {
        self.rules.get(network).copied()
    }

    pub fn recognizes(&self, network: &str) -> bool {
        self.rules.contains_key(network)
    }

    /// Resolves the sender override for `network`. Unrecognized networks get no
    /// override, so the runner falls back to its own default sender.
    pub fn resolve<A: Clone>(&self, network: &str, accounts: &[A]) -> Option<SenderOverride<A>> {
        self.rule_for(network).map(|rule| rule.select(accounts))
    }

    /// Networks that have a sender rule, sorted by name.
    pub fn networks(&self) -> Vec<&str> {
        let mut networks: Vec<&str> = self.rules.keys().map(String::as_str).collect();
        networks.sort_unstable();
        networks
    }
}
