//! Built-in dispatching rules and the rule catalog.
//!
//! # Categories
//!
//! - **Time-based**: SPT, LPT
//! - **Work-remaining**: LWKR, MWKR
//! - **Operation-count**: LOR, MOR
//! - **Machine-availability**: EST, LST
//!
//! Each catalog entry pairs a primary key with an optional tie-breaking
//! key; remaining ties fall to the lowest (job, slot) coordinate, so every
//! rule is deterministic. The catalog is a closed set of tagged strategies
//! selected by index, not an open-ended trait: its size and membership are
//! fixed at configuration time.
//!
//! # Score Convention
//! Lower score = scheduled first.
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use super::DispatchContext;

/// Selection keys a rule can rank eligible coordinates by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKey {
    /// Shortest processing time of the candidate operation.
    ///
    /// Smith (1956), optimal for mean flow time on a single machine.
    Spt,
    /// Longest processing time of the candidate operation.
    Lpt,
    /// Least work remaining across the whole job.
    Lwkr,
    /// Most work remaining across the whole job; prevents starvation of
    /// long jobs.
    Mwkr,
    /// Fewest operations remaining in the job.
    Lor,
    /// Most operations remaining in the job.
    Mor,
    /// Earliest start time: the required machine frees up soonest.
    Est,
    /// Latest start time: the required machine frees up last.
    Lst,
}

impl RuleKey {
    /// Scores an eligible coordinate; lower = scheduled first.
    fn score(self, ctx: &DispatchContext<'_>, job: usize, slot: usize) -> i64 {
        match self {
            RuleKey::Spt => ctx.remaining_time[job][slot] as i64,
            RuleKey::Lpt => -(ctx.remaining_time[job][slot] as i64),
            RuleKey::Lwkr => ctx.job_work_remaining(job) as i64,
            RuleKey::Mwkr => -(ctx.job_work_remaining(job) as i64),
            RuleKey::Lor => ctx.job_ops_remaining(job) as i64,
            RuleKey::Mor => -(ctx.job_ops_remaining(job) as i64),
            RuleKey::Est => ctx.machine_available(job, slot) as i64,
            RuleKey::Lst => -(ctx.machine_available(job, slot) as i64),
        }
    }
}

/// A dispatching rule: a primary key plus an optional tie-breaking key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    name: &'static str,
    primary: RuleKey,
    tie_breaker: Option<RuleKey>,
}

impl Rule {
    /// Creates a single-key rule.
    pub const fn new(name: &'static str, primary: RuleKey) -> Self {
        Self {
            name,
            primary,
            tie_breaker: None,
        }
    }

    /// Creates a rule with a tie-breaking key.
    pub const fn with_tie_breaker(
        name: &'static str,
        primary: RuleKey,
        tie_breaker: RuleKey,
    ) -> Self {
        Self {
            name,
            primary,
            tie_breaker: Some(tie_breaker),
        }
    }

    /// Rule name (e.g. "SPT", "EST/SPT").
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Resolves the rule against the current state.
    ///
    /// Ranks the eligible coordinates by `(primary, tie_breaker, job, slot)`
    /// and returns the winner, or `None` once no slot has remaining work.
    pub fn select(&self, ctx: &DispatchContext<'_>) -> Option<(usize, usize)> {
        ctx.eligible()
            .into_iter()
            .min_by_key(|&(job, slot)| {
                let tie = self
                    .tie_breaker
                    .map(|key| key.score(ctx, job, slot))
                    .unwrap_or(0);
                (self.primary.score(ctx, job, slot), tie, job, slot)
            })
    }
}

/// A fixed, index-addressed table of dispatching rules.
///
/// The simulation treats the catalog size as a configurable integer range:
/// an agent's action space is exactly `0..catalog.len()`.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
}

impl RuleCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The standard 18-rule catalog: the eight base keys plus ten
    /// tie-broken composites.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                Rule::new("SPT", RuleKey::Spt),
                Rule::new("LPT", RuleKey::Lpt),
                Rule::new("LWKR", RuleKey::Lwkr),
                Rule::new("MWKR", RuleKey::Mwkr),
                Rule::new("LOR", RuleKey::Lor),
                Rule::new("MOR", RuleKey::Mor),
                Rule::new("EST", RuleKey::Est),
                Rule::new("LST", RuleKey::Lst),
                Rule::with_tie_breaker("SPT/LWKR", RuleKey::Spt, RuleKey::Lwkr),
                Rule::with_tie_breaker("SPT/MWKR", RuleKey::Spt, RuleKey::Mwkr),
                Rule::with_tie_breaker("LPT/LWKR", RuleKey::Lpt, RuleKey::Lwkr),
                Rule::with_tie_breaker("LPT/MWKR", RuleKey::Lpt, RuleKey::Mwkr),
                Rule::with_tie_breaker("EST/SPT", RuleKey::Est, RuleKey::Spt),
                Rule::with_tie_breaker("EST/LPT", RuleKey::Est, RuleKey::Lpt),
                Rule::with_tie_breaker("LWKR/SPT", RuleKey::Lwkr, RuleKey::Spt),
                Rule::with_tie_breaker("MWKR/SPT", RuleKey::Mwkr, RuleKey::Spt),
                Rule::with_tie_breaker("LOR/SPT", RuleKey::Lor, RuleKey::Spt),
                Rule::with_tie_breaker("MOR/SPT", RuleKey::Mor, RuleKey::Spt),
            ],
        }
    }

    /// Number of rules (the size of the action space).
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the catalog has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The rule at an action index.
    pub fn get(&self, action: usize) -> Option<&Rule> {
        self.rules.get(action)
    }

    /// Rule names in catalog order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(Rule::name).collect()
    }
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
