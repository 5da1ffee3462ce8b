//! Rule engine for multi-criteria dispatching.
//!
//! Applies rules in sequence: the next rule is consulted only when the
//! previous one ties, and a final tie-breaker settles what is left.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::ProcessState;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Default)]
pub enum TieBreaker {
    /// Keep input order (stable).
    #[default]
    InputOrder,
    /// Deterministic by process ID (lowest first).
    ById,
}

/// A composable rule engine for process selection.
///
/// # Example
/// ```
/// use u_cpu_schedule::dispatching::{RuleEngine, TieBreaker};
/// use u_cpu_schedule::dispatching::rules;
///
/// let sjf = RuleEngine::new()
///     .with_rule(rules::ShortestBurst)
///     .with_rule(rules::EarliestArrival)
///     .with_final_tie_breaker(TieBreaker::ById);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::InputOrder,
        }
    }

    /// Appends a rule. Earlier rules take precedence.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sorts all processes by priority (highest priority first).
    ///
    /// Returns indices into `processes`. The sort is stable.
    pub fn sort_indices(&self, processes: &[ProcessState], context: &SchedulingContext) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b], context));
        indices
    }

    /// Returns the index of the highest-priority process among `candidates`.
    ///
    /// `candidates` are indices into `processes`. On a complete tie the
    /// earliest candidate wins.
    pub fn select_best(
        &self,
        processes: &[ProcessState],
        candidates: impl IntoIterator<Item = usize>,
        context: &SchedulingContext,
    ) -> Option<usize> {
        candidates
            .into_iter()
            .min_by(|&a, &b| self.compare(&processes[a], &processes[b], context))
    }

    /// Returns the highest-priority process that is ready at the context's
    /// current time (arrived and not yet complete).
    pub fn select_ready(
        &self,
        processes: &[ProcessState],
        context: &SchedulingContext,
    ) -> Option<usize> {
        let ready = (0..processes.len()).filter(|&i| processes[i].is_ready(context.current_time));
        self.select_best(processes, ready, context)
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &ProcessState, context: &SchedulingContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(process, context))
            .collect()
    }

    fn compare(&self, a: &ProcessState, b: &ProcessState, context: &SchedulingContext) -> Ordering {
        for rule in &self.rules {
            let ordering = rule.evaluate(a, context).cmp(&rule.evaluate(b, context));
            if ordering != Ordering::Equal {
                return ordering;
            }
        }

        // All rules tied → use final tie-breaker
        match self.tie_breaker {
            TieBreaker::InputOrder => Ordering::Equal,
            TieBreaker::ById => a.id().cmp(&b.id()),
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::ProcessSpec;

    fn make_processes(specs: &[(u32, i64, i64)]) -> Vec<ProcessState> {
        specs
            .iter()
            .map(|&(id, arrival, burst)| ProcessState::new(ProcessSpec::new(id, arrival, burst)))
            .collect()
    }

    #[test]
    fn test_shortest_burst_ordering() {
        let processes = make_processes(&[(1, 0, 5), (2, 0, 1), (3, 0, 3)]);
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);

        let indices = engine.sort_indices(&processes, &ctx);
        assert_eq!(indices, vec![1, 2, 0]);
    }

    #[test]
    fn test_sequential_with_second_rule() {
        // Equal bursts → earlier arrival wins
        let processes = make_processes(&[(1, 3, 2), (2, 1, 2)]);
        let ctx = SchedulingContext::at_time(5);
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_rule(rules::EarliestArrival);

        assert_eq!(engine.select_best(&processes, [0, 1], &ctx), Some(1));
    }

    #[test]
    fn test_by_id_tie_breaker() {
        let processes = make_processes(&[(7, 0, 4), (3, 0, 4)]);
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_final_tie_breaker(TieBreaker::ById);

        let indices = engine.sort_indices(&processes, &ctx);
        assert_eq!(processes[indices[0]].id(), 3);
    }

    #[test]
    fn test_input_order_tie_breaker_is_stable() {
        let processes = make_processes(&[(7, 0, 4), (3, 0, 4)]);
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);

        assert_eq!(engine.sort_indices(&processes, &ctx), vec![0, 1]);
        assert_eq!(engine.select_best(&processes, [0, 1], &ctx), Some(0));
    }

    #[test]
    fn test_select_best_restricted_to_candidates() {
        let processes = make_processes(&[(1, 0, 9), (2, 0, 1), (3, 0, 4)]);
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);

        assert_eq!(engine.select_best(&processes, [0, 2], &ctx), Some(2));
    }

    #[test]
    fn test_empty_candidates() {
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert!(engine.sort_indices(&[], &ctx).is_empty());
        assert!(engine.select_best(&[], [], &ctx).is_none());
    }

    #[test]
    fn test_evaluate_scores() {
        let mut processes = make_processes(&[(1, 2, 6)]);
        processes[0].remaining = 4;
        let ctx = SchedulingContext::at_time(0);
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_rule(rules::ShortestRemaining)
            .with_rule(rules::EarliestArrival);

        assert_eq!(engine.evaluate(&processes[0], &ctx), vec![6, 4, 2]);
    }

    #[test]
    fn test_select_ready_uses_context_time() {
        let mut processes = make_processes(&[(1, 0, 9), (2, 4, 1), (3, 2, 3)]);
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_final_tie_breaker(TieBreaker::ById);

        assert_eq!(engine.select_ready(&processes, &SchedulingContext::at_time(0)), Some(0));
        assert_eq!(engine.select_ready(&processes, &SchedulingContext::at_time(3)), Some(2));
        assert_eq!(engine.select_ready(&processes, &SchedulingContext::at_time(4)), Some(1));

        processes[1].remaining = 0;
        assert_eq!(engine.select_ready(&processes, &SchedulingContext::at_time(4)), Some(2));
    }

    #[test]
    fn test_scores_beyond_f64_precision_stay_ordered() {
        // 2^53 + 1 is not representable as f64.
        let base: i64 = 1 << 53;
        let processes = make_processes(&[(1, base + 1, 1), (2, base, 1)]);
        let ctx = SchedulingContext::at_time(base + 1);
        let engine = RuleEngine::new()
            .with_rule(rules::EarliestArrival)
            .with_final_tie_breaker(TieBreaker::ById);

        assert_eq!(engine.sort_indices(&processes, &ctx), vec![1, 0]);

        let bursts = make_processes(&[(1, 0, base + 1), (2, 0, base)]);
        let sjf = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_final_tie_breaker(TieBreaker::ById);
        assert_eq!(sjf.select_best(&bursts, [0, 1], &ctx), Some(1));
    }
}
