//! Generic session runner: one play-through of a fixed, ordered item list,
//! producing exactly one `SessionResult`. Every mini-game kind instantiates
//! this with its own item type and correctness predicate.

use std::rc::Rc;
use yew::Reducible;

/// Final score of one session. Created once, at termination; consumed by the
/// progression gate; not persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionResult {
    pub items_total: u32,
    pub items_correct: u32,
    pub success_rate_percent: u32,
}

impl SessionResult {
    /// Integer round-half-up of `correct / total * 100`; 0 when nothing was
    /// answered (a timed-out empty session must not divide by zero).
    pub fn from_counts(correct: u32, total: u32) -> Self {
        let rate = if total == 0 {
            0
        } else {
            (200 * correct + total) / (2 * total)
        };
        Self {
            items_total: total,
            items_correct: correct,
            success_rate_percent: rate,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted { correct: bool },
    /// Out-of-order input: wrong item, already answered, or session over.
    Ignored,
}

/// Drives one ordered list of items from first to last. `check` scores a
/// response against the current item; the runner owns the counters, the
/// per-item feedback window, and both termination paths.
#[derive(Clone)]
pub struct SessionRunner<I, R> {
    items: Vec<I>,
    check: fn(&I, &R) -> bool,
    index: usize,
    correct: u32,
    /// Set while the answered item's feedback is on screen; holds whether the
    /// answer was correct. Cleared by `advance`.
    pending: Option<bool>,
    finished: Option<SessionResult>,
    /// Bumped on every accepted answer. A scheduled advance carries the
    /// generation it was created for; a stale timer firing later is a no-op.
    generation: u32,
}

impl<I, R> SessionRunner<I, R> {
    pub fn new(items: Vec<I>, check: fn(&I, &R) -> bool) -> Self {
        Self {
            items,
            check,
            index: 0,
            correct: 0,
            pending: None,
            finished: None,
            generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn correct_count(&self) -> u32 {
        self.correct
    }

    /// Items resolved so far, counting the one currently showing feedback.
    pub fn answered_count(&self) -> u32 {
        self.index as u32 + if self.pending.is_some() { 1 } else { 0 }
    }

    pub fn current(&self) -> Option<&I> {
        if self.finished.is_some() {
            None
        } else {
            self.items.get(self.index)
        }
    }

    pub fn pending_feedback(&self) -> Option<bool> {
        self.pending
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn finished(&self) -> Option<SessionResult> {
        self.finished
    }

    /// Accepts a response for the current pending item only; anything else
    /// (replays, answers after termination) is ignored rather than an error.
    pub fn submit(&mut self, item_index: usize, response: &R) -> SubmitOutcome {
        if self.finished.is_some() || self.pending.is_some() || item_index != self.index {
            return SubmitOutcome::Ignored;
        }
        let Some(item) = self.items.get(self.index) else {
            return SubmitOutcome::Ignored;
        };
        let correct = (self.check)(item, response);
        if correct {
            self.correct += 1;
        }
        self.pending = Some(correct);
        self.generation += 1;
        SubmitOutcome::Accepted { correct }
    }

    /// Moves past the feedback window. Returns the result when this advance
    /// resolved the last item; the result is produced exactly once.
    pub fn advance(&mut self, generation: u32) -> Option<SessionResult> {
        if self.finished.is_some() || self.pending.is_none() || generation != self.generation {
            return None;
        }
        self.pending = None;
        self.index += 1;
        if self.index >= self.items.len() {
            let result = SessionResult::from_counts(self.correct, self.items.len() as u32);
            self.finished = Some(result);
            return Some(result);
        }
        None
    }

    /// Second termination path (session-wide countdown, boss HP): ends now,
    /// scored over the items answered so far rather than the full list.
    pub fn expire(&mut self) -> Option<SessionResult> {
        if self.finished.is_some() {
            return None;
        }
        let result = SessionResult::from_counts(self.correct, self.answered_count());
        self.finished = Some(result);
        Some(result)
    }
}

// ---------------- Reducer wrapper -----------------

#[derive(Clone, Debug)]
pub enum SessionAction<R> {
    Submit { item_index: usize, response: R },
    Advance { generation: u32 },
    /// Session-wide countdown tick (flash kind only).
    TickSecond,
}

/// `Reducible` wrapper the per-kind views hang off `use_reducer`. Owns the
/// runner plus the optional session-wide countdown.
#[derive(Clone)]
pub struct TimedSession<I, R> {
    pub runner: SessionRunner<I, R>,
    pub seconds_left: Option<u32>,
}

impl<I, R> TimedSession<I, R> {
    pub fn new(items: Vec<I>, check: fn(&I, &R) -> bool, countdown_secs: Option<u32>) -> Self {
        Self {
            runner: SessionRunner::new(items, check),
            seconds_left: countdown_secs,
        }
    }
}

impl<I: Clone + 'static, R: Clone + 'static> Reducible for TimedSession<I, R> {
    type Action = SessionAction<R>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            SessionAction::Submit {
                item_index,
                response,
            } => {
                new.runner.submit(item_index, &response);
            }
            SessionAction::Advance { generation } => {
                new.runner.advance(generation);
            }
            SessionAction::TickSecond => {
                if new.runner.finished().is_some() {
                    return self;
                }
                if let Some(secs) = new.seconds_left {
                    let secs = secs.saturating_sub(1);
                    new.seconds_left = Some(secs);
                    if secs == 0 {
                        new.runner.expire();
                    }
                }
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn exact(item: &u32, response: &u32) -> bool {
        item == response
    }

    fn runner(items: &[u32]) -> SessionRunner<u32, u32> {
        SessionRunner::new(items.to_vec(), exact)
    }

    /// Answer the current item and advance past the feedback window.
    fn play(r: &mut SessionRunner<u32, u32>, response: u32) -> Option<SessionResult> {
        let idx = r.index();
        assert!(matches!(
            r.submit(idx, &response),
            SubmitOutcome::Accepted { .. }
        ));
        r.advance(r.generation())
    }

    #[test]
    fn full_run_scores_and_terminates_once() {
        // 4 of 5 correct: exactly the 80% boundary.
        let mut r = runner(&[1, 2, 3, 4, 5]);
        for answer in [1, 2, 3, 4] {
            assert_eq!(play(&mut r, answer), None);
        }
        let result = play(&mut r, 99).expect("last advance yields the result");
        assert_eq!(result, SessionResult::from_counts(4, 5));
        assert_eq!(result.success_rate_percent, 80);
        // Terminated: no further submissions, no second result.
        assert_eq!(r.submit(5, &5), SubmitOutcome::Ignored);
        assert_eq!(r.advance(r.generation()), None);
        assert_eq!(r.finished(), Some(result));
    }

    #[test]
    fn double_submit_does_not_double_count() {
        let mut r = runner(&[7, 8]);
        assert_eq!(r.submit(0, &7), SubmitOutcome::Accepted { correct: true });
        assert_eq!(r.submit(0, &7), SubmitOutcome::Ignored);
        assert_eq!(r.correct_count(), 1);
    }

    #[test]
    fn wrong_item_index_is_ignored() {
        let mut r = runner(&[7, 8]);
        assert_eq!(r.submit(1, &8), SubmitOutcome::Ignored);
        assert_eq!(r.answered_count(), 0);
    }

    #[test]
    fn stale_advance_is_a_no_op() {
        let mut r = runner(&[7, 8]);
        r.submit(0, &7);
        let stale = r.generation() - 1;
        assert_eq!(r.advance(stale), None);
        assert_eq!(r.index(), 0);
        // The correctly-tagged advance still works afterwards.
        assert_eq!(r.advance(r.generation()), None);
        assert_eq!(r.index(), 1);
    }

    #[test]
    fn expiry_scores_answered_items_only() {
        // Timer dies after 2 of 8 items, both correct: 2/2 = 100%.
        let mut r = runner(&[1, 2, 3, 4, 5, 6, 7, 8]);
        play(&mut r, 1);
        play(&mut r, 2);
        let result = r.expire().unwrap();
        assert_eq!(result.items_total, 2);
        assert_eq!(result.success_rate_percent, 100);
        assert_eq!(r.expire(), None);
    }

    #[test]
    fn expiry_before_any_answer_reports_zero() {
        let mut r = runner(&[1, 2, 3]);
        let result = r.expire().unwrap();
        assert_eq!(result.items_total, 0);
        assert_eq!(result.success_rate_percent, 0);
    }

    #[test]
    fn expiry_counts_item_pending_feedback() {
        let mut r = runner(&[1, 2, 3]);
        r.submit(0, &1);
        let result = r.expire().unwrap();
        assert_eq!(result.items_total, 1);
        assert_eq!(result.items_correct, 1);
    }

    #[test]
    fn countdown_reaching_zero_expires_the_session() {
        let mut s: Rc<TimedSession<u32, u32>> =
            Rc::new(TimedSession::new(vec![1, 2, 3], exact, Some(2)));
        s = s.reduce(SessionAction::Submit {
            item_index: 0,
            response: 1,
        });
        let generation = s.runner.generation();
        s = s.reduce(SessionAction::Advance { generation });
        s = s.reduce(SessionAction::TickSecond);
        assert_eq!(s.seconds_left, Some(1));
        assert!(s.runner.finished().is_none());
        s = s.reduce(SessionAction::TickSecond);
        let result = s.runner.finished().expect("expired at zero");
        assert_eq!(result.items_total, 1);
        assert_eq!(result.success_rate_percent, 100);
        // Further ticks leave the terminated session alone.
        let after = s.clone().reduce(SessionAction::TickSecond);
        assert_eq!(after.runner.finished(), Some(result));
    }

    proptest! {
        #[test]
        fn rate_is_the_half_up_rounding(correct in 0u32..=500, extra in 0u32..=500) {
            let total = correct + extra;
            let result = SessionResult::from_counts(correct, total);
            let r = i64::from(result.success_rate_percent);
            if total == 0 {
                prop_assert_eq!(r, 0);
            } else {
                let c = i64::from(correct);
                let t = i64::from(total);
                // round-half-up: r*t - t/2 <= 100*c < r*t + t/2
                prop_assert!(200 * c - 2 * r * t >= -t);
                prop_assert!(200 * c - 2 * r * t < t);
                prop_assert!((0..=100).contains(&r));
            }
        }
    }
}
