//! Level progression gate: turns a `SessionResult` into a durable progression
//! update and a reward grant. One fixed rule for every level kind.

use crate::model::{LevelDescriptor, LevelKind, PlayerWallet, TrackProgress};
use crate::state::session::SessionResult;

/// Single cutoff for all kinds, deliberately not per-level configuration.
pub const PASS_THRESHOLD_PERCENT: u32 = 80;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reward {
    pub coins: u64,
    pub xp: u64,
}

/// Fixed per-kind reward pairs. Content data, not algorithm.
pub fn reward_for(kind: LevelKind) -> Reward {
    match kind {
        LevelKind::Quiz => Reward { coins: 50, xp: 100 },
        LevelKind::FlashQuiz | LevelKind::Matching => Reward { coins: 60, xp: 120 },
        LevelKind::FillBlank => Reward { coins: 75, xp: 150 },
        LevelKind::Boss => Reward {
            coins: 150,
            xp: 300,
        },
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GateOutcome {
    pub level_id: u32,
    pub kind: LevelKind,
    pub result: SessionResult,
    pub passed: bool,
    /// Whether the current-level pointer moved.
    pub leveled_up: bool,
    /// Present on a first-time pass only; replays re-affirm completion.
    pub reward: Option<Reward>,
    /// Failing the final boss restarts the whole track.
    pub track_reset: bool,
}

pub fn passes(result: &SessionResult) -> bool {
    result.success_rate_percent >= PASS_THRESHOLD_PERCENT
}

/// Applies the 80% rule to one finished session. Mutates `progress` and
/// `wallet` on a first-time pass, resets the track on a final-boss failure,
/// and touches nothing otherwise.
pub fn evaluate(
    track: &[LevelDescriptor],
    progress: &mut TrackProgress,
    wallet: &mut PlayerWallet,
    level: &LevelDescriptor,
    result: &SessionResult,
) -> GateOutcome {
    let passed = passes(result);
    let last_id = track.last().map(|l| l.id).unwrap_or(1);
    let mut outcome = GateOutcome {
        level_id: level.id,
        kind: level.kind,
        result: *result,
        passed,
        leveled_up: false,
        reward: None,
        track_reset: false,
    };

    if passed {
        if progress.completed.insert(level.id) {
            // Lowest uncompleted id past the passed one, capped at the last
            // level. The pointer never moves backwards.
            let mut next = level.id;
            while next < last_id {
                next += 1;
                if !progress.completed.contains(&next) {
                    break;
                }
            }
            if next > progress.current_level {
                progress.current_level = next;
                outcome.leveled_up = true;
            }
            let reward = reward_for(level.kind);
            wallet.coins = wallet.coins.saturating_add(reward.coins);
            wallet.xp = wallet.xp.saturating_add(reward.xp);
            outcome.reward = Some(reward);
            log::info!(
                "level {} passed at {}% (+{} coins, +{} xp)",
                level.id,
                result.success_rate_percent,
                reward.coins,
                reward.xp
            );
        }
    } else if level.kind == LevelKind::Boss && level.id == last_id {
        *progress = TrackProgress::default();
        outcome.track_reset = true;
        log::info!("final boss failed at {}%, track restarts", result.success_rate_percent);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(id: u32, kind: LevelKind) -> LevelDescriptor {
        LevelDescriptor {
            id,
            name: "test level",
            kind,
            required_items: Some(5),
            boss: None,
        }
    }

    fn track() -> Vec<LevelDescriptor> {
        vec![
            level(1, LevelKind::Quiz),
            level(2, LevelKind::Matching),
            level(3, LevelKind::FlashQuiz),
            level(4, LevelKind::FillBlank),
            level(5, LevelKind::Boss),
        ]
    }

    #[test]
    fn pass_at_threshold_credits_and_advances() {
        let track = track();
        let mut progress = TrackProgress::default();
        let mut wallet = PlayerWallet::default();
        let result = SessionResult::from_counts(4, 5);
        let outcome = evaluate(&track, &mut progress, &mut wallet, &track[0], &result);
        assert!(outcome.passed && outcome.leveled_up);
        assert!(progress.completed.contains(&1));
        assert_eq!(progress.current_level, 2);
        assert_eq!(wallet, PlayerWallet { coins: 50, xp: 100 });
    }

    #[test]
    fn fail_below_threshold_is_inert() {
        let track = track();
        let mut progress = TrackProgress::default();
        let mut wallet = PlayerWallet::default();
        let result = SessionResult::from_counts(3, 5); // 60%
        let outcome = evaluate(&track, &mut progress, &mut wallet, &track[0], &result);
        assert!(!outcome.passed && !outcome.track_reset);
        assert_eq!(progress, TrackProgress::default());
        assert_eq!(wallet, PlayerWallet::default());
    }

    #[test]
    fn repeated_pass_does_not_double_credit() {
        let track = track();
        let mut progress = TrackProgress::default();
        let mut wallet = PlayerWallet::default();
        let result = SessionResult::from_counts(5, 5);
        evaluate(&track, &mut progress, &mut wallet, &track[0], &result);
        let snapshot = (progress.clone(), wallet);
        let again = evaluate(&track, &mut progress, &mut wallet, &track[0], &result);
        assert!(again.passed);
        assert_eq!(again.reward, None);
        assert!(!again.leveled_up);
        assert_eq!((progress, wallet), snapshot);
    }

    #[test]
    fn advance_skips_already_completed_levels() {
        let track = track();
        let mut progress = TrackProgress::default();
        progress.completed.insert(2);
        let mut wallet = PlayerWallet::default();
        let result = SessionResult::from_counts(5, 5);
        evaluate(&track, &mut progress, &mut wallet, &track[0], &result);
        assert_eq!(progress.current_level, 3);
    }

    #[test]
    fn pointer_never_moves_backwards() {
        let track = track();
        let mut progress = TrackProgress {
            completed: Default::default(),
            current_level: 4,
        };
        let mut wallet = PlayerWallet::default();
        let result = SessionResult::from_counts(5, 5);
        let outcome = evaluate(&track, &mut progress, &mut wallet, &track[0], &result);
        assert!(!outcome.leveled_up);
        assert_eq!(progress.current_level, 4);
    }

    #[test]
    fn pointer_caps_at_final_level() {
        let track = track();
        let mut progress = TrackProgress {
            completed: [1, 2, 3, 4].into_iter().collect(),
            current_level: 5,
        };
        let mut wallet = PlayerWallet::default();
        let result = SessionResult::from_counts(6, 6);
        evaluate(&track, &mut progress, &mut wallet, &track[4], &result);
        assert_eq!(progress.current_level, 5);
        assert!(progress.completed.contains(&5));
    }

    #[test]
    fn final_boss_failure_restarts_the_track() {
        let track = track();
        let mut progress = TrackProgress {
            completed: [1, 2, 3, 4].into_iter().collect(),
            current_level: 5,
        };
        let mut wallet = PlayerWallet { coins: 10, xp: 20 };
        let result = SessionResult::from_counts(1, 6);
        let outcome = evaluate(&track, &mut progress, &mut wallet, &track[4], &result);
        assert!(outcome.track_reset);
        assert_eq!(progress, TrackProgress::default());
        // Failure never takes money back.
        assert_eq!(wallet, PlayerWallet { coins: 10, xp: 20 });
    }

    #[test]
    fn mid_track_boss_failure_does_not_reset() {
        // The reset is tied to the *final* level, not the kind alone.
        let mut track = track();
        track[2].kind = LevelKind::Boss;
        let mut progress = TrackProgress {
            completed: [1, 2].into_iter().collect(),
            current_level: 3,
        };
        let mut wallet = PlayerWallet::default();
        let result = SessionResult::from_counts(0, 5);
        let outcome = evaluate(&track, &mut progress, &mut wallet, &track[2], &result);
        assert!(!outcome.track_reset);
        assert_eq!(progress.current_level, 3);
    }
}
