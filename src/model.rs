//! Core data model for Quiz Quest.
//! Defines the content item types, per-track progression state, and the
//! top-level `GameState` reducer that routes between phases.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use yew::Reducible;

use crate::content;
use crate::state::gate::{self, GateOutcome};
use crate::state::session::SessionResult;

/// One of the three parallel level sequences, each with independent progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Subject {
    Math,
    Biology,
    Coding,
}

impl Subject {
    pub const ALL: [Subject; 3] = [Subject::Math, Subject::Biology, Subject::Coding];

    pub fn title(&self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Biology => "Biology",
            Subject::Coding => "Coding",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Subject::Math => "Numbers, fractions, and the Arithmetic Golem.",
            Subject::Biology => "Cells, creatures, and the Swamp Hydra.",
            Subject::Coding => "Loops, logic, and the Null Pointer Wraith.",
        }
    }
}

/// The mini-game type bound to a level id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelKind {
    /// Multiple choice, per-item feedback delay.
    Quiz,
    /// Multiple choice under a session-wide countdown.
    FlashQuiz,
    /// Match a term to its pair among decoys.
    Matching,
    /// Free-text fill-in.
    FillBlank,
    /// Battle screen with HP on both sides; ends in Victory/Defeat.
    Boss,
}

impl LevelKind {
    pub fn label(&self) -> &'static str {
        match self {
            LevelKind::Quiz => "Quiz",
            LevelKind::FlashQuiz => "Flash Quiz",
            LevelKind::Matching => "Matching",
            LevelKind::FillBlank => "Fill In",
            LevelKind::Boss => "Boss Battle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BossStats {
    pub health: u32,
    /// Damage dealt to the player per wrong answer.
    pub damage: u32,
}

/// Static per-track level definition. Ids are 1-based and dense; the last
/// level of every track is the boss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelDescriptor {
    pub id: u32,
    pub name: &'static str,
    pub kind: LevelKind,
    /// How many bank items one session draws (bank order, front first).
    pub required_items: Option<usize>,
    pub boss: Option<BossStats>,
}

/// Multiple-choice item. `correct` indexes into `options`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizItem {
    pub id: u32,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
    pub explanation: Option<&'static str>,
}

/// Pairing item: pick `right` for `left` among the decoys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchItem {
    pub id: u32,
    pub left: &'static str,
    pub right: &'static str,
    pub decoys: &'static [&'static str],
}

impl MatchItem {
    /// Choices in display order: the real pair sits between the decoys so it
    /// is not always first. Correctness is structural equality, not position.
    pub fn choices(&self) -> Vec<&'static str> {
        let mut v = Vec::with_capacity(self.decoys.len() + 1);
        let mid = self.decoys.len() / 2;
        v.extend_from_slice(&self.decoys[..mid]);
        v.push(self.right);
        v.extend_from_slice(&self.decoys[mid..]);
        v
    }
}

/// Free-text item; any entry in `accepted` counts (case-insensitive, trimmed).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillItem {
    pub id: u32,
    pub prompt: &'static str,
    pub accepted: &'static [&'static str],
    pub explanation: Option<&'static str>,
}

/// Per-subject progression. Mutated only by the gate, persisted after every
/// mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackProgress {
    pub completed: BTreeSet<u32>,
    pub current_level: u32,
}

impl Default for TrackProgress {
    fn default() -> Self {
        Self {
            completed: BTreeSet::new(),
            current_level: 1,
        }
    }
}

impl TrackProgress {
    /// Levels up to the pointer are playable; completed ones stay replayable.
    pub fn is_unlocked(&self, id: u32) -> bool {
        id <= self.current_level || self.completed.contains(&id)
    }
}

/// Additive-only currency pair credited by the gate on pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerWallet {
    pub coins: u64,
    pub xp: u64,
}

/// Which screen is live. Never persisted: every start lands on `Home`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GamePhase {
    Home,
    Map,
    Playing(&'static LevelDescriptor),
    Victory,
    Defeat,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub phase: GamePhase,
    pub subject: Option<Subject>,
    pub wallet: PlayerWallet,
    pub progress: BTreeMap<Subject, TrackProgress>,
    /// Outcome of the most recent finished session, for the map banner and
    /// the boss interstitial.
    pub last_outcome: Option<GateOutcome>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            phase: GamePhase::Home,
            subject: None,
            wallet: PlayerWallet::default(),
            progress: BTreeMap::new(),
            last_outcome: None,
        }
    }
}

impl GameState {
    pub fn track_progress(&self, subject: Subject) -> TrackProgress {
        self.progress.get(&subject).cloned().unwrap_or_default()
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum GameAction {
    /// Applied once at startup from storage. Phase stays `Home` no matter
    /// what was on disk.
    HydrateSaved {
        wallet: PlayerWallet,
        progress: BTreeMap<Subject, TrackProgress>,
    },
    SelectSubject(Subject),
    SelectLevel(u32),
    /// Exactly one per finished session; applies the progression gate.
    SessionFinished { level_id: u32, result: SessionResult },
    /// Victory/Defeat interstitial dismissed.
    ContinueFromOutcome,
    /// Explicit leave/exit: abandons any in-progress session unscored and
    /// keeps wallet and progress.
    GoHome,
    /// Settings-modal hard reset: wipes wallet and all tracks.
    ResetAll,
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use GameAction::*;
        let mut new = (*self).clone();
        match action {
            HydrateSaved { wallet, progress } => {
                new.wallet = wallet;
                new.progress = progress;
            }
            SelectSubject(subject) => {
                new.subject = Some(subject);
                new.progress.entry(subject).or_default();
                new.phase = GamePhase::Map;
                new.last_outcome = None;
            }
            SelectLevel(id) => {
                let Some(subject) = new.subject else {
                    return self;
                };
                if new.phase != GamePhase::Map {
                    return self;
                }
                let Some(level) = content::level(subject, id) else {
                    return self;
                };
                if !new.track_progress(subject).is_unlocked(id) {
                    return self;
                }
                new.phase = GamePhase::Playing(level);
                new.last_outcome = None;
            }
            SessionFinished { level_id, result } => {
                let Some(subject) = new.subject else {
                    return self;
                };
                let GamePhase::Playing(level) = new.phase else {
                    return self;
                };
                if level.id != level_id {
                    return self;
                }
                let progress = new.progress.entry(subject).or_default();
                let outcome = gate::evaluate(
                    content::track(subject),
                    progress,
                    &mut new.wallet,
                    level,
                    &result,
                );
                new.phase = match (level.kind, outcome.passed) {
                    (LevelKind::Boss, true) => GamePhase::Victory,
                    (LevelKind::Boss, false) => GamePhase::Defeat,
                    _ => GamePhase::Map,
                };
                new.last_outcome = Some(outcome);
            }
            ContinueFromOutcome => {
                if !matches!(new.phase, GamePhase::Victory | GamePhase::Defeat) {
                    return self;
                }
                new.phase = GamePhase::Map;
            }
            GoHome => {
                new.phase = GamePhase::Home;
                new.subject = None;
                new.last_outcome = None;
            }
            ResetAll => {
                new = GameState::default();
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(state: GameState, action: GameAction) -> GameState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn at_map(subject: Subject) -> GameState {
        dispatch(GameState::default(), GameAction::SelectSubject(subject))
    }

    #[test]
    fn subject_selection_enters_map_without_touching_progress() {
        let mut start = GameState::default();
        start.wallet = PlayerWallet { coins: 70, xp: 140 };
        let mut done = TrackProgress::default();
        done.completed.insert(1);
        done.current_level = 2;
        start.progress.insert(Subject::Math, done.clone());

        let state = dispatch(start, GameAction::SelectSubject(Subject::Math));
        assert_eq!(state.phase, GamePhase::Map);
        assert_eq!(state.track_progress(Subject::Math), done);
        assert_eq!(state.wallet.coins, 70);
    }

    #[test]
    fn locked_level_selection_is_rejected() {
        let state = at_map(Subject::Math);
        let after = dispatch(state.clone(), GameAction::SelectLevel(3));
        assert_eq!(after.phase, GamePhase::Map);
        // Level 1 is the pointer and opens fine.
        let after = dispatch(state, GameAction::SelectLevel(1));
        assert!(matches!(after.phase, GamePhase::Playing(l) if l.id == 1));
    }

    #[test]
    fn completed_levels_stay_replayable() {
        let mut state = at_map(Subject::Biology);
        let track = state.progress.get_mut(&Subject::Biology).unwrap();
        track.completed.insert(1);
        track.current_level = 2;
        let after = dispatch(state, GameAction::SelectLevel(1));
        assert!(matches!(after.phase, GamePhase::Playing(l) if l.id == 1));
    }

    #[test]
    fn passing_session_credits_and_advances() {
        // 4 of 5 correct is exactly 80% and passes.
        let state = dispatch(at_map(Subject::Math), GameAction::SelectLevel(1));
        let after = dispatch(
            state,
            GameAction::SessionFinished {
                level_id: 1,
                result: SessionResult::from_counts(4, 5),
            },
        );
        assert_eq!(after.phase, GamePhase::Map);
        let track = after.track_progress(Subject::Math);
        assert!(track.completed.contains(&1));
        assert_eq!(track.current_level, 2);
        assert!(after.wallet.coins > 0);
        assert!(after.last_outcome.as_ref().unwrap().passed);
    }

    #[test]
    fn failing_session_mutates_nothing() {
        // 2 of 5 correct is 40%: fail, straight back to map.
        let state = dispatch(at_map(Subject::Math), GameAction::SelectLevel(1));
        let after = dispatch(
            state,
            GameAction::SessionFinished {
                level_id: 1,
                result: SessionResult::from_counts(2, 5),
            },
        );
        assert_eq!(after.phase, GamePhase::Map);
        let track = after.track_progress(Subject::Math);
        assert!(track.completed.is_empty());
        assert_eq!(track.current_level, 1);
        assert_eq!(after.wallet, PlayerWallet::default());
    }

    #[test]
    fn stale_session_completion_is_ignored() {
        let state = dispatch(at_map(Subject::Math), GameAction::SelectLevel(1));
        let after = dispatch(
            state.clone(),
            GameAction::SessionFinished {
                level_id: 9,
                result: SessionResult::from_counts(5, 5),
            },
        );
        assert_eq!(after, state);
    }

    #[test]
    fn boss_outcomes_route_to_interstitials() {
        let mut state = at_map(Subject::Coding);
        let boss_id = content::track(Subject::Coding).last().unwrap().id;
        state.progress.get_mut(&Subject::Coding).unwrap().current_level = boss_id;
        let playing = dispatch(state, GameAction::SelectLevel(boss_id));
        let won = dispatch(
            playing.clone(),
            GameAction::SessionFinished {
                level_id: boss_id,
                result: SessionResult::from_counts(6, 6),
            },
        );
        assert_eq!(won.phase, GamePhase::Victory);
        assert_eq!(
            dispatch(won, GameAction::ContinueFromOutcome).phase,
            GamePhase::Map
        );

        let lost = dispatch(
            playing,
            GameAction::SessionFinished {
                level_id: boss_id,
                result: SessionResult::from_counts(1, 6),
            },
        );
        assert_eq!(lost.phase, GamePhase::Defeat);
        // Final-boss failure restarts the track.
        assert_eq!(
            lost.track_progress(Subject::Coding),
            TrackProgress::default()
        );
    }

    #[test]
    fn leaving_keeps_wallet_and_progress() {
        let mut state = dispatch(at_map(Subject::Math), GameAction::SelectLevel(1));
        state.wallet = PlayerWallet { coins: 5, xp: 10 };
        let home = dispatch(state.clone(), GameAction::GoHome);
        assert_eq!(home.phase, GamePhase::Home);
        assert_eq!(home.wallet.coins, 5);
        assert_eq!(home.progress, state.progress);
    }

    #[test]
    fn reset_all_wipes_everything() {
        let mut state = at_map(Subject::Math);
        state.wallet = PlayerWallet { coins: 999, xp: 999 };
        let after = dispatch(state, GameAction::ResetAll);
        assert_eq!(after, GameState::default());
    }
}
