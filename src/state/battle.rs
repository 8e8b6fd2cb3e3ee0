//! Boss battle bookkeeping: HP on both sides and a combo streak layered over
//! the ordinary session runner. The gate still consumes the runner's plain
//! `SessionResult`; HP only adds early termination paths.

use std::rc::Rc;
use yew::Reducible;

use crate::content;
use crate::model::{BossStats, QuizItem};
use crate::state::session::{SessionRunner, SubmitOutcome};

pub const PLAYER_MAX_HP: u32 = 30;
pub const BASE_ATTACK: u32 = 10;
/// Combo multiplier saturates at x3.
pub const MAX_COMBO: u32 = 3;

#[derive(Clone)]
pub struct BossBattle {
    pub runner: SessionRunner<QuizItem, usize>,
    pub player_hp: u32,
    pub boss_hp: u32,
    pub boss_max_hp: u32,
    /// Damage the boss deals per wrong answer.
    pub boss_damage: u32,
    /// Consecutive correct answers; resets on a miss.
    pub combo: u32,
}

#[derive(Clone, Debug)]
pub enum BattleAction {
    Answer { item_index: usize, option: usize },
    Advance { generation: u32 },
}

impl BossBattle {
    pub fn new(items: Vec<QuizItem>, stats: BossStats) -> Self {
        Self {
            runner: SessionRunner::new(items, content::check_quiz),
            player_hp: PLAYER_MAX_HP,
            boss_hp: stats.health,
            boss_max_hp: stats.health,
            boss_damage: stats.damage,
            combo: 0,
        }
    }

    /// Damage of the answer just scored: 10/20/30 as the streak builds.
    pub fn attack_damage(&self) -> u32 {
        BASE_ATTACK * self.combo.clamp(1, MAX_COMBO)
    }

    fn either_side_down(&self) -> bool {
        self.boss_hp == 0 || self.player_hp == 0
    }
}

impl Reducible for BossBattle {
    type Action = BattleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            BattleAction::Answer { item_index, option } => {
                match new.runner.submit(item_index, &option) {
                    SubmitOutcome::Accepted { correct: true } => {
                        new.combo += 1;
                        new.boss_hp = new.boss_hp.saturating_sub(new.attack_damage());
                    }
                    SubmitOutcome::Accepted { correct: false } => {
                        new.combo = 0;
                        new.player_hp = new.player_hp.saturating_sub(new.boss_damage);
                    }
                    SubmitOutcome::Ignored => return self,
                }
            }
            BattleAction::Advance { generation } => {
                let before = new.runner.index();
                let finished = new.runner.advance(generation);
                let advanced = finished.is_some() || new.runner.index() != before;
                // HP knockouts end the battle once the feedback window for
                // the deciding answer has played out. A stale timer (no
                // actual advance) must not terminate anything.
                if advanced && finished.is_none() && new.either_side_down() {
                    new.runner.expire();
                }
            }
        }
        Rc::new(new)
    }
}
