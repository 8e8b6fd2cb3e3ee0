//! Static content: level tables and item banks per subject track, plus the
//! per-kind correctness predicates the session runner is configured with.
//! Loaded once, never mutated.

use crate::model::{BossStats, FillItem, LevelDescriptor, LevelKind, MatchItem, QuizItem, Subject};

/// Session-wide countdown for the flash kind.
pub const FLASH_SECONDS: u32 = 45;

// ---------------- Correctness predicates -----------------

pub fn check_quiz(item: &QuizItem, response: &usize) -> bool {
    *response == item.correct
}

pub fn check_match(item: &MatchItem, response: &&'static str) -> bool {
    *response == item.right
}

pub fn check_fill(item: &FillItem, response: &String) -> bool {
    let given = response.trim();
    item.accepted.iter().any(|a| a.eq_ignore_ascii_case(given))
}

// ---------------- Lookup helpers -----------------

pub fn track(subject: Subject) -> &'static [LevelDescriptor] {
    match subject {
        Subject::Math => MATH_TRACK,
        Subject::Biology => BIOLOGY_TRACK,
        Subject::Coding => CODING_TRACK,
    }
}

pub fn level(subject: Subject, id: u32) -> Option<&'static LevelDescriptor> {
    track(subject).iter().find(|l| l.id == id)
}

/// The ordered items one session draws: the front of the bank, capped by the
/// level's `required_items`.
pub fn session_items<I: Copy>(bank: &'static [I], level: &LevelDescriptor) -> Vec<I> {
    let n = level.required_items.unwrap_or(bank.len()).min(bank.len());
    bank[..n].to_vec()
}

pub fn quiz_bank(subject: Subject) -> &'static [QuizItem] {
    match subject {
        Subject::Math => MATH_QUIZ,
        Subject::Biology => BIOLOGY_QUIZ,
        Subject::Coding => CODING_QUIZ,
    }
}

pub fn flash_bank(subject: Subject) -> &'static [QuizItem] {
    match subject {
        Subject::Math => MATH_FLASH,
        Subject::Biology => BIOLOGY_FLASH,
        Subject::Coding => CODING_FLASH,
    }
}

pub fn match_bank(subject: Subject) -> &'static [MatchItem] {
    match subject {
        Subject::Math => MATH_MATCH,
        Subject::Biology => BIOLOGY_MATCH,
        Subject::Coding => CODING_MATCH,
    }
}

pub fn fill_bank(subject: Subject) -> &'static [FillItem] {
    match subject {
        Subject::Math => MATH_FILL,
        Subject::Biology => BIOLOGY_FILL,
        Subject::Coding => CODING_FILL,
    }
}

pub fn boss_bank(subject: Subject) -> &'static [QuizItem] {
    match subject {
        Subject::Math => MATH_BOSS,
        Subject::Biology => BIOLOGY_BOSS,
        Subject::Coding => CODING_BOSS,
    }
}

// ---------------- Level tables -----------------

pub const MATH_TRACK: &[LevelDescriptor] = &[
    LevelDescriptor { id: 1, name: "Number Gates", kind: LevelKind::Quiz, required_items: Some(5), boss: None },
    LevelDescriptor { id: 2, name: "Symbol Pairs", kind: LevelKind::Matching, required_items: Some(5), boss: None },
    LevelDescriptor { id: 3, name: "Lightning Round", kind: LevelKind::FlashQuiz, required_items: Some(8), boss: None },
    LevelDescriptor { id: 4, name: "Missing Numbers", kind: LevelKind::FillBlank, required_items: Some(4), boss: None },
    LevelDescriptor { id: 5, name: "Arithmetic Golem", kind: LevelKind::Boss, required_items: Some(6), boss: Some(BossStats { health: 60, damage: 10 }) },
];

pub const BIOLOGY_TRACK: &[LevelDescriptor] = &[
    LevelDescriptor { id: 1, name: "Cell Gates", kind: LevelKind::Quiz, required_items: Some(5), boss: None },
    LevelDescriptor { id: 2, name: "Organ Pairs", kind: LevelKind::Matching, required_items: Some(5), boss: None },
    LevelDescriptor { id: 3, name: "Pulse Round", kind: LevelKind::FlashQuiz, required_items: Some(8), boss: None },
    LevelDescriptor { id: 4, name: "Name the Part", kind: LevelKind::FillBlank, required_items: Some(4), boss: None },
    LevelDescriptor { id: 5, name: "Swamp Hydra", kind: LevelKind::Boss, required_items: Some(6), boss: Some(BossStats { health: 60, damage: 10 }) },
];

pub const CODING_TRACK: &[LevelDescriptor] = &[
    LevelDescriptor { id: 1, name: "Syntax Gates", kind: LevelKind::Quiz, required_items: Some(5), boss: None },
    LevelDescriptor { id: 2, name: "Term Pairs", kind: LevelKind::Matching, required_items: Some(5), boss: None },
    LevelDescriptor { id: 3, name: "Compile Sprint", kind: LevelKind::FlashQuiz, required_items: Some(8), boss: None },
    LevelDescriptor { id: 4, name: "Fill the Blank", kind: LevelKind::FillBlank, required_items: Some(4), boss: None },
    LevelDescriptor { id: 5, name: "Null Pointer Wraith", kind: LevelKind::Boss, required_items: Some(6), boss: Some(BossStats { health: 60, damage: 10 }) },
];

// ---------------- Math banks -----------------

const MATH_QUIZ: &[QuizItem] = &[
    QuizItem { id: 1, prompt: "7 × 8 = ?", options: &["54", "56", "64"], correct: 1, explanation: Some("7 × 8 = 56.") },
    QuizItem { id: 2, prompt: "What is 1/2 + 1/4?", options: &["2/6", "3/4", "1/6"], correct: 1, explanation: Some("Bring to quarters: 2/4 + 1/4 = 3/4.") },
    QuizItem { id: 3, prompt: "Which number is prime?", options: &["21", "27", "31", "33"], correct: 2, explanation: Some("31 has no divisors besides 1 and itself.") },
    QuizItem { id: 4, prompt: "12 squared is", options: &["124", "144", "154"], correct: 1, explanation: None },
    QuizItem { id: 5, prompt: "What is 15% of 200?", options: &["15", "30", "45"], correct: 1, explanation: Some("10% is 20, 5% is 10, together 30.") },
    QuizItem { id: 6, prompt: "The angles of a triangle sum to", options: &["90°", "180°", "360°"], correct: 1, explanation: None },
];

const MATH_MATCH: &[MatchItem] = &[
    MatchItem { id: 1, left: "2³", right: "8", decoys: &["6", "9"] },
    MatchItem { id: 2, left: "√81", right: "9", decoys: &["8", "18"] },
    MatchItem { id: 3, left: "0.75 as a fraction", right: "3/4", decoys: &["4/3", "7/5"] },
    MatchItem { id: 4, left: "one dozen", right: "12", decoys: &["10", "20"] },
    MatchItem { id: 5, left: "5! (factorial)", right: "120", decoys: &["25", "60"] },
    MatchItem { id: 6, left: "half of 90", right: "45", decoys: &["40", "55"] },
];

const MATH_FLASH: &[QuizItem] = &[
    QuizItem { id: 1, prompt: "9 + 6 = ?", options: &["14", "15", "16"], correct: 1, explanation: None },
    QuizItem { id: 2, prompt: "8 × 4 = ?", options: &["28", "32", "36"], correct: 1, explanation: None },
    QuizItem { id: 3, prompt: "40 − 17 = ?", options: &["23", "27", "33"], correct: 0, explanation: None },
    QuizItem { id: 4, prompt: "56 ÷ 7 = ?", options: &["6", "7", "8"], correct: 2, explanation: None },
    QuizItem { id: 5, prompt: "3 × 13 = ?", options: &["36", "39", "43"], correct: 1, explanation: None },
    QuizItem { id: 6, prompt: "25 + 48 = ?", options: &["63", "73", "83"], correct: 1, explanation: None },
    QuizItem { id: 7, prompt: "100 − 64 = ?", options: &["36", "44", "46"], correct: 0, explanation: None },
    QuizItem { id: 8, prompt: "6 × 6 × 2 = ?", options: &["64", "72", "96"], correct: 1, explanation: None },
];

const MATH_FILL: &[FillItem] = &[
    FillItem { id: 1, prompt: "3 × ___ = 27", accepted: &["9"], explanation: Some("27 divided by 3.") },
    FillItem { id: 2, prompt: "The number after 99 is ___", accepted: &["100", "one hundred"], explanation: None },
    FillItem { id: 3, prompt: "10 − ___ = 4", accepted: &["6", "six"], explanation: None },
    FillItem { id: 4, prompt: "A quarter of 100 is ___", accepted: &["25", "twenty-five", "twenty five"], explanation: Some("100 ÷ 4 = 25.") },
    FillItem { id: 5, prompt: "___ × ___ = 49 (same number twice)", accepted: &["7", "seven"], explanation: None },
];

const MATH_BOSS: &[QuizItem] = &[
    QuizItem { id: 1, prompt: "The Golem asks: 14 × 3 = ?", options: &["42", "44", "52"], correct: 0, explanation: None },
    QuizItem { id: 2, prompt: "Which is larger: 2/3 or 3/5?", options: &["2/3", "3/5", "equal"], correct: 0, explanation: Some("2/3 ≈ 0.67, 3/5 = 0.6.") },
    QuizItem { id: 3, prompt: "What is 7² − 7?", options: &["42", "49", "56"], correct: 0, explanation: None },
    QuizItem { id: 4, prompt: "120 ÷ 8 = ?", options: &["12", "15", "18"], correct: 1, explanation: None },
    QuizItem { id: 5, prompt: "The next prime after 13 is", options: &["15", "17", "19"], correct: 1, explanation: None },
    QuizItem { id: 6, prompt: "0.2 × 0.5 = ?", options: &["0.1", "0.7", "1.0"], correct: 0, explanation: Some("Two tenths of a half is one tenth.") },
];

// ---------------- Biology banks -----------------

const BIOLOGY_QUIZ: &[QuizItem] = &[
    QuizItem { id: 1, prompt: "Which organelle makes energy for the cell?", options: &["nucleus", "mitochondrion", "ribosome"], correct: 1, explanation: Some("Mitochondria run cellular respiration.") },
    QuizItem { id: 2, prompt: "Plants make food by", options: &["photosynthesis", "digestion", "fermentation"], correct: 0, explanation: None },
    QuizItem { id: 3, prompt: "Which of these is NOT a mammal?", options: &["dolphin", "bat", "penguin", "whale"], correct: 2, explanation: Some("Penguins are birds; the others nurse their young.") },
    QuizItem { id: 4, prompt: "Red blood cells carry", options: &["oxygen", "chlorophyll", "venom"], correct: 0, explanation: None },
    QuizItem { id: 5, prompt: "DNA is shaped like a", options: &["ladder", "double helix", "ring"], correct: 1, explanation: None },
    QuizItem { id: 6, prompt: "Frogs begin life as", options: &["tadpoles", "larvae", "pupae"], correct: 0, explanation: None },
];

const BIOLOGY_MATCH: &[MatchItem] = &[
    MatchItem { id: 1, left: "heart", right: "pumps blood", decoys: &["filters waste", "stores bile"] },
    MatchItem { id: 2, left: "lungs", right: "exchange gases", decoys: &["digest food", "make hormones"] },
    MatchItem { id: 3, left: "chloroplast", right: "captures sunlight", decoys: &["stores fat", "copies DNA"] },
    MatchItem { id: 4, left: "kidney", right: "filters blood", decoys: &["pumps blood", "senses light"] },
    MatchItem { id: 5, left: "neuron", right: "carries signals", decoys: &["carries oxygen", "builds bone"] },
    MatchItem { id: 6, left: "stomach", right: "breaks down food", decoys: &["exchanges gases", "pumps blood"] },
];

const BIOLOGY_FLASH: &[QuizItem] = &[
    QuizItem { id: 1, prompt: "Humans breathe in", options: &["oxygen", "helium", "methane"], correct: 0, explanation: None },
    QuizItem { id: 2, prompt: "A spider has how many legs?", options: &["6", "8", "10"], correct: 1, explanation: None },
    QuizItem { id: 3, prompt: "Fish breathe with", options: &["lungs", "gills", "skin"], correct: 1, explanation: None },
    QuizItem { id: 4, prompt: "The largest organ is the", options: &["liver", "skin", "brain"], correct: 1, explanation: None },
    QuizItem { id: 5, prompt: "Bees collect", options: &["nectar", "sap", "dew"], correct: 0, explanation: None },
    QuizItem { id: 6, prompt: "Bones meet at a", options: &["joint", "gland", "valve"], correct: 0, explanation: None },
    QuizItem { id: 7, prompt: "Caterpillars become", options: &["beetles", "butterflies", "wasps"], correct: 1, explanation: None },
    QuizItem { id: 8, prompt: "Plants take water up through", options: &["leaves", "roots", "flowers"], correct: 1, explanation: None },
];

const BIOLOGY_FILL: &[FillItem] = &[
    FillItem { id: 1, prompt: "The green pigment in leaves is ___", accepted: &["chlorophyll"], explanation: Some("Chlorophyll absorbs red and blue light.") },
    FillItem { id: 2, prompt: "The control center of a cell is the ___", accepted: &["nucleus"], explanation: None },
    FillItem { id: 3, prompt: "Animals that eat only plants are ___", accepted: &["herbivores", "herbivore"], explanation: None },
    FillItem { id: 4, prompt: "Water changes to vapor in a process called ___", accepted: &["evaporation"], explanation: None },
    FillItem { id: 5, prompt: "The muscle that pumps blood is the ___", accepted: &["heart"], explanation: None },
];

const BIOLOGY_BOSS: &[QuizItem] = &[
    QuizItem { id: 1, prompt: "The Hydra hisses: which kingdom do mushrooms belong to?", options: &["plants", "fungi", "bacteria"], correct: 1, explanation: Some("Fungi digest food outside their cells.") },
    QuizItem { id: 2, prompt: "Which blood cells fight infection?", options: &["red", "white", "platelets"], correct: 1, explanation: None },
    QuizItem { id: 3, prompt: "Photosynthesis releases which gas?", options: &["carbon dioxide", "oxygen", "nitrogen"], correct: 1, explanation: None },
    QuizItem { id: 4, prompt: "An animal with a backbone is a", options: &["vertebrate", "invertebrate", "arthropod"], correct: 0, explanation: None },
    QuizItem { id: 5, prompt: "Which organ balances and coordinates movement?", options: &["cerebellum", "stomach", "spleen"], correct: 0, explanation: None },
    QuizItem { id: 6, prompt: "Tadpoles breathe with", options: &["lungs", "gills", "fins"], correct: 1, explanation: None },
];

// ---------------- Coding banks -----------------

const CODING_QUIZ: &[QuizItem] = &[
    QuizItem { id: 1, prompt: "Which loop runs at least once?", options: &["for", "while", "do-while"], correct: 2, explanation: Some("do-while checks its condition after the body.") },
    QuizItem { id: 2, prompt: "A variable that never changes is a", options: &["constant", "pointer", "loop"], correct: 0, explanation: None },
    QuizItem { id: 3, prompt: "What does `2 + 3 * 4` evaluate to?", options: &["20", "14", "24"], correct: 1, explanation: Some("Multiplication binds tighter than addition.") },
    QuizItem { id: 4, prompt: "Which structure is LIFO?", options: &["queue", "stack", "list"], correct: 1, explanation: None },
    QuizItem { id: 5, prompt: "A function calling itself is", options: &["iteration", "recursion", "mutation"], correct: 1, explanation: None },
    QuizItem { id: 6, prompt: "Binary 101 is decimal", options: &["3", "5", "7"], correct: 1, explanation: None },
];

const CODING_MATCH: &[MatchItem] = &[
    MatchItem { id: 1, left: "bug", right: "a mistake in code", decoys: &["a loop counter", "a saved file"] },
    MatchItem { id: 2, left: "array", right: "an ordered collection", decoys: &["a single value", "a comment"] },
    MatchItem { id: 3, left: "boolean", right: "true or false", decoys: &["text", "a number"] },
    MatchItem { id: 4, left: "compiler", right: "translates source code", decoys: &["draws windows", "stores passwords"] },
    MatchItem { id: 5, left: "string", right: "a piece of text", decoys: &["a whole number", "an error"] },
    MatchItem { id: 6, left: "infinite loop", right: "never stops running", decoys: &["runs once", "never starts"] },
];

const CODING_FLASH: &[QuizItem] = &[
    QuizItem { id: 1, prompt: "10 % 3 = ?", options: &["0", "1", "3"], correct: 1, explanation: None },
    QuizItem { id: 2, prompt: "`!true` is", options: &["true", "false"], correct: 1, explanation: None },
    QuizItem { id: 3, prompt: "Index of the first array element?", options: &["0", "1", "-1"], correct: 0, explanation: None },
    QuizItem { id: 4, prompt: "`\"a\" + \"b\"` gives", options: &["ab", "ba", "error"], correct: 0, explanation: None },
    QuizItem { id: 5, prompt: "Binary 10 is decimal", options: &["2", "10", "4"], correct: 0, explanation: None },
    QuizItem { id: 6, prompt: "`7 > 7` is", options: &["true", "false"], correct: 1, explanation: None },
    QuizItem { id: 7, prompt: "How many bits in a byte?", options: &["4", "8", "16"], correct: 1, explanation: None },
    QuizItem { id: 8, prompt: "`min(3, max(1, 2))` = ?", options: &["1", "2", "3"], correct: 1, explanation: None },
];

const CODING_FILL: &[FillItem] = &[
    FillItem { id: 1, prompt: "A repeating block of code is a ___", accepted: &["loop"], explanation: None },
    FillItem { id: 2, prompt: "Finding and fixing bugs is called ___", accepted: &["debugging"], explanation: None },
    FillItem { id: 3, prompt: "`if` runs its block when the condition is ___", accepted: &["true"], explanation: None },
    FillItem { id: 4, prompt: "Text meant for humans, ignored by the compiler, is a ___", accepted: &["comment"], explanation: None },
    FillItem { id: 5, prompt: "A named piece of reusable code is a ___", accepted: &["function", "method"], explanation: Some("Either name counts, depending on the language.") },
];

const CODING_BOSS: &[QuizItem] = &[
    QuizItem { id: 1, prompt: "The Wraith whispers: what is the value of an unassigned reference?", options: &["zero", "null", "infinity"], correct: 1, explanation: None },
    QuizItem { id: 2, prompt: "Which sort is O(n log n) on average?", options: &["bubble sort", "quicksort", "selection sort"], correct: 1, explanation: None },
    QuizItem { id: 3, prompt: "A stack overflow usually comes from", options: &["deep recursion", "slow networks", "big files"], correct: 0, explanation: Some("Each unreturned call eats stack space.") },
    QuizItem { id: 4, prompt: "`for i in 0..3` runs how many times?", options: &["2", "3", "4"], correct: 1, explanation: None },
    QuizItem { id: 5, prompt: "Which is NOT a programming language?", options: &["Rust", "Python", "HTML"], correct: 2, explanation: Some("HTML is a markup language.") },
    QuizItem { id: 6, prompt: "Hexadecimal FF is decimal", options: &["155", "255", "256"], correct: 1, explanation: None },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn all_mc_banks(subject: Subject) -> Vec<&'static [QuizItem]> {
        vec![quiz_bank(subject), flash_bank(subject), boss_bank(subject)]
    }

    #[test]
    fn track_ids_are_dense_and_boss_terminated() {
        for subject in Subject::ALL {
            let track = track(subject);
            for (i, level) in track.iter().enumerate() {
                assert_eq!(level.id, i as u32 + 1, "{subject:?} ids must be dense");
            }
            let last = track.last().unwrap();
            assert_eq!(last.kind, LevelKind::Boss);
            assert!(last.boss.is_some(), "{subject:?} boss needs stats");
            assert!(track.iter().take(track.len() - 1).all(|l| l.boss.is_none()));
        }
    }

    #[test]
    fn multiple_choice_items_are_well_formed() {
        for subject in Subject::ALL {
            for bank in all_mc_banks(subject) {
                for item in bank {
                    assert!(
                        (2..=4).contains(&item.options.len()),
                        "{subject:?} item {} option count",
                        item.id
                    );
                    assert!(
                        item.correct < item.options.len(),
                        "{subject:?} item {} correct index out of range",
                        item.id
                    );
                }
            }
        }
    }

    #[test]
    fn banks_cover_their_levels() {
        for subject in Subject::ALL {
            for level in track(subject) {
                let available = match level.kind {
                    LevelKind::Quiz => quiz_bank(subject).len(),
                    LevelKind::FlashQuiz => flash_bank(subject).len(),
                    LevelKind::Matching => match_bank(subject).len(),
                    LevelKind::FillBlank => fill_bank(subject).len(),
                    LevelKind::Boss => boss_bank(subject).len(),
                };
                let required = level.required_items.unwrap_or(0);
                assert!(
                    available >= required,
                    "{subject:?} level {} needs {} items, bank has {}",
                    level.id,
                    required,
                    available
                );
            }
        }
    }

    #[test]
    fn match_items_keep_the_pair_out_of_the_decoys() {
        for subject in Subject::ALL {
            for item in match_bank(subject) {
                assert!(!item.decoys.is_empty());
                assert!(!item.decoys.contains(&item.right));
                // Every choice list contains the right answer exactly once.
                let choices = item.choices();
                assert_eq!(choices.iter().filter(|c| **c == item.right).count(), 1);
                assert_eq!(choices.len(), item.decoys.len() + 1);
            }
        }
    }

    #[test]
    fn fill_items_accept_something() {
        for subject in Subject::ALL {
            for item in fill_bank(subject) {
                assert!(!item.accepted.is_empty());
            }
        }
    }

    #[test]
    fn fill_check_is_case_insensitive_and_trimmed() {
        let item = &BIOLOGY_FILL[0];
        assert!(check_fill(item, &"  Chlorophyll ".to_string()));
        assert!(check_fill(item, &"CHLOROPHYLL".to_string()));
        assert!(!check_fill(item, &"chloroplast".to_string()));
    }

    #[test]
    fn session_items_cap_at_required_count() {
        let level = &MATH_TRACK[0];
        let items = session_items(quiz_bank(Subject::Math), level);
        assert_eq!(items.len(), level.required_items.unwrap());
    }
}
