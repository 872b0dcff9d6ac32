// Game catalog
//
// Static reference data: twelve mini-games, three per skill category.
// Nothing in the application ever writes to it.

use std::sync::OnceLock;

use crate::types::{Difficulty, Game, GameCategory, MinMax};

struct Entry {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: GameCategory,
    ages: (u32, u32),
    minutes: u32,
    difficulty: Difficulty,
    icon: &'static str,
}

const ENTRIES: [Entry; 12] = [
    Entry {
        id: "speech-1",
        title: "Sound Alphabet",
        description: "Practice saying sounds and syllables",
        category: GameCategory::Speech,
        ages: (3, 7),
        minutes: 3,
        difficulty: Difficulty::Beginner,
        icon: "🔤",
    },
    Entry {
        id: "speech-2",
        title: "Name the Picture",
        description: "Name the objects shown in pictures",
        category: GameCategory::Speech,
        ages: (3, 8),
        minutes: 4,
        difficulty: Difficulty::Beginner,
        icon: "🖼️",
    },
    Entry {
        id: "speech-3",
        title: "Tell a Story",
        description: "Put together short stories",
        category: GameCategory::Speech,
        ages: (5, 10),
        minutes: 5,
        difficulty: Difficulty::Intermediate,
        icon: "📖",
    },
    Entry {
        id: "attention-1",
        title: "Find the Pair",
        description: "Look for matching pictures",
        category: GameCategory::Attention,
        ages: (3, 8),
        minutes: 3,
        difficulty: Difficulty::Beginner,
        icon: "🎴",
    },
    Entry {
        id: "attention-2",
        title: "What Changed?",
        description: "Spot what changed in the picture",
        category: GameCategory::Attention,
        ages: (4, 9),
        minutes: 4,
        difficulty: Difficulty::Intermediate,
        icon: "🔍",
    },
    Entry {
        id: "attention-3",
        title: "Follow the Ball",
        description: "Track a moving object with your eyes",
        category: GameCategory::Attention,
        ages: (3, 7),
        minutes: 2,
        difficulty: Difficulty::Beginner,
        icon: "⚽",
    },
    Entry {
        id: "logic-1",
        title: "Build the Puzzle",
        description: "Assemble simple puzzles",
        category: GameCategory::Logic,
        ages: (3, 8),
        minutes: 4,
        difficulty: Difficulty::Beginner,
        icon: "🧩",
    },
    Entry {
        id: "logic-2",
        title: "Continue the Pattern",
        description: "Find the rule behind a sequence",
        category: GameCategory::Logic,
        ages: (4, 10),
        minutes: 3,
        difficulty: Difficulty::Intermediate,
        icon: "🔢",
    },
    Entry {
        id: "logic-3",
        title: "Odd One Out",
        description: "Find the item that does not belong",
        category: GameCategory::Logic,
        ages: (4, 9),
        minutes: 3,
        difficulty: Difficulty::Beginner,
        icon: "🎯",
    },
    Entry {
        id: "emotion-1",
        title: "Guess the Feeling",
        description: "Recognize emotions on faces",
        category: GameCategory::Emotion,
        ages: (3, 10),
        minutes: 3,
        difficulty: Difficulty::Beginner,
        icon: "😊",
    },
    Entry {
        id: "emotion-2",
        title: "How Do They Feel?",
        description: "Understand how characters feel in a situation",
        category: GameCategory::Emotion,
        ages: (4, 10),
        minutes: 4,
        difficulty: Difficulty::Intermediate,
        icon: "💭",
    },
    Entry {
        id: "emotion-3",
        title: "Friendship",
        description: "Learn to make friends and help others",
        category: GameCategory::Emotion,
        ages: (4, 9),
        minutes: 5,
        difficulty: Difficulty::Intermediate,
        icon: "🤝",
    },
];

/// The full catalog in its canonical order.
pub fn games() -> &'static [Game] {
    static CATALOG: OnceLock<Vec<Game>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        ENTRIES
            .iter()
            .map(|e| Game {
                id: e.id.to_string(),
                title: e.title.to_string(),
                description: e.description.to_string(),
                category: e.category,
                age_range: MinMax::new(e.ages.0, e.ages.1),
                duration_minutes: e.minutes,
                difficulty: e.difficulty,
                icon: e.icon.to_string(),
            })
            .collect()
    })
}

pub fn find_game(id: &str) -> Option<&'static Game> {
    games().iter().find(|g| g.id == id)
}

pub fn category_of(id: &str) -> Option<GameCategory> {
    find_game(id).map(|g| g.category)
}
