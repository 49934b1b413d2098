use rand::Rng;

/// How a day felt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoodKind {
    Great,
    Good,
    Okay,
    Bad,
    Awful,
}

impl MoodKind {
    /// Picker order, best to worst
    pub const ALL: [MoodKind; 5] = [
        MoodKind::Great,
        MoodKind::Good,
        MoodKind::Okay,
        MoodKind::Bad,
        MoodKind::Awful,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MoodKind::Great => "Great",
            MoodKind::Good => "Good",
            MoodKind::Okay => "Okay",
            MoodKind::Bad => "Bad",
            MoodKind::Awful => "Awful",
        }
    }

    /// Lowercase identifier used in config keys
    pub fn key(self) -> &'static str {
        match self {
            MoodKind::Great => "great",
            MoodKind::Good => "good",
            MoodKind::Okay => "okay",
            MoodKind::Bad => "bad",
            MoodKind::Awful => "awful",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MoodKind::Great => "\u{1F604}", // 😄
            MoodKind::Good => "\u{1F642}",  // 🙂
            MoodKind::Okay => "\u{1F610}",  // 😐
            MoodKind::Bad => "\u{1F641}",   // 🙁
            MoodKind::Awful => "\u{1F62B}", // 😫
        }
    }

    /// Default fill color as "#RRGGBB"
    pub fn default_color(self) -> &'static str {
        match self {
            MoodKind::Great => "#44FF88",
            MoodKind::Good => "#44DDFF",
            MoodKind::Okay => "#FFD700",
            MoodKind::Bad => "#FF8844",
            MoodKind::Awful => "#FF4444",
        }
    }

    /// Placeholder prompts shown in the empty note field
    pub fn prompts(self) -> &'static [&'static str] {
        match self {
            MoodKind::Great => &[
                "What made today so good?",
                "Who made you smile today?",
                "What do you want to remember about today?",
            ],
            MoodKind::Good => &[
                "What went well today?",
                "What are you grateful for?",
                "What was the best part of your day?",
            ],
            MoodKind::Okay => &[
                "What's on your mind?",
                "Anything you'd change about today?",
                "How did you spend your time?",
            ],
            MoodKind::Bad => &[
                "What got in the way today?",
                "What would have helped?",
                "Want to get it off your chest?",
            ],
            MoodKind::Awful => &[
                "What happened?",
                "Be gentle with yourself. What do you need?",
                "Tomorrow is a new day. What's one small thing to look forward to?",
            ],
        }
    }

    /// Uniformly pick one of this mood's prompts
    pub fn random_prompt(self, rng: &mut impl Rng) -> &'static str {
        let prompts = self.prompts();
        prompts[rng.random_range(0..prompts.len())]
    }

    /// Digit shortcut in the picker: '1' = Great .. '5' = Awful
    pub fn from_shortcut(c: char) -> Option<MoodKind> {
        let idx = c.to_digit(10)?.checked_sub(1)? as usize;
        MoodKind::ALL.get(idx).copied()
    }

    /// Position in [`MoodKind::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}
