/// Final tally of a finished quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOutcome {
    score: usize,
    total: usize,
}

impl QuizOutcome {
    /// `score` is clamped to `total`.
    #[must_use]
    pub fn new(score: usize, total: usize) -> Self {
        Self {
            score: score.min(total),
            total,
        }
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Percentage of correct answers, rounded half up. Zero when there were
    /// no questions.
    #[must_use]
    pub fn percentage(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        (self.score * 100 + self.total / 2) / self.total
    }

    /// Cheer shown on the results screen.
    #[must_use]
    pub fn headline(&self) -> &'static str {
        if self.total == 0 {
            return "Good Try!";
        }
        // Tiers use the exact ratio, not the rounded percentage.
        let scaled = self.score * 100;
        if self.score == self.total {
            "Wow! Perfect Score!"
        } else if scaled >= 75 * self.total {
            "Amazing Job!"
        } else if scaled >= 50 * self.total {
            "Great Effort!"
        } else {
            "Good Try!"
        }
    }
}
