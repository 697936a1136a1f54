use serde::Serialize;

/// Outcome for one question of a submitted quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub question_id: usize,
    pub is_correct: bool,
    /// `None` when the question was left unanswered.
    pub user_value: Option<String>,
    pub correct_value: String,
}

/// Band used to colour a final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    Excellent,
    Good,
    Pass,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub verdicts: Vec<Verdict>,
    pub correct_count: usize,
    pub total_count: usize,
}

impl ScoreReport {
    pub fn new(verdicts: Vec<Verdict>) -> Self {
        let correct_count = verdicts.iter().filter(|v| v.is_correct).count();
        let total_count = verdicts.len();
        Self {
            verdicts,
            correct_count,
            total_count,
        }
    }

    pub fn percentage(&self) -> f64 {
        if self.total_count > 0 {
            (self.correct_count as f64 / self.total_count as f64) * 100.0
        } else {
            0.0
        }
    }

    pub fn grade(&self) -> Grade {
        match self.percentage() as u32 {
            90..=100 => Grade::Excellent,
            70..=89 => Grade::Good,
            50..=69 => Grade::Pass,
            _ => Grade::Fail,
        }
    }

    pub fn unanswered_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.user_value.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(id: usize, answer: Option<&str>, correct: &str) -> Verdict {
        Verdict {
            question_id: id,
            is_correct: answer == Some(correct),
            user_value: answer.map(str::to_string),
            correct_value: correct.to_string(),
        }
    }

    #[test]
    fn aggregates_count_correct_verdicts() {
        let report = ScoreReport::new(vec![
            verdict(3, Some("a"), "a"),
            verdict(1, None, "b"),
            verdict(4, Some("x"), "c"),
            verdict(0, Some("d"), "d"),
        ]);

        assert_eq!(report.correct_count, 2);
        assert_eq!(report.total_count, 4);
        assert_eq!(report.unanswered_count(), 1);
        assert!((report.percentage() - 50.0).abs() < f64::EPSILON);
        assert_eq!(report.grade(), Grade::Pass);
    }

    #[test]
    fn grade_bands() {
        let all_right = ScoreReport::new(vec![verdict(0, Some("a"), "a")]);
        assert_eq!(all_right.grade(), Grade::Excellent);

        let mostly = ScoreReport::new(
            (0..10)
                .map(|i| verdict(i, Some(if i < 8 { "a" } else { "z" }), "a"))
                .collect(),
        );
        assert_eq!(mostly.grade(), Grade::Good);

        let none = ScoreReport::new(vec![verdict(0, None, "a")]);
        assert_eq!(none.grade(), Grade::Fail);
    }

    #[test]
    fn empty_report_is_zero_percent() {
        let report = ScoreReport::new(Vec::new());
        assert_eq!(report.percentage(), 0.0);
        assert_eq!(report.grade(), Grade::Fail);
    }
}
