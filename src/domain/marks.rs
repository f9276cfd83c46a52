//! Grade and pass derivation for a five-subject marksheet.

use serde::Deserialize;
use std::fmt;

/// Minimum score in every subject for the record to pass.
pub const PASS_MARK: u32 = 35;

/// Grade thresholds on the total, highest first. First match wins.
const GRADE_STEPS: [(i64, Grade); 4] = [
    (450, Grade::APlus),
    (400, Grade::A),
    (350, Grade::B),
    (300, Grade::C),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    APlus,
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn for_total(total: i64) -> Self {
        GRADE_STEPS
            .iter()
            .find(|(threshold, _)| total >= *threshold)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::D)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw marks form. Every field is optional free text.
#[derive(Debug, Default, Deserialize)]
pub struct MarksForm {
    pub tamil: Option<String>,
    pub english: Option<String>,
    pub maths: Option<String>,
    pub science: Option<String>,
    pub social_science: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubjectScores {
    pub tamil: u32,
    pub english: u32,
    pub maths: u32,
    pub science: u32,
    pub social_science: u32,
}

impl SubjectScores {
    pub fn from_form(form: &MarksForm) -> Self {
        let score = |v: &Option<String>| v.as_deref().map(coerce_score).unwrap_or(0);
        Self {
            tamil: score(&form.tamil),
            english: score(&form.english),
            maths: score(&form.maths),
            science: score(&form.science),
            social_science: score(&form.social_science),
        }
    }

    pub fn as_array(&self) -> [u32; 5] {
        [
            self.tamil,
            self.english,
            self.maths,
            self.science,
            self.social_science,
        ]
    }
}

/// A derived marks record ready to persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marksheet {
    pub scores: SubjectScores,
    pub total: i64,
    pub grade: Grade,
    pub pass: bool,
}

impl Marksheet {
    pub fn derive(scores: SubjectScores) -> Self {
        let subjects = scores.as_array();
        let total = subjects.iter().map(|s| i64::from(*s)).sum();
        let pass = subjects.iter().all(|s| *s >= PASS_MARK);
        Self {
            scores,
            total,
            grade: Grade::for_total(total),
            pass,
        }
    }
}

/// Reads a score the way a lenient form field is read: optional sign, then
/// leading digits; anything else is dropped. Negative or unreadable input is 0.
pub fn coerce_score(raw: &str) -> u32 {
    let s = raw.trim();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: u32 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add(u32::from(b - b'0'));
    }

    if !seen || negative { 0 } else { value }
}
