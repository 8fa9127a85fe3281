//! Specialization by embedding: a student carries a whole person as a field.

use crate::clamp_str;
use std::fmt;

const NAME_LIMIT: usize = 31;
const STUDENT_NUMBER_LIMIT: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    first_name: String,
    last_name: String,
    birth_year: u32,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str, birth_year: u32) -> Self {
        Self {
            first_name: clamp_str(first_name, NAME_LIMIT),
            last_name: clamp_str(last_name, NAME_LIMIT),
            birth_year,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birth_year(&self) -> u32 {
        self.birth_year
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (born {})",
            self.first_name, self.last_name, self.birth_year
        )
    }
}

/// A person plus study records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub person: Person,
    student_number: String,
    passed_credits: u32,
}

impl Student {
    pub fn new(person: Person, student_number: &str) -> Self {
        Self {
            person,
            student_number: clamp_str(student_number, STUDENT_NUMBER_LIMIT),
            passed_credits: 0,
        }
    }

    pub fn student_number(&self) -> &str {
        &self.student_number
    }

    pub fn passed_credits(&self) -> u32 {
        self.passed_credits
    }

    pub fn pass_course(&mut self, credits: u32) {
        self.passed_credits = self.passed_credits.saturating_add(credits);
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} #{} with {} credits",
            self.person, self.student_number, self.passed_credits
        )
    }
}

/// Read access to the person part of a record, resolved at compile time.
pub trait PersonLike {
    fn person(&self) -> &Person;

    fn full_name(&self) -> String {
        let p = self.person();
        format!("{} {}", p.first_name(), p.last_name())
    }
}

impl PersonLike for Person {
    fn person(&self) -> &Person {
        self
    }
}

impl PersonLike for Student {
    fn person(&self) -> &Person {
        &self.person
    }
}

/// Greeting usable with both people and students.
pub fn greet<P: PersonLike>(who: &P) -> String {
    format!("Hello, {}!", who.full_name())
}
