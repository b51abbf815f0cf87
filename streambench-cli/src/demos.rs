//! Collection Demonstrations
//!
//! Iterator adapters next to their hand-written loop equivalents. Each
//! demonstration is a plain function returning its result; [`render_demos`]
//! turns them into the console walkthrough.

use std::fmt::Write;
use streambench_core::{Variant, for_loop_pipeline};

/// Input for the even/dedup/double/sort demonstration
pub const NUMBERS: [i32; 14] = [6, 7, 1, 2, 3, 3, 3, 8, 9, 1, 4, 5, 10, 10];

/// Input for the predicate matching demonstration
pub const MATCHING_NUMBERS: [i32; 5] = [1, 2, 3, 4, 5];

/// Names greeted by the side-effecting iteration demonstration
pub const GREETED: [&str; 4] = ["Alice", "Bob", "Charlie", "David"];

/// A named person with an age
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    /// Create a person
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Person's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Person's age in years
    pub fn age(&self) -> u32 {
        self.age
    }
}

/// People used by the field extraction demonstration
pub fn people() -> Vec<Person> {
    vec![
        Person::new("Alice", 25),
        Person::new("Bob", 30),
        Person::new("Charlie", 35),
    ]
}

/// Nested lists flattened by the flattening demonstration
pub fn grade_lists() -> Vec<Vec<i32>> {
    vec![vec![3, 2, 3], vec![4, 5], vec![1, 1, 4]]
}

/// Even values, deduplicated, doubled and sorted, via iterator adapters and
/// via the hand-written loop. Returns `(pipeline, loop)`.
pub fn even_doubled(numbers: &[i32]) -> (Vec<i64>, Vec<i64>) {
    (Variant::Optimized.run(numbers), for_loop_pipeline(numbers))
}

/// Sum through a fold
pub fn sum_via_fold(values: &[i64]) -> i64 {
    values.iter().fold(0, |acc, v| acc + v)
}

/// Sum through an explicit loop
pub fn sum_via_loop(values: &[i64]) -> i64 {
    let mut sum = 0;
    for v in values {
        sum += v;
    }
    sum
}

/// Extract each person's name
pub fn person_names(people: &[Person]) -> Vec<&str> {
    people.iter().map(Person::name).collect()
}

/// Flatten nested lists and sort the result
pub fn flatten_sorted(lists: &[Vec<i32>]) -> Vec<i32> {
    let mut flat: Vec<i32> = lists.iter().flatten().copied().collect();
    flat.sort_unstable();
    flat
}

/// Greeting lines produced by iterating for side effects
pub fn greetings(names: &[&str]) -> Vec<String> {
    let mut lines = Vec::with_capacity(names.len());
    names
        .iter()
        .for_each(|name| lines.push(format!("Hello, {}!", name)));
    lines
}

/// Results of the predicate matching demonstration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchChecks {
    /// Some value is greater than 4
    pub any_greater_than_four: bool,
    /// Every value is even
    pub all_even: bool,
    /// No value is non-negative
    pub none_non_negative: bool,
}

/// `any`, `all` and "none" (`!any`) predicates over `numbers`
pub fn match_checks(numbers: &[i32]) -> MatchChecks {
    MatchChecks {
        any_greater_than_four: numbers.iter().any(|&n| n > 4),
        all_even: numbers.iter().all(|&n| n % 2 == 0),
        none_non_negative: !numbers.iter().any(|&n| n >= 0),
    }
}

fn banner(out: &mut String, example: usize) {
    let rule = "-".repeat(28);
    let _ = writeln!(out, "\n{rule} Example {example} {rule}");
}

fn bracketed<T: std::fmt::Display>(items: &[T]) -> String {
    let inner: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", inner.join(", "))
}

/// Render demonstrations 1 through 6 and the banner that introduces the
/// benchmark (example 7).
pub fn render_demos() -> String {
    let mut out = String::new();

    banner(&mut out, 1);
    let (pipeline, looped) = even_doubled(&NUMBERS);
    let _ = writeln!(out, "unoptimized list: {}", bracketed(&NUMBERS));
    let _ = writeln!(out, "Modified list(Stream): {}", bracketed(&pipeline));
    let _ = writeln!(out, "Modified list(Loop): {}", bracketed(&looped));

    banner(&mut out, 2);
    let _ = writeln!(
        out,
        "Sum of modified numbers(Stream): {}",
        sum_via_fold(&pipeline)
    );
    let _ = writeln!(out, "Sum of modified numbers(Loop): {}", sum_via_loop(&looped));

    banner(&mut out, 3);
    let people = people();
    let _ = writeln!(out, "List of Names: {}", bracketed(&person_names(&people)));

    banner(&mut out, 4);
    let _ = writeln!(
        out,
        "Flattened List: {}",
        bracketed(&flatten_sorted(&grade_lists()))
    );

    banner(&mut out, 5);
    for line in greetings(&GREETED) {
        let _ = writeln!(out, "{line}");
    }

    banner(&mut out, 6);
    let checks = match_checks(&MATCHING_NUMBERS);
    let _ = writeln!(
        out,
        "Any number greater than 4? {}",
        checks.any_greater_than_four
    );
    let _ = writeln!(out, "Are all numbers even? {}", checks.all_even);
    let _ = writeln!(out, "Are all numbers negative? {}", checks.none_non_negative);

    banner(&mut out, 7);
    out
}
