use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Category, Location, QaIssue, Severity};
use crate::character::{record_key, CharacterRecord, Stroke};
use crate::data::CharacterEntry;
use crate::io::StrokeDataset;

/// Slack allowed on the unit range and on `t` endpoints.
pub const TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub checked: usize,
    pub issues: Vec<QaIssue>,
}

impl ValidationReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues.len() - self.error_count()
    }

    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    /// Flag every expected character that has no record.
    pub fn check_expected(&mut self, dataset: &StrokeDataset, expected: &[CharacterEntry]) {
        for entry in expected {
            if dataset.get(entry.codepoint).is_none() {
                self.issues.push(QaIssue {
                    severity: Severity::Error,
                    category: Category::Missing,
                    key: record_key(entry.codepoint),
                    message: format!("{} has no stroke data", entry.symbol),
                    location: None,
                });
            }
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation Summary")?;
        writeln!(f, "  Characters checked: {}", self.checked)?;
        writeln!(f, "  Errors:             {}", self.error_count())?;
        writeln!(f, "  Warnings:           {}", self.warning_count())?;
        for issue in &self.issues {
            writeln!(f, "  {issue}")?;
        }
        Ok(())
    }
}

pub fn validate(dataset: &StrokeDataset) -> ValidationReport {
    let mut report = ValidationReport::default();
    for (key, record) in dataset.entries() {
        report.checked += 1;
        check_record(key, record, &mut report.issues);
    }
    report
}

fn check_record(key: &str, record: &CharacterRecord, issues: &mut Vec<QaIssue>) {
    let mut push = |severity, category, message: String, location| {
        issues.push(QaIssue {
            severity,
            category,
            key: key.to_string(),
            message,
            location,
        })
    };

    if key != record.key() {
        push(
            Severity::Warning,
            Category::Key,
            format!("record is for {}", record.key()),
            None,
        );
    }
    if char::from_u32(record.codepoint) != Some(record.symbol) {
        push(
            Severity::Warning,
            Category::Key,
            format!("character '{}' does not match codepoint", record.symbol),
            None,
        );
    }
    if record.strokes.is_empty() {
        push(
            Severity::Error,
            Category::EmptyCharacter,
            "has no strokes".to_string(),
            None,
        );
        return;
    }

    for (stroke_index, stroke) in record.strokes.iter().enumerate() {
        if stroke.is_empty() {
            push(
                Severity::Error,
                Category::EmptyStroke,
                "stroke has no points".to_string(),
                Some(Location {
                    stroke: stroke_index,
                    point: None,
                }),
            );
            continue;
        }

        for (point_index, p) in stroke.points.iter().enumerate() {
            if !in_unit_range(p.x) || !in_unit_range(p.y) {
                push(
                    Severity::Error,
                    Category::OutOfRange,
                    format!("({}, {}) outside the unit square", p.x, p.y),
                    Some(Location {
                        stroke: stroke_index,
                        point: Some(point_index),
                    }),
                );
            }
        }

        if let Some(message) = timing_problem(stroke) {
            push(
                Severity::Warning,
                Category::Timing,
                message,
                Some(Location {
                    stroke: stroke_index,
                    point: None,
                }),
            );
        }
    }
}

fn in_unit_range(v: f64) -> bool {
    (-TOLERANCE..=1.0 + TOLERANCE).contains(&v)
}

fn timing_problem(stroke: &Stroke) -> Option<String> {
    let first = stroke.first()?.t;
    let last = stroke.last()?.t;
    if first.abs() > TOLERANCE {
        return Some(format!("t starts at {first}"));
    }
    if stroke.len() > 1 && (last - 1.0).abs() > TOLERANCE {
        return Some(format!("t ends at {last}"));
    }
    if stroke.points.windows(2).any(|w| w[1].t < w[0].t) {
        return Some("t decreases along the stroke".to_string());
    }
    None
}
