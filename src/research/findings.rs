//! Findings parser for free-form research output.

use once_cell::sync::Lazy;
use regex::Regex;

use super::result::{Confidence, ResearchFinding};

pub const MAX_FINDINGS: usize = 5;
/// Findings shorter than this many characters are dropped.
pub const MIN_FINDING_CHARS: usize = 20;
/// Findings longer than this many characters are rated high confidence.
pub const HIGH_CONFIDENCE_CHARS: usize = 50;

/// `1.`, `-` or `•` at the start of a trimmed line.
static ITEM_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\d+\.|-|•)").expect("list marker pattern is valid"));

/// Splits a model response into list-item findings.
///
/// A marker line opens a new finding; following unmarked lines are folded
/// into it. Text before the first marker is ignored. When no item survives
/// but the response is longer than 50 characters, the whole response becomes
/// a single medium-confidence finding.
pub fn parse_findings(content: &str) -> Vec<ResearchFinding> {
    let mut findings = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(marker) = ITEM_MARKER.find(line) {
            if let Some(parts) = current.take() {
                push_finding(&mut findings, &parts);
            }
            current = Some(vec![line[marker.end()..].trim()]);
        } else if let Some(parts) = current.as_mut() {
            parts.push(line);
        }
    }
    if let Some(parts) = current {
        push_finding(&mut findings, &parts);
    }

    if findings.is_empty() && content.chars().count() > HIGH_CONFIDENCE_CHARS {
        findings.push(ResearchFinding {
            fact: content.trim().to_string(),
            confidence: Confidence::Medium,
        });
    }

    findings.truncate(MAX_FINDINGS);
    findings
}

fn push_finding(findings: &mut Vec<ResearchFinding>, parts: &[&str]) {
    let fact = parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    let len = fact.chars().count();
    if len < MIN_FINDING_CHARS {
        return;
    }

    let confidence = if len > HIGH_CONFIDENCE_CHARS {
        Confidence::High
    } else {
        Confidence::Medium
    };
    findings.push(ResearchFinding { fact, confidence });
}
