//! Sentence selection and summary assembly.

use std::collections::HashSet;

use crate::scoring::ScoredSentence;
use crate::text::Sentence;

/// Pick the `target` best-scoring sentences and return them in document order.
///
/// The score sort is stable, so equal scores keep candidate order. Sentences
/// whose text was already taken are skipped.
#[tracing::instrument(skip_all, fields(scored = scored.len(), target))]
pub fn select(scored: &[ScoredSentence], target: usize) -> Vec<ScoredSentence> {
    let mut ranked: Vec<&ScoredSentence> = scored.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut seen: HashSet<&str> = HashSet::new();
    let mut chosen: Vec<ScoredSentence> = ranked
        .into_iter()
        .filter(|s| seen.insert(s.sentence.text.as_str()))
        .take(target)
        .cloned()
        .collect();

    chosen.sort_by_key(|s| s.sentence.index);
    chosen
}

/// Fill the selection up to `target` from unselected candidates, then truncate.
///
/// Padding candidates are appended in document order after the selected
/// sentences and never repeat text already present.
#[tracing::instrument(skip_all, fields(selected = selected.len(), candidates = candidates.len(), target))]
pub fn assemble(selected: &[ScoredSentence], candidates: &[Sentence], target: usize) -> Vec<String> {
    let mut summary: Vec<String> = selected
        .iter()
        .map(|s| s.sentence.text.clone())
        .collect();

    if summary.len() < target {
        let mut present: HashSet<String> = summary.iter().cloned().collect();
        for candidate in candidates {
            if summary.len() >= target {
                break;
            }
            if present.insert(candidate.text.clone()) {
                summary.push(candidate.text.clone());
            }
        }
    }

    summary.truncate(target);
    summary
}
