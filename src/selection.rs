/**
 * Choose which question to ask next based on past results.
 *
 * Every question carries a selection probability per profile. It starts at 1 and is
 * recomputed after each answer as `1 - incorrect / (times_shown + 1)`, which tends
 * towards the fraction of correct answers but stays close to 1 for questions that have
 * rarely been shown, so that new questions keep coming up.
 */
use std::collections::HashMap;

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use super::common::{QuizError, Result};
use super::profiles::QuestionStat;
use super::question::Question;


/// Pick one of `active` at random, weighted by each question's selection probability in
/// `stats`.
///
/// A question with weight 0 is never picked unless every weight is 0, in which case the
/// choice is uniform. Weights outside [0, 1], including NaN, are rejected.
pub fn select_question<'a, R: Rng + ?Sized>(
    active: &'a [Question],
    stats: &[QuestionStat],
    rng: &mut R,
) -> Result<&'a Question> {
    if active.is_empty() {
        return Err(QuizError::EmptyPool);
    }

    let by_id: HashMap<u64, &QuestionStat> =
        stats.iter().map(|s| (s.question_id, s)).collect();

    let mut weights = Vec::with_capacity(active.len());
    for q in active.iter() {
        let stat = by_id.get(&q.id).ok_or(QuizError::MissingStat(q.id))?;
        let weight = stat.selection_probability;
        if !(0.0..=1.0).contains(&weight) {
            return Err(QuizError::InvalidWeight { question_id: q.id, weight });
        }
        weights.push(weight);
    }

    if active.len() == 1 {
        return Ok(&active[0]);
    }

    if weights.iter().all(|w| *w == 0.0) {
        return Ok(&active[rng.gen_range(0..active.len())]);
    }

    // Weights are finite, non-negative and not all zero here.
    let dist = WeightedIndex::new(&weights)
        .map_err(|_| QuizError::InvalidWeight { question_id: active[0].id, weight: 0.0 })?;
    Ok(&active[dist.sample(rng)])
}


/// Update `stat` after its question has been answered.
pub fn record_answer(stat: &mut QuestionStat, was_correct: bool) {
    stat.times_shown += 1;
    if was_correct {
        stat.correct_answers += 1;
    }
    stat.selection_probability = new_probability(stat.times_shown, stat.correct_answers);
}


fn new_probability(times_shown: u64, correct_answers: u64) -> f64 {
    let incorrect = times_shown.saturating_sub(correct_answers);
    1.0 - (incorrect as f64 / (times_shown + 1) as f64)
}
