use super::*;
use crate::model::Answer;

fn question(points: &[u32]) -> Question {
    let answers = points
        .iter()
        .enumerate()
        .map(|(i, &p)| Answer {
            label: format!("a{i}"),
            points: p,
        })
        .collect();
    Question::new("q", "p", answers)
}

fn four_questions() -> Vec<Question> {
    (0..4).map(|_| question(&[0, 25, 50, 100])).collect()
}

#[test]
fn test_fully_answered_max_score() {
    let mut qs = four_questions();
    for (i, q) in qs.iter_mut().enumerate() {
        q.select(i, 3).unwrap();
    }
    assert_eq!(risk_tolerance(&qs), 100.0);
    assert!(all_answered(&qs));
}

#[test]
fn test_partial_answers_count_as_zero() {
    let mut qs = four_questions();
    qs[0].select(0, 3).unwrap();
    qs[1].select(1, 3).unwrap();
    assert_eq!(risk_tolerance(&qs), 50.0);
    assert!(!all_answered(&qs));
    assert_eq!(answered_count(&qs), 2);
}

#[test]
fn test_first_answer_is_a_selection() {
    let mut qs = vec![question(&[40, 0])];
    qs[0].select(0, 0).unwrap();
    assert_eq!(risk_tolerance(&qs), 40.0);
    assert!(all_answered(&qs));
}

#[test]
fn test_score_is_mean_of_selected_points() {
    let mut qs = four_questions();
    let picks = [0usize, 1, 2, 3];
    for (i, q) in qs.iter_mut().enumerate() {
        q.select(i, picks[i]).unwrap();
    }
    let expected = (0.0 + 25.0 + 50.0 + 100.0) / 4.0;
    assert!((risk_tolerance(&qs) - expected).abs() < 1e-6);
}

#[test]
fn test_out_of_range_selection_rejected() {
    let mut q = question(&[0, 100]);
    let err = q.select(3, 2).unwrap_err();
    assert_eq!(
        err,
        crate::error::QuestionnaireError::AnswerOutOfRange {
            question: 3,
            answer: 2,
            available: 2,
        }
    );
    assert_eq!(q.selected(), None);
}

#[test]
fn test_empty_question_list_scores_zero() {
    assert_eq!(risk_tolerance(&[]), 0.0);
    assert!(all_answered(&[]));
}

#[test]
fn test_score_divides_point_total_once() {
    let mut qs: Vec<Question> = (0..3).map(|_| question(&[10, 20, 25, 70])).collect();
    for (i, pick) in [0usize, 1, 2].into_iter().enumerate() {
        qs[i].select(i, pick).unwrap();
    }
    assert_eq!(risk_tolerance(&qs), 55.0f32 / 3.0);

    for (i, q) in qs.iter_mut().enumerate() {
        q.select(i, 3).unwrap();
    }
    assert_eq!(risk_tolerance(&qs), 70.0);
}
