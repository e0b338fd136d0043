use super::*;

fn session() -> AdvisorSession {
    AdvisorSession::new(QuestionTemplate::builtin(), AdvisorProfile::default_v1())
}

fn answer_all(s: &mut AdvisorSession, answers: &[usize]) {
    for &a in answers {
        if let Some(next) = s.select_answer(a).unwrap() {
            s.advance(next);
        }
    }
}

#[test]
fn test_new_session_starts_with_default_basket() {
    let s = session();
    assert_eq!(s.result().risk_tolerance, 0.0);
    assert_eq!(s.result().asset_sum(), 100);
    assert_eq!(s.state(), FlowState::Question(0));
}

#[test]
fn test_every_answer_recomputes_risk_tolerance() {
    let mut s = session();
    s.select_answer(1).unwrap();
    assert_eq!(s.result().risk_tolerance, 25.0);
    s.jump_to(1).unwrap();
    s.select_answer(2).unwrap();
    assert_eq!(s.result().risk_tolerance, 37.5);
}

#[test]
fn test_reset_after_finish_restores_everything() {
    let mut s = session();
    answer_all(&mut s, &[1, 4, 4, 4]);
    s.finish().unwrap();
    s.set_assets([("gold", 100)]);
    assert!(s.reset());
    assert_eq!(s.state(), FlowState::Question(0));
    assert!(s.questions().iter().all(|q| q.selected().is_none()));
    assert_eq!(s.result().risk_tolerance, 0.0);
    assert_eq!(s.result().assets.get("stable"), Some(&40));
    assert!(s.result().assets.get("gold").is_none());
}

#[test]
fn test_commit_updates_result() {
    let mut s = session();
    answer_all(&mut s, &[2, 2, 2, 2]);
    let now = Instant::now();
    let mut view = s.allocation_view(SliderMode::Interactive, now).unwrap();
    let emitted = view.adjust("mid", 0, now).unwrap();
    s.commit(&emitted);
    assert!(s.result().assets.get("mid").is_none());
    assert_eq!(s.result().risk_tolerance, s.flow().score());
}

#[test]
fn test_set_assets_drops_zeroes() {
    let mut s = session();
    s.set_assets([("gold", 0), ("weth", 70)]);
    assert_eq!(s.result().assets.len(), 1);
}

#[test]
fn test_snapshot_restore_round_trip() {
    let mut s = session();
    s.set_amount(500);
    s.select_answer(3).unwrap();
    let snap = s.snapshot();
    assert_eq!(snap.advisor.active, 0);

    let restored =
        AdvisorSession::restore(QuestionTemplate::builtin(), AdvisorProfile::default_v1(), snap)
            .unwrap();
    assert_eq!(restored.questions()[0].selected(), Some(3));
    assert_eq!(restored.result().amount, 500);
    assert_eq!(restored.result().risk_tolerance, s.result().risk_tolerance);
}

#[test]
fn test_restore_rejects_out_of_range_selection() {
    let s = session();
    let mut snap = s.snapshot();
    let raw = serde_json::to_string(&snap.advisor.questions[1])
        .unwrap()
        .replace("\"selected\":null", "\"selected\":12");
    snap.advisor.questions[1] = serde_json::from_str(&raw).unwrap();
    let err =
        AdvisorSession::restore(QuestionTemplate::builtin(), AdvisorProfile::default_v1(), snap)
            .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Invalid(QuestionnaireError::AnswerOutOfRange { answer: 12, .. })
    ));
}

#[test]
fn test_default_assets_keep_profile_order() {
    let s = session();
    assert_eq!(
        s.result().assets.keys().collect::<Vec<_>>(),
        vec!["stable", "mid", "risky"]
    );
    let view = s.allocation_view(SliderMode::Display, Instant::now()).unwrap();
    let keys: Vec<&str> = view.group().sliders().iter().map(|sl| sl.key.as_str()).collect();
    assert_eq!(keys, vec!["stable", "mid", "risky"]);
}

#[test]
fn test_restore_rejects_overfull_allocation() {
    let mut s = session();
    s.set_assets([("stable", 60), ("mid", 30), ("risky", 30)]);
    let err =
        AdvisorSession::restore(QuestionTemplate::builtin(), AdvisorProfile::default_v1(), s.snapshot())
            .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Allocation(AllocationError::SumExceeds(120))
    ));
}
