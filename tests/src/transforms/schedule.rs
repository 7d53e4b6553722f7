use aegis_transform::schedule::{dependency_edges, linearize, validate};
use aegis_transform::{Error, StepId};

fn position(order: &[StepId], id: StepId) -> usize {
    order.iter().position(|s| *s == id).unwrap()
}

#[test]
fn test_linearize_honors_the_declared_partial_order() {
    let order = linearize(&StepId::ALL).unwrap();
    assert_eq!(order.len(), StepId::ALL.len());

    assert!(position(&order, StepId::RemoveDuplicates) < position(&order, StepId::AddSecurityMixins));
    assert!(position(&order, StepId::AddSecurityMixins) < position(&order, StepId::FixOwnerReferences));
    assert!(position(&order, StepId::AddSecurityMixins) < position(&order, StepId::TagCriticalFunctions));
    assert!(position(&order, StepId::AddSecurityMixins) < position(&order, StepId::AddPauseFunctions));
}

#[test]
fn test_linearize_reorders_an_inverted_request() {
    let order = linearize(&[
        StepId::FixOwnerReferences,
        StepId::AddSecurityMixins,
        StepId::RemoveDuplicates,
    ])
    .unwrap();
    assert_eq!(
        order,
        vec![
            StepId::RemoveDuplicates,
            StepId::AddSecurityMixins,
            StepId::FixOwnerReferences,
        ]
    );
}

#[test]
fn test_linearize_drops_duplicates() {
    let order = linearize(&[StepId::AddAuditEvents, StepId::AddAuditEvents]).unwrap();
    assert_eq!(order, vec![StepId::AddAuditEvents]);
}

#[test]
fn test_linearize_accepts_a_subset_without_its_prerequisites() {
    // each step re-derives its precondition from the file, so a partial run
    // is legal and simply skips when the groundwork is missing
    let order = linearize(&[StepId::TagCriticalFunctions]).unwrap();
    assert_eq!(order, vec![StepId::TagCriticalFunctions]);
}

#[test]
fn test_validate_rejects_a_dependent_before_its_prerequisite() {
    let err = validate(&[StepId::FixOwnerReferences, StepId::AddSecurityMixins]).unwrap_err();
    assert!(matches!(err, Error::InvalidSchedule(_)));
}

#[test]
fn test_validate_rejects_duplicates() {
    let err = validate(&[StepId::AddAuditEvents, StepId::AddAuditEvents]).unwrap_err();
    assert!(matches!(err, Error::InvalidSchedule(_)));
}

#[test]
fn test_validate_accepts_the_canonical_order() {
    validate(&StepId::ALL).unwrap();
}

#[test]
fn test_dependency_edges_cover_the_declared_order() {
    let edges = dependency_edges();
    assert!(edges.contains(&(StepId::RemoveDuplicates, StepId::AddSecurityMixins)));
    assert!(edges.contains(&(StepId::AddSecurityMixins, StepId::FixOwnerReferences)));
    assert!(edges.contains(&(StepId::AddSecurityMixins, StepId::TagCriticalFunctions)));
    assert!(edges.contains(&(StepId::AddSecurityMixins, StepId::AddPauseFunctions)));
}
