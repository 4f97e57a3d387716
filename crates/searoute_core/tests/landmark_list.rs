use searoute_core::{AddLandmarkOutcome, LandmarkList, LandmarkRole, LatLng, MAX_LANDMARKS};

fn lisbon() -> LatLng {
    LatLng::new(38.7223, -9.1393)
}

fn recife() -> LatLng {
    LatLng::new(-8.0476, -34.8770)
}

fn added(outcome: AddLandmarkOutcome) -> searoute_core::Landmark {
    match outcome {
        AddLandmarkOutcome::Added(landmark) => landmark,
        other => panic!("expected landmark to be added, got {other:?}"),
    }
}

#[test]
fn first_landmark_is_start_and_second_is_end() {
    let mut list = LandmarkList::new();

    assert_eq!(list.next_role(), LandmarkRole::Start);
    let start = added(list.add_landmark(lisbon(), Some("Lisbon")));
    assert_eq!(list.next_role(), LandmarkRole::End);
    let end = added(list.add_landmark(recife(), Some("Recife")));

    assert_eq!(start.role, LandmarkRole::Start);
    assert_eq!(end.role, LandmarkRole::End);
    assert_eq!(list.as_slice()[0].id, start.id);
    assert_eq!(list.as_slice()[1].id, end.id);
    assert_ne!(start.id, end.id);
    assert_eq!(list.start().map(|l| l.name.as_str()), Some("Lisbon"));
    assert_eq!(list.end().map(|l| l.name.as_str()), Some("Recife"));
}

#[test]
fn missing_or_blank_name_cancels_creation() {
    let mut list = LandmarkList::new();

    assert_eq!(list.add_landmark(lisbon(), None), AddLandmarkOutcome::Cancelled);
    assert_eq!(list.add_landmark(lisbon(), Some("")), AddLandmarkOutcome::Cancelled);
    assert_eq!(
        list.add_landmark(lisbon(), Some("   ")),
        AddLandmarkOutcome::Cancelled
    );
    assert!(list.is_empty());

    // A cancelled prompt does not consume the start slot.
    let landmark = added(list.add_landmark(lisbon(), Some("Lisbon")));
    assert_eq!(landmark.role, LandmarkRole::Start);
}

#[test]
fn list_never_exceeds_two_entries() {
    let mut list = LandmarkList::new();
    let names = ["A", "B", "C", "D", "E"];

    let mut accepted = Vec::new();
    for (index, name) in names.iter().enumerate() {
        let outcome = list.add_landmark(LatLng::new(index as f64, 0.0), Some(name));
        if let AddLandmarkOutcome::Added(landmark) = outcome {
            accepted.push(landmark);
        } else {
            assert_eq!(outcome, AddLandmarkOutcome::CapacityReached);
        }
        assert!(list.len() <= MAX_LANDMARKS);
    }

    assert_eq!(accepted.len(), 2);
    assert_eq!(accepted[0].role, LandmarkRole::Start);
    assert_eq!(accepted[1].role, LandmarkRole::End);
    assert!(list.is_full());
}

#[test]
fn full_list_with_blank_name_reports_cancelled() {
    let mut list = LandmarkList::new();
    list.add_landmark(lisbon(), Some("Lisbon"));
    list.add_landmark(recife(), Some("Recife"));

    assert_eq!(list.add_landmark(lisbon(), None), AddLandmarkOutcome::Cancelled);
    assert_eq!(list.len(), 2);
}

#[test]
fn removing_start_keeps_end_role_on_survivor() {
    let mut list = LandmarkList::new();
    let start = added(list.add_landmark(lisbon(), Some("Lisbon")));
    let end = added(list.add_landmark(recife(), Some("Recife")));

    let removed = list.remove_landmark(start.id).expect("start should be removed");
    assert_eq!(removed.id, start.id);

    assert_eq!(list.len(), 1);
    let survivor = &list.as_slice()[0];
    assert_eq!(survivor.id, end.id);
    assert_eq!(list.get(end.id).map(|l| l.name.as_str()), Some("Recife"));
    assert_eq!(survivor.role, LandmarkRole::End);
    assert!(list.start().is_none());

    // Next landmark is positional: index 1 is always End.
    assert_eq!(list.next_role(), LandmarkRole::End);
    let replacement = added(list.add_landmark(lisbon(), Some("Porto")));
    assert_eq!(replacement.role, LandmarkRole::End);
}

#[test]
fn removing_unknown_id_is_noop() {
    let mut list = LandmarkList::new();
    let start = added(list.add_landmark(lisbon(), Some("Lisbon")));
    list.remove_landmark(start.id);

    assert!(list.remove_landmark(start.id).is_none());
    assert!(list.get(start.id).is_none());
    assert!(list.is_empty());
}

#[test]
fn clear_resets_to_start_role() {
    let mut list = LandmarkList::new();
    list.add_landmark(lisbon(), Some("Lisbon"));
    list.add_landmark(recife(), Some("Recife"));

    list.clear();

    assert!(list.is_empty());
    assert_eq!(list.next_role(), LandmarkRole::Start);
}

#[test]
fn role_labels_match_marker_popups() {
    assert_eq!(LandmarkRole::Start.label(), "Starting Point");
    assert_eq!(LandmarkRole::End.label(), "End Point");
}
