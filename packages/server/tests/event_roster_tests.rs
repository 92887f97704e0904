//! Event roster tests
//!
//! Event creation (creator seating, location fallback, time validation),
//! adding participants by email, self-signup, and removal including the
//! last-organizer safeguard.

mod common;

use chrono::{Duration, Utc};
use server_core::common::{DomainError, Role};
use server_core::domains::events::effects::{event_operations, queries, roster};
use server_core::domains::events::models::{CreateEvent, UNSET_LOCATION};
use test_context::test_context;

use crate::common::{create_member, create_user, TestHarness};

fn event_input(name: &str, location: Option<&str>) -> CreateEvent {
    let start_time = Utc::now() + Duration::days(3);
    CreateEvent {
        name: name.to_string(),
        description: "community sale".to_string(),
        start_time,
        end_time: start_time + Duration::hours(4),
        location: location.map(str::to_string),
    }
}

// ============================================================================
// Creation
// ============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn creation_seats_the_creator_as_organizer(ctx: &TestHarness) {
    let member = create_member(&ctx.deps, "ana").await;

    let event_id = event_operations::create(&ctx.deps, &member, event_input("Market", None))
        .await
        .unwrap();

    let event = ctx.deps.events.get(event_id).await.unwrap().unwrap();
    assert_eq!(event.admin_id, member.id);

    let seat = ctx
        .deps
        .participants
        .find_by_event_and_user(event_id, member.id)
        .await
        .unwrap()
        .expect("creator should be on the roster");
    assert_eq!(seat.role, Role::BoardOfDirectors);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn blank_location_falls_back_to_the_placeholder(ctx: &TestHarness) {
    let member = create_member(&ctx.deps, "ana").await;

    let unset = event_operations::create(&ctx.deps, &member, event_input("A", None))
        .await
        .unwrap();
    let blank = event_operations::create(&ctx.deps, &member, event_input("B", Some("   ")))
        .await
        .unwrap();
    let named = event_operations::create(&ctx.deps, &member, event_input("C", Some("Hall 4")))
        .await
        .unwrap();

    assert_eq!(
        ctx.deps.events.get(unset).await.unwrap().unwrap().location,
        UNSET_LOCATION
    );
    assert_eq!(
        ctx.deps.events.get(blank).await.unwrap().unwrap().location,
        UNSET_LOCATION
    );
    assert_eq!(
        ctx.deps.events.get(named).await.unwrap().unwrap().location,
        "Hall 4"
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn end_before_start_is_rejected(ctx: &TestHarness) {
    let member = create_member(&ctx.deps, "ana").await;
    let mut input = event_input("Backwards", None);
    input.end_time = input.start_time - Duration::hours(1);

    let err = event_operations::create(&ctx.deps, &member, input)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidArgument { .. }));
}

// ============================================================================
// Adding participants
// ============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn event_admin_can_add_by_email(ctx: &TestHarness) {
    let organizer = create_member(&ctx.deps, "ana").await;
    let guest = create_member(&ctx.deps, "bea").await;
    let event_id = event_operations::create(&ctx.deps, &organizer, event_input("Market", None))
        .await
        .unwrap();

    roster::add_participant(&ctx.deps, &organizer, event_id, "bea@example.com", Role::Guest)
        .await
        .unwrap();

    let seat = ctx
        .deps
        .participants
        .find_by_event_and_user(event_id, guest.id)
        .await
        .unwrap()
        .expect("guest should be seated");
    assert_eq!(seat.role, Role::Guest);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn guest_participant_cannot_add_others(ctx: &TestHarness) {
    let organizer = create_member(&ctx.deps, "ana").await;
    let guest = create_member(&ctx.deps, "bea").await;
    create_member(&ctx.deps, "cla").await;
    let event_id = event_operations::create(&ctx.deps, &organizer, event_input("Market", None))
        .await
        .unwrap();
    event_operations::participate(&ctx.deps, &guest, event_id)
        .await
        .unwrap();

    let err = roster::add_participant(&ctx.deps, &guest, event_id, "cla@example.com", Role::Guest)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Only event organizers can add users to the event."
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn unknown_email_is_not_found(ctx: &TestHarness) {
    let organizer = create_member(&ctx.deps, "ana").await;
    let event_id = event_operations::create(&ctx.deps, &organizer, event_input("Market", None))
        .await
        .unwrap();

    let err = roster::add_participant(
        &ctx.deps,
        &organizer,
        event_id,
        "nobody@example.com",
        Role::Guest,
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "User with email nobody@example.com not found");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn double_add_is_a_conflict(ctx: &TestHarness) {
    let organizer = create_member(&ctx.deps, "ana").await;
    create_member(&ctx.deps, "bea").await;
    let event_id = event_operations::create(&ctx.deps, &organizer, event_input("Market", None))
        .await
        .unwrap();

    roster::add_participant(&ctx.deps, &organizer, event_id, "bea@example.com", Role::Guest)
        .await
        .unwrap();
    let err =
        roster::add_participant(&ctx.deps, &organizer, event_id, "bea@example.com", Role::Member)
            .await
            .unwrap_err();

    assert!(matches!(err, DomainError::Conflict { .. }));
    assert_eq!(err.to_string(), "User is already part of this event.");
}

// ============================================================================
// Self-signup
// ============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn participate_joins_as_guest(ctx: &TestHarness) {
    let organizer = create_member(&ctx.deps, "ana").await;
    let visitor = create_member(&ctx.deps, "bea").await;
    let event_id = event_operations::create(&ctx.deps, &organizer, event_input("Market", None))
        .await
        .unwrap();

    let seat = event_operations::participate(&ctx.deps, &visitor, event_id)
        .await
        .unwrap();
    assert_eq!(seat.role, Role::Guest);
    assert_eq!(seat.event_id, event_id);
    assert_eq!(seat.user_id, visitor.id);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn participate_twice_is_refused(ctx: &TestHarness) {
    let organizer = create_member(&ctx.deps, "ana").await;
    let event_id = event_operations::create(&ctx.deps, &organizer, event_input("Market", None))
        .await
        .unwrap();

    // The creator already sits on the roster with an organizer role.
    let err = event_operations::participate(&ctx.deps, &organizer, event_id)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "User is already an organizer for this event. Cannot change role to participant."
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn participate_in_a_missing_event_is_not_found(ctx: &TestHarness) {
    let member = create_member(&ctx.deps, "ana").await;

    let err = event_operations::participate(
        &ctx.deps,
        &member,
        server_core::common::EventId::new(),
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "Event not found");
}

// ============================================================================
// Removal
// ============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn participants_can_remove_themselves(ctx: &TestHarness) {
    let organizer = create_member(&ctx.deps, "ana").await;
    let guest = create_member(&ctx.deps, "bea").await;
    let event_id = event_operations::create(&ctx.deps, &organizer, event_input("Market", None))
        .await
        .unwrap();
    event_operations::participate(&ctx.deps, &guest, event_id)
        .await
        .unwrap();

    roster::remove_participant(&ctx.deps, &guest, event_id, guest.id)
        .await
        .unwrap();

    assert!(ctx
        .deps
        .participants
        .find_by_event_and_user(event_id, guest.id)
        .await
        .unwrap()
        .is_none());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn guests_cannot_remove_other_participants(ctx: &TestHarness) {
    let organizer = create_member(&ctx.deps, "ana").await;
    let guest = create_member(&ctx.deps, "bea").await;
    let other = create_member(&ctx.deps, "cla").await;
    let event_id = event_operations::create(&ctx.deps, &organizer, event_input("Market", None))
        .await
        .unwrap();
    event_operations::participate(&ctx.deps, &guest, event_id)
        .await
        .unwrap();
    event_operations::participate(&ctx.deps, &other, event_id)
        .await
        .unwrap();

    let err = roster::remove_participant(&ctx.deps, &guest, event_id, other.id)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "You do not have permission to remove this user from the event."
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn the_last_admin_of_an_event_cannot_be_removed(ctx: &TestHarness) {
    let organizer = create_member(&ctx.deps, "ana").await;
    let event_id = event_operations::create(&ctx.deps, &organizer, event_input("Market", None))
        .await
        .unwrap();

    // Self-removal is normally allowed, but not while it would orphan the
    // event: no other participant holds the Administrator role.
    let err = roster::remove_participant(&ctx.deps, &organizer, event_id, organizer.id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict { .. }));
    assert_eq!(
        err.to_string(),
        "Cannot remove the last organizer/admin of the event."
    );
}

#[test_context(TestHarness)]
#[tokio::test]
async fn the_event_admin_can_leave_once_another_admin_is_seated(ctx: &TestHarness) {
    let organizer = create_member(&ctx.deps, "ana").await;
    create_user(&ctx.deps, "user_backup", "backup@example.com", Role::Member).await;
    let event_id = event_operations::create(&ctx.deps, &organizer, event_input("Market", None))
        .await
        .unwrap();
    roster::add_participant(
        &ctx.deps,
        &organizer,
        event_id,
        "backup@example.com",
        Role::Administrator,
    )
    .await
    .unwrap();

    roster::remove_participant(&ctx.deps, &organizer, event_id, organizer.id)
        .await
        .unwrap();

    assert!(ctx
        .deps
        .participants
        .find_by_event_and_user(event_id, organizer.id)
        .await
        .unwrap()
        .is_none());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn removing_an_absent_participant_reports_it(ctx: &TestHarness) {
    let organizer = create_member(&ctx.deps, "ana").await;
    let outsider = create_member(&ctx.deps, "bea").await;
    let event_id = event_operations::create(&ctx.deps, &organizer, event_input("Market", None))
        .await
        .unwrap();

    let err = roster::remove_participant(&ctx.deps, &organizer, event_id, outsider.id)
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "User is not part of this event or already removed."
    );
}

// ============================================================================
// Read models
// ============================================================================

#[test_context(TestHarness)]
#[tokio::test]
async fn details_join_roster_names(ctx: &TestHarness) {
    let organizer = create_member(&ctx.deps, "ana").await;
    let guest = create_member(&ctx.deps, "bea").await;
    let event_id = event_operations::create(&ctx.deps, &organizer, event_input("Market", None))
        .await
        .unwrap();
    event_operations::participate(&ctx.deps, &guest, event_id)
        .await
        .unwrap();

    let details = queries::get_details(&ctx.deps, event_id)
        .await
        .unwrap()
        .expect("event exists");
    assert_eq!(details.event.name, "Market");
    assert_eq!(details.participants.len(), 2);
    let names: Vec<&str> = details
        .participants
        .iter()
        .map(|p| p.user_name.as_str())
        .collect();
    assert!(names.contains(&"ana@example.com"));
    assert!(names.contains(&"bea@example.com"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn my_events_carry_the_callers_role(ctx: &TestHarness) {
    let organizer = create_member(&ctx.deps, "ana").await;
    let guest = create_member(&ctx.deps, "bea").await;
    let own_event = event_operations::create(&ctx.deps, &organizer, event_input("Mine", None))
        .await
        .unwrap();
    let other_event = event_operations::create(&ctx.deps, &guest, event_input("Theirs", None))
        .await
        .unwrap();
    event_operations::participate(&ctx.deps, &organizer, other_event)
        .await
        .unwrap();

    let mine = queries::get_my_events(&ctx.deps, &organizer).await.unwrap();
    assert_eq!(mine.len(), 2);
    let roles: Vec<(server_core::common::EventId, Role)> =
        mine.iter().map(|e| (e.event.id, e.role)).collect();
    assert!(roles.contains(&(own_event, Role::BoardOfDirectors)));
    assert!(roles.contains(&(other_event, Role::Guest)));
}
