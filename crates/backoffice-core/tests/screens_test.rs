// End-to-end exercises of the screen controllers against the in-memory
// backend: cache resynchronization after mutations, modal retention on
// failure, the guest approval flow, and the documented lack of referential
// checks.

use backoffice_contracts::{EventPayload, UserPayload};
use backoffice_core::guests::{GuestModal, GuestScreen};
use backoffice_core::memory::InMemoryBackend;
use backoffice_core::modal::ModalState;
use backoffice_core::screens::{CategoryScreen, EventScreen, UserScreen};
use backoffice_core::TextSearch;

fn event_payload(title: &str, category_id: i64, user_ids: Vec<i64>) -> EventPayload {
    EventPayload {
        title: title.into(),
        start_date: "2030-06-01".parse().unwrap(),
        end_date: "2030-06-03".parse().unwrap(),
        location: "Lisbon".into(),
        category_id,
        image: String::new(),
        price: 25.0,
        min_capacity: 10,
        max_capacity: 100,
        user_ids,
    }
}

fn user_payload(email: &str, name: &str, event_ids: Vec<i64>) -> UserPayload {
    UserPayload {
        email: email.into(),
        name: name.into(),
        password: "pw".into(),
        balance: 0.0,
        event_ids,
    }
}

#[tokio::test]
async fn create_shows_up_after_the_reload() {
    let backend = InMemoryBackend::new();
    let mut screen = CategoryScreen::new(backend.clone());
    screen.refresh().await.unwrap();
    assert!(screen.all().is_empty());

    screen.open_add();
    screen.form_mut().unwrap().name = "Web".into();
    screen.submit().await.unwrap();

    // submit reloaded the cache and closed the modal
    assert!(screen.modal().is_closed());
    assert_eq!(screen.all().len(), 1);
    assert_eq!(screen.all()[0].name, "Web");
}

#[tokio::test]
async fn remove_disappears_after_the_reload() {
    let backend = InMemoryBackend::new();
    let web = backend.seed_category("Web").await;
    backend.seed_category("Art").await;

    let mut screen = CategoryScreen::new(backend);
    screen.refresh().await.unwrap();
    assert_eq!(screen.all().len(), 2);

    screen.request_delete(web.clone());
    assert_eq!(screen.modal().pending_delete(), Some(&web));
    screen.confirm_delete().await.unwrap();

    assert!(screen.modal().is_closed());
    assert!(screen.all().iter().all(|c| c.category_id != web.category_id));
}

#[tokio::test]
async fn failed_submit_keeps_the_editor_open_with_the_form_retained() {
    let backend = InMemoryBackend::new();
    let art = backend.seed_category("Art").await;

    let mut screen = CategoryScreen::new(backend.clone());
    screen.refresh().await.unwrap();
    screen.open_edit(art.clone());
    screen.form_mut().unwrap().name = "Fine Art".into();

    backend.fail_mutations(true);
    assert!(screen.submit().await.is_err());

    // still editing, edits preserved, cache untouched
    match screen.modal() {
        ModalState::Editing { existing, form } => {
            assert_eq!(existing.as_ref(), Some(&art));
            assert_eq!(form.name, "Fine Art");
        }
        other => panic!("expected Editing, got {other:?}"),
    }
    assert_eq!(screen.all()[0].name, "Art");

    // manual retry succeeds once the backend recovers
    backend.fail_mutations(false);
    screen.submit().await.unwrap();
    assert!(screen.modal().is_closed());
    assert_eq!(screen.all()[0].name, "Fine Art");
}

#[tokio::test]
async fn validation_failure_never_reaches_the_backend() {
    let backend = InMemoryBackend::new();
    let mut screen = CategoryScreen::new(backend.clone());
    screen.refresh().await.unwrap();

    screen.open_add();
    screen.form_mut().unwrap().name = "   ".into();
    let err = screen.submit().await.unwrap_err();
    assert!(err.is_validation());
    assert!(screen.modal().is_editing());
    assert!(screen.all().is_empty());
}

#[tokio::test]
async fn failed_load_keeps_the_stale_list() {
    let backend = InMemoryBackend::new();
    backend.seed_category("Web").await;

    let mut screen = CategoryScreen::new(backend.clone());
    screen.refresh().await.unwrap();
    assert_eq!(screen.all().len(), 1);

    backend.seed_category("Art").await;
    backend.fail_lists(true);
    assert!(screen.refresh().await.is_err());

    // stale but available
    assert_eq!(screen.all().len(), 1);
}

#[tokio::test]
async fn event_delete_warns_with_the_assigned_users() {
    let backend = InMemoryBackend::new();
    let alice = backend
        .seed_user(user_payload("alice@example.com", "Alice", vec![]))
        .await;
    let bob = backend
        .seed_user(user_payload("bob@example.com", "Bob", vec![]))
        .await;
    let event = backend
        .seed_event(event_payload("Expo", 1, vec![alice.user_id, bob.user_id, 9999]))
        .await;

    let mut screen = EventScreen::new(backend.clone());
    screen.refresh().await.unwrap();

    screen.request_delete(event.clone()).await;
    // the unknown id is skipped, not fatal
    let warned: Vec<&str> = screen
        .related_users()
        .iter()
        .map(|u| u.email.as_str())
        .collect();
    assert_eq!(warned, vec!["alice@example.com", "bob@example.com"]);

    screen.confirm_delete().await.unwrap();
    assert!(screen.all().is_empty());
    assert!(screen.related_users().is_empty());
}

#[tokio::test]
async fn user_view_resolves_assigned_events() {
    let backend = InMemoryBackend::new();
    let expo = backend.seed_event(event_payload("Expo", 1, vec![])).await;
    let user = backend
        .seed_user(user_payload("alice@example.com", "Alice", vec![expo.event_id]))
        .await;

    let mut screen = UserScreen::new(backend.clone());
    screen.refresh().await.unwrap();

    screen.open_view(user.clone()).await;
    assert!(matches!(screen.modal(), ModalState::Viewing { entity } if entity == &user));
    assert_eq!(screen.related_events().len(), 1);
    assert_eq!(screen.related_events()[0].title, "Expo");

    screen.cancel();
    assert!(screen.modal().is_closed());
    assert!(screen.related_events().is_empty());
}

#[tokio::test]
async fn deleting_a_referenced_category_succeeds() {
    // Expected-but-unsafe: nothing on the client checks whether events still
    // reference the category.
    let backend = InMemoryBackend::new();
    let web = backend.seed_category("Web").await;
    backend
        .seed_event(event_payload("Expo", web.category_id, vec![]))
        .await;

    let mut screen = CategoryScreen::new(backend.clone());
    screen.refresh().await.unwrap();
    screen.request_delete(web.clone());
    screen.confirm_delete().await.unwrap();

    assert!(screen.all().is_empty());
    let mut events = EventScreen::new(backend);
    events.refresh().await.unwrap();
    assert_eq!(events.all()[0].category_id, web.category_id);
}

#[tokio::test]
async fn guest_accept_moves_the_guest_to_users() {
    let backend = InMemoryBackend::new();
    let guest = backend
        .seed_guest(user_payload("new@example.com", "Newcomer", vec![]))
        .await;

    let mut screen = GuestScreen::new(backend.clone());
    screen.refresh().await.unwrap();
    assert_eq!(screen.all().len(), 1);

    screen.accept(&guest).await.unwrap();
    assert!(screen.all().is_empty());
    assert_eq!(backend.users().await[0].email, "new@example.com");
}

#[tokio::test]
async fn guest_decline_requires_confirmation() {
    let backend = InMemoryBackend::new();
    let guest = backend
        .seed_guest(user_payload("new@example.com", "Newcomer", vec![]))
        .await;

    let mut screen = GuestScreen::new(backend.clone());
    screen.refresh().await.unwrap();

    // cancel performs no mutation
    screen.request_decline(guest.clone());
    assert!(matches!(screen.modal(), GuestModal::ConfirmingDecline { .. }));
    screen.cancel();
    assert_eq!(backend.pending_guests().await.len(), 1);

    screen.request_decline(guest);
    screen.confirm_decline().await.unwrap();
    assert!(screen.all().is_empty());
    assert!(backend.pending_guests().await.is_empty());
    assert!(backend.users().await.is_empty());
}

#[tokio::test]
async fn search_narrows_the_visible_list_without_touching_the_cache() {
    let backend = InMemoryBackend::new();
    backend.seed_category("Web").await;
    backend.seed_category("Art").await;

    let mut screen = CategoryScreen::new(backend);
    screen.refresh().await.unwrap();

    screen.query.search = TextSearch::new("we");
    assert_eq!(screen.visible().len(), 1);
    assert_eq!(screen.all().len(), 2);

    screen.query.search = TextSearch::new("");
    assert_eq!(screen.visible().len(), 2);
}
