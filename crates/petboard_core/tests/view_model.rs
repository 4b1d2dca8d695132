use std::sync::Once;

use petboard_core::{update, AppState, Msg, PetRecord};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(petboard_logging::initialize_for_tests);
}

#[test]
fn empty_list_has_no_cards() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PetsLoaded(Ok(Vec::new())));
    let view = state.view();

    assert!(view.cards.is_empty());
    assert!(!view.loading);
    assert!(view.error.is_none());
}

#[test]
fn bare_record_renders_empty_states() {
    init_logging();
    let pet = PetRecord {
        id: "1".to_string(),
        pet_name: "Rex".to_string(),
        pet_type: "dog".to_string(),
        ..PetRecord::default()
    };
    let (state, _) = update(AppState::new(), Msg::PetsLoaded(Ok(vec![pet])));
    let view = state.view();

    assert_eq!(view.cards.len(), 1);
    let card = &view.cards[0];
    assert_eq!(card.pet_id, "1");
    assert_eq!(card.name_field, "Rex");
    assert_eq!(card.type_field, "dog");
    assert_eq!(card.image_url, None);
    assert_eq!(card.tags_line, "visionTags: (none yet)");
    assert_eq!(card.media_line, None);
}

#[test]
fn tagged_record_renders_joined_tags_with_timestamp() {
    init_logging();
    let pet = PetRecord {
        id: "2".to_string(),
        pet_name: "Milo".to_string(),
        pet_type: "cat".to_string(),
        media_urls: vec![
            "https://blob/a.jpg?sig=x".to_string(),
            "https://blob/b.jpg".to_string(),
        ],
        vision_tags: vec!["cat".to_string(), "whiskers".to_string()],
        vision_tagged_at: "2026-02-03T04:05:06Z".to_string(),
        ..PetRecord::default()
    };
    let (state, _) = update(AppState::new(), Msg::PetsLoaded(Ok(vec![pet])));
    let card = &state.view().cards[0];

    assert_eq!(card.image_url.as_deref(), Some("https://blob/a.jpg?sig=x"));
    assert_eq!(
        card.tags_line,
        "visionTags: cat, whiskers (at 2026-02-03T04:05:06Z)"
    );
    assert_eq!(
        card.media_line.as_deref(),
        Some("mediaUrls: https://blob/a.jpg?sig=x | https://blob/b.jpg")
    );
}

#[test]
fn tags_without_timestamp_render_unknown() {
    init_logging();
    let pet = PetRecord {
        id: "3".to_string(),
        vision_tags: vec!["dog".to_string()],
        ..PetRecord::default()
    };
    let (state, _) = update(AppState::new(), Msg::PetsLoaded(Ok(vec![pet])));

    assert_eq!(state.view().cards[0].tags_line, "visionTags: dog (at unknown)");
}

#[test]
fn rendering_the_same_list_twice_is_idempotent() {
    init_logging();
    let pets = vec![
        PetRecord {
            id: "1".to_string(),
            pet_name: "Rex".to_string(),
            ..PetRecord::default()
        },
        PetRecord {
            id: "2".to_string(),
            pet_name: "Milo".to_string(),
            ..PetRecord::default()
        },
    ];

    let (state, _) = update(AppState::new(), Msg::PetsLoaded(Ok(pets.clone())));
    let first = state.view();
    let (state, _) = update(state, Msg::PetsLoaded(Ok(pets)));
    let second = state.view();

    assert_eq!(first, second);
}
