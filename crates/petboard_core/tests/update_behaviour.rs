use std::sync::Once;

use petboard_core::{update, AppState, Effect, Msg, PetRecord, DEFAULT_API_BASE};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(petboard_logging::initialize_for_tests);
}

fn fill_create_form(state: AppState, name: &str, pet_type: &str) -> AppState {
    let (state, _) = update(state, Msg::NameInputChanged(name.to_string()));
    let (state, _) = update(state, Msg::TypeInputChanged(pet_type.to_string()));
    state
}

fn rex() -> PetRecord {
    PetRecord {
        id: "1".to_string(),
        pet_name: "Rex".to_string(),
        pet_type: "dog".to_string(),
        created_at: "2026-01-01T00:00:00Z".to_string(),
        ..PetRecord::default()
    }
}

#[test]
fn create_emits_trimmed_fields() {
    init_logging();
    let state = fill_create_form(AppState::new(), "  Rex ", " dog  ");

    let (mut next, effects) = update(state, Msg::CreateClicked);

    assert_eq!(
        effects,
        vec![Effect::CreatePet {
            pet_name: "Rex".to_string(),
            pet_type: "dog".to_string(),
        }]
    );
    assert!(next.consume_dirty());
    assert!(next.view().error.is_none());
}

#[test]
fn create_with_blank_fields_is_local_error() {
    init_logging();
    for (name, pet_type) in [("", "dog"), ("Rex", ""), ("   ", "dog"), ("", "")] {
        let state = fill_create_form(AppState::new(), name, pet_type);
        let (next, effects) = update(state, Msg::CreateClicked);

        assert!(effects.is_empty(), "no network call for {name:?}/{pet_type:?}");
        let view = next.view();
        assert_eq!(view.error.as_deref(), Some("Enter petName and petType"));
        // Inputs are kept so the user can fix them.
        assert_eq!(view.name_input, name);
        assert_eq!(view.type_input, pet_type);
    }
}

#[test]
fn create_success_clears_inputs_and_reloads() {
    init_logging();
    let state = fill_create_form(AppState::new(), "Rex", "dog");
    let (state, _) = update(state, Msg::CreateClicked);

    let (state, effects) = update(state, Msg::CreateFinished(Ok(())));

    assert_eq!(effects, vec![Effect::LoadPets]);
    let view = state.view();
    assert!(view.name_input.is_empty());
    assert!(view.type_input.is_empty());
    assert!(view.loading);
}

#[test]
fn create_failure_keeps_inputs_and_shows_error() {
    init_logging();
    let state = fill_create_form(AppState::new(), "Rex", "dog");
    let (state, _) = update(state, Msg::CreateClicked);

    let (state, effects) = update(state, Msg::CreateFinished(Err("HTTP 500".to_string())));

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.error.as_deref(), Some("HTTP 500"));
    assert_eq!(view.name_input, "Rex");
    assert_eq!(view.type_input, "dog");
}

#[test]
fn list_failure_clears_cards_and_shows_message() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PetsLoaded(Ok(vec![rex()])));
    assert_eq!(state.view().cards.len(), 1);

    let (state, effects) = update(state, Msg::PetsLoaded(Err("db down".to_string())));

    assert!(effects.is_empty());
    let view = state.view();
    assert!(view.cards.is_empty());
    assert_eq!(view.error.as_deref(), Some("db down"));
    assert!(!view.loading);
}

#[test]
fn refresh_clears_error_and_loads() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PetsLoaded(Err("db down".to_string())));

    let (state, effects) = update(state, Msg::RefreshClicked);

    assert_eq!(effects, vec![Effect::LoadPets]);
    let view = state.view();
    assert!(view.error.is_none());
    assert!(view.loading);
}

#[test]
fn save_reads_edit_buffers_at_click_time() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PetsLoaded(Ok(vec![rex()])));
    let (state, _) = update(
        state,
        Msg::EditNameChanged {
            pet_id: "1".to_string(),
            text: "Rexy".to_string(),
        },
    );
    let (state, _) = update(
        state,
        Msg::EditTypeChanged {
            pet_id: "1".to_string(),
            text: "hound".to_string(),
        },
    );

    let (_state, effects) = update(
        state,
        Msg::SaveClicked {
            pet_id: "1".to_string(),
        },
    );

    assert_eq!(
        effects,
        vec![Effect::UpdatePet {
            pet_id: "1".to_string(),
            pet_name: "Rexy".to_string(),
            pet_type: "hound".to_string(),
        }]
    );
}

#[test]
fn save_on_unknown_card_emits_nothing() {
    init_logging();
    let (_state, effects) = update(
        AppState::new(),
        Msg::SaveClicked {
            pet_id: "missing".to_string(),
        },
    );
    assert!(effects.is_empty());
}

#[test]
fn delete_requires_confirmation() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PetsLoaded(Ok(vec![rex()])));

    // The click only asks for confirmation.
    let (state, effects) = update(
        state,
        Msg::DeleteClicked {
            pet_id: "1".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::ConfirmDelete {
            pet_id: "1".to_string(),
        }]
    );

    // Only the confirmed message issues the network call.
    let (_state, effects) = update(
        state,
        Msg::DeleteConfirmed {
            pet_id: "1".to_string(),
        },
    );
    assert_eq!(
        effects,
        vec![Effect::DeletePet {
            pet_id: "1".to_string(),
        }]
    );
}

#[test]
fn mutation_success_reloads() {
    init_logging();
    for msg in [
        Msg::SaveFinished(Ok(())),
        Msg::DeleteFinished(Ok(())),
        Msg::UploadFinished(Ok(())),
    ] {
        let (state, effects) = update(AppState::new(), msg);
        assert_eq!(effects, vec![Effect::LoadPets]);
        assert!(state.view().loading);
    }
}

#[test]
fn mutation_failure_shows_error_without_reload() {
    init_logging();
    for msg in [
        Msg::SaveFinished(Err("HTTP 404".to_string())),
        Msg::DeleteFinished(Err("HTTP 404".to_string())),
        Msg::UploadFinished(Err("HTTP 404".to_string())),
    ] {
        let (state, effects) = update(AppState::new(), msg);
        assert!(effects.is_empty());
        assert_eq!(state.view().error.as_deref(), Some("HTTP 404"));
    }
}

#[test]
fn save_api_persists_normalized_base_and_reloads() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::ApiInputChanged("https://api.example/api/".to_string()),
    );

    let (state, effects) = update(state, Msg::SaveApiClicked);

    assert_eq!(
        effects,
        vec![
            Effect::SaveApiBase("https://api.example/api".to_string()),
            Effect::LoadPets,
        ]
    );
    assert_eq!(state.view().api_base, "https://api.example/api");
}

#[test]
fn saving_empty_api_base_falls_back_to_default() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::ApiInputChanged("   ".to_string()));

    let (state, effects) = update(state, Msg::SaveApiClicked);

    assert_eq!(
        effects,
        vec![
            Effect::SaveApiBase(DEFAULT_API_BASE.to_string()),
            Effect::LoadPets,
        ]
    );
    assert_eq!(state.view().api_base, DEFAULT_API_BASE);
}

#[test]
fn restored_api_base_is_normalized() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::ApiBaseRestored("https://api.example/api///".to_string()),
    );

    assert!(effects.is_empty());
    assert_eq!(state.api_base(), "https://api.example/api");
}
