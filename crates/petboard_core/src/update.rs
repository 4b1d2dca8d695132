use crate::{normalize_api_base, AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
///
/// Every mutation follows refresh-after-write: the success path emits
/// `Effect::LoadPets` instead of patching the local list.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ApiBaseRestored(base) => {
            state.set_api_base(normalize_api_base(&base));
            Vec::new()
        }
        Msg::ApiInputChanged(text) => {
            state.set_api_input(text);
            Vec::new()
        }
        Msg::SaveApiClicked => {
            state.clear_error();
            let base = normalize_api_base(state.api_input());
            state.set_api_base(base.clone());
            state.begin_loading();
            state.mark_dirty();
            vec![Effect::SaveApiBase(base), Effect::LoadPets]
        }
        Msg::RefreshClicked => {
            state.clear_error();
            state.begin_loading();
            state.mark_dirty();
            vec![Effect::LoadPets]
        }
        Msg::NameInputChanged(text) => {
            state.set_name_input(text);
            Vec::new()
        }
        Msg::TypeInputChanged(text) => {
            state.set_type_input(text);
            Vec::new()
        }
        Msg::CreateClicked => {
            state.clear_error();
            state.mark_dirty();
            let pet_name = state.name_input().trim().to_string();
            let pet_type = state.type_input().trim().to_string();
            if pet_name.is_empty() || pet_type.is_empty() {
                state.set_error("Enter petName and petType");
                Vec::new()
            } else {
                vec![Effect::CreatePet { pet_name, pet_type }]
            }
        }
        Msg::EditNameChanged { pet_id, text } => {
            let changed = match state.card_mut(&pet_id) {
                Some(card) => {
                    card.name_edit = text;
                    true
                }
                None => false,
            };
            if changed {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::EditTypeChanged { pet_id, text } => {
            let changed = match state.card_mut(&pet_id) {
                Some(card) => {
                    card.type_edit = text;
                    true
                }
                None => false,
            };
            if changed {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SaveClicked { pet_id } => {
            state.clear_error();
            state.mark_dirty();
            match state.card(&pet_id) {
                Some(card) => vec![Effect::UpdatePet {
                    pet_id,
                    pet_name: card.name_edit.clone(),
                    pet_type: card.type_edit.clone(),
                }],
                None => Vec::new(),
            }
        }
        // Confirmation happens at the platform boundary; declining simply
        // never produces a DeleteConfirmed message.
        Msg::DeleteClicked { pet_id } => {
            vec![Effect::ConfirmDelete { pet_id }]
        }
        Msg::DeleteConfirmed { pet_id } => {
            state.clear_error();
            state.mark_dirty();
            vec![Effect::DeletePet { pet_id }]
        }
        Msg::FileSelected { pet_id, path } => {
            let changed = match state.card_mut(&pet_id) {
                Some(card) => {
                    card.selected_file = Some(path);
                    true
                }
                None => false,
            };
            if changed {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::UploadClicked { pet_id } => {
            state.clear_error();
            state.mark_dirty();
            match state.card(&pet_id).and_then(|card| card.selected_file.clone()) {
                Some(path) => vec![Effect::UploadMedia { pet_id, path }],
                None => {
                    state.set_error("Pick a file first");
                    Vec::new()
                }
            }
        }
        Msg::TagClicked { pet_id } => {
            state.clear_error();
            state.mark_dirty();
            let image_url = state
                .card(&pet_id)
                .and_then(|card| card.record.media_urls.first().cloned());
            match image_url {
                Some(image_url) => {
                    if let Some(card) = state.card_mut(&pet_id) {
                        card.tag_busy = true;
                    }
                    vec![Effect::TagImage { pet_id, image_url }]
                }
                None => {
                    state.set_error("Upload an image first (need a SAS URL).");
                    Vec::new()
                }
            }
        }
        Msg::PetsLoaded(result) => {
            state.mark_dirty();
            match result {
                Ok(pets) => state.replace_pets(pets),
                Err(message) => {
                    state.clear_pets();
                    state.set_error(message);
                }
            }
            Vec::new()
        }
        Msg::CreateFinished(result) => {
            state.mark_dirty();
            match result {
                Ok(()) => {
                    state.clear_create_inputs();
                    state.begin_loading();
                    vec![Effect::LoadPets]
                }
                Err(message) => {
                    state.set_error(message);
                    Vec::new()
                }
            }
        }
        Msg::SaveFinished(result)
        | Msg::DeleteFinished(result)
        | Msg::UploadFinished(result) => {
            state.mark_dirty();
            match result {
                Ok(()) => {
                    state.begin_loading();
                    vec![Effect::LoadPets]
                }
                Err(message) => {
                    state.set_error(message);
                    Vec::new()
                }
            }
        }
        Msg::TagFinished { pet_id, result } => {
            state.mark_dirty();
            // Re-enable the trigger in every outcome; the card may already
            // be gone if a reload raced the tag call.
            if let Some(card) = state.card_mut(&pet_id) {
                card.tag_busy = false;
            }
            match result {
                Ok(()) => {
                    state.begin_loading();
                    vec![Effect::LoadPets]
                }
                Err(message) => {
                    state.set_error(message);
                    Vec::new()
                }
            }
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
