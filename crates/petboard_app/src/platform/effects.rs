use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use petboard_core::{Effect, Msg, PetRecord};
use petboard_engine::{
    ApiSettings, EngineCommand, EngineCommandSender, EngineEvent, EngineHandle, MutationOp, Pet,
};
use petboard_logging::{app_info, app_warn};

use super::persistence::ApiBaseStore;

pub(crate) struct EffectRunner {
    commands: EngineCommandSender,
}

impl EffectRunner {
    pub(crate) fn new(base_url: &str, msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(base_url, ApiSettings::default());
        let commands = engine.commands();
        spawn_event_loop(engine, msg_tx);
        Self { commands }
    }

    /// Execute effects; returns how many will answer with an engine event.
    pub(crate) fn enqueue(&self, effects: Vec<Effect>, store: &ApiBaseStore) -> usize {
        let mut pending = 0;
        for effect in effects {
            match effect {
                Effect::SaveApiBase(url) => {
                    app_info!("SaveApiBase {}", url);
                    store.set(&url);
                    self.commands.dispatch(EngineCommand::SetBase(url));
                }
                Effect::LoadPets => {
                    pending += 1;
                    self.commands.dispatch(EngineCommand::LoadPets);
                }
                Effect::CreatePet { pet_name, pet_type } => {
                    pending += 1;
                    self.commands
                        .dispatch(EngineCommand::CreatePet { pet_name, pet_type });
                }
                Effect::UpdatePet {
                    pet_id,
                    pet_name,
                    pet_type,
                } => {
                    pending += 1;
                    self.commands.dispatch(EngineCommand::UpdatePet {
                        pet_id,
                        pet_name,
                        pet_type,
                    });
                }
                Effect::DeletePet { pet_id } => {
                    pending += 1;
                    self.commands.dispatch(EngineCommand::DeletePet { pet_id });
                }
                Effect::UploadMedia { pet_id, path } => {
                    pending += 1;
                    self.commands.dispatch(EngineCommand::UploadMedia {
                        pet_id,
                        path: PathBuf::from(path),
                    });
                }
                Effect::TagImage { pet_id, image_url } => {
                    pending += 1;
                    self.commands
                        .dispatch(EngineCommand::TagImage { pet_id, image_url });
                }
                // Confirmation is answered by the interactive loop.
                Effect::ConfirmDelete { pet_id } => {
                    app_warn!("ConfirmDelete for {} reached the effect runner", pet_id);
                }
            }
        }
        pending
    }
}

fn spawn_event_loop(engine: EngineHandle, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Some(event) = engine.recv() {
            let msg = match event {
                EngineEvent::PetsLoaded(result) => Msg::PetsLoaded(
                    result
                        .map(|pets| pets.into_iter().map(map_pet).collect())
                        .map_err(|failure| failure.message),
                ),
                EngineEvent::MutationDone { op, result } => {
                    let result = result.map_err(|failure| {
                        app_warn!("{:?} failed: {}", op, failure);
                        failure.message
                    });
                    match op {
                        MutationOp::Create => Msg::CreateFinished(result),
                        MutationOp::Update => Msg::SaveFinished(result),
                        MutationOp::Delete => Msg::DeleteFinished(result),
                        MutationOp::Upload => Msg::UploadFinished(result),
                    }
                }
                EngineEvent::TagDone { pet_id, result } => Msg::TagFinished {
                    pet_id,
                    result: result.map_err(|failure| failure.message),
                },
            };
            if msg_tx.send(msg).is_err() {
                break;
            }
        }
    });
}

fn map_pet(pet: Pet) -> PetRecord {
    PetRecord {
        id: pet.id.unwrap_or_default(),
        pet_name: pet.pet_name.unwrap_or_default(),
        pet_type: pet.pet_type.unwrap_or_default(),
        created_at: pet.created_at.unwrap_or_default(),
        media_urls: pet.media_urls.unwrap_or_default(),
        vision_tags: pet.vision_tags.unwrap_or_default(),
        vision_tagged_at: pet.vision_tagged_at.unwrap_or_default(),
    }
}
