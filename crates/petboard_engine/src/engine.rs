use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use petboard_logging::app_debug;

use crate::client::{ApiSettings, PetsApi, ReqwestPetsApi};
use crate::{EngineEvent, MutationOp};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// Point subsequent commands at a new API base URL.
    SetBase(String),
    LoadPets,
    CreatePet {
        pet_name: String,
        pet_type: String,
    },
    UpdatePet {
        pet_id: String,
        pet_name: String,
        pet_type: String,
    },
    DeletePet {
        pet_id: String,
    },
    UploadMedia {
        pet_id: String,
        path: PathBuf,
    },
    TagImage {
        pet_id: String,
        image_url: String,
    },
}

/// Cloneable command side of an [`EngineHandle`].
#[derive(Clone)]
pub struct EngineCommandSender {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineCommandSender {
    pub fn dispatch(&self, command: EngineCommand) {
        let _ = self.cmd_tx.send(command);
    }
}

/// Background thread owning a tokio runtime and the API client.
///
/// Commands are spawned independently, so overlapping loads are allowed
/// and the last response to arrive wins.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(base_url: &str, settings: ApiSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel::<EngineCommand>();
        let (event_tx, event_rx) = mpsc::channel::<EngineEvent>();
        let base_url = base_url.to_string();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let mut api: Arc<dyn PetsApi> =
                Arc::new(ReqwestPetsApi::new(&base_url, settings.clone()));
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    // Retargeting is sequential with respect to dispatch
                    // order; commands already in flight keep the old base.
                    EngineCommand::SetBase(url) => {
                        app_debug!("engine retargeted to {}", url);
                        api = Arc::new(ReqwestPetsApi::new(&url, settings.clone()));
                    }
                    command => {
                        let api = api.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            handle_command(api.as_ref(), command, event_tx).await;
                        });
                    }
                }
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn commands(&self) -> EngineCommandSender {
        EngineCommandSender {
            cmd_tx: self.cmd_tx.clone(),
        }
    }

    pub fn dispatch(&self, command: EngineCommand) {
        let _ = self.cmd_tx.send(command);
    }

    /// Blocking receive; `None` once every command sender is gone.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn PetsApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::SetBase(_) => return,
        EngineCommand::LoadPets => EngineEvent::PetsLoaded(api.list_pets().await),
        EngineCommand::CreatePet { pet_name, pet_type } => EngineEvent::MutationDone {
            op: MutationOp::Create,
            result: api.create_pet(&pet_name, &pet_type).await,
        },
        EngineCommand::UpdatePet {
            pet_id,
            pet_name,
            pet_type,
        } => EngineEvent::MutationDone {
            op: MutationOp::Update,
            result: api.update_pet(&pet_id, &pet_name, &pet_type).await,
        },
        EngineCommand::DeletePet { pet_id } => EngineEvent::MutationDone {
            op: MutationOp::Delete,
            result: api.delete_pet(&pet_id).await,
        },
        EngineCommand::UploadMedia { pet_id, path } => EngineEvent::MutationDone {
            op: MutationOp::Upload,
            result: api.upload_and_link(&pet_id, &path).await,
        },
        EngineCommand::TagImage { pet_id, image_url } => {
            let result = api.tag_image(&pet_id, &image_url).await;
            EngineEvent::TagDone { pet_id, result }
        }
    };
    let _ = event_tx.send(event);
}
