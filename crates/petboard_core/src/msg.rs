#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Base URL restored from the configuration store at startup.
    ApiBaseRestored(String),
    /// User edited the API base input box.
    ApiInputChanged(String),
    /// User clicked Save on the API base input.
    SaveApiClicked,
    /// User requested a full reload of the pet list.
    RefreshClicked,
    /// User edited the create-form name input.
    NameInputChanged(String),
    /// User edited the create-form type input.
    TypeInputChanged(String),
    /// User clicked Create.
    CreateClicked,
    /// User edited a card's name field.
    EditNameChanged { pet_id: String, text: String },
    /// User edited a card's type field.
    EditTypeChanged { pet_id: String, text: String },
    /// User clicked Save on a card.
    SaveClicked { pet_id: String },
    /// User clicked Delete on a card; confirmation is still pending.
    DeleteClicked { pet_id: String },
    /// User answered the delete confirmation with yes.
    DeleteConfirmed { pet_id: String },
    /// User picked a file for a card's upload control.
    FileSelected { pet_id: String, path: String },
    /// User clicked Upload on a card.
    UploadClicked { pet_id: String },
    /// User clicked Tag on a card.
    TagClicked { pet_id: String },
    /// Engine completion for a list load.
    PetsLoaded(Result<Vec<crate::PetRecord>, String>),
    /// Engine completion for a create call.
    CreateFinished(Result<(), String>),
    /// Engine completion for an update call.
    SaveFinished(Result<(), String>),
    /// Engine completion for a delete call.
    DeleteFinished(Result<(), String>),
    /// Engine completion for an upload-and-link sequence.
    UploadFinished(Result<(), String>),
    /// Engine completion for a tag call.
    TagFinished {
        pet_id: String,
        result: Result<(), String>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
