#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Persist the API base URL and point the engine at it.
    SaveApiBase(String),
    /// Fetch the full pet collection.
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
    /// Ask the user to confirm deletion; no network call yet.
    ConfirmDelete { pet_id: String },
    DeletePet { pet_id: String },
    /// Upload the file, then link the returned SAS URL to the record.
    UploadMedia { pet_id: String, path: String },
    TagImage { pet_id: String, image_url: String },
}
