use crate::view_model::{media_line, tags_line, AppViewModel, PetCardView};

/// Base URL used when no configuration has been persisted yet.
pub const DEFAULT_API_BASE: &str = "http://localhost:7071/api";

/// Strip trailing slashes and fall back to the default for empty input.
pub fn normalize_api_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// One pet record as last reported by the server.
///
/// The client never edits a record in place; edits are sent to the server
/// and the whole list is rebuilt from the next fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PetRecord {
    pub id: String,
    pub pet_name: String,
    pub pet_type: String,
    pub created_at: String,
    pub media_urls: Vec<String>,
    pub vision_tags: Vec<String>,
    pub vision_tagged_at: String,
}

/// Per-card UI state layered on top of a server record.
///
/// Rebuilt from scratch on every list load, so edit buffers, the selected
/// file and the tag-busy flag never survive a reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CardState {
    pub(crate) record: PetRecord,
    pub(crate) name_edit: String,
    pub(crate) type_edit: String,
    pub(crate) selected_file: Option<String>,
    pub(crate) tag_busy: bool,
}

impl CardState {
    fn from_record(record: PetRecord) -> Self {
        let name_edit = record.pet_name.clone();
        let type_edit = record.pet_type.clone();
        Self {
            record,
            name_edit,
            type_edit,
            selected_file: None,
            tag_busy: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    api_base: String,
    api_input: String,
    name_input: String,
    type_input: String,
    cards: Vec<CardState>,
    error: Option<String>,
    loading: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_input: DEFAULT_API_BASE.to_string(),
            name_input: String::new(),
            type_input: String::new(),
            cards: Vec::new(),
            error: None,
            loading: false,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            api_base: self.api_base.clone(),
            error: self.error.clone(),
            loading: self.loading,
            name_input: self.name_input.clone(),
            type_input: self.type_input.clone(),
            cards: self.cards.iter().map(card_view).collect(),
        }
    }

    /// Returns whether a re-render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub(crate) fn set_api_base(&mut self, base: String) {
        self.api_input = base.clone();
        self.api_base = base;
    }

    pub(crate) fn set_api_input(&mut self, text: String) {
        self.api_input = text;
    }

    pub(crate) fn api_input(&self) -> &str {
        &self.api_input
    }

    pub(crate) fn set_name_input(&mut self, text: String) {
        self.name_input = text;
    }

    pub(crate) fn set_type_input(&mut self, text: String) {
        self.type_input = text;
    }

    pub(crate) fn name_input(&self) -> &str {
        &self.name_input
    }

    pub(crate) fn type_input(&self) -> &str {
        &self.type_input
    }

    pub(crate) fn clear_create_inputs(&mut self) {
        self.name_input.clear();
        self.type_input.clear();
    }

    pub(crate) fn begin_loading(&mut self) {
        self.loading = true;
    }

    pub(crate) fn replace_pets(&mut self, pets: Vec<PetRecord>) {
        self.loading = false;
        self.cards = pets.into_iter().map(CardState::from_record).collect();
    }

    pub(crate) fn clear_pets(&mut self) {
        self.loading = false;
        self.cards.clear();
    }

    pub(crate) fn card(&self, pet_id: &str) -> Option<&CardState> {
        self.cards.iter().find(|card| card.record.id == pet_id)
    }

    pub(crate) fn card_mut(&mut self, pet_id: &str) -> Option<&mut CardState> {
        self.cards.iter_mut().find(|card| card.record.id == pet_id)
    }
}

fn card_view(card: &CardState) -> PetCardView {
    PetCardView {
        pet_id: card.record.id.clone(),
        created_at: card.record.created_at.clone(),
        name_field: card.name_edit.clone(),
        type_field: card.type_edit.clone(),
        image_url: card.record.media_urls.first().cloned(),
        selected_file: card.selected_file.clone(),
        tag_busy: card.tag_busy,
        tags_line: tags_line(&card.record),
        media_line: media_line(&card.record),
    }
}
