use crate::PetRecord;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub api_base: String,
    pub error: Option<String>,
    pub loading: bool,
    pub name_input: String,
    pub type_input: String,
    pub cards: Vec<PetCardView>,
}

/// Render-ready projection of one pet card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetCardView {
    pub pet_id: String,
    pub created_at: String,
    pub name_field: String,
    pub type_field: String,
    /// First media URL, shown as the card image.
    pub image_url: Option<String>,
    pub selected_file: Option<String>,
    pub tag_busy: bool,
    pub tags_line: String,
    /// Pipe-joined dump of all media URLs; absent when there are none.
    pub media_line: Option<String>,
}

pub(crate) fn tags_line(record: &PetRecord) -> String {
    if record.vision_tags.is_empty() {
        return "visionTags: (none yet)".to_string();
    }
    let tagged_at = if record.vision_tagged_at.is_empty() {
        "unknown"
    } else {
        record.vision_tagged_at.as_str()
    };
    format!(
        "visionTags: {} (at {})",
        record.vision_tags.join(", "),
        tagged_at
    )
}

pub(crate) fn media_line(record: &PetRecord) -> Option<String> {
    if record.media_urls.is_empty() {
        None
    } else {
        Some(format!("mediaUrls: {}", record.media_urls.join(" | ")))
    }
}
