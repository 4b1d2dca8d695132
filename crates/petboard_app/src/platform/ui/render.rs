//! Renders the view model to text lines. Pure; printing happens in the loop.

use petboard_core::{AppViewModel, PetCardView};

pub(crate) fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("API base: {}", view.api_base));
    if let Some(error) = &view.error {
        lines.push(format!("Error: {error}"));
    }
    if !view.name_input.is_empty() || !view.type_input.is_empty() {
        lines.push(format!(
            "New pet: name=\"{}\" type=\"{}\"",
            view.name_input, view.type_input
        ));
    }
    if view.loading {
        lines.push("Loading...".to_string());
        return lines;
    }
    if view.cards.is_empty() {
        lines.push("No pets yet.".to_string());
        return lines;
    }
    for card in &view.cards {
        lines.push(String::new());
        render_card(&mut lines, card);
    }
    lines
}

fn render_card(lines: &mut Vec<String>, card: &PetCardView) {
    lines.push(format!("ID: {}", card.pet_id));
    lines.push(format!("  Created: {}", card.created_at));
    lines.push(format!("  Name: {}", card.name_field));
    lines.push(format!("  Type: {}", card.type_field));
    match &card.image_url {
        Some(url) => lines.push(format!("  Image: {url}")),
        None => lines.push("  No image".to_string()),
    }
    if let Some(file) = &card.selected_file {
        lines.push(format!("  File: {file}"));
    }
    let tag_label = if card.tag_busy { "Tagging..." } else { "Tag image" };
    lines.push(format!("  [{tag_label}]"));
    lines.push(format!("  {}", card.tags_line));
    if let Some(media) = &card.media_line {
        lines.push(format!("  {media}"));
    }
}
