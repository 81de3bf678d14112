use super::guarded::{DeleteDescriptor, DeleteTarget, DeletedSnapshot};
use crate::dto::Dto;
use brand_domain::model::{Persona, PersonaBoardId, PersonaId};
use serde::Serialize;

pub const NAME: &str = "brands.personas.DELETE";
pub const LIST_QUERY: &str = "brands.personas.LIST";

#[derive(Debug, Serialize)]
pub struct PersonaDeleted {
    pub persona_id: PersonaId,
    pub persona_name: String,
    pub persona_board_id: PersonaBoardId,
}

impl Dto for PersonaDeleted {}

impl DeletedSnapshot for PersonaDeleted {
    fn display_name(&self) -> &str {
        &self.persona_name
    }
}

fn snapshot(persona: &Persona) -> PersonaDeleted {
    PersonaDeleted {
        persona_id: persona.id,
        persona_name: persona.name.clone(),
        persona_board_id: persona.persona_board_id,
    }
}

pub fn descriptor() -> DeleteDescriptor<Persona, PersonaDeleted> {
    DeleteDescriptor::<Persona, PersonaDeleted>::builder()
        .name(NAME)
        .description(
            "Löscht eine Persona (DELETE /brands/{brand}/personas/{persona_id}). \
             Erforderlicher Parameter: persona_id.",
        )
        .id_field("persona_id")
        .id_description("ID der zu löschenden Persona")
        .not_found_code("PERSONA_NOT_FOUND")
        .not_found_message("Die Persona wurde nicht gefunden.")
        .label("Persona")
        .target(DeleteTarget::Itself)
        .snapshot(snapshot)
        .invalidates(LIST_QUERY)
        .build()
}
