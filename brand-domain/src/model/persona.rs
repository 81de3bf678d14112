use super::ids::{BrandId, PersonaBoardId, PersonaId, TeamId};
use brand_macros::record;

#[record(kind = PersonaBoard, id = PersonaBoardId)]
pub struct PersonaBoard {
    pub name: String,
    pub brand_id: BrandId,
    pub team_id: Option<TeamId>,
}

#[record(kind = Persona, id = PersonaId)]
pub struct Persona {
    pub name: String,
    #[belongs_to(PersonaBoard)]
    pub persona_board_id: PersonaBoardId,
    pub team_id: Option<TeamId>,
    pub role: Option<String>,
}
