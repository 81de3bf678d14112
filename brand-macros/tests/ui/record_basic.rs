use brand_domain::record::{OnDelete, Record, ResourceKind, ResourceRef};
use brand_macros::{record, record_id};

#[record_id]
pub struct BoardId(i64);

#[record_id]
pub struct CardId(i64);

#[record_id]
pub struct LabelId(i64);

#[record(kind = AssetBoard, id = BoardId)]
pub struct Board {
    pub name: String,
}

#[record(kind = Asset, id = CardId)]
pub struct Card {
    pub title: String,
    #[belongs_to(AssetBoard)]
    pub board_id: BoardId,
    #[belongs_to(SeoKeywordCluster, on_delete = set_null)]
    pub label_id: Option<LabelId>,
}

fn main() {
    let board = Board {
        id: BoardId::new(1),
        name: "Q4".into(),
    };
    assert_eq!(board.id(), BoardId::new(1));
    assert!(board.links().is_empty());
    assert_eq!(Board::KIND, ResourceKind::AssetBoard);

    let card = Card {
        id: CardId::new(7),
        title: "hero".into(),
        board_id: BoardId::new(1),
        label_id: None,
    };
    let links = card.links();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].target, ResourceRef::new(ResourceKind::AssetBoard, 1));
    assert_eq!(links[0].on_delete, OnDelete::Cascade);

    let labelled = Card {
        label_id: Some(LabelId::new(3)),
        ..card.clone()
    };
    assert_eq!(labelled.links().len(), 2);
    assert_eq!(labelled.links()[1].field, "label_id");
    assert_eq!(labelled.resource(), ResourceRef::new(ResourceKind::Asset, 7));
}
