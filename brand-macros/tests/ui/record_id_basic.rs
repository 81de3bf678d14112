use brand_domain::record::RecordId;
use brand_macros::record_id;

#[record_id]
pub struct CampaignId(i64);

fn assert_record_id<T: RecordId>(_: T) {}

fn main() {
    let id = CampaignId::new(42);
    assert_eq!(id.value(), 42);
    assert_eq!(id.to_string(), "42");
    assert_eq!(" 42 ".parse::<CampaignId>().unwrap(), id);
    assert_eq!(i64::from(id), 42);
    assert_eq!(serde_json::to_string(&id).unwrap(), "42");

    let copied = id;
    assert_eq!(copied, CampaignId::from(42));
    assert_record_id(id);
}
