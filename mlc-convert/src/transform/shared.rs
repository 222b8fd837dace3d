use crate::v1;
use crate::v2;

/// Rename `props` to `properties`; every other key is copied unchanged.
///
/// A `properties` key already present in the input wins over the renamed
/// `props` value and keeps its own position.
pub fn convert_shared(input: Option<&v1::Shared>) -> Option<v2::Shared> {
    let input = input?;
    let mut fields = serde_json::Map::new();
    if let Some(props) = input.0.get("props") {
        fields.insert("properties".to_string(), props.clone());
    }
    fields.extend(
        input
            .0
            .iter()
            .filter(|(key, _)| key.as_str() != "props")
            .map(|(key, value)| (key.clone(), value.clone())),
    );
    Some(v2::Shared(fields))
}
