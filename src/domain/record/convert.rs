//! Conversion: ApiRecord → DisplayResult (TryFrom + allow-list rendering).

use super::wire::ApiRecord;
use super::{DetailField, DetailItem, DisplayResult, RecordError, DETAIL_FIELDS};
use super::{DEFAULT_IMAGE_ALT, UNKNOWN_NAME};
use crate::shared::resolve_image;
use serde_json::Value;

/// Render a field value for display. `None` means "treat as absent".
///
/// Falsy scalars (`null`, `false`, `0`, blank strings) are absent.
fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(render_value).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(n.to_string()),
        Value::Object(fields) if fields.is_empty() => None,
        Value::Object(_) => Some(value.to_string()),
    }
}

fn lookup_field<'a>(record: &'a ApiRecord, field: &DetailField) -> Option<&'a Value> {
    std::iter::once(field.key)
        .chain(field.aliases.iter().copied())
        .filter_map(|key| record.get(key))
        .find(|v| render_value(v).is_some())
}

/// Build the detail list from the allow-list, in allow-list order.
fn detail_items(record: &ApiRecord) -> Vec<DetailItem> {
    DETAIL_FIELDS
        .iter()
        .filter_map(|field| {
            let value = lookup_field(record, field).and_then(render_value)?;
            Some(DetailItem {
                label: field.label.to_string(),
                value,
            })
        })
        .collect()
}

/// `(record, placeholder_image)` → display result.
impl TryFrom<(ApiRecord, &str)> for DisplayResult {
    type Error = RecordError;

    fn try_from((record, placeholder): (ApiRecord, &str)) -> Result<Self, Self::Error> {
        if record.is_empty() {
            return Err(RecordError::Empty);
        }

        let image_url = resolve_image(record.image(), placeholder);
        let details = detail_items(&record);

        Ok(DisplayResult {
            name: record.name().unwrap_or(UNKNOWN_NAME).to_string(),
            image_url,
            image_alt: record.name().unwrap_or(DEFAULT_IMAGE_ALT).to_string(),
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::wire::RecordResponse;
    use serde_json::json;

    const PLACEHOLDER: &str = "./imgs/placeholder.jpg";

    fn record(value: Value) -> ApiRecord {
        RecordResponse(value).into_record().unwrap()
    }

    #[test]
    fn test_present_fields_only() {
        let result = DisplayResult::try_from((
            record(json!({"name": "Tanjiro Kamado", "image": "https://example.com/t.png", "race": "Human"})),
            PLACEHOLDER,
        ))
        .unwrap();

        assert_eq!(result.name, "Tanjiro Kamado");
        assert_eq!(result.image_url, "https://example.com/t.png");
        assert_eq!(result.detail_lines(), vec!["Raça: Human".to_string()]);
    }

    #[test]
    fn test_allow_list_order_not_record_order() {
        let result = DisplayResult::try_from((
            record(json!({
                "status": "Alive",
                "age": "15",
                "race": "Human",
                "favourite food": "Rice"
            })),
            PLACEHOLDER,
        ))
        .unwrap();

        let labels: Vec<&str> = result.details.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, vec!["Raça", "Idade", "Status"]);
    }

    #[test]
    fn test_arrays_joined_and_empties_skipped() {
        let result = DisplayResult::try_from((
            record(json!({
                "name": "Zenitsu Agatsuma",
                "affiliation": ["Demon Slayer Corps", "Kamado family"],
                "relative(s)": [],
                "gender": "",
                "height": null,
                "age": 16
            })),
            PLACEHOLDER,
        ))
        .unwrap();

        assert_eq!(
            result.detail("Afiliação"),
            Some("Demon Slayer Corps, Kamado family")
        );
        assert_eq!(result.detail("Idade"), Some("16"));
        assert_eq!(result.detail("Parentes"), None);
        assert_eq!(result.detail("Gênero"), None);
        assert_eq!(result.detail("Altura"), None);
    }

    #[test]
    fn test_zero_and_false_are_absent() {
        let result = DisplayResult::try_from((
            record(json!({
                "name": "Genya Shinazugawa",
                "age": 0,
                "status": false,
                "weight": 0.0,
                "height": 180,
                "stage play": true
            })),
            PLACEHOLDER,
        ))
        .unwrap();

        assert_eq!(
            result.detail_lines(),
            vec!["Altura: 180".to_string(), "Peça Teatral: true".to_string()]
        );
    }

    #[test]
    fn test_eye_color_alias_with_trailing_space() {
        let result =
            DisplayResult::try_from((record(json!({"eye color ": "Burgundy"})), PLACEHOLDER))
                .unwrap();
        assert_eq!(result.detail("Cor dos Olhos"), Some("Burgundy"));
    }

    #[test]
    fn test_missing_name_and_image_fall_back() {
        let result =
            DisplayResult::try_from((record(json!({"race": "Demon"})), PLACEHOLDER)).unwrap();
        assert_eq!(result.name, UNKNOWN_NAME);
        assert_eq!(result.image_alt, DEFAULT_IMAGE_ALT);
        assert_eq!(result.image_url, PLACEHOLDER);
    }

    #[test]
    fn test_image_is_sanitized() {
        let result = DisplayResult::try_from((
            record(json!({
                "name": "Muzan",
                "image": "https://static.wikia.nocookie.net/ds/images/m.webp/revision/latest?cb=9"
            })),
            PLACEHOLDER,
        ))
        .unwrap();
        assert_eq!(
            result.image_url,
            "https://static.wikia.nocookie.net/ds/images/m.webp"
        );
        assert_eq!(result.image_alt, "Muzan");
    }

    #[test]
    fn test_empty_record_rejected() {
        let err = DisplayResult::try_from((record(json!({})), PLACEHOLDER)).unwrap_err();
        assert_eq!(err, RecordError::Empty);
    }
}
