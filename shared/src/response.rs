//! Decoding of API bodies and the degrade-to-empty policy.
//!
//! Collection endpoints answer either with a bare JSON array or with a
//! paginated envelope `{"count": .., "next": .., "previous": .., "results":
//! [..]}`. Both shapes decode to a plain `Vec<T>` here so call sites never
//! look at the envelope.

use serde::{de::DeserializeOwned, Deserialize};

use crate::error::ApiError;

#[derive(Deserialize)]
#[serde(untagged)]
enum ListEnvelope<T> {
    Bare(Vec<T>),
    Paged {
        results: Vec<T>,
    },
}

impl<T> From<ListEnvelope<T>> for Vec<T> {
    fn from(envelope: ListEnvelope<T>) -> Self {
        match envelope {
            ListEnvelope::Bare(items) | ListEnvelope::Paged {
                results: items,
            } => items,
        }
    }
}

/// Decode a collection body in either accepted shape.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    let envelope: ListEnvelope<T> = serde_json::from_str(body)?;
    Ok(envelope.into())
}

/// Decode a single-entity body. An empty body or a JSON `null` is
/// [`ApiError::NotFound`].
pub fn decode_entity<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(ApiError::NotFound);
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Collapse a failed collection fetch into an empty list, handing the
/// failure to `report` first.
pub fn collection_or_empty_with<T>(
    what: &str,
    result: Result<Vec<T>, ApiError>,
    report: impl FnOnce(&str, &ApiError),
) -> Vec<T> {
    result.unwrap_or_else(|err| {
        report(what, &err);
        Vec::new()
    })
}

/// Collapse a failed entity fetch into `None`. A plain not-found is an
/// expected answer and is not reported.
pub fn entity_or_none_with<T>(
    what: &str,
    result: Result<T, ApiError>,
    report: impl FnOnce(&str, &ApiError),
) -> Option<T> {
    match result {
        Ok(entity) => Some(entity),
        Err(err) if err.is_not_found() => None,
        Err(err) => {
            report(what, &err);
            None
        },
    }
}

fn warn_failure(what: &str, err: &ApiError) {
    tracing::warn!("failed to load {what}: {err}");
}

/// [`collection_or_empty_with`] logging through `tracing`.
pub fn collection_or_empty<T>(what: &str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    collection_or_empty_with(what, result, warn_failure)
}

/// [`entity_or_none_with`] logging through `tracing`.
pub fn entity_or_none<T>(what: &str, result: Result<T, ApiError>) -> Option<T> {
    entity_or_none_with(what, result, warn_failure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tag;

    #[test]
    fn accepts_bare_array_and_results_envelope() {
        let bare: Vec<Tag> =
            decode_list(r#"[{"id": 1, "name": "Docker"}]"#).expect("bare array");
        let paged: Vec<Tag> = decode_list(
            r#"{"count": 1, "next": null, "previous": null,
                "results": [{"id": 1, "name": "Docker"}]}"#,
        )
        .expect("envelope");

        assert_eq!(bare, paged);
        assert_eq!(bare[0].name, "Docker");
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(matches!(decode_list::<Tag>(r#"{"items": []}"#), Err(ApiError::Decode(_))));
        assert!(matches!(decode_list::<Tag>("<html>"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn empty_or_null_entity_is_not_found() {
        assert_eq!(decode_entity::<Tag>(""), Err(ApiError::NotFound));
        assert_eq!(decode_entity::<Tag>(" null "), Err(ApiError::NotFound));
        assert_eq!(
            decode_entity::<Tag>(r#"{"id": 3, "name": "Terraform"}"#).map(|t| t.id),
            Ok(3)
        );
    }

    #[test]
    fn degrade_helpers_swallow_every_failure() {
        let empty: Vec<Tag> = collection_or_empty("tags", Err(ApiError::Status(500)));
        assert!(empty.is_empty());
        assert_eq!(entity_or_none::<Tag>("tag", Err(ApiError::NotFound)), None);
        assert_eq!(
            entity_or_none::<Tag>("tag", Err(ApiError::Network("reset".to_string()))),
            None
        );
    }

    #[test]
    fn failures_reach_the_report_hook_except_not_found() {
        let mut reported = Vec::new();
        let empty: Vec<Tag> = collection_or_empty_with("tags", Err(ApiError::Status(502)), |what, err| {
            reported.push(format!("{what}: {err}"))
        });
        assert!(empty.is_empty());

        let missing: Option<Tag> =
            entity_or_none_with("tag", Err(ApiError::NotFound), |what, _| reported.push(what.to_string()));
        assert_eq!(missing, None);

        let broken: Option<Tag> = entity_or_none_with(
            "tag",
            Err(ApiError::Decode("eof".to_string())),
            |what, _| reported.push(what.to_string()),
        );
        assert_eq!(broken, None);

        assert_eq!(reported, vec!["tags: HTTP error: 502".to_string(), "tag".to_string()]);
    }
}
