//! Inbound callback schema and shape validation.
//!
//! The automation system calls back with the links it generated for a client.
//! The client is named by the internal id, the unique client identifier, or
//! both; the shape check only ensures one of them is present.
//!
//! The body arrives as untyped JSON. Only `secret` is read from it before the
//! caller is authenticated; the typed schema is applied afterwards.

use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::links::LinkType;
use crate::types::DbId;

/// Body of `POST /webhooks/callback`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CallbackPayload {
    pub unique_client_id: Option<String>,
    pub client_id: Option<DbId>,
    pub secret: Option<String>,
    pub links: Option<Vec<CallbackLink>>,
}

/// One generated resource as sent by the automation system.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CallbackLink {
    /// Free-form type tag; see [`LinkType::from_tag`].
    #[serde(rename = "type")]
    pub link_type: Option<String>,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub workflow_id: Option<String>,
}

/// Identifier pair used to resolve the target client.
///
/// At least one side is present once validation has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRef {
    pub client_id: Option<DbId>,
    pub unique_client_id: Option<String>,
}

impl ClientRef {
    /// Human-readable key for error messages and logs.
    pub fn display_key(&self) -> String {
        match (&self.unique_client_id, self.client_id) {
            (Some(code), _) => code.clone(),
            (None, Some(id)) => id.to_string(),
            (None, None) => "<none>".to_string(),
        }
    }
}

/// A link ready to be persisted for the resolved client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLink {
    pub link_type: LinkType,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub workflow_id: Option<String>,
}

/// A callback that passed the shape check.
#[derive(Debug, Clone)]
pub struct ValidatedCallback {
    pub target: ClientRef,
    pub links: Vec<GeneratedLink>,
}

/// The `secret` member of a raw callback body, if it is a string.
///
/// Reads nothing else, so an unauthenticated caller learns nothing about the
/// schema from the response.
pub fn presented_secret(body: &Value) -> Option<&str> {
    body.get("secret").and_then(Value::as_str)
}

/// Audit copy of a raw callback body: `secret` removed and NUL characters
/// dropped from every string and key, since Postgres rejects `\u0000` in
/// JSONB and the failed-callback entry must still be writable.
pub fn audit_snapshot(body: &Value) -> Value {
    let mut snapshot = body.clone();
    if let Some(object) = snapshot.as_object_mut() {
        object.remove("secret");
    }
    strip_nul(&mut snapshot);
    snapshot
}

/// `value` with NUL characters removed.
pub fn without_nul(value: &str) -> String {
    value.replace('\0', "")
}

fn strip_nul(value: &mut Value) {
    match value {
        Value::String(s) if s.contains('\0') => *s = without_nul(s),
        Value::Array(items) => items.iter_mut().for_each(strip_nul),
        Value::Object(object) => {
            if object.keys().any(|k| k.contains('\0')) {
                *object = std::mem::take(object)
                    .into_iter()
                    .map(|(k, v)| (without_nul(&k), v))
                    .collect();
            }
            object.values_mut().for_each(strip_nul);
        }
        _ => {}
    }
}

impl CallbackPayload {
    /// Apply the typed schema to an already authenticated body.
    pub fn from_json(body: Value) -> Result<Self, CoreError> {
        serde_json::from_value(body)
            .map_err(|e| CoreError::Validation(format!("Invalid callback payload: {e}")))
    }

    /// Check the payload's shape: at least one non-empty client identifier,
    /// a present `links` array (which may be empty), and a non-empty title
    /// and url on every link.
    pub fn validate_shape(&self) -> Result<ValidatedCallback, CoreError> {
        let unique_client_id = self
            .unique_client_id
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string);

        if unique_client_id.is_none() && self.client_id.is_none() {
            return Err(CoreError::Validation("Missing client identifier".into()));
        }

        let Some(links) = &self.links else {
            return Err(CoreError::Validation(
                "Invalid or missing links array".into(),
            ));
        };

        let links = links
            .iter()
            .enumerate()
            .map(|(index, link)| link.to_generated(index))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidatedCallback {
            target: ClientRef {
                client_id: self.client_id,
                unique_client_id,
            },
            links,
        })
    }
}

impl CallbackLink {
    fn to_generated(&self, index: usize) -> Result<GeneratedLink, CoreError> {
        let title = self.title.trim();
        let url = self.url.trim();
        if title.is_empty() || url.is_empty() {
            return Err(CoreError::Validation(format!(
                "Link {index} requires a title and url"
            )));
        }
        Ok(GeneratedLink {
            link_type: LinkType::from_tag(self.link_type.as_deref()),
            title: title.to_string(),
            url: url.to_string(),
            description: optional(&self.description),
            icon: optional(&self.icon),
            workflow_id: optional(&self.workflow_id),
        })
    }
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> CallbackPayload {
        serde_json::from_value(value).expect("payload should deserialize")
    }

    #[test]
    fn accepts_unique_id_with_links() {
        let payload = parse(json!({
            "uniqueClientId": "CL-123ABC",
            "secret": "s3cret",
            "links": [{ "type": "google_doc", "title": "Doc", "url": "https://x" }]
        }));
        let validated = payload.validate_shape().unwrap();
        assert_eq!(validated.target.unique_client_id.as_deref(), Some("CL-123ABC"));
        assert_eq!(validated.target.client_id, None);
        assert_eq!(validated.links.len(), 1);
        assert_eq!(validated.links[0].link_type, LinkType::GoogleDoc);
    }

    #[test]
    fn missing_identifiers_rejected() {
        let payload = parse(json!({ "uniqueClientId": "  ", "links": [] }));
        assert_matches!(
            payload.validate_shape(),
            Err(CoreError::Validation(ref msg)) if msg == "Missing client identifier"
        );
    }

    #[test]
    fn missing_links_rejected() {
        let payload = parse(json!({ "clientId": 4 }));
        assert_matches!(
            payload.validate_shape(),
            Err(CoreError::Validation(ref msg)) if msg.contains("links")
        );
    }

    #[test]
    fn empty_links_accepted() {
        let payload = parse(json!({ "clientId": 4, "links": [] }));
        let validated = payload.validate_shape().unwrap();
        assert!(validated.links.is_empty());
        assert_eq!(validated.target.client_id, Some(4));
    }

    #[test]
    fn unknown_link_type_defaults_to_other() {
        let payload = parse(json!({
            "clientId": 4,
            "links": [
                { "title": "Board", "url": "https://b", "workflowId": "wf-1" },
                { "type": "figma", "title": "Design", "url": "https://f", "icon": "" }
            ]
        }));
        let links = payload.validate_shape().unwrap().links;
        assert_eq!(links[0].link_type, LinkType::Other);
        assert_eq!(links[0].workflow_id.as_deref(), Some("wf-1"));
        assert_eq!(links[1].link_type, LinkType::Other);
        assert_eq!(links[1].icon, None);
    }

    #[test]
    fn blank_link_title_rejected() {
        let payload = parse(json!({
            "clientId": 4,
            "links": [{ "type": "clickup", "title": " ", "url": "https://c" }]
        }));
        assert_matches!(payload.validate_shape(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn snapshot_omits_secret() {
        let body = json!({
            "uniqueClientId": "CL-123ABC",
            "secret": "s3cret",
            "links": []
        });
        let snapshot = audit_snapshot(&body);
        assert!(snapshot.get("secret").is_none());
        assert_eq!(snapshot["uniqueClientId"], "CL-123ABC");
        assert_eq!(body["secret"], "s3cret");
    }

    #[test]
    fn snapshot_drops_nul_characters() {
        let body = json!({
            "uniqueClientId": "CL-123ABC",
            "links": [{ "title": "bad\u{0}title", "url": "https://x" }],
            "odd\u{0}key": ["a\u{0}"]
        });
        let snapshot = audit_snapshot(&body);
        assert_eq!(snapshot["links"][0]["title"], "badtitle");
        assert_eq!(snapshot["oddkey"][0], "a");
        assert!(!snapshot.to_string().contains("\\u0000"));
    }

    #[test]
    fn secret_read_without_schema() {
        assert_eq!(
            presented_secret(&json!({ "secret": "s3cret", "links": "nope", "extra": 1 })),
            Some("s3cret")
        );
        assert_eq!(presented_secret(&json!({ "secret": 42 })), None);
        assert_eq!(presented_secret(&json!(["secret"])), None);
    }

    #[test]
    fn schema_errors_are_validation_errors() {
        for body in [
            json!({ "clientId": 1, "links": "not-an-array" }),
            json!({ "clientId": "abc", "links": [] }),
            json!({ "clientId": 1, "links": [{ "type": "clickup" }] }),
            json!({ "clientId": 1, "links": [], "extra": true }),
        ] {
            assert_matches!(CallbackPayload::from_json(body), Err(CoreError::Validation(_)));
        }
    }

    #[test]
    fn display_key_prefers_unique_id() {
        let both = ClientRef {
            client_id: Some(3),
            unique_client_id: Some("CL-AAAAAA".into()),
        };
        assert_eq!(both.display_key(), "CL-AAAAAA");
        let id_only = ClientRef {
            client_id: Some(3),
            unique_client_id: None,
        };
        assert_eq!(id_only.display_key(), "3");
    }
}
