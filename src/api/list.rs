use std::collections::BTreeMap;

use serde::{ser::SerializeMap as _, Serialize, Serializer};

/// Query of a certificate listing (`GET /certs`).
///
/// Defaults to the first page of ten draft certificates. Override fields with struct update
/// syntax:
///
/// ```
/// use freessl::api::ListOptions;
///
/// let options = ListOptions {
///     status: "issued".to_owned(),
///     ..Default::default()
/// };
/// # assert_eq!(options.page, 1);
/// ```
///
/// Keys added with [`with()`](Self::with) replace the field of the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub page: u32,
    pub per_page: u32,
    pub status: String,

    /// Additional query parameters. `page`, `per_page` and `status` entries take precedence over
    /// the fields above, other keys are appended after them.
    pub extra: BTreeMap<String, String>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            status: "draft".to_owned(),
            extra: BTreeMap::new(),
        }
    }
}

impl ListOptions {
    /// Adds an extra query parameter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl Serialize for ListOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let page = self.page.to_string();
        let per_page = self.per_page.to_string();
        let fields = [
            ("page", page.as_str()),
            ("per_page", per_page.as_str()),
            ("status", self.status.as_str()),
        ];

        let mut map = serializer.serialize_map(None)?;

        for (key, value) in fields {
            let value = self.extra.get(key).map_or(value, String::as_str);
            map.serialize_entry(key, value)?;
        }

        for (key, value) in &self.extra {
            if !fields.iter().any(|(field, _)| *field == key.as_str()) {
                map.serialize_entry(key, value)?;
            }
        }

        map.end()
    }
}
