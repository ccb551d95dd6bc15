use serde::{ Deserialize, Serialize };

/// One hit scraped from a results page.
///
/// The `html_*` fields keep inline markup such as the `<b>` tags wrapped around
/// matched terms. The other three carry the visible text only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResult {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub html_formatted_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub html_title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub html_snippet: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub formatted_url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub snippet: String,
    pub icon: Icon,
}

/// Favicon shown next to a result. Missing attributes read as empty or zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icon {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub src: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub width: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub height: i64,
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_uses_camel_case_and_omits_empty() {
        let result = SearchResult {
            html_title: "Supercazzola - <b>Wikipedia</b>".to_string(),
            title: "Supercazzola - Wikipedia".to_string(),
            icon: Icon {
                src: "//external-content.duckduckgo.com/ip3/it.wikipedia.org.ico".to_string(),
                width: 16,
                height: 0,
            },
            ..Default::default()
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            json!({
                "htmlTitle": "Supercazzola - <b>Wikipedia</b>",
                "title": "Supercazzola - Wikipedia",
                "icon": {
                    "src": "//external-content.duckduckgo.com/ip3/it.wikipedia.org.ico",
                    "width": 16
                }
            })
        );
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let result: SearchResult = serde_json::from_value(
            json!({ "formattedUrl": "it.wikipedia.org/wiki/Supercazzola" })
        ).unwrap();

        assert_eq!(result.formatted_url, "it.wikipedia.org/wiki/Supercazzola");
        assert_eq!(result.snippet, "");
        assert_eq!(result.icon, Icon::default());
    }
}
