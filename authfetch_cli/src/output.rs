use authfetch_lib::ResponseDescriptor;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Body,
    Json,
    Table,
}

/// Response as printed by `--output json`.
#[derive(Serialize)]
pub struct ResponseEnvelope {
    pub status: u16,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// The body as JSON when it parses, otherwise as a string.
    pub body: serde_json::Value,
}

impl From<&ResponseDescriptor> for ResponseEnvelope {
    fn from(resp: &ResponseDescriptor) -> Self {
        let body = resp
            .json::<serde_json::Value>()
            .unwrap_or_else(|_| serde_json::Value::String(resp.text().into_owned()));
        Self {
            status: resp.status.as_u16(),
            url: resp.url.clone(),
            headers: header_pairs(resp),
            body,
        }
    }
}

#[derive(Tabled)]
struct HeaderRow {
    #[tabled(rename = "Header")]
    name: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn header_pairs(resp: &ResponseDescriptor) -> Vec<(String, String)> {
    resp.headers
        .iter()
        .map(|(name, value)| {
            let value = match value.to_str() {
                Ok(v) => v.to_string(),
                Err(_) => String::from_utf8_lossy(value.as_bytes()).into_owned(),
            };
            (name.as_str().to_string(), value)
        })
        .collect()
}

pub fn print_body(resp: &ResponseDescriptor) {
    let text = resp.text();
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

pub fn print_table(resp: &ResponseDescriptor) {
    println!("{}", render_table(resp));
}

fn render_table(resp: &ResponseDescriptor) -> String {
    let mut rows = vec![HeaderRow {
        name: "(status)".to_string(),
        value: resp.status.to_string(),
    }];
    rows.extend(
        header_pairs(resp)
            .into_iter()
            .map(|(name, value)| HeaderRow { name, value }),
    );
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use authfetch_lib::authfetch_api::header::CONTENT_TYPE;
    use authfetch_lib::authfetch_api::{HeaderMap, HeaderValue, StatusCode};

    use super::*;

    fn response(status: StatusCode, body: &'static str) -> ResponseDescriptor {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        ResponseDescriptor {
            url: "https://api.example/items/1".to_string(),
            status,
            headers,
            body: body.as_bytes().to_vec().into(),
        }
    }

    #[test]
    fn envelope_embeds_json_body() {
        let env = ResponseEnvelope::from(&response(StatusCode::OK, r#"{"id":1}"#));
        assert_eq!(env.status, 200);
        assert_eq!(env.url, "https://api.example/items/1");
        assert_eq!(env.body["id"], 1);
        assert_eq!(
            env.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn envelope_falls_back_to_text_body() {
        let env = ResponseEnvelope::from(&response(StatusCode::OK, "plain"));
        assert_eq!(env.body, serde_json::Value::String("plain".to_string()));
    }

    #[test]
    fn table_lists_status_and_headers() {
        let rendered = render_table(&response(StatusCode::CREATED, ""));
        assert!(rendered.contains("201 Created"));
        assert!(rendered.contains("content-type"));
        assert!(rendered.contains("application/json"));
    }
}
