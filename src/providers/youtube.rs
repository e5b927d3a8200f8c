/// Query parameters carried over to the embed URL, with the name the
/// player expects them under.
fn player_param(name: &str) -> Option<&'static str> {
    match name {
        "start" | "t" | "time_continue" => Some("start"),
        "end" => Some("end"),
        "list" => Some("list"),
        _ => None,
    }
}

/// Builds `id[?param=value&...]` from the `(id, query)` captures of the
/// YouTube pattern. Unknown query parameters are dropped and an empty id is
/// recovered from `v=`.
pub fn youtube_id(captures: &[&str]) -> String {
    let mut id = captures.first().copied().unwrap_or_default().to_string();
    let query = captures.get(1).copied().unwrap_or_default();

    if query.is_empty() {
        return id;
    }

    let mut params = Vec::new();
    for pair in query.get(1..).unwrap_or_default().split('&') {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));

        if id.is_empty() && name == "v" {
            id = value.to_string();
            continue;
        }

        if let Some(param) = player_param(name) {
            params.push(format!("{}={}", param, value));
        }
    }

    if params.is_empty() {
        id
    } else {
        format!("{}?{}", id, params.join("&"))
    }
}
