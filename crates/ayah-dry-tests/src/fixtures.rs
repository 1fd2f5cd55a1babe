// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! API payload builders and URL helpers.

/// Body shaped like a successful `GET /v1/ayah/{n}` response.
///
/// `surah` of `None` omits the `surah` object entirely.
pub fn ayah_body(text: &str, surah: Option<&str>) -> String {
    let text = json_string(text);
    match surah {
        Some(name) => format!(
            r#"{{"code":200,"status":"OK","data":{{"text":{text},"surah":{{"name":{}}}}}}}"#,
            json_string(name)
        ),
        None => format!(r#"{{"code":200,"status":"OK","data":{{"text":{text}}}}}"#),
    }
}

/// Trailing path segment of a request URL, parsed as an ayah number.
pub fn ayah_number_from_url(url: &str) -> Option<u16> {
    url.rsplit('/').next()?.parse().ok()
}

fn json_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c if u32::from(c) < 0x20 => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
