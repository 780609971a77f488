use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "
    export function copy_text(text) {
        navigator.clipboard.writeText(text);
    }
")]
extern "C" {
    pub fn copy_text(text: &str);
}

/// Extracts one parameter from a location query string ("?a=1&b=2").
pub fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .strip_prefix('?')?
        .split('&')
        .find_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            (k == key && !v.is_empty()).then(|| v.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_parameter_anywhere_in_the_query() {
        assert_eq!(
            query_param("?token=abc&role=admin", "role").as_deref(),
            Some("admin")
        );
        assert_eq!(
            query_param("?token=abc&role=admin", "token").as_deref(),
            Some("abc")
        );
    }

    #[test]
    fn missing_or_empty_parameters_are_none() {
        assert_eq!(query_param("", "token"), None);
        assert_eq!(query_param("?other=1", "token"), None);
        assert_eq!(query_param("?token=", "token"), None);
    }
}
