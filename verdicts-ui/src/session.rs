//! Token and user-object persistence. The bearer token lives in both a
//! cookie and localStorage; the logged-in user record is stored per role.

use verdicts_core::roles::Role;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Storage};

pub const TOKEN_COOKIE: &str = "token";
pub const TOKEN_STORAGE_KEY: &str = "authToken";
const TOKEN_MAX_AGE_SECS: u32 = 604_800;

fn user_key(role: Role) -> &'static str {
    match role {
        Role::Admin => "adminUser",
        Role::Attorney => "attorneyUser",
        Role::Juror => "jurorUser",
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

pub fn store_session(role: Role, token: &str, user_json: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!(
            "{TOKEN_COOKIE}={token}; path=/; max-age={TOKEN_MAX_AGE_SECS}; samesite=lax"
        ));
    }
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        for other in [Role::Admin, Role::Attorney, Role::Juror] {
            if other != role {
                let _ = storage.remove_item(user_key(other));
            }
        }
        let _ = storage.set_item(user_key(role), user_json);
    }
}

pub fn token() -> Option<String> {
    if let Some(doc) = html_document() {
        if let Ok(header) = doc.cookie() {
            if let Some(token) = parse_cookie(&header, TOKEN_COOKIE) {
                if !token.is_empty() {
                    return Some(token);
                }
            }
        }
    }
    local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
}

/// Which role is logged in, inferred from the stored user object.
pub fn current_role() -> Option<Role> {
    let storage = local_storage()?;
    [Role::Admin, Role::Attorney, Role::Juror]
        .into_iter()
        .find(|role| matches!(storage.get_item(user_key(*role)), Ok(Some(_))))
}

pub fn user_json(role: Role) -> Option<String> {
    local_storage()?.get_item(user_key(role)).ok().flatten()
}

pub fn clear_session() {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(&format!("{TOKEN_COOKIE}=; path=/; max-age=0"));
    }
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        for role in [Role::Admin, Role::Attorney, Role::Juror] {
            let _ = storage.remove_item(user_key(role));
        }
    }
}

/// True when a token exists and the stored user matches `role`.
pub fn is_logged_in_as(role: Role) -> bool {
    token().is_some() && current_role() == Some(role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cookie_finds_the_named_pair() {
        let header = "theme=dark; token=abc.def.ghi; sid=42";
        assert_eq!(parse_cookie(header, "token"), Some("abc.def.ghi".into()));
        assert_eq!(parse_cookie(header, "sid"), Some("42".into()));
        assert_eq!(parse_cookie(header, "missing"), None);
    }

    #[test]
    fn parse_cookie_ignores_name_substrings() {
        let header = "xtoken=nope; token=yes";
        assert_eq!(parse_cookie(header, "token"), Some("yes".into()));
    }

    #[test]
    fn parse_cookie_handles_empty_header() {
        assert_eq!(parse_cookie("", "token"), None);
    }
}
