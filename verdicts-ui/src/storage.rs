//! Signup draft persistence in localStorage, keyed per role.

use verdicts_core::roles::Role;
use verdicts_core::signup::SignupDraft;
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_draft(role: Role) -> Option<SignupDraft> {
    let raw = local_storage()?
        .get_item(&SignupDraft::storage_key(role))
        .ok()
        .flatten()?;
    match serde_json::from_str(&raw) {
        Ok(draft) => Some(draft),
        Err(err) => {
            leptos::logging::warn!("discarding unreadable signup draft: {err}");
            clear_draft(role);
            None
        }
    }
}

pub fn save_draft(draft: &SignupDraft) {
    let Some(storage) = local_storage() else {
        return;
    };
    match serde_json::to_string(draft) {
        Ok(json) => {
            let _ = storage.set_item(&SignupDraft::storage_key(draft.role), &json);
        }
        Err(err) => leptos::logging::error!("could not serialize signup draft: {err}"),
    }
}

pub fn clear_draft(role: Role) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(&SignupDraft::storage_key(role));
    }
}
