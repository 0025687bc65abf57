use super::*;

fn unsupported() -> String {
    "Browser history APIs are only available when compiled for wasm32".to_string()
}

pub fn current_location() -> Result<LocationSnapshot, String> {
    Err(unsupported())
}

pub fn push_url(_url: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn replace_url(_url: &str) -> Result<(), String> {
    Err(unsupported())
}

pub fn add_popstate_listener(_listener: NavigationListener) -> Result<ListenerId, String> {
    Err(unsupported())
}

pub fn remove_popstate_listener(_id: ListenerId) -> Result<(), String> {
    Ok(())
}

pub fn dispatch_popstate() -> Result<(), String> {
    Err(unsupported())
}
