//! Image URL normalization.
//!
//! The backend is inconsistent about cover and avatar fields: some rows
//! carry a full URL, some an absolute static path, some a bare filename,
//! and some nothing at all. The UI always goes through these helpers so
//! every `<img>` gets a usable source.

#[cfg(test)]
#[path = "image_url_test.rs"]
mod image_url_test;

/// Static root for game cover art.
pub const GAME_COVER_BASE: &str = "/static/game/";
/// Static root for shopper avatars.
pub const AVATAR_BASE: &str = "/static/avatar/";

const DEFAULT_COVER: &str = "/static/game/default.png";
const DEFAULT_AVATAR: &str = "/static/avatar/default.png";

/// Normalize `raw` against `base`, falling back to `default` when empty.
///
/// Full `http(s)` URLs and paths already under `/static/` pass through
/// untouched; anything else is treated as a bare filename under `base`.
pub fn resolve(raw: &str, base: &str, default: &str) -> String {
    if raw.is_empty() {
        return default.to_owned();
    }
    if raw.starts_with("http://") || raw.starts_with("https://") || raw.starts_with("/static/") {
        return raw.to_owned();
    }
    let name = raw.strip_prefix('/').unwrap_or(raw);
    format!("{base}{name}")
}

/// Usable source for a game cover field.
pub fn game_cover(raw: &str) -> String {
    resolve(raw, GAME_COVER_BASE, DEFAULT_COVER)
}

/// Usable source for a shopper avatar field.
pub fn avatar(raw: &str) -> String {
    resolve(raw, AVATAR_BASE, DEFAULT_AVATAR)
}
