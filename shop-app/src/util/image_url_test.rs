use super::*;

#[test]
fn empty_field_falls_back_to_default() {
    assert_eq!(game_cover(""), "/static/game/default.png");
    assert_eq!(avatar(""), "/static/avatar/default.png");
}

#[test]
fn full_urls_pass_through() {
    assert_eq!(
        game_cover("https://cdn.example.com/zelda.png"),
        "https://cdn.example.com/zelda.png"
    );
    assert_eq!(
        game_cover("http://cdn.example.com/zelda.png"),
        "http://cdn.example.com/zelda.png"
    );
}

#[test]
fn static_paths_pass_through() {
    assert_eq!(game_cover("/static/game/zelda.png"), "/static/game/zelda.png");
    assert_eq!(avatar("/static/avatar/7.png"), "/static/avatar/7.png");
}

#[test]
fn bare_filenames_are_joined_to_the_base() {
    assert_eq!(game_cover("zelda.png"), "/static/game/zelda.png");
    assert_eq!(avatar("7.png"), "/static/avatar/7.png");
}

#[test]
fn leading_slash_does_not_double_up() {
    assert_eq!(game_cover("/zelda.png"), "/static/game/zelda.png");
}
