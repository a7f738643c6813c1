pub fn about() -> Vec<String> {
    vec![
        "Control panel for an addressable LED strip driven by an ESP \
        board over its HTTP API.".to_string(),
        "\n".to_string(),
        "The power indicator always mirrors the state the device last \
        reported; the panel never guesses it locally.".to_string(),
        "Set RUST_LOG=debug to trace individual device calls.".to_string(),
        "Device URL and request timeout live in strip_panel.json in your \
        config directory, or pass --url for a one-off override.".to_string(),
    ]
}
