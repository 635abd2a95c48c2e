/// Named seed colors offered by the picker.
pub const PRESETS: [(&str, &str); 10] = [
    ("red", "#FF0000"),
    ("yellow", "#FFFF00"),
    ("green", "#00FF00"),
    ("pink", "#FFC0CB"),
    ("black", "#000000"),
    ("white", "#FFFFFF"),
    ("blue", "#0000FF"),
    ("orange", "#FFA500"),
    ("purple", "#800080"),
    ("cyan", "#00FFFF"),
];

/// Look up a preset by name, ignoring case.
pub fn preset(name: &str) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|(preset, _)| preset.eq_ignore_ascii_case(name.trim()))
        .map(|(_, hex)| *hex)
}
