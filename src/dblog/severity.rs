use serde_json::Value;

/// Syslog severity names indexed by their numeric level.
pub const SEVERITY_LEVELS: [&str; 8] = [
    "Emergency",
    "Alert",
    "Critical",
    "Error",
    "Warning",
    "Notice",
    "Info",
    "Debug",
];

pub(super) fn severity_label(value: Option<&Value>) -> String {
    match value {
        Some(Value::Number(number)) => number
            .as_u64()
            .and_then(level_name)
            .map(str::to_owned)
            .unwrap_or_else(|| number.to_string()),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if let Ok(level) = trimmed.parse::<u64>()
                && let Some(name) = level_name(level)
            {
                return name.to_owned();
            }

            SEVERITY_LEVELS
                .iter()
                .find(|name| name.eq_ignore_ascii_case(trimmed))
                .map(|name| (*name).to_owned())
                .unwrap_or_else(|| trimmed.to_owned())
        }
        _ => String::new(),
    }
}

fn level_name(level: u64) -> Option<&'static str> {
    usize::try_from(level)
        .ok()
        .and_then(|index| SEVERITY_LEVELS.get(index))
        .copied()
}
