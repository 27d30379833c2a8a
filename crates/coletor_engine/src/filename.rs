use chrono::NaiveDate;

pub const EXPORT_PREFIX: &str = "infos_vagas_dados_";

/// `infos_vagas_dados_<YYYYMMDD>.json` for the given date.
pub fn default_export_filename(date: NaiveDate) -> String {
    format!("{EXPORT_PREFIX}{}.json", date.format("%Y%m%d"))
}

/// The filename a download is saved under: the user's override made safe,
/// or the default when the override is blank.
pub fn resolve_export_filename(input: Option<&str>, date: NaiveDate) -> String {
    let trimmed = input.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return default_export_filename(date);
    }
    let sanitized = sanitize(trimmed);
    if sanitized.is_empty() {
        default_export_filename(date)
    } else {
        sanitized
    }
}

fn sanitize(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    let cleaned = cleaned.trim_matches(&['_', ' ', '.'][..]);

    let mut name = String::with_capacity(cleaned.len());
    let mut prev_underscore = false;
    for c in cleaned.chars() {
        if c == '_' && prev_underscore {
            continue;
        }
        prev_underscore = c == '_';
        name.push(c);
    }

    let stem_len = name.find('.').unwrap_or(name.len());
    if is_reserved_windows_name(&name[..stem_len]) {
        name.insert(stem_len, '_');
    }
    name
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}
