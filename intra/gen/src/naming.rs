//! Accessor naming.
//!
//! The accessor name concatenates every fixed segment after the version,
//! capitalized (`/v2/campus/:campus_id/users` -> `CampusUsers`). The Rust
//! method identifier is that name made legal, so two accessors share an
//! identifier exactly when they share a name.
//!
//! Capitalization only touches the first character, so
//! `/v2/achievements_users` becomes `Achievements_users` and stays distinct
//! from `/v2/achievements/:id/users` (`AchievementsUsers`).

use intra_define::PathTemplate;

/// Name used when a template has no fixed segment after the version.
const ROOT_NAME: &str = "Root";

/// Keywords that cannot be used as plain identifiers.
const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
    "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield",
];

/// Parameter names already taken by every generated accessor.
const RESERVED_PARAMS: &[&str] = &["options"];

/// Uppercases the first character and leaves the rest unchanged.
///
/// ## Examples
///
/// ```
/// use intra_gen::naming::capitalize;
///
/// assert_eq!(capitalize("users"), "Users");
/// assert_eq!(capitalize("achievements_users"), "Achievements_users");
/// assert_eq!(capitalize("cursusUsers"), "CursusUsers");
/// ```
pub fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Derives the accessor name from a template's fixed segments.
///
/// ## Examples
///
/// ```
/// use intra_define::PathTemplate;
/// use intra_gen::naming::accessor_name;
///
/// let template = PathTemplate::parse("/v2/campus/:campus_id/users", "v2").unwrap();
/// assert_eq!(accessor_name(&template), "CampusUsers");
/// ```
pub fn accessor_name(template: &PathTemplate) -> String {
    let name: String = template.resource_segments().map(capitalize).collect();
    if name.is_empty() {
        ROOT_NAME.to_string()
    } else {
        name
    }
}

/// Derives the Rust method identifier from an accessor name.
///
/// Identifier-safe names are returned unchanged.
///
/// ## Examples
///
/// ```
/// use intra_gen::naming::method_ident;
///
/// assert_eq!(method_ident("CampusUsers"), "CampusUsers");
/// assert_eq!(method_ident("Campus_users"), "Campus_users");
/// assert_eq!(method_ident("MeSlots.json"), "MeSlots_json");
/// ```
pub fn method_ident(name: &str) -> String {
    sanitize_ident(name)
}

/// Derives the Rust identifier for a path parameter.
///
/// ```
/// use intra_gen::naming::param_ident;
///
/// assert_eq!(param_ident("campus_id"), "campus_id");
/// assert_eq!(param_ident("type"), "type_");
/// assert_eq!(param_ident("options"), "options_");
/// ```
pub fn param_ident(name: &str) -> String {
    reserve(sanitize_ident(name), RESERVED_PARAMS)
}

/// Maps arbitrary text onto a legal, non-keyword identifier.
///
/// Characters outside `[A-Za-z0-9_]` become `_`, a leading digit gets a `_`
/// prefix, and keywords get a `_` suffix.
pub fn sanitize_ident(text: &str) -> String {
    let mut ident: String = text
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if ident.is_empty() || ident.chars().all(|c| c == '_') {
        ident.push_str("param");
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if RUST_KEYWORDS.contains(&ident.as_str()) {
        ident.push('_');
    }
    ident
}

fn reserve(ident: String, reserved: &[&str]) -> String {
    if reserved.contains(&ident.as_str()) {
        format!("{ident}_")
    } else {
        ident
    }
}
