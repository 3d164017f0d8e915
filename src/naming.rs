//! Naming variants derived from a raw resource identifier.
//! Every artifact generated for a resource shares one [`NamingContext`],
//! so class names, file stems and template variables always agree.

/// Uppercases the first letter of every alphanumeric word.
///
/// A word boundary is the start of the string or a transition from a
/// non-alphanumeric character into an alphanumeric run. All other characters
/// are preserved as-is, separators included.
///
/// # Examples
/// * `"hello world"` -> `"Hello World"`
/// * `"user_profile"` -> `"User_Profile"`
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alphanumeric = false;
    for ch in s.chars() {
        if ch.is_alphanumeric() && !prev_alphanumeric {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        prev_alphanumeric = ch.is_alphanumeric();
    }
    out
}

/// Consumes every `-` or `_` that is immediately followed by a character,
/// uppercasing that character.
///
/// Characters not adjacent to a separator keep their case, so an already
/// mixed-case input such as `UserProfile` is returned unchanged. A trailing
/// separator has no following character and is kept.
pub fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(ch) = chars.next() {
        if (ch == '-' || ch == '_') && chars.peek().is_some() {
            let next = chars.next().unwrap();
            out.extend(next.to_uppercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Kebab-case conversion: a `-` is inserted between a lowercase letter and
/// an immediately following uppercase letter, runs of whitespace and
/// underscores collapse into a single `-`, and the result is lowercased.
pub fn to_kebab_case(s: &str) -> String {
    separate_words(s, '-')
}

/// Snake-case conversion, the mirror of [`to_kebab_case`] with `_` as the
/// separator.
pub fn to_snake_case(s: &str) -> String {
    separate_words(s, '_')
}

fn separate_words(s: &str, separator: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_lowercase = false;
    let mut pending_separator = false;
    for ch in s.chars() {
        if ch.is_whitespace() || ch == '_' {
            // Runs collapse into one separator
            pending_separator = true;
            prev_lowercase = false;
            continue;
        }
        if pending_separator {
            out.push(separator);
            pending_separator = false;
        } else if prev_lowercase && ch.is_uppercase() {
            out.push(separator);
        }
        out.extend(ch.to_lowercase());
        prev_lowercase = ch.is_lowercase();
    }
    out
}

/// The set of naming variants shared by every artifact of one generation
/// request. Derived deterministically from the raw identifier and never
/// cached across commands.
#[derive(Debug, Clone)]
pub struct NamingContext {
    pub raw: String,
    pub class_name: String,
    pub class_name_camel_case: String,
    pub class_name_lower_case: String,
    pub class_name_kebab_case: String,
    pub class_name_snake_case: String,
    /// Only populated for migration artifacts.
    pub timestamp: Option<String>,
}

impl NamingContext {
    /// Derives all naming variants from `raw`.
    ///
    /// `class_name_lower_case` is a plain lowercase of the literal input,
    /// not a snake/kebab form; it is the file-name stem of every artifact.
    pub fn derive(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            class_name: title_case(raw),
            class_name_camel_case: to_camel_case(raw),
            class_name_lower_case: raw.to_lowercase(),
            class_name_kebab_case: to_kebab_case(raw),
            class_name_snake_case: to_snake_case(raw),
            timestamp: None,
        }
    }

    /// Builds the variable context passed to the template renderer.
    pub fn template_context(&self) -> serde_json::Value {
        let mut context = serde_json::json!({
            "raw": self.raw,
            "className": self.class_name,
            "classNameCamelCase": self.class_name_camel_case,
            "classNameLowerCase": self.class_name_lower_case,
            "classNameKebabCase": self.class_name_kebab_case,
            "classNameSnakeCase": self.class_name_snake_case,
        });
        if let Some(timestamp) = &self.timestamp {
            context["timestamp"] = serde_json::json!(timestamp);
        }
        context
    }
}
