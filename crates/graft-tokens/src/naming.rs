//! Symbolic token names.

use graft_core::format_number;

/// Slugify an author-supplied name, keeping `/` group separators.
///
/// `"Brand / Primary 500"` becomes `"brand/primary-500"`.
pub fn slugify(name: &str) -> String {
    name.split('/')
        .map(slug_segment)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

fn slug_segment(segment: &str) -> String {
    let mut slug = String::with_capacity(segment.len());
    let mut pending_dash = false;
    for c in segment.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Name for a color token: slug plus the first four hex digits.
pub fn color_name(node_name: &str, hex: &str) -> String {
    let slug = slugify(node_name);
    let slug = if slug.is_empty() { "color".to_string() } else { slug };
    let digits: String = hex.trim_start_matches('#').chars().take(4).collect();
    format!("{}-{}", slug, digits.to_lowercase())
}

/// Coarse weight bucket.
pub fn weight_bucket(weight: u16) -> &'static str {
    match weight {
        w if w >= 700 => "bold",
        w if w >= 500 => "medium",
        _ => "regular",
    }
}

/// Coarse size bucket.
pub fn size_bucket(size: f64) -> &'static str {
    match size {
        s if s <= 12.0 => "xs",
        s if s <= 14.0 => "sm",
        s if s <= 16.0 => "base",
        s if s <= 18.0 => "lg",
        s if s <= 20.0 => "xl",
        _ => "2xl",
    }
}

pub fn typography_name(size: f64, weight: u16) -> String {
    format!("text-{}-{}", size_bucket(size), weight_bucket(weight))
}

pub fn spacing_name(value: f64) -> String {
    format!("spacing-{}", format_number(value))
}

pub fn effect_name(node_name: &str, inset: bool) -> String {
    let prefix = if inset { "inner-shadow" } else { "shadow" };
    let slug = slugify(node_name).replace('/', "-");
    if slug.is_empty() {
        prefix.to_string()
    } else {
        format!("{}-{}", prefix, slug)
    }
}
