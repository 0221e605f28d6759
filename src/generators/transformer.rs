//! Pure text transformations applied to the reference templates.
//!
//! Every function here is string-in, string-out; nothing touches the file
//! system. The reference tree is written against a `contacts` example model,
//! so the transformations rewrite its naming tokens and its two fixed
//! extension-point lines.

use crate::models::capitalize_first;

/// Plural naming token used throughout the reference templates.
pub const REFERENCE_PLURAL: &str = "contacts";
/// Singular naming token used throughout the reference templates.
pub const REFERENCE_SINGULAR: &str = "contact";

/// Field the reference entry component assigns from the request body. The
/// indentation is part of the anchor.
const BODY_ASSIGN_ANCHOR: &str = "        'slug' => $this->body('slug')";

/// Line the reference entry component uses to look a record up by its URL
/// name.
const NAME_LOOKUP_ANCHOR: &str = "'slug' => $this->name()";

/// Rewrite the reference naming tokens to the target model's names.
///
/// Four case-sensitive substitutions, in fixed order, each applied to the
/// result of the previous one: plural, singular, capitalized plural,
/// capitalized singular. Substitution is substring-based with no
/// word-boundary check; the reference components embed the tokens inside
/// longer identifiers (`components_contacts_List`), which is exactly what
/// makes the class names come out right.
pub fn rename(text: &str, singular_name: &str, plural_name: &str) -> String {
    let text = text.replace(REFERENCE_PLURAL, plural_name);
    let text = text.replace(REFERENCE_SINGULAR, singular_name);
    let text = text.replace(
        &capitalize_first(REFERENCE_PLURAL),
        &capitalize_first(plural_name),
    );
    text.replace(
        &capitalize_first(REFERENCE_SINGULAR),
        &capitalize_first(singular_name),
    )
}

/// Replace the reference body-assignment line with one line per field.
///
/// Lines are joined with `,\n` in the given order; an empty field list erases
/// the anchor line. If the anchor is not present the text comes back
/// unchanged, which is only tolerable because the reference tree is fixed and
/// ships with the crate.
pub fn expand_fields(text: &str, field_names: &[String]) -> String {
    let lines: Vec<String> = field_names
        .iter()
        .map(|field| format!("        '{field}' => $this->body('{field}')"))
        .collect();
    text.replace(BODY_ASSIGN_ANCHOR, &lines.join(",\n"))
}

/// Point the reference name-lookup line at a different slug field.
pub fn rename_slug_field(text: &str, slug_name: &str) -> String {
    text.replace(
        NAME_LOOKUP_ANCHOR,
        &format!("'{slug_name}' => $this->name()"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    mod renaming {
        use super::*;

        #[test]
        fn test_replaces_all_four_token_variants() {
            let text = "contacts contact Contacts Contact";
            assert_eq!(rename(text, "widget", "widgets"), "widgets widget Widgets Widget");
        }

        #[test]
        fn test_rewrites_identifiers_containing_tokens() {
            let text = "class components_contacts_List extends k_Component";
            assert_eq!(
                rename(text, "widget", "widgets"),
                "class components_widgets_List extends k_Component"
            );
        }

        #[test]
        fn test_unrelated_text_is_unchanged() {
            let text = "<?php echo krudt_form_tag_end(); ?>";
            assert_eq!(rename(text, "widget", "widgets"), text);
        }

        #[test]
        fn test_identity_when_renaming_to_reference_names() {
            let text = "Contacts are listed by contacts(); each contact has a Contact form.";
            assert_eq!(rename(text, "contact", "contacts"), text);
        }

        #[test]
        fn test_plural_applied_before_singular() {
            // "contacts" must not be eaten as "contact" + "s".
            assert_eq!(rename("contacts", "widget", "widgets"), "widgets");
            assert_eq!(rename("contact", "widget", "widgets"), "widget");
        }

        #[test]
        fn test_capitalization_only_touches_first_character() {
            assert_eq!(rename("Contacts", "newsItem", "newsItems"), "NewsItems");
        }
    }

    mod field_expansion {
        use super::*;

        #[test]
        fn test_expands_two_fields_in_order() {
            let text = "      array(\n        'slug' => $this->body('slug')\n      )";
            let fields = vec!["name".to_string(), "email".to_string()];
            assert_eq!(
                expand_fields(text, &fields),
                "      array(\n        'name' => $this->body('name'),\n        'email' => $this->body('email')\n      )"
            );
        }

        #[test]
        fn test_empty_field_list_erases_anchor_line() {
            let text = "array(\n        'slug' => $this->body('slug')\n)";
            assert_eq!(expand_fields(text, &[]), "array(\n\n)");
        }

        #[test]
        fn test_text_without_anchor_is_unchanged() {
            let text = "no assignments here";
            assert_eq!(expand_fields(text, &["name".to_string()]), text);
        }
    }

    mod slug_renaming {
        use super::*;

        #[test]
        fn test_points_lookup_at_new_field() {
            let text = "$q = array(\n        'slug' => $this->name()\n);";
            assert_eq!(
                rename_slug_field(text, "permalink"),
                "$q = array(\n        'permalink' => $this->name()\n);"
            );
        }

        #[test]
        fn test_default_slug_name_is_identity() {
            let text = "'slug' => $this->name()";
            assert_eq!(rename_slug_field(text, "slug"), text);
        }
    }
}
