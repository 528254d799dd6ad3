//! Default wording for the checks.
//!
//! A [`Messages`] value is an immutable catalog of message templates, one per
//! check. [`Validator::new`](crate::Validator::new) uses [`Messages::default`];
//! a translated catalog goes in through
//! [`Validator::with_messages`](crate::Validator::with_messages).
//!
//! Parameterized templates use positional `{}` placeholders so catalogs can
//! be plain data.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of the built-in English wording.

use std::borrow::Cow;
use std::fmt::Write;

/// Message catalog for the checks; swap it out for i18n.
///
/// # Examples
///
/// ```
/// use fieldcheck::{Messages, Validator};
///
/// let nl = Messages {
///     required: "moet ingevuld zijn".into(),
///     ..Messages::default()
/// };
///
/// let mut v = Validator::with_messages(nl);
/// v.required("naam", "", None);
/// assert_eq!(v.to_string(), "naam: moet ingevuld zijn.\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub required: Cow<'static, str>,
    pub domain: Cow<'static, str>,
    pub url: Cow<'static, str>,
    pub email: Cow<'static, str>,
    pub ipv4: Cow<'static, str>,
    pub hex_color: Cow<'static, str>,
    /// `{}` = minimum length.
    pub len_longer: Cow<'static, str>,
    /// `{}` = maximum length.
    pub len_shorter: Cow<'static, str>,
    /// `{}` = the matched forbidden entry.
    pub exclude: Cow<'static, str>,
    /// `{}` = the candidate list joined with `", "`.
    pub include: Cow<'static, str>,
    pub integer: Cow<'static, str>,
    pub boolean: Cow<'static, str>,
    /// `{}` = the expected layout.
    pub date: Cow<'static, str>,
    pub phone: Cow<'static, str>,
    /// `{}` = minimum value.
    pub range_higher: Cow<'static, str>,
    /// `{}` = maximum value.
    pub range_lower: Cow<'static, str>,
    pub not_an_image: Cow<'static, str>,
    /// `{}` = the accepted format list.
    pub image_format: Cow<'static, str>,
    /// `{} x {}` twice: minimum then maximum width/height.
    pub image_dimension: Cow<'static, str>,
    /// `{} x {}` = minimum width/height.
    pub image_min_dimension: Cow<'static, str>,
    /// `{} x {}` = maximum width/height.
    pub image_max_dimension: Cow<'static, str>,
    pub image_unreadable: Cow<'static, str>,
    /// `{}` = the accepted mime type list.
    pub file_mime_type: Cow<'static, str>,
    /// `{}` twice: minimum then maximum size in kilobytes.
    pub file_size: Cow<'static, str>,
    /// `{}` = maximum size in kilobytes.
    pub file_max_size: Cow<'static, str>,
    /// `{}` = minimum size in kilobytes.
    pub file_min_size: Cow<'static, str>,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            required: "must be set".into(),
            domain: "must be a valid domain".into(),
            url: "must be a valid url".into(),
            email: "must be a valid email address".into(),
            ipv4: "must be a valid IPv4 address".into(),
            hex_color: "must be a valid color code".into(),
            len_longer: "must be longer than {} characters".into(),
            len_shorter: "must be shorter than {} characters".into(),
            exclude: "cannot be '{}'".into(),
            include: "must be one of '{}'".into(),
            integer: "must be a whole number".into(),
            boolean: "must be a boolean".into(),
            date: "must be a date as '{}'".into(),
            phone: "must be a valid phone number".into(),
            range_higher: "must be higher than {}".into(),
            range_lower: "must be lower than {}".into(),
            not_an_image: "must be an image".into(),
            image_format: "must be an image of '{}' format".into(),
            image_dimension:
                "image dimension (W x H) must be between '{} x {}' and '{} x {}' pixels".into(),
            image_min_dimension:
                "image dimension (W x H) cannot be less than '{} x {}' pixels".into(),
            image_max_dimension:
                "image dimension (W x H) cannot be more than '{} x {}' pixels".into(),
            image_unreadable: "could not read the image dimensions".into(),
            file_mime_type: "must be a file of type '{}'".into(),
            file_size: "file size must be between '{}'KB and '{}'KB".into(),
            file_max_size: "file size cannot be larger than '{}'KB".into(),
            file_min_size: "file size cannot be less than '{}'KB".into(),
        }
    }
}

/// Fills the `{}` placeholders of `template` with `args` in order.
///
/// Surplus placeholders are left as-is; surplus args are dropped. Catalogs
/// are caller-supplied data, so a mismatch is rendered rather than panicked
/// on.
pub(crate) fn fill(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len() + args.iter().map(String::len).sum::<usize>());
    let mut rest = template;
    let mut args = args.iter();
    while let Some(pos) = rest.find("{}") {
        out.push_str(&rest[..pos]);
        match args.next() {
            Some(arg) => {
                let _ = write!(out, "{arg}");
            }
            None => out.push_str("{}"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

/// The override message when given, else the catalog default.
pub(crate) fn or_default_msg(msg: Option<&str>, default: &str) -> String {
    msg.unwrap_or(default).to_string()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_in_order() {
        assert_eq!(fill("between '{}' and '{}'", &["1".into(), "2".into()]), "between '1' and '2'");
    }

    #[test]
    fn fill_without_placeholders() {
        assert_eq!(fill("must be set", &[]), "must be set");
    }

    #[test]
    fn fill_surplus_placeholder_kept() {
        assert_eq!(fill("{} and {}", &["a".into()]), "a and {}");
    }

    #[test]
    fn fill_surplus_args_dropped() {
        assert_eq!(fill("only {}", &["a".into(), "b".into()]), "only a");
    }

    #[test]
    fn default_catalog_is_borrowed() {
        let messages = Messages::default();
        assert!(matches!(messages.required, Cow::Borrowed(_)));
        assert!(matches!(messages.file_size, Cow::Borrowed(_)));
    }

    #[test]
    fn override_wins() {
        assert_eq!(or_default_msg(Some("custom"), "default"), "custom");
        assert_eq!(or_default_msg(None, "default"), "default");
    }
}
