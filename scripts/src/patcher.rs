//! Finds component invocations that are missing an attribute and inserts it.
//!
//! A regex only locates the tag opener (`<Image`). The attribute list is then
//! walked by hand so quoted values, `{...}` expressions and template literals
//! can't fool the matcher: the tag ends at the first `>` or `/>` outside of
//! those, and the marker has to be a whole attribute name.

use regex::Regex;

use crate::error::PatchError;

/// Extensions scanned when none are given on the command line.
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["jsx", "tsx"];

pub const DEFAULT_COMPONENT: &str = "Image";
pub const DEFAULT_MARKER: &str = "priority";
pub const DEFAULT_INSERTION: &str = " sizes=\"100vw\"";
pub const DEFAULT_PRESENT_TOKEN: &str = "sizes=";

/// What to look for and what to insert.
#[derive(Debug, Clone)]
pub struct PatchRule {
    marker: String,
    insertion: String,
    present_token: String,
    opener: Regex,
}

impl PatchRule {
    /// Builds a rule, rejecting anything that would break idempotence.
    ///
    /// The insertion has to contain `present_token`, otherwise a second run
    /// would insert it again. It also can't contain `<` or `>` since that
    /// would move tag boundaries under the next scan.
    pub fn new(
        component: impl Into<String>,
        marker: impl Into<String>,
        insertion: impl Into<String>,
        present_token: impl Into<String>,
    ) -> Result<Self, PatchError> {
        let component = component.into();
        let marker = marker.into();
        let insertion = insertion.into();
        let present_token = present_token.into();

        if !is_component_name(&component) {
            return Err(PatchError::InvalidRule(format!(
                "component name {:?} is not a valid tag name",
                component
            )));
        }
        if !is_attribute_name(&marker) {
            return Err(PatchError::InvalidRule(format!(
                "marker {:?} is not a valid attribute name",
                marker
            )));
        }
        if present_token.is_empty() {
            return Err(PatchError::InvalidRule(
                "present token must not be empty".to_string(),
            ));
        }
        if !insertion.contains(&present_token) {
            return Err(PatchError::InvalidRule(format!(
                "insertion {:?} does not contain present token {:?}",
                insertion, present_token
            )));
        }
        if insertion.contains('<') || insertion.contains('>') {
            return Err(PatchError::InvalidRule(format!(
                "insertion {:?} must not contain angle brackets",
                insertion
            )));
        }

        let opener = Regex::new(&format!(r"<{}\b", regex::escape(&component)))
            .map_err(|e| PatchError::InvalidRule(format!("bad component pattern: {}", e)))?;

        Ok(Self {
            marker,
            insertion,
            present_token,
            opener,
        })
    }

    /// `<Image ... priority ... />` gets ` sizes="100vw"` unless it has `sizes=` already.
    pub fn hero_images() -> Result<Self, PatchError> {
        Self::new(
            DEFAULT_COMPONENT,
            DEFAULT_MARKER,
            DEFAULT_INSERTION,
            DEFAULT_PRESENT_TOKEN,
        )
    }
}

/// One matched opening tag, as byte offsets into the scanned content.
///
/// `prefix` runs from `<` up to the marker, `anchor` is the marker itself and
/// `suffix` is the rest of the tag including its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMatch {
    pub start: usize,
    pub anchor_start: usize,
    pub anchor_end: usize,
    /// Where the insertion goes: after the marker, or after its value if it has one.
    pub insert_at: usize,
    pub end: usize,
}

impl TagMatch {
    pub fn prefix<'a>(&self, content: &'a str) -> &'a str {
        &content[self.start..self.anchor_start]
    }

    pub fn anchor<'a>(&self, content: &'a str) -> &'a str {
        &content[self.anchor_start..self.anchor_end]
    }

    pub fn suffix<'a>(&self, content: &'a str) -> &'a str {
        &content[self.anchor_end..self.end]
    }

    pub fn tag<'a>(&self, content: &'a str) -> &'a str {
        &content[self.start..self.end]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    pub content: String,
    /// Occurrences that received the insertion.
    pub changed: usize,
}

impl Patched {
    pub fn is_changed(&self) -> bool {
        self.changed > 0
    }
}

/// Every opening tag of `rule.component` that carries the marker attribute.
pub fn find_occurrences(rule: &PatchRule, content: &str) -> Vec<TagMatch> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(open) = rule.opener.find_at(content, pos) {
        match scan_attributes(content, open.end(), &rule.marker) {
            Some(scan) => {
                if let Some(marker) = scan.marker {
                    found.push(TagMatch {
                        start: open.start(),
                        anchor_start: marker.start,
                        anchor_end: marker.end,
                        insert_at: marker.attr_end,
                        end: scan.end,
                    });
                }
                pos = scan.end;
            }
            None => pos = open.end(),
        }
    }

    found
}

/// Inserts the rule's attribute into every occurrence that doesn't have it yet.
pub fn patch_content(rule: &PatchRule, content: &str) -> Patched {
    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    let mut changed = 0;

    for m in find_occurrences(rule, content) {
        if m.tag(content).contains(&rule.present_token) {
            continue;
        }
        out.push_str(&content[last..m.insert_at]);
        out.push_str(&rule.insertion);
        last = m.insert_at;
        changed += 1;
    }
    out.push_str(&content[last..]);

    Patched {
        content: out,
        changed,
    }
}

struct MarkerSpan {
    start: usize,
    end: usize,
    attr_end: usize,
}

struct TagScan {
    end: usize,
    marker: Option<MarkerSpan>,
}

/// Walks an attribute list starting right after the tag name.
///
/// Returns `None` when the tag never closes or another tag opens first.
fn scan_attributes(content: &str, from: usize, marker: &str) -> Option<TagScan> {
    let bytes = content.as_bytes();
    let mut marker_span = None;
    let mut i = from;

    while i < bytes.len() {
        match bytes[i] {
            b'>' => {
                return Some(TagScan {
                    end: i + 1,
                    marker: marker_span,
                })
            }
            b'/' if bytes.get(i + 1) == Some(&b'>') => {
                return Some(TagScan {
                    end: i + 2,
                    marker: marker_span,
                })
            }
            b'<' => return None,
            b'"' | b'\'' | b'`' => i = skip_quoted(bytes, i, false)?,
            b'{' => i = skip_braces(bytes, i)?,
            b if is_name_start(b) => {
                let start = i;
                while i < bytes.len() && is_name_byte(bytes[i]) {
                    i += 1;
                }
                let name_end = i;
                let attr_end = skip_value(bytes, name_end)?.unwrap_or(name_end);
                if marker_span.is_none() && &content[start..name_end] == marker {
                    marker_span = Some(MarkerSpan {
                        start,
                        end: name_end,
                        attr_end,
                    });
                }
                i = attr_end;
            }
            _ => i += 1,
        }
    }

    None
}

/// `Some(None)` when the attribute is bare, `Some(Some(end))` past its value,
/// `None` if the value runs off the end of the input.
fn skip_value(bytes: &[u8], name_end: usize) -> Option<Option<usize>> {
    let eq = skip_whitespace(bytes, name_end);
    if bytes.get(eq) != Some(&b'=') {
        return Some(None);
    }
    let value = skip_whitespace(bytes, eq + 1);
    let end = match bytes.get(value)? {
        b'"' | b'\'' | b'`' => skip_quoted(bytes, value, false)?,
        b'{' => skip_braces(bytes, value)?,
        _ => {
            let mut j = value;
            while j < bytes.len()
                && !bytes[j].is_ascii_whitespace()
                && bytes[j] != b'>'
                && !(bytes[j] == b'/' && bytes.get(j + 1) == Some(&b'>'))
            {
                j += 1;
            }
            j
        }
    };
    Some(Some(end))
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

/// JSX attribute strings have no escapes. Only JS strings inside `{...}`
/// treat a backslash as one.
fn skip_quoted(bytes: &[u8], open: usize, escapes: bool) -> Option<usize> {
    let quote = bytes[open];
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if escapes => i += 2,
            b if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

/// Skips a `{...}` expression, including nested braces, JS strings and comments.
fn skip_braces(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'{' => {
                depth += 1;
                i += 1;
            }
            b'}' => {
                depth = depth.saturating_sub(1);
                i += 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            b'"' | b'\'' | b'`' => i = skip_quoted(bytes, i, true)?,
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                i += 2;
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                loop {
                    if i + 1 >= bytes.len() {
                        return None;
                    }
                    if bytes[i] == b'*' && bytes[i + 1] == b'/' {
                        i += 2;
                        break;
                    }
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }
    None
}

fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

// JSX attribute names may contain `-` (data-*, aria-*) and `:` (xlink:href).
fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'$' | b'-' | b':')
}

fn is_attribute_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    !bytes.is_empty() && is_name_start(bytes[0]) && bytes.iter().all(|&b| is_name_byte(b))
}

fn is_component_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    !bytes.is_empty()
        && is_name_start(bytes[0])
        && bytes
            .iter()
            .all(|&b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'$' | b'.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn widget_rule() -> PatchRule {
        PatchRule::new("Widget", "priority", " INSERTED", "INSERTED").unwrap()
    }

    #[test]
    fn inserts_after_bare_marker_and_keeps_the_rest() {
        let rule = widget_rule();
        let input = r#"<Widget foo="1" priority bar="2" />"#;

        let patched = patch_content(&rule, input);

        assert_eq!(patched.content, r#"<Widget foo="1" priority INSERTED bar="2" />"#);
        assert_eq!(patched.changed, 1);
    }

    #[test]
    fn match_is_split_into_prefix_anchor_suffix() {
        let rule = widget_rule();
        let input = r#"x <Widget foo="1" priority bar="2" /> y"#;

        let found = find_occurrences(&rule, input);

        assert_eq!(found.len(), 1);
        let m = found[0];
        assert_eq!(m.prefix(input), r#"<Widget foo="1" "#);
        assert_eq!(m.anchor(input), "priority");
        assert_eq!(m.suffix(input), r#" bar="2" />"#);
    }

    #[test]
    fn tag_with_present_token_is_untouched() {
        let rule = PatchRule::hero_images().unwrap();
        let input = r#"<Image src="/hero.webp" priority sizes="50vw" alt="" />"#;

        let patched = patch_content(&rule, input);

        assert_eq!(patched.content, input);
        assert!(!patched.is_changed());
    }

    #[test]
    fn marker_must_be_a_whole_attribute_name() {
        let rule = PatchRule::hero_images().unwrap();
        for input in [
            r#"<Image src="/a.webp" priorityLevel="high" />"#,
            r#"<Image src="/a.webp" data-priority />"#,
            r#"<Image src="/a.webp" alt="priority seating" />"#,
            r#"<Image src="/a.webp" onLoad={() => track("priority")} />"#,
        ] {
            assert!(find_occurrences(&rule, input).is_empty(), "matched {}", input);
            assert_eq!(patch_content(&rule, input).content, input);
        }
    }

    #[test]
    fn other_components_are_ignored() {
        let rule = PatchRule::hero_images().unwrap();
        let input = r#"<ImageGallery priority /><img priority /><Hero priority />"#;

        assert!(find_occurrences(&rule, input).is_empty());
    }

    #[test]
    fn does_not_swallow_the_next_tag() {
        let rule = PatchRule::hero_images().unwrap();
        let input = concat!(
            "<Image src=\"/a.webp\" alt=\"a\" />\n",
            "<p>text</p>\n",
            "<Image src=\"/b.webp\" priority />\n",
        );

        let found = find_occurrences(&rule, input);
        assert_eq!(found.len(), 1);
        assert!(found[0].tag(input).contains("/b.webp"));

        let patched = patch_content(&rule, input);
        assert_eq!(
            patched.content,
            concat!(
                "<Image src=\"/a.webp\" alt=\"a\" />\n",
                "<p>text</p>\n",
                "<Image src=\"/b.webp\" priority sizes=\"100vw\" />\n",
            )
        );
    }

    #[test]
    fn multiline_tag_with_open_terminator() {
        let rule = PatchRule::hero_images().unwrap();
        let input = "<Image\n  src={hero.src}\n  priority\n  alt={`${city} skyline`}\n>";

        let patched = patch_content(&rule, input);

        assert_eq!(
            patched.content,
            "<Image\n  src={hero.src}\n  priority sizes=\"100vw\"\n  alt={`${city} skyline`}\n>"
        );
    }

    #[test]
    fn expression_with_angle_brackets_stays_inside_the_tag() {
        let rule = PatchRule::hero_images().unwrap();
        let input = r#"<Image width={w > 600 ? 1200 : 600} priority />"#;

        let patched = patch_content(&rule, input);

        assert_eq!(
            patched.content,
            r#"<Image width={w > 600 ? 1200 : 600} priority sizes="100vw" />"#
        );
    }

    #[test]
    fn valued_marker_gets_insertion_after_its_value() {
        let rule = PatchRule::hero_images().unwrap();
        let input = r#"<Image priority={true} src="/a.webp" />"#;

        let patched = patch_content(&rule, input);

        assert_eq!(
            patched.content,
            r#"<Image priority={true} sizes="100vw" src="/a.webp" />"#
        );
    }

    #[test]
    fn two_occurrences_one_already_done() {
        let rule = PatchRule::hero_images().unwrap();
        let input = concat!(
            "<Image src=\"/a.webp\" priority sizes=\"100vw\" />\n",
            "<Image src=\"/b.webp\" priority />\n",
        );

        let patched = patch_content(&rule, input);

        assert_eq!(patched.changed, 1);
        assert!(patched.content.starts_with("<Image src=\"/a.webp\" priority sizes=\"100vw\" />\n"));
        assert!(patched.content.ends_with("<Image src=\"/b.webp\" priority sizes=\"100vw\" />\n"));
    }

    #[test]
    fn unterminated_tag_is_not_a_match() {
        let rule = PatchRule::hero_images().unwrap();
        let input = "<Image src=\"/a.webp\" priority";

        assert!(find_occurrences(&rule, input).is_empty());
        assert_eq!(patch_content(&rule, input).content, input);
    }

    #[test]
    fn non_ascii_content_is_preserved() {
        let rule = PatchRule::hero_images().unwrap();
        let input = "<Image alt=\"Estadio Azteca, Ciudad de México\" priority /> ¡Vamos!";

        let patched = patch_content(&rule, input);

        assert_eq!(
            patched.content,
            "<Image alt=\"Estadio Azteca, Ciudad de México\" priority sizes=\"100vw\" /> ¡Vamos!"
        );
    }

    #[test]
    fn backslash_in_attribute_string_does_not_escape_the_quote() {
        let rule = PatchRule::hero_images().unwrap();
        let input = "<Image src=\"C:\\\" priority />\n<p className=\"x\">hi</p>";

        let patched = patch_content(&rule, input);

        assert_eq!(patched.changed, 1);
        assert_eq!(
            patched.content,
            "<Image src=\"C:\\\" priority sizes=\"100vw\" />\n<p className=\"x\">hi</p>"
        );
    }

    #[test]
    fn escaped_quote_inside_expression_string_is_skipped() {
        let rule = PatchRule::hero_images().unwrap();
        let input = r#"<Image alt={"say \"hi\" > bye"} priority />"#;

        let patched = patch_content(&rule, input);

        assert_eq!(
            patched.content,
            r#"<Image alt={"say \"hi\" > bye"} priority sizes="100vw" />"#
        );
    }

    #[test]
    fn comments_inside_expressions_are_skipped() {
        let rule = PatchRule::hero_images().unwrap();

        let block = r#"<Image {/* don't lazy load */} src="/a.webp" priority />"#;
        assert_eq!(
            patch_content(&rule, block).content,
            r#"<Image {/* don't lazy load */} src="/a.webp" priority sizes="100vw" />"#
        );

        let line = "<Image\n  src={hero // it's the > big one\n  }\n  priority\n/>";
        assert_eq!(
            patch_content(&rule, line).content,
            "<Image\n  src={hero // it's the > big one\n  }\n  priority sizes=\"100vw\"\n/>"
        );
    }

    #[test]
    fn unterminated_block_comment_is_not_a_match() {
        let rule = PatchRule::hero_images().unwrap();
        let input = "<Image {/* never closed } priority />";

        assert!(find_occurrences(&rule, input).is_empty());
    }

    #[test]
    fn default_rule_matches_the_default_constants() {
        let rule = PatchRule::hero_images().unwrap();
        let input = format!("<{} {} />", DEFAULT_COMPONENT, DEFAULT_MARKER);

        let patched = patch_content(&rule, &input);

        assert_eq!(
            patched.content,
            format!("<{} {}{} />", DEFAULT_COMPONENT, DEFAULT_MARKER, DEFAULT_INSERTION)
        );
        assert!(patched.content.contains(DEFAULT_PRESENT_TOKEN));
    }

    #[test]
    fn rejects_rules_that_would_repeat_themselves() {
        assert!(matches!(
            PatchRule::new("Image", "priority", " loading=\"eager\"", "sizes="),
            Err(PatchError::InvalidRule(_))
        ));
        assert!(matches!(
            PatchRule::new("Image", "priority", " sizes=\"<x>\"", "sizes="),
            Err(PatchError::InvalidRule(_))
        ));
        assert!(matches!(
            PatchRule::new("Image", "", " sizes=\"100vw\"", "sizes="),
            Err(PatchError::InvalidRule(_))
        ));
        assert!(matches!(
            PatchRule::new("<Image", "priority", " sizes=\"100vw\"", "sizes="),
            Err(PatchError::InvalidRule(_))
        ));
    }

    proptest! {
        #[test]
        fn patching_twice_equals_patching_once(
            attrs in prop::collection::vec(
                prop::sample::select(vec![
                    "priority", "src=\"/a.webp\"", "sizes=\"33vw\"", "alt=\"priority\"",
                    "data-priority", "fill", "width={1200}", "onLoad={() => a > b}",
                ]),
                0..6,
            ),
            closing in prop::sample::select(vec![">", "/>", " />"]),
            filler in "[a-z <>/\n]{0,20}",
        ) {
            let rule = PatchRule::hero_images().unwrap();
            let tag = format!("<Image {}{}", attrs.join(" "), closing);
            let input = format!("{}{}{}{}", filler, tag, filler, tag);

            let once = patch_content(&rule, &input);
            let twice = patch_content(&rule, &once.content);

            prop_assert_eq!(&twice.content, &once.content);
            prop_assert_eq!(twice.changed, 0);
        }
    }
}
