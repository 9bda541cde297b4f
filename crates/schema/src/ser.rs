//! Text form of the views document.
//!
//! ```text
//! views:
//!   - name: ADGROUP_DAILY
//!     rprt: ADGROUP_PERFORMANCE_REPORT
//!     cols:
//!       - name: AdGroupId
//!         psnm: Id
//!     where:
//!       - coln: Impressions
//!         oprt: '>'
//!         cval: [0]
//!         lval: true
//!     during: [LAST_30_DAYS]
//!     order:
//!       - cpos: 1
//!     limit:
//!       oset: 0
//!       rcnt: 15
//! ```
//!
//! Optional keys are only written when set, so the output of a view is
//! stable and reads back to an equal [`ViewSchema`].

use std::borrow::Cow;
use std::fmt::{self, Display, Write};

use crate::view::ViewSchema;

const INDENT: &str = "  ";

/// Nesting levels, counted from the document root.
const VIEW: usize = 1;
const VIEW_KEY: usize = 2;
const ITEM: usize = 3;
const ITEM_KEY: usize = 4;

/// Writes indented `key: value` lines and list items.
struct ViewWriter<'w, W> {
    out: &'w mut W,
}

impl<'w, W: Write> ViewWriter<'w, W> {
    fn new(out: &'w mut W) -> Self {
        Self { out }
    }

    fn indent(&mut self, level: usize) -> fmt::Result {
        for _ in 0..level {
            self.out.write_str(INDENT)?;
        }
        Ok(())
    }

    /// `key:`, opening a nested block.
    fn section(&mut self, level: usize, key: &str) -> fmt::Result {
        self.indent(level)?;
        writeln!(self.out, "{key}:")
    }

    /// `key: value`
    fn entry(&mut self, level: usize, key: &str, value: impl Display) -> fmt::Result {
        self.indent(level)?;
        writeln!(self.out, "{key}: {value}")
    }

    /// `- key: value`, opening a list item whose other keys sit at `level + 1`.
    fn item(&mut self, level: usize, key: &str, value: impl Display) -> fmt::Result {
        self.indent(level)?;
        writeln!(self.out, "- {key}: {value}")
    }

    /// `key: [a, b, c]`
    fn flow<T: Display>(&mut self, level: usize, key: &str, values: impl IntoIterator<Item = T>) -> fmt::Result {
        self.indent(level)?;
        write!(self.out, "{key}: [")?;
        for (i, value) in values.into_iter().enumerate() {
            if i > 0 {
                self.out.write_str(", ")?;
            }
            write!(self.out, "{value}")?;
        }
        self.out.write_str("]\n")
    }

    fn view(&mut self, v: &ViewSchema) -> fmt::Result {
        if !v.is_complete() {
            return Ok(());
        }
        self.item(VIEW, "name", scalar(&v.name))?;
        self.entry(VIEW_KEY, "rprt", scalar(&v.source_table_name))?;
        if !v.aggregate_column.is_empty() {
            self.entry(VIEW_KEY, "aggr", scalar(&v.aggregate_column))?;
        }

        self.section(VIEW_KEY, "cols")?;
        for f in &v.fields {
            self.item(ITEM, "name", scalar(&f.name))?;
            if let Some(alias) = f.alias() {
                self.entry(ITEM_KEY, "psnm", scalar(alias))?;
            }
        }

        if !v.conditions.is_empty() {
            self.section(VIEW_KEY, "where")?;
            for c in &v.conditions {
                self.item(ITEM, "coln", scalar(&c.column_name))?;
                self.entry(ITEM_KEY, "oprt", scalar(&c.operator))?;
                self.flow(ITEM_KEY, "cval", c.values.iter().map(|s| scalar(s)))?;
                if c.is_literal {
                    self.entry(ITEM_KEY, "lval", true)?;
                }
            }
        }

        if !v.date_range_tokens.is_empty() {
            self.flow(VIEW_KEY, "during", v.date_range_tokens.iter().map(|s| scalar(s)))?;
        }

        if !v.group_by.is_empty() {
            self.flow(VIEW_KEY, "group", &v.group_by)?;
        }

        if !v.order_by.is_empty() {
            self.section(VIEW_KEY, "order")?;
            for o in &v.order_by {
                self.item(ITEM, "cpos", o.column_position)?;
                if o.sort_descending {
                    self.entry(ITEM_KEY, "desc", true)?;
                }
            }
        }

        if v.limit.is_set() {
            self.section(VIEW_KEY, "limit")?;
            self.entry(VIEW_KEY + 1, "oset", v.limit.offset)?;
            self.entry(VIEW_KEY + 1, "rcnt", v.limit.row_count)?;
        }
        Ok(())
    }
}

/// Write the block of a single view, without the document header.
///
/// Views lacking a name, a source table or fields are not written at all.
pub fn write_view(out: &mut impl Write, view: &ViewSchema) -> fmt::Result {
    ViewWriter::new(out).view(view)
}

/// Write a whole views document.
pub fn write_views(out: &mut impl Write, views: &[ViewSchema]) -> fmt::Result {
    let mut body = String::new();
    let mut w = ViewWriter::new(&mut body);
    for v in views {
        w.view(v)?;
    }
    if body.is_empty() {
        out.write_str("views: []\n")
    } else {
        out.write_str("views:\n")?;
        out.write_str(&body)
    }
}

/// The views document for `views`.
pub fn views_to_string(views: &[ViewSchema]) -> String {
    let mut s = String::new();
    write_views(&mut s, views).expect("writing into a String cannot fail");
    s
}

/// Render `s` as a YAML scalar that reads back as the same string.
///
/// Names and tokens such as `LAST_30_DAYS` or `0` are written as they are.
/// Anything else is quoted: single quotes when the string is printable,
/// double quotes with escapes otherwise.
pub fn scalar(s: &str) -> Cow<'_, str> {
    if is_plain(s) {
        return Cow::Borrowed(s);
    }
    if s.chars().all(|c| is_printable(c) && !is_break(c)) {
        return Cow::Owned(format!("'{}'", s.replace('\'', "''")));
    }
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if is_printable(c) && !is_break(c) => quoted.push(c),
            c if (c as u32) <= 0xFFFF => quoted.push_str(&format!("\\u{:04X}", c as u32)),
            c => quoted.push_str(&format!("\\U{:08X}", c as u32)),
        }
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

fn is_plain(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphanumeric() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | '/'))
        && !matches!(s, "null" | "Null" | "NULL")
}

/// The characters a YAML stream may contain as they are.
fn is_printable(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{7E}'
        | '\u{85}'
        | '\u{A0}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
        && c != '\u{FEFF}'
}

/// Line breaks, which quoted scalars fold into spaces.
fn is_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}')
}
