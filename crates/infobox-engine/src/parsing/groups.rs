use crate::models::Group;

use super::{
    diagnostics::DiagnosticKind,
    entries::decode_entry_body,
    kinds::{EntryLine, GroupHeader, ThumbnailLine},
    lines::{LineRef, lines_with_spans},
};

/// Builds groups from a stream of lines.
///
/// A `#` line closes the open group and starts a new one; `-` lines are
/// decoded into entries of the open group. Everything else is ignored.
#[derive(Debug, Default)]
pub struct GroupBuilder {
    open: Option<Group>,
    out: Vec<Group>,
}

impl GroupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line. Returns why the line was dropped, if it was
    /// something other than a header, entry, thumbnail or blank line.
    pub fn push(&mut self, lr: &LineRef<'_>) -> Option<DiagnosticKind> {
        if let Some(name) = GroupHeader::body(lr.text) {
            self.open_group(name);
            return None;
        }

        if let Some(body) = EntryLine::body(lr.text) {
            let Some(group) = self.open.as_mut() else {
                return Some(DiagnosticKind::EntryOutsideGroup);
            };
            return match decode_entry_body(body) {
                Some(entry) => {
                    group.entries.push(entry);
                    None
                }
                None => Some(DiagnosticKind::MissingKeySeparator),
            };
        }

        if ThumbnailLine::body(lr.text).is_some() || lr.text.trim().is_empty() {
            return None;
        }
        Some(DiagnosticKind::UnrecognizedLine)
    }

    pub fn finish(mut self) -> Vec<Group> {
        self.close_group();
        self.out
    }

    fn open_group(&mut self, name: &str) {
        self.close_group();
        self.open = Some(Group::new(name));
    }

    fn close_group(&mut self) {
        if let Some(group) = self.open.take() {
            self.out.push(group);
        }
    }
}

/// Splits `source` into groups, dropping anything that isn't a header or a
/// well-formed entry.
pub fn split_groups(source: &str) -> Vec<Group> {
    let mut builder = GroupBuilder::new();
    for lr in lines_with_spans(source) {
        builder.push(&lr);
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TableEntry, Value};
    use pretty_assertions::assert_eq;

    #[test]
    fn header_owns_following_entries() {
        let groups = split_groups("#Stats\n-HP:10\n-MP:20\n");
        assert_eq!(
            groups,
            vec![Group {
                name: "Stats".into(),
                entries: vec![
                    TableEntry::new("HP", "10".into()),
                    TableEntry::new("MP", "20".into()),
                ],
            }]
        );
    }

    #[test]
    fn next_header_closes_group() {
        let groups = split_groups("#A\n-a:1\n#B\n-b:2\n");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "A");
        assert_eq!(groups[0].entries, vec![TableEntry::new("a", "1".into())]);
        assert_eq!(groups[1].entries, vec![TableEntry::new("b", "2".into())]);
    }

    #[test]
    fn empty_groups_are_kept() {
        let groups = split_groups("#EmptySection\n#Next\n");
        assert_eq!(groups, vec![Group::new("EmptySection"), Group::new("Next")]);
    }

    #[test]
    fn header_name_is_verbatim() {
        let groups = split_groups("#  Spaced Out  \n#\n");
        assert_eq!(groups[0].name, "  Spaced Out  ");
        assert_eq!(groups[1].name, "");
    }

    #[test]
    fn noise_inside_groups_is_ignored() {
        let groups = split_groups("#G\n\nsome prose\n-k:v\n !x\n-broken\n");
        assert_eq!(groups[0].entries, vec![TableEntry::new("k", Value::from("v"))]);
    }

    #[test]
    fn entries_before_first_header_are_dropped() {
        let groups = split_groups("-orphan:1\n#G\n");
        assert_eq!(groups, vec![Group::new("G")]);
    }

    #[test]
    fn push_reports_why_lines_were_dropped() {
        let mut b = GroupBuilder::new();
        let line = |text| LineRef {
            number: 1,
            span: Default::default(),
            text,
        };
        assert_eq!(
            b.push(&line("-k:v")),
            Some(DiagnosticKind::EntryOutsideGroup)
        );
        assert_eq!(b.push(&line("#G")), None);
        assert_eq!(b.push(&line("-k")), Some(DiagnosticKind::MissingKeySeparator));
        assert_eq!(b.push(&line("prose")), Some(DiagnosticKind::UnrecognizedLine));
        assert_eq!(b.push(&line("!img.png")), None);
        assert_eq!(b.push(&line("   ")), None);
        assert_eq!(b.finish(), vec![Group::new("G")]);
    }
}
