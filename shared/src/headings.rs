//! Table-of-contents extraction from markdown.
//!
//! Headings are found line by line (`#` through `######` followed by
//! whitespace) and given anchor ids that are unique within one document.
//! [`AnchorMatcher`] hands those same ids to a renderer's headings, so the
//! table of contents and the rendered page share one id sequence.

use std::{
    collections::{HashMap, HashSet},
    sync::OnceLock,
};

use regex::Regex;
use serde::{Deserialize, Serialize};

static HEADING_LINE: OnceLock<Regex> = OnceLock::new();
static NON_WORD_RUN: OnceLock<Regex> = OnceLock::new();

fn heading_line() -> &'static Regex {
    HEADING_LINE.get_or_init(|| Regex::new(r"^(#{1,6})\s+(.*)$").expect("valid heading pattern"))
}

fn non_word_run() -> &'static Regex {
    NON_WORD_RUN.get_or_init(|| Regex::new(r"[^\w]+").expect("valid slug pattern"))
}

/// One heading of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading label with surrounding whitespace removed.
    pub text: String,
    /// Nesting level, 1 through 6.
    pub level: u8,
    /// Anchor id, unique within the document.
    pub id: String,
}

/// Lowercase `text` and collapse every run of non-word characters into a
/// single hyphen.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    non_word_run()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Hands out anchor ids for a sequence of headings.
///
/// Repeated labels get a `-n` suffix where `n` counts occurrences of the same
/// slug. Labels that slug to nothing fall back to `heading-<k>` with `k` the
/// 1-based heading position. A candidate that collides with an id already
/// issued keeps bumping its counter.
#[derive(Debug, Default)]
struct AnchorAllocator {
    occurrences: HashMap<String, usize>,
    issued: HashSet<String>,
    position: usize,
}

impl AnchorAllocator {
    fn new() -> Self {
        Self::default()
    }

    /// Id for the next heading labelled `text`.
    fn allocate(&mut self, text: &str) -> String {
        self.position += 1;
        let mut base = slugify(text);
        if base.is_empty() {
            base = format!("heading-{}", self.position);
        }

        let count = self.occurrences.entry(base.clone()).or_insert(0);
        *count += 1;
        let mut candidate = if *count == 1 { base.clone() } else { format!("{base}-{count}") };
        while self.issued.contains(&candidate) {
            *count += 1;
            candidate = format!("{base}-{count}");
        }
        self.issued.insert(candidate.clone());
        candidate
    }
}

/// Ordered headings of one document.
///
/// Fully materialized, so it can be iterated any number of times.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOfContents {
    headings: Vec<Heading>,
}

/// A heading together with the headings nested under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocNode {
    pub heading: Heading,
    pub children: Vec<TocNode>,
}

impl TableOfContents {
    pub fn iter(&self) -> std::slice::Iter<'_, Heading> {
        self.headings.iter()
    }

    pub fn len(&self) -> usize {
        self.headings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    pub fn as_slice(&self) -> &[Heading] {
        &self.headings
    }

    /// Shallowest level present, used to indent entries relative to it.
    pub fn min_level(&self) -> Option<u8> {
        self.headings.iter().map(|h| h.level).min()
    }

    /// Nest each heading under the closest preceding heading of a lower
    /// level.
    pub fn tree(&self) -> Vec<TocNode> {
        fn attach(nodes: &mut Vec<TocNode>, heading: Heading) {
            match nodes.last_mut() {
                Some(last) if last.heading.level < heading.level => {
                    attach(&mut last.children, heading)
                },
                _ => nodes.push(TocNode {
                    heading,
                    children: Vec::new(),
                }),
            }
        }

        let mut roots = Vec::new();
        for heading in &self.headings {
            attach(&mut roots, heading.clone());
        }
        roots
    }
}

impl IntoIterator for TableOfContents {
    type Item = Heading;
    type IntoIter = std::vec::IntoIter<Heading>;

    fn into_iter(self) -> Self::IntoIter {
        self.headings.into_iter()
    }
}

impl<'a> IntoIterator for &'a TableOfContents {
    type Item = &'a Heading;
    type IntoIter = std::slice::Iter<'a, Heading>;

    fn into_iter(self) -> Self::IntoIter {
        self.headings.iter()
    }
}

/// Hands the table-of-contents ids of a document to the headings a
/// markdown renderer produces.
///
/// The renderer does not see `#` lines inside fenced code while the table of
/// contents does, so matching by position or by text drifts. Matching is by
/// source line instead: a rendered heading that starts on a line the table
/// of contents lists gets that entry's id.
#[derive(Debug)]
pub struct AnchorMatcher {
    line_starts: Vec<usize>,
    ids_by_line: Vec<(usize, String)>,
}

impl AnchorMatcher {
    pub fn for_markdown(markdown: &str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(markdown.match_indices('\n').map(|(idx, _)| idx + 1))
            .collect();
        let (toc, lines) = extract_with_lines(markdown);
        let ids_by_line = lines
            .into_iter()
            .zip(toc.headings)
            .map(|(line, heading)| (line, heading.id))
            .collect();
        Self {
            line_starts,
            ids_by_line,
        }
    }

    /// Id for a rendered heading whose source starts at byte `offset`, or
    /// `None` when that line is not a table-of-contents entry (setext
    /// headings, headings inside lists or quotes).
    pub fn claim(&self, offset: usize) -> Option<&str> {
        let line = self.line_starts.partition_point(|start| *start <= offset).checked_sub(1)?;
        let idx = self
            .ids_by_line
            .binary_search_by_key(&line, |(l, _)| *l)
            .ok()?;
        Some(self.ids_by_line[idx].1.as_str())
    }
}

/// Collect every heading line of `markdown`, in document order.
pub fn extract_headings(markdown: &str) -> TableOfContents {
    extract_with_lines(markdown).0
}

/// Headings plus the 0-based source line of each.
fn extract_with_lines(markdown: &str) -> (TableOfContents, Vec<usize>) {
    let mut anchors = AnchorAllocator::new();
    let (lines, headings) = markdown
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let caps = heading_line().captures(line)?;
            let level = caps.get(1)?.as_str().len() as u8;
            let text = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
            let id = anchors.allocate(&text);
            Some((line_no, Heading {
                text,
                level,
                id,
            }))
        })
        .unzip();

    (
        TableOfContents {
            headings,
        },
        lines,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(markdown: &str) -> Vec<String> {
        extract_headings(markdown)
            .into_iter()
            .map(|h| h.id)
            .collect()
    }

    #[test]
    fn repeated_heading_text_gets_counter_suffix() {
        assert_eq!(ids("# Intro\n## Intro\n"), vec!["intro", "intro-2"]);
        assert_eq!(ids("# Setup\n## Setup\n### Setup"), vec!["setup", "setup-2", "setup-3"]);
    }

    #[test]
    fn keeps_levels_and_drops_body_lines() {
        let toc = extract_headings(
            "# Docker Basics\n\nSome text.\n## Build an Image\n####### too deep\n#nospace\n###### \
             Tiny",
        );
        let got: Vec<(u8, &str, &str)> = toc
            .iter()
            .map(|h| (h.level, h.text.as_str(), h.id.as_str()))
            .collect();
        assert_eq!(got, vec![
            (1, "Docker Basics", "docker-basics"),
            (2, "Build an Image", "build-an-image"),
            (6, "Tiny", "tiny"),
        ]);
    }

    #[test]
    fn slug_collapses_punctuation_and_trims_hyphens() {
        assert_eq!(slugify("  CI/CD: What & Why?  "), "ci-cd-what-why");
        assert_eq!(slugify("k8s_pods"), "k8s_pods");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn empty_label_falls_back_to_position() {
        let toc = extract_headings("# Overview\n#  \n## ???\n");
        let got: Vec<&str> = toc.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(got, vec!["overview", "heading-2", "heading-3"]);
        assert_eq!(toc.as_slice()[1].text, "");
    }

    #[test]
    fn ids_stay_unique_when_a_label_looks_like_a_suffix() {
        let all = ids("# A\n# A\n# A 2\n# A-2\n# heading-5\n#  \n");
        let unique: HashSet<&String> = all.iter().collect();
        assert_eq!(unique.len(), all.len(), "duplicate ids in {all:?}");
        assert_eq!(&all[..3], &["a", "a-2", "a-2-2"]);
    }

    #[test]
    fn extraction_is_restartable() {
        let toc = extract_headings("# One\n## Two\n");
        let first: Vec<_> = toc.iter().cloned().collect();
        let second: Vec<_> = (&toc).into_iter().cloned().collect();
        assert_eq!(first, second);
        assert_eq!(toc.len(), 2);
        assert_eq!(toc.min_level(), Some(1));
    }

    #[test]
    fn tree_nests_under_nearest_shallower_heading() {
        let toc = extract_headings("## Pre\n# A\n## B\n### C\n## D\n# E\n");
        let tree = toc.tree();
        let roots: Vec<&str> = tree.iter().map(|n| n.heading.text.as_str()).collect();
        assert_eq!(roots, vec!["Pre", "A", "E"]);

        let a = &tree[1];
        let children: Vec<&str> = a.children.iter().map(|n| n.heading.text.as_str()).collect();
        assert_eq!(children, vec!["B", "D"]);
        assert_eq!(a.children[0].children[0].heading.text, "C");
    }

    const FENCED_SETUP: &str =
        "# Setup\n\n```bash\n# Setup\napt-get install -y curl\n```\n\n## Setup\n\n## Install\n";

    /// Ids pulldown-cmark's headings receive, in render order.
    fn rendered_ids(markdown: &str) -> Vec<Option<String>> {
        use pulldown_cmark::{Event, Parser, Tag};

        let matcher = AnchorMatcher::for_markdown(markdown);
        Parser::new(markdown)
            .into_offset_iter()
            .filter_map(|(event, range)| match event {
                Event::Start(Tag::Heading { .. }) => Some(matcher.claim(range.start).map(str::to_string)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn rendered_headings_skip_ids_of_fenced_lines() {
        assert_eq!(ids(FENCED_SETUP), vec!["setup", "setup-2", "setup-3", "install"]);
        assert_eq!(rendered_ids(FENCED_SETUP), vec![
            Some("setup".to_string()),
            Some("setup-3".to_string()),
            Some("install".to_string()),
        ]);
    }

    #[test]
    fn same_level_fenced_line_does_not_steal_the_id() {
        let doc = "# Deploy `kubectl`\n\n```sh\n## Rollout\n```\n## Rollout ##\n#  \n\nTitle\n=====\n";
        assert_eq!(ids(doc), vec!["deploy-kubectl", "rollout", "rollout-2", "heading-4"]);

        // The setext heading is not in the table of contents.
        assert_eq!(rendered_ids(doc), vec![
            Some("deploy-kubectl".to_string()),
            Some("rollout-2".to_string()),
            Some("heading-4".to_string()),
            None,
        ]);
    }
}
