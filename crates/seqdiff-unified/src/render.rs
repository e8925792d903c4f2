//! Textual rendering of edit scripts and hunks.
//!
//! Elements render through their `Display` impl, one per line, prefixed
//! `-` (delete), `+` (add), or a space (common); hunks carry a
//! `@@ -a,b +c,d @@` header line.

use std::fmt::{self, Display, Write};

use seqdiff_core::{EditKind, SesElement};

use crate::hunks::UnifiedHunk;

/// Write an edit script to `w`, one prefixed element per line.
pub fn write_ses<T: Display, W: Write>(w: &mut W, ses: &[SesElement<T>]) -> fmt::Result {
    for elem in ses {
        let prefix = match elem.kind {
            EditKind::Delete => '-',
            EditKind::Add => '+',
            EditKind::Common => ' ',
        };
        writeln!(w, "{}{}", prefix, elem.value)?;
    }
    Ok(())
}

/// Render an edit script to a string.
///
/// # Panics
///
/// Writing to a `String` itself cannot fail; like `ToString`, this panics
/// only if the element's `Display` impl reports a spurious error.
pub fn ses_to_string<T: Display>(ses: &[SesElement<T>]) -> String {
    let mut out = String::new();
    write_ses(&mut out, ses).expect("a Display implementation returned an error unexpectedly");
    out
}

/// Write a hunk list to `w`, each with its `@@` header.
pub fn write_hunks<T: Display, W: Write>(w: &mut W, hunks: &[UnifiedHunk<T>]) -> fmt::Result {
    for hunk in hunks {
        write!(w, "{}", hunk)?;
    }
    Ok(())
}

/// Render a hunk list to a string.
///
/// # Panics
///
/// Writing to a `String` itself cannot fail; like `ToString`, this panics
/// only if an element's `Display` impl reports a spurious error.
pub fn hunks_to_string<T: Display>(hunks: &[UnifiedHunk<T>]) -> String {
    let mut out = String::new();
    write_hunks(&mut out, hunks).expect("a Display implementation returned an error unexpectedly");
    out
}

impl<T: Display> Display for UnifiedHunk<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "@@ -{},{} +{},{} @@",
            self.a_start, self.a_len, self.b_start, self.b_len
        )?;
        write_ses(f, &self.changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hunks::unified_hunks;
    use seqdiff_core::Diff;

    fn compose_ses(a: &[&str], b: &[&str]) -> Vec<SesElement<String>> {
        let a: Vec<String> = a.iter().map(|s| s.to_string()).collect();
        let b: Vec<String> = b.iter().map(|s| s.to_string()).collect();
        let mut diff = Diff::new(&a, &b);
        diff.compose();
        diff.ses().to_vec()
    }

    #[test]
    fn ses_lines_use_diff_prefixes() {
        let ses = compose_ses(&["a", "b", "c"], &["a", "1", "c"]);
        assert_eq!(ses_to_string(&ses), " a\n-b\n+1\n c\n");
    }

    #[test]
    fn hunk_renders_header_and_changes() {
        let ses = compose_ses(&["a", "b", "c"], &["a", "1", "c"]);
        let hunks = unified_hunks(&ses, 3);
        assert_eq!(hunks_to_string(&hunks), "@@ -1,3 +1,3 @@\n a\n-b\n+1\n c\n");
    }

    #[test]
    fn empty_script_renders_nothing() {
        let ses: Vec<SesElement<String>> = Vec::new();
        assert_eq!(ses_to_string(&ses), "");
        assert_eq!(hunks_to_string(&unified_hunks(&ses, 3)), "");
    }

    #[test]
    fn deletion_only_hunk() {
        let ses = compose_ses(&["a"], &[]);
        let hunks = unified_hunks(&ses, 3);
        assert_eq!(hunks_to_string(&hunks), "@@ -1,1 +0,0 @@\n-a\n");
    }
}
