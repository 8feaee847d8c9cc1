use crate::areas::toolkit::Toolkit;
use crate::artifacts::codec::frame;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectKind;
use crate::artifacts::objects::tree::{Tree, TreeEntry};
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

impl Toolkit {
    /// Build a tree from `ls-tree` formatted lines
    ///
    /// Each line reads `<mode> <kind> <object-id>\t<name>`. Lines may come in
    /// any order; the tree is written in canonical order.
    pub fn mktree(&self, file_path: &str, output: Option<&Path>, zlib: bool) -> anyhow::Result<()> {
        let listing = self.workspace().read_file(file_path.as_ref())?;
        let listing = std::str::from_utf8(&listing).context("tree listing is not valid UTF-8")?;

        let mut entries = BTreeMap::new();
        for (number, line) in listing.lines().enumerate().filter(|(_, l)| !l.is_empty()) {
            let (name, entry) =
                parse_listing_line(line).context(format!("line {}: {line:?}", number + 1))?;

            if entries.insert(name.clone(), entry).is_some() {
                anyhow::bail!("line {}: duplicate entry {name:?}", number + 1);
            }
        }

        let tree = entries.into_iter().collect::<Tree>();
        tracing::debug!(entries = tree.len(), "built tree");

        self.emit_frame(&frame(&ObjectBox::from(tree)), output, zlib)?;

        Ok(())
    }
}

fn parse_listing_line(line: &str) -> anyhow::Result<(String, TreeEntry)> {
    let (meta, name) = line.split_once('\t').context("missing tab before name")?;
    if name.is_empty() || name.contains('/') {
        anyhow::bail!("invalid entry name {name:?}");
    }

    let mut fields = meta.split(' ');
    let (Some(mode), Some(kind), Some(oid), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        anyhow::bail!("expected '<mode> <kind> <object-id>' before the tab");
    };

    let mode = EntryMode::from_octal_str(mode).context(format!("invalid mode {mode:?}"))?;
    let kind = ObjectKind::try_from(kind)?;
    if mode.object_kind() != kind {
        anyhow::bail!("mode {} does not point at a {kind}", mode.as_octal());
    }
    let oid = ObjectId::try_parse(oid)?;

    Ok((name.to_string(), TreeEntry::new(mode, oid)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_ls_tree_lines() {
        let (name, entry) = parse_listing_line(
            "040000 tree 648fc86e8557bdabbc2c828a19535f833727fa62\tsrc",
        )
        .unwrap();

        assert_eq!(name, "src");
        assert_eq!(entry.mode, EntryMode::TREE);
    }

    #[rstest]
    #[case::no_tab("100644 blob 557db03de997c86a4a028e1ebd3a1ceb225be238 a")]
    #[case::slash("100644 blob 557db03de997c86a4a028e1ebd3a1ceb225be238\ta/b")]
    #[case::kind_mismatch("100644 tree 557db03de997c86a4a028e1ebd3a1ceb225be238\ta")]
    #[case::bad_mode("10064x blob 557db03de997c86a4a028e1ebd3a1ceb225be238\ta")]
    #[case::bad_oid("100644 blob 557db03\ta")]
    #[case::extra_field("100644 blob 557db03de997c86a4a028e1ebd3a1ceb225be238 x\ta")]
    fn rejects_bad_lines(#[case] line: &str) {
        assert!(parse_listing_line(line).is_err());
    }
}
