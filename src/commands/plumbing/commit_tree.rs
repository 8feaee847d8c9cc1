use crate::areas::toolkit::Toolkit;
use crate::artifacts::codec::frame;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::person::PersonDate;
use std::path::Path;

impl Toolkit {
    /// Build a commit of `tree` on top of `parents`
    ///
    /// The author comes from `GIT_AUTHOR_*`; the committer from
    /// `GIT_COMMITTER_*` when `GIT_COMMITTER_NAME` is set, the author otherwise.
    /// A trailing newline is added to the message if missing.
    pub fn commit_tree(
        &self,
        tree: &str,
        parents: &[String],
        message: &str,
        output: Option<&Path>,
        zlib: bool,
    ) -> anyhow::Result<()> {
        let tree_oid = ObjectId::try_parse(tree)?;
        let parents = parents
            .iter()
            .map(ObjectId::try_parse)
            .collect::<Result<Vec<_>, _>>()?;

        let author = PersonDate::load_from_env("AUTHOR")?;
        let committer = if std::env::var_os("GIT_COMMITTER_NAME").is_some() {
            PersonDate::load_from_env("COMMITTER")?
        } else {
            author.clone()
        };

        let commit = Commit::new(parents, tree_oid, author, with_trailing_newline(message))
            .with_committer(committer);
        tracing::debug!(
            parents = commit.parents().len(),
            author = %commit.author().display_name(),
            authored = commit.author().readable_timestamp().as_deref(),
            committed = commit.committer().readable_timestamp().as_deref(),
            "built commit"
        );

        self.emit_frame(&frame(&ObjectBox::from(commit)), output, zlib)?;

        Ok(())
    }
}

pub(crate) fn with_trailing_newline(message: &str) -> String {
    if message.ends_with('\n') {
        message.to_string()
    } else {
        format!("{message}\n")
    }
}
