use crate::areas::toolkit::Toolkit;
use crate::artifacts::codec::frame;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectKind;
use crate::artifacts::objects::person::PersonDate;
use crate::artifacts::objects::tag::Tag;
use crate::commands::plumbing::commit_tree::with_trailing_newline;
use std::path::Path;

/// Arguments of `mktag`
#[derive(Debug, Clone)]
pub struct TagRequest<'a> {
    pub object: &'a str,
    pub kind: &'a str,
    pub name: &'a str,
    pub message: &'a str,
}

impl Toolkit {
    /// Build an annotated tag; the tagger comes from `GIT_COMMITTER_*`,
    /// falling back to `GIT_AUTHOR_*`
    pub fn mktag(
        &self,
        request: TagRequest<'_>,
        output: Option<&Path>,
        zlib: bool,
    ) -> anyhow::Result<()> {
        let object = ObjectId::try_parse(request.object)?;
        let kind = ObjectKind::try_from(request.kind)?;
        if request.name.is_empty() || request.name.contains('\n') {
            anyhow::bail!("invalid tag name {:?}", request.name);
        }

        let tagger = if std::env::var_os("GIT_COMMITTER_NAME").is_some() {
            PersonDate::load_from_env("COMMITTER")?
        } else {
            PersonDate::load_from_env("AUTHOR")?
        };

        let tag = Tag::new(
            object,
            kind,
            request.name,
            tagger,
            with_trailing_newline(request.message),
        );
        tracing::debug!(
            name = request.name,
            target = %kind,
            tagger = %tag.tagger().display_name(),
            tagged = tag.tagger().readable_timestamp().as_deref(),
            "built tag"
        );

        self.emit_frame(&frame(&ObjectBox::from(tag)), output, zlib)?;

        Ok(())
    }
}
