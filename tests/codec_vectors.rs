use bit_codec::artifacts::objects::blob::Blob;
use bit_codec::artifacts::objects::commit::Commit;
use bit_codec::artifacts::objects::entry_mode::EntryMode;
use bit_codec::artifacts::objects::object::Object;
use bit_codec::artifacts::objects::tag::Tag;
use bit_codec::artifacts::objects::tree::{Tree, TreeEntry};
use bit_codec::{Body, CodecError, ObjectBox, ObjectId, ObjectKind, deframe, frame, frame_raw};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

mod common;

#[fixture]
fn blob() -> ObjectBox {
    Blob::new("Hello World\n").into()
}

#[fixture]
fn tree() -> ObjectBox {
    Tree::default()
        .with_entry(
            "greeting.txt",
            TreeEntry::new(EntryMode::FILE, ObjectId::try_parse(common::BLOB_ID).unwrap()),
        )
        .into()
}

#[fixture]
fn commit() -> ObjectBox {
    Commit::new(
        Vec::new(),
        ObjectId::try_parse(common::TREE_ID).unwrap(),
        common::tim_at(1391790884),
        "Test Commit\n",
    )
    .into()
}

#[fixture]
fn tag() -> ObjectBox {
    Tag::new(
        ObjectId::try_parse(common::COMMIT_ID).unwrap(),
        ObjectKind::Commit,
        "mytag",
        common::tim_at(1391790910),
        "Tag it!\n",
    )
    .into()
}

#[rstest]
#[case::blob(blob(), common::BLOB_ID)]
#[case::tree(tree(), common::TREE_ID)]
#[case::commit(commit(), common::COMMIT_ID)]
#[case::tag(tag(), common::TAG_ID)]
fn reference_objects_hash_to_known_ids(#[case] object: ObjectBox, #[case] expected: &str) {
    let bytes = frame(&object);

    assert_eq!(ObjectId::digest(&bytes).as_ref(), expected);
    assert_eq!(object.object_id().as_ref(), expected);
}

#[rstest]
#[case::blob(blob())]
#[case::tree(tree())]
#[case::commit(commit())]
#[case::tag(tag())]
fn reference_objects_survive_deframe(#[case] object: ObjectBox) {
    let bytes = frame(&object);
    let deframed = deframe(&bytes, true).unwrap();

    assert_eq!(deframed.kind, object.object_kind());
    assert_eq!(deframed.into_object(), Some(object));
}

#[rstest]
fn commit_frame_is_byte_exact(commit: ObjectBox) {
    let body = format!(
        "tree {}\n\
         author Tim Caswell <tim@creationix.com> 1391790884 -0700\n\
         committer Tim Caswell <tim@creationix.com> 1391790884 -0700\n\
         \n\
         Test Commit\n",
        common::TREE_ID
    );
    let expected = format!("commit {}\0{}", body.len(), body);

    assert_frame_eq!(&frame(&commit), expected.as_bytes());
}

#[rstest]
fn tag_frame_is_byte_exact(tag: ObjectBox) {
    let body = format!(
        "object {}\n\
         type commit\n\
         tag mytag\n\
         tagger Tim Caswell <tim@creationix.com> 1391790910 -0700\n\
         \n\
         Tag it!\n",
        common::COMMIT_ID
    );
    let expected = format!("tag {}\0{}", body.len(), body);

    assert_frame_eq!(&frame(&tag), expected.as_bytes());
}

#[test]
fn non_ascii_tree_names_round_trip() {
    let name = "Ælfrēd þæt ƿæs gōd cyning.txt";
    let oid = ObjectId::try_parse(common::BLOB_ID).unwrap();
    let entry = TreeEntry::new(EntryMode::FILE, oid.clone());
    let tree = ObjectBox::from(Tree::default().with_entry(name, entry));

    let Some(ObjectBox::Tree(decoded)) = deframe(&frame(&tree), true).unwrap().into_object() else {
        panic!("expected a tree");
    };

    let entry = decoded.get(name).unwrap();
    assert_eq!(entry.oid, oid);
    assert_eq!(entry.mode, EntryMode::FILE);
}

#[test]
fn non_ascii_commit_and_tag_text_round_trips() {
    let person = bit_codec::artifacts::objects::person::PersonDate::new(
        "Ēadweard Ǣþeling".to_string(),
        "eadweard@example.org".to_string(),
        Some(bit_codec::artifacts::objects::person::Timestamp::new(1391790884, -60)),
    );
    let commit = ObjectBox::from(
        Commit::new(
            vec![ObjectId::try_parse(common::COMMIT_ID).unwrap()],
            ObjectId::try_parse(common::TREE_ID).unwrap(),
            person.clone(),
            "Wæs hāl!\n\nÞis is se lǣsta dǣl.\n",
        )
        .with_extra_header("encoding", "UTF-8"),
    );
    let tag = ObjectBox::from(Tag::new(
        commit.object_id(),
        ObjectKind::Commit,
        "wæs-hāl",
        person,
        "Ǣrest\n",
    ));

    for object in [commit, tag] {
        let bytes = frame(&object);
        assert_eq!(deframe(&bytes, true).unwrap().into_object(), Some(object));
    }
}

#[test]
fn every_byte_value_survives_a_blob_round_trip() {
    let content = (0..=255u8).collect::<Vec<_>>();
    let blob = ObjectBox::from(Blob::new(content.clone()));

    let Some(ObjectBox::Blob(decoded)) = deframe(&frame(&blob), true).unwrap().into_object() else {
        panic!("expected a blob");
    };

    assert_eq!(decoded.content(), content.as_slice());
}

#[test]
fn tree_bodies_follow_git_order_not_name_order() {
    let blob = ObjectId::try_parse(common::BLOB_ID).unwrap();
    let subtree = ObjectId::try_parse(common::TREE_ID).unwrap();
    let tree = ObjectBox::from(
        Tree::default()
            .with_entry("ab", TreeEntry::new(EntryMode::SYMLINK, blob.clone()))
            .with_entry("a", TreeEntry::new(EntryMode::TREE, subtree.clone()))
            .with_entry("a.txt", TreeEntry::new(EntryMode::FILE, blob.clone()))
            .with_entry("a-b", TreeEntry::new(EntryMode::EXECUTABLE, blob.clone())),
    );

    let mut body = Vec::new();
    for (header, oid) in [
        ("100755 a-b", &blob),
        ("100644 a.txt", &blob),
        ("40000 a", &subtree),
        ("120000 ab", &blob),
    ] {
        body.extend_from_slice(header.as_bytes());
        body.push(0);
        body.extend_from_slice(&oid.to_raw());
    }
    let mut expected = format!("tree {}\0", body.len()).into_bytes();
    expected.extend_from_slice(&body);

    assert_frame_eq!(&frame(&tree), &expected);
}

#[rstest]
#[case::blob(frame(&blob()).to_vec())]
#[case::tree(frame(&tree()).to_vec())]
#[case::commit(frame(&commit()).to_vec())]
#[case::tag(frame(&tag()).to_vec())]
#[case::dateless_person(
    frame_raw(
        "commit",
        format!("tree {}\nauthor A <a@b>\ncommitter B <b@c> 0 +0000\n\nm", common::TREE_ID)
            .as_bytes(),
    )
    .unwrap()
    .to_vec()
)]
fn reframing_a_decoded_frame_gives_the_same_bytes(#[case] bytes: Vec<u8>) {
    let object = deframe(&bytes, true).unwrap().into_object().unwrap();

    assert_frame_eq!(&frame(&object), &bytes);
}

#[rstest]
#[case::minutes_past_sixty("author A <a@b> 1 +0099")]
#[case::negative_zero_offset("author A <a@b> 1 -0000")]
#[case::padded_seconds("author A <a@b> 007 +0000")]
fn non_canonical_person_lines_do_not_decode(#[case] person_line: &str) {
    let body = format!("tree {}\n{person_line}\n\nm", common::TREE_ID);
    let bytes = frame_raw("commit", body.as_bytes()).unwrap();

    match deframe(&bytes, true) {
        Err(CodecError::CommitHeader { field, .. }) => assert_eq!(field, "author"),
        other => panic!("expected a commit header error, got {other:?}"),
    }
}

#[test]
fn uppercase_ids_inside_bodies_do_not_decode() {
    let upper = common::TREE_ID.to_ascii_uppercase();
    let commit = frame_raw("commit", format!("tree {upper}\nauthor A <a@b>\n\nm").as_bytes());
    let tag = frame_raw(
        "tag",
        format!("object {upper}\ntype tree\ntag t\ntagger A <a@b>\n\n").as_bytes(),
    );

    assert!(matches!(
        deframe(&commit.unwrap(), true),
        Err(CodecError::CommitHeader { .. })
    ));
    assert!(matches!(
        deframe(&tag.unwrap(), true),
        Err(CodecError::TagHeader { .. })
    ));
}

#[test]
fn zero_padded_tree_modes_do_not_decode() {
    let mut body = b"040000 docs\0".to_vec();
    body.extend_from_slice(&ObjectId::try_parse(common::TREE_ID).unwrap().to_raw());
    let bytes = frame_raw("tree", &body).unwrap();

    assert!(matches!(
        deframe(&bytes, true),
        Err(CodecError::TreeEntryFormat { .. })
    ));
}

#[rstest]
#[case::short_body(b"blob 13\0Hello World\n".as_slice(), 13, 12)]
#[case::long_body(b"blob 11\0Hello World\n".as_slice(), 11, 12)]
fn declared_length_must_match(
    #[case] bytes: &[u8],
    #[case] declared: usize,
    #[case] actual: usize,
) {
    assert_eq!(
        deframe(bytes, true),
        Err(CodecError::LengthMismatch { declared, actual })
    );
    assert_eq!(
        deframe(bytes, false),
        Err(CodecError::LengthMismatch { declared, actual })
    );
}

#[test]
fn unknown_kinds_are_rejected_both_ways() {
    assert_eq!(
        frame_raw("widget", b"hi"),
        Err(CodecError::UnsupportedKind("widget".to_string()))
    );
    assert_eq!(
        deframe(b"widget 2\0hi", false),
        Err(CodecError::UnsupportedKind("widget".to_string()))
    );
}

#[test]
fn fast_path_hands_back_the_raw_body() {
    let bytes = frame(&commit());
    let deframed = deframe(&bytes, false).unwrap();

    assert_eq!(deframed.kind, ObjectKind::Commit);
    let Body::Raw(body) = deframed.body else {
        panic!("expected a raw body");
    };
    assert_eq!(&bytes[bytes.len() - body.len()..], &body[..]);
    assert_eq!(ObjectId::digest(&bytes).as_ref(), common::COMMIT_ID);
}

#[test]
fn malformed_bodies_fail_to_decode_but_hash_on_the_fast_path() {
    let bytes = frame_raw("tree", b"100644 missing-nul").unwrap();

    assert!(matches!(
        deframe(&bytes, true),
        Err(CodecError::TreeEntryFormat { .. })
    ));
    assert!(deframe(&bytes, false).is_ok());
}
